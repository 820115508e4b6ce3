use crate::aggregate::{self, EsgGrade, Totals};
use crate::error::{DashboardError, Result};
use crate::impact::{self, CategoryShare, Equivalences, WasteCategory};
use crate::model::{CompanySummary, TimeSeriesPoint};
use crate::rank::{self, SortKey};
use crate::store::MetricsStore;
use serde::Serialize;
use tracing::debug;

/// A row of the ranking table.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedCompany {
    pub rank_label: String,
    pub badge_class: &'static str,
    pub company: CompanySummary,
}

/// Bar in the waste-type chart. CO₂ is rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WasteChartBar {
    pub category: WasteCategory,
    pub collection_kg: f64,
    pub co2_tonnes: f64,
}

/// Stacked bar in the per-company comparison chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRow {
    pub name: String,
    pub plastic_kg: f64,
    pub toys_kg: f64,
    pub co2_tonnes: f64,
}

/// A company's quarterly trend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySeries {
    pub company_id: String,
    pub name: String,
    pub logo: String,
    pub total_participations: u32,
    pub points: Vec<TimeSeriesPoint>,
}

/// Everything one render of the dashboard needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub sort_key: SortKey,
    pub company_count: usize,
    pub totals: Totals,
    pub average_score: u32,
    pub grade: EsgGrade,
    pub categories: Vec<CategoryShare>,
    pub waste_chart: Vec<WasteChartBar>,
    pub ranked: Vec<RankedCompany>,
    pub comparison: Vec<ComparisonRow>,
    pub series: Vec<CompanySeries>,
    pub equivalences: Equivalences,
}

impl DashboardView {
    /// Run aggregation, ranking and the derived metrics over the whole store.
    pub fn build(store: &MetricsStore, sort_key: SortKey) -> Result<Self> {
        let companies = store.all_company_summaries();
        if companies.is_empty() {
            return Err(DashboardError::InsufficientData(
                "dashboard needs at least one company with performance data",
            ));
        }

        let totals = aggregate::compute_totals(&companies);
        let average_score = aggregate::average_score(&companies)?;
        let grade = aggregate::grade_for(average_score);
        let sorted = rank::rank_companies(&companies, sort_key);

        let waste_chart = WasteCategory::all()
            .iter()
            .map(|c| {
                let share = impact::category_share(*c, &totals);
                WasteChartBar {
                    category: *c,
                    collection_kg: share.collection_kg,
                    co2_tonnes: impact::round_to(share.co2_tonnes, 2),
                }
            })
            .collect();

        let comparison = sorted
            .iter()
            .map(|c| ComparisonRow {
                name: c.name.clone(),
                plastic_kg: c.performance.waste_breakdown.plastic,
                toys_kg: c.performance.waste_breakdown.toys,
                co2_tonnes: c.performance.co2_reduction,
            })
            .collect();

        let ranked = sorted
            .into_iter()
            .enumerate()
            .map(|(i, company)| RankedCompany {
                rank_label: rank::rank_label(i),
                badge_class: aggregate::score_badge_class(company.esg_score),
                company,
            })
            .collect();

        let series = collect_series(store, &companies);

        debug!(
            companies = companies.len(),
            sort_key = %sort_key,
            average_score,
            grade = grade.letter(),
            "built dashboard view"
        );

        Ok(DashboardView {
            sort_key,
            company_count: companies.len(),
            totals,
            average_score,
            grade,
            categories: impact::category_shares(&totals),
            waste_chart,
            ranked,
            comparison,
            series,
            equivalences: Equivalences::from_co2_tonnes(totals.co2),
        })
    }
}

fn collect_series(store: &MetricsStore, companies: &[CompanySummary]) -> Vec<CompanySeries> {
    let mut series = Vec::new();
    for (id, points) in store.time_series_map() {
        let Some(company) = companies.iter().find(|c| &c.id == id) else {
            debug!(company = %id, "time series without matching company, skipping");
            continue;
        };
        series.push(CompanySeries {
            company_id: id.clone(),
            name: company.name.clone(),
            logo: company.logo.clone(),
            total_participations: company.total_participations,
            points: points.clone(),
        });
    }
    series
}
