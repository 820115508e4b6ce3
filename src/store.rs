use crate::error::{DashboardError, Result};
use crate::model::{CompanyPerformance, CompanyProfile, CompanySummary, TimeSeriesPoint};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

const BUILTIN_DATASET: &str = include_str!("../data/companies.json");

/// Relative tolerance before a breakdown/total mismatch is reported.
const SPLIT_TOLERANCE: f64 = 0.01;

/// On-disk dataset layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub companies: Vec<CompanyProfile>,
    #[serde(default)]
    pub performance: BTreeMap<String, CompanyPerformance>,
    #[serde(default)]
    pub time_series: BTreeMap<String, Vec<TimeSeriesPoint>>,
}

/// One row of a time-series CSV overlay.
#[derive(Debug, Deserialize)]
struct SeriesRow {
    company_id: String,
    quarter: String,
    collection: f64,
    co2: f64,
    participants: u64,
}

/// Read-only source of company data.
#[derive(Debug, Clone)]
pub struct MetricsStore {
    companies: Vec<CompanyProfile>,
    performance: BTreeMap<String, CompanyPerformance>,
    time_series: BTreeMap<String, Vec<TimeSeriesPoint>>,
}

impl MetricsStore {
    /// Validate a dataset and wrap it.
    pub fn new(dataset: Dataset) -> Result<Self> {
        validate(&dataset)?;
        debug!(
            companies = dataset.companies.len(),
            series = dataset.time_series.len(),
            "loaded dataset"
        );
        Ok(MetricsStore {
            companies: dataset.companies,
            performance: dataset.performance,
            time_series: dataset.time_series,
        })
    }

    /// The sample dataset shipped with the crate.
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_DATASET)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        Self::new(dataset)
    }

    pub fn from_json_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Replace the series of every company named in the CSV file.
    pub fn load_time_series_csv(&mut self, path: &Path) -> Result<()> {
        let file = std::fs::File::open(path)?;
        self.apply_time_series_csv(file)
    }

    /// Same as [`load_time_series_csv`](Self::load_time_series_csv) for any reader.
    pub fn apply_time_series_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut overlay: BTreeMap<String, Vec<TimeSeriesPoint>> = BTreeMap::new();

        for row in rdr.deserialize() {
            let row: SeriesRow = row?;
            check_amount(&row.company_id, "series collection", row.collection)?;
            check_amount(&row.company_id, "series co2", row.co2)?;
            overlay.entry(row.company_id).or_default().push(TimeSeriesPoint {
                quarter: row.quarter,
                collection: row.collection,
                co2: row.co2,
                participants: row.participants,
            });
        }

        for (id, points) in overlay {
            debug!(company = %id, points = points.len(), "time series overlay");
            self.time_series.insert(id, points);
        }
        Ok(())
    }

    pub fn companies(&self) -> &[CompanyProfile] {
        &self.companies
    }

    /// Profiles joined with performance records, in dataset order.
    pub fn all_company_summaries(&self) -> Vec<CompanySummary> {
        self.companies
            .iter()
            .filter_map(|profile| match self.performance.get(&profile.id) {
                Some(perf) => Some(CompanySummary::from_parts(profile, perf)),
                None => {
                    warn!(company = %profile.id, "no performance record, skipping");
                    None
                }
            })
            .collect()
    }

    pub fn performance_map(&self) -> &BTreeMap<String, CompanyPerformance> {
        &self.performance
    }

    pub fn time_series_map(&self) -> &BTreeMap<String, Vec<TimeSeriesPoint>> {
        &self.time_series
    }
}

fn validate(dataset: &Dataset) -> Result<()> {
    let mut seen = HashSet::new();
    for c in &dataset.companies {
        if !seen.insert(c.id.as_str()) {
            return Err(DashboardError::DuplicateCompany(c.id.clone()));
        }
        if c.esg_score > 100 {
            return Err(DashboardError::InvalidRecord {
                company: c.id.clone(),
                reason: format!("esgScore {} exceeds 100", c.esg_score),
            });
        }
    }

    for (id, p) in &dataset.performance {
        if !seen.contains(id.as_str()) {
            return Err(DashboardError::InvalidRecord {
                company: id.clone(),
                reason: "performance record has no matching company profile".to_string(),
            });
        }
        if p.company_id != *id {
            return Err(DashboardError::InvalidRecord {
                company: id.clone(),
                reason: format!("keyed under '{}' but companyId is '{}'", id, p.company_id),
            });
        }
        check_amount(id, "collectionAmount", p.collection_amount)?;
        check_amount(id, "co2Reduction", p.co2_reduction)?;
        check_amount(id, "wasteBreakdown.plastic", p.waste_breakdown.plastic)?;
        check_amount(id, "wasteBreakdown.toys", p.waste_breakdown.toys)?;
        check_amount(id, "co2Detail.plastic", p.co2_detail.plastic)?;
        check_amount(id, "co2Detail.toys", p.co2_detail.toys)?;

        if !roughly_equal(p.waste_breakdown.sum(), p.collection_amount) {
            warn!(company = %id, "waste breakdown does not add up to collectionAmount");
        }
        if !roughly_equal(p.co2_detail.sum(), p.co2_reduction) {
            warn!(company = %id, "co2 detail does not add up to co2Reduction");
        }
    }

    for (id, points) in &dataset.time_series {
        for point in points {
            check_amount(id, "series collection", point.collection)?;
            check_amount(id, "series co2", point.co2)?;
        }
    }

    Ok(())
}

fn check_amount(company: &str, field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DashboardError::InvalidRecord {
            company: company.to_string(),
            reason: format!("{} must be a finite non-negative number, got {}", field, value),
        })
    }
}

fn roughly_equal(a: f64, b: f64) -> bool {
    let scale = a.abs().max(b.abs());
    scale == 0.0 || (a - b).abs() <= scale * SPLIT_TOLERANCE
}
