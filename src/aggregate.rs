use crate::error::{DashboardError, Result};
use crate::model::CompanySummary;
use serde::Serialize;

// ═══════════════════════════════════════════════════════════════════════
// Totals
// ═══════════════════════════════════════════════════════════════════════

/// Sums across every company's performance record.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub participants: u64,
    pub collection: f64,
    pub co2: f64,
    pub plastic_total: f64,
    pub toys_total: f64,
    pub plastic_co2: f64,
    pub toys_co2: f64,
}

/// Fold all performance records into global totals. No rounding is applied.
pub fn compute_totals(companies: &[CompanySummary]) -> Totals {
    companies.iter().fold(Totals::default(), |mut t, c| {
        let p = &c.performance;
        t.participants += p.participants;
        t.collection += p.collection_amount;
        t.co2 += p.co2_reduction;
        t.plastic_total += p.waste_breakdown.plastic;
        t.toys_total += p.waste_breakdown.toys;
        t.plastic_co2 += p.co2_detail.plastic;
        t.toys_co2 += p.co2_detail.toys;
        t
    })
}

/// Mean ESG score rounded half-up to the nearest integer.
pub fn average_score(companies: &[CompanySummary]) -> Result<u32> {
    if companies.is_empty() {
        return Err(DashboardError::InsufficientData(
            "average ESG score needs at least one company",
        ));
    }
    let sum: u64 = companies.iter().map(|c| u64::from(c.esg_score)).sum();
    let mean = sum as f64 / companies.len() as f64;
    Ok(mean.round() as u32)
}

// ═══════════════════════════════════════════════════════════════════════
// Grade
// ═══════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EsgGrade {
    Superior,
    Advanced,
    Basic,
    Caution,
}

impl EsgGrade {
    pub fn letter(&self) -> &'static str {
        match self {
            Self::Superior => "S",
            Self::Advanced => "A",
            Self::Basic => "B",
            Self::Caution => "C",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Superior => "S (Superior)",
            Self::Advanced => "A (Advanced)",
            Self::Basic => "B (Basic)",
            Self::Caution => "C (Caution)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Superior => "#10B981",
            Self::Advanced => "#3B82F6",
            Self::Basic => "#F59E0B",
            Self::Caution => "#EF4444",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Superior => "Outstanding, industry-leading",
            Self::Advanced => "Excellent, leading activity",
            Self::Basic => "Good, baseline goals achieved",
            Self::Caution => "Caution, improvement needed",
        }
    }
}

/// Map a rounded average score onto its grade band. Lower bounds are inclusive.
pub fn grade_for(score: u32) -> EsgGrade {
    if score >= 80 {
        EsgGrade::Superior
    } else if score >= 60 {
        EsgGrade::Advanced
    } else if score >= 40 {
        EsgGrade::Basic
    } else {
        EsgGrade::Caution
    }
}

/// CSS badge class for a single company's score in the ranking table.
pub fn score_badge_class(score: u8) -> &'static str {
    if score >= 85 {
        "success"
    } else if score >= 75 {
        "info"
    } else {
        "warning"
    }
}
