use serde::{Deserialize, Serialize};

/// Plastic / toys split. Used for both collected mass (kg) and CO₂ (tonnes).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WasteSplit {
    pub plastic: f64,
    pub toys: f64,
}

impl WasteSplit {
    pub fn new(plastic: f64, toys: f64) -> Self {
        WasteSplit { plastic, toys }
    }

    pub fn sum(&self) -> f64 {
        self.plastic + self.toys
    }
}

/// Pre-computed sustainability metrics for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyPerformance {
    pub company_id: String,
    pub participants: u64,
    /// Total collected mass in kg.
    pub collection_amount: f64,
    /// Avoided emissions in tonnes.
    pub co2_reduction: f64,
    pub waste_breakdown: WasteSplit,
    pub co2_detail: WasteSplit,
}

/// Static company profile as stored in the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyProfile {
    pub id: String,
    pub name: String,
    /// Display glyph, usually a single emoji.
    pub logo: String,
    pub esg_score: u8,
    pub total_participations: u32,
}

/// A company profile joined with its performance record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: String,
    pub name: String,
    pub logo: String,
    pub esg_score: u8,
    pub total_participations: u32,
    pub performance: CompanyPerformance,
}

impl CompanySummary {
    pub fn from_parts(profile: &CompanyProfile, performance: &CompanyPerformance) -> Self {
        CompanySummary {
            id: profile.id.clone(),
            name: profile.name.clone(),
            logo: profile.logo.clone(),
            esg_score: profile.esg_score,
            total_participations: profile.total_participations,
            performance: performance.clone(),
        }
    }
}

/// One quarter of a company's activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub quarter: String,
    pub collection: f64,
    pub co2: f64,
    pub participants: u64,
}
