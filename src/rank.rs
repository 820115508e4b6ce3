use crate::error::DashboardError;
use crate::model::CompanySummary;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Metric used to order the company ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Co2,
    Collection,
    Participants,
}

impl SortKey {
    pub fn all() -> [SortKey; 3] {
        [SortKey::Co2, SortKey::Collection, SortKey::Participants]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Co2 => "co2",
            Self::Collection => "collection",
            Self::Participants => "participants",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Co2 => "CO₂ reduction",
            Self::Collection => "Total collection",
            Self::Participants => "Participants",
        }
    }

    fn compare(&self, a: &CompanySummary, b: &CompanySummary) -> Ordering {
        let (pa, pb) = (&a.performance, &b.performance);
        match self {
            Self::Co2 => pa.co2_reduction.total_cmp(&pb.co2_reduction),
            Self::Collection => pa.collection_amount.total_cmp(&pb.collection_amount),
            Self::Participants => pa.participants.cmp(&pb.participants),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortKey {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "co2" => Ok(SortKey::Co2),
            "collection" => Ok(SortKey::Collection),
            "participants" => Ok(SortKey::Participants),
            _ => Err(DashboardError::UnknownSortKey(s.to_string())),
        }
    }
}

/// Return a copy of `companies` sorted descending by `key`.
///
/// Equal keys fall back to ascending id so the row order is reproducible.
pub fn rank_companies(companies: &[CompanySummary], key: SortKey) -> Vec<CompanySummary> {
    let mut ranked = companies.to_vec();
    ranked.sort_by(|a, b| key.compare(b, a).then_with(|| a.id.cmp(&b.id)));
    ranked
}

/// Medal for the podium, 1-based position otherwise.
pub fn rank_label(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        n => (n + 1).to_string(),
    }
}
