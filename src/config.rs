use crate::error::Result;
use crate::rank::SortKey;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CHART_JS_URL: &str = "https://cdn.jsdelivr.net/npm/chart.js@4";

/// Settings read from `dashboard.toml`. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub title: String,
    pub default_sort: SortKey,
    /// Dataset JSON; the built-in sample is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<PathBuf>,
    /// Time-series CSV applied on top of the dataset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub chart_js_url: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        DashboardConfig {
            title: "ESG Impact Dashboard".to_string(),
            default_sort: SortKey::Co2,
            dataset: None,
            series: None,
            output_dir: PathBuf::from("output"),
            chart_js_url: DEFAULT_CHART_JS_URL.to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }
}
