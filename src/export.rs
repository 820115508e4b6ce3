use crate::error::DashboardError;
use std::fmt;
use std::str::FromStr;

/// Export formats offered by the dashboard. None of them writes a file yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Excel,
    Png,
}

impl ExportFormat {
    pub fn all() -> [ExportFormat; 3] {
        [ExportFormat::Pdf, ExportFormat::Excel, ExportFormat::Png]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Excel => "excel",
            Self::Png => "png",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF report download",
            Self::Excel => "Excel data export",
            Self::Png => "Save as image",
        }
    }

    /// What a full implementation of this export would produce.
    pub fn planned_features(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &[
                "Convert the whole dashboard to PDF",
                "Include company logos and branding",
                "Add automatically generated analysis comments",
            ],
            Self::Excel => &[
                "Convert all numeric data to Excel format",
                "Include charts and graphs",
                "Generate sheets for pivot-table analysis",
            ],
            Self::Png => &[
                "Save the whole dashboard or a selected area as PNG",
                "For presentations and report inserts",
            ],
        }
    }

    /// The notice shown instead of exporting.
    pub fn notice(&self) -> String {
        let mut text = format!("{} (demo)\n\nA real implementation would:\n", self.title());
        for feature in self.planned_features() {
            text.push_str("- ");
            text.push_str(feature);
            text.push('\n');
        }
        text
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExportFormat {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            "png" | "image" => Ok(ExportFormat::Png),
            _ => Err(DashboardError::UnknownExportFormat(s.to_string())),
        }
    }
}

/// Industry groups offered by the dashboard filter. Selecting one does not
/// filter anything yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryFilter {
    All,
    Tech,
    Energy,
    Manufacturing,
    Finance,
}

impl IndustryFilter {
    pub fn all() -> [IndustryFilter; 5] {
        [
            IndustryFilter::All,
            IndustryFilter::Tech,
            IndustryFilter::Energy,
            IndustryFilter::Manufacturing,
            IndustryFilter::Finance,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Tech => "IT/Tech",
            Self::Energy => "Energy",
            Self::Manufacturing => "Manufacturing",
            Self::Finance => "Finance",
        }
    }

    /// Highlighted when the page loads.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl fmt::Display for IndustryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
