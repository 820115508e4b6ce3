use thiserror::Error;

/// Errors raised while loading data or building the dashboard.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Not enough companies to compute an average or a ratio.
    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    #[error("duplicate company id: {0}")]
    DuplicateCompany(String),

    #[error("invalid record for {company}: {reason}")]
    InvalidRecord { company: String, reason: String },

    #[error("unknown sort key '{0}' (expected co2, collection or participants)")]
    UnknownSortKey(String),

    #[error("unknown export format '{0}' (expected pdf, excel or png)")]
    UnknownExportFormat(String),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
