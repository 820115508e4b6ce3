pub mod aggregate;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod impact;
pub mod model;
pub mod output;
pub mod rank;
pub mod report;
pub mod store;

pub use error::{DashboardError, Result};
