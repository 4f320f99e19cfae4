//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::settings::SettingsError;
pub use crate::special::error::DistributionError;
pub use crate::statistics::error::StatisticsError;
pub use crate::trial::error::ConfigurationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RctsimErr {
    #[error("while validating trial configuration: {0}")]
    Configuration(ConfigurationError),
    #[error("while computing summary statistics: {0}")]
    Statistics(StatisticsError),
    #[error("while evaluating t distribution: {0}")]
    Distribution(DistributionError),
    #[error("while loading settings: {0}")]
    Settings(SettingsError),
    #[error("while writing report: {0}")]
    Report(#[from] serde_json::Error),
}
