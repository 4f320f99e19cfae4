//----------------------------------------
// trial configuration errors
//----------------------------------------
use crate::error::RctsimErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigurationError {
    #[error("{field} should be positive; got 0")]
    NonPositiveSize { field: &'static str },
    #[error(
        "treatment_group_size ({treatment_group_size}) is larger than \
        population_size ({population_size})"
    )]
    TreatmentExceedsPopulation {
        treatment_group_size: usize,
        population_size: usize,
    },
    #[error(
        "control_group_size ({control_group_size}) should equal population_size \
        ({population_size}) minus treatment_group_size ({treatment_group_size})"
    )]
    SizesDoNotPartition {
        population_size: usize,
        treatment_group_size: usize,
        control_group_size: usize,
    },
    #[error("treatment_effect should be finite; got {0}")]
    NonFiniteEffect(f64),
}

impl ConfigurationError {
    /// Name of the `TrialConfig` field that failed validation
    pub fn field(&self) -> &'static str {
        match self {
            ConfigurationError::NonPositiveSize { field } => *field,
            ConfigurationError::TreatmentExceedsPopulation { .. } => "treatment_group_size",
            ConfigurationError::SizesDoNotPartition { .. } => "control_group_size",
            ConfigurationError::NonFiniteEffect(_) => "treatment_effect",
        }
    }
}

impl From<ConfigurationError> for RctsimErr {
    fn from(e: ConfigurationError) -> Self {
        RctsimErr::Configuration(e)
    }
}
