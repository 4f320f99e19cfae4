//----------------------------------------
// trial mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::trial::error::ConfigurationError;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Arm {
    Treatment,
    Control,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    pub population_size: usize,
    pub treatment_group_size: usize,
    pub control_group_size: usize,
    pub treatment_effect: f64,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            population_size: 1000,
            treatment_group_size: 500,
            control_group_size: 500,
            treatment_effect: 0.2,
        }
    }
}

impl TrialConfig {
    /// Config whose control arm is everyone not assigned to treatment.
    /// Saturates at zero if `treatment_group_size > population_size`, which
    /// `validate` then rejects.
    pub fn with_derived_control(
        population_size: usize,
        treatment_group_size: usize,
        treatment_effect: f64,
    ) -> Self {
        Self {
            population_size,
            treatment_group_size,
            control_group_size: population_size.saturating_sub(treatment_group_size),
            treatment_effect,
        }
    }

    /// Checks that both arms are non-empty and together cover the population
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.population_size == 0 {
            return Err(ConfigurationError::NonPositiveSize {
                field: "population_size",
            });
        }
        if self.treatment_group_size == 0 {
            return Err(ConfigurationError::NonPositiveSize {
                field: "treatment_group_size",
            });
        }
        if self.control_group_size == 0 {
            return Err(ConfigurationError::NonPositiveSize {
                field: "control_group_size",
            });
        }
        if self.treatment_group_size > self.population_size {
            return Err(ConfigurationError::TreatmentExceedsPopulation {
                treatment_group_size: self.treatment_group_size,
                population_size: self.population_size,
            });
        }
        if self
            .treatment_group_size
            .checked_add(self.control_group_size)
            != Some(self.population_size)
        {
            return Err(ConfigurationError::SizesDoNotPartition {
                population_size: self.population_size,
                treatment_group_size: self.treatment_group_size,
                control_group_size: self.control_group_size,
            });
        }
        if !self.treatment_effect.is_finite() {
            return Err(ConfigurationError::NonFiniteEffect(self.treatment_effect));
        }
        Ok(())
    }

    /// `n_T + n_C - 2`, in floating point so undersized configs go negative
    /// instead of wrapping
    pub fn degrees_of_freedom(&self) -> f64 {
        (self.treatment_group_size as f64) + (self.control_group_size as f64) - 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialResult {
    pub treatment_mean: f64,
    pub control_mean: f64,
    pub treatment_effect_estimate: f64,
    pub standard_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    pub degrees_of_freedom: f64,
}

impl TrialResult {
    /// False when degenerate data pushed NaN or infinity into the result
    pub fn is_finite(&self) -> bool {
        [
            self.treatment_mean,
            self.control_mean,
            self.treatment_effect_estimate,
            self.standard_error,
            self.t_statistic,
            self.p_value,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Everything one simulated trial produced. Groups and outcomes are
/// positionally aligned: `treatment_outcomes[i]` belongs to participant
/// `treatment_group[i]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrialRun {
    pub config: TrialConfig,
    pub treatment_group: Vec<usize>,
    pub control_group: Vec<usize>,
    pub treatment_outcomes: Vec<f64>,
    pub control_outcomes: Vec<f64>,
    pub result: TrialResult,
}

impl TrialRun {
    /// (participant, arm, outcome) for every participant, treatment first
    pub fn participants(&self) -> Vec<(usize, Arm, f64)> {
        let treatment = self
            .treatment_group
            .iter()
            .zip(self.treatment_outcomes.iter())
            .map(|(&id, &y)| (id, Arm::Treatment, y));
        let control = self
            .control_group
            .iter()
            .zip(self.control_outcomes.iter())
            .map(|(&id, &y)| (id, Arm::Control, y));
        treatment.chain(control).collect()
    }
}
