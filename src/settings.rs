//----------------------------------------
// Simulation settings
//----------------------------------------
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::error::RctsimErr;
use crate::special::types::PValueMethod;
use crate::trial::types::TrialConfig;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("could not read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl From<SettingsError> for RctsimErr {
    fn from(e: SettingsError) -> Self {
        RctsimErr::Settings(e)
    }
}

/// Everything a host needs to run one trial. Any key missing from a
/// settings file keeps its default.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimSettings {
    pub trial: TrialConfig,
    pub seed: Option<u64>,
    pub p_value_method: PValueMethod,
    pub histogram_bins: usize,
    /// Skip config validation and use the historical arithmetic
    pub legacy: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            trial: TrialConfig::default(),
            seed: None,
            p_value_method: PValueMethod::Simplified,
            histogram_bins: 10,
            legacy: false,
        }
    }
}

/// Values supplied on top of a settings file, e.g. from the command line.
/// `None` / `false` leaves the underlying setting alone.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SettingsOverrides {
    pub population_size: Option<usize>,
    pub treatment_group_size: Option<usize>,
    pub control_group_size: Option<usize>,
    pub treatment_effect: Option<f64>,
    pub seed: Option<u64>,
    pub exact: bool,
    pub legacy: bool,
    pub histogram_bins: Option<usize>,
}

impl SimSettings {
    /// Applies `overrides`. Without an explicit control size, the control
    /// arm is re-derived as population minus treatment, but only when one of
    /// those two actually changed; otherwise the configured control size
    /// stands.
    pub fn with_overrides(self, overrides: &SettingsOverrides) -> Self {
        let trial = self.trial;
        let population_size = overrides.population_size.unwrap_or(trial.population_size);
        let treatment_group_size = overrides
            .treatment_group_size
            .unwrap_or(trial.treatment_group_size);
        let treatment_effect = overrides.treatment_effect.unwrap_or(trial.treatment_effect);

        let trial = match overrides.control_group_size {
            Some(control_group_size) => TrialConfig {
                population_size,
                treatment_group_size,
                control_group_size,
                treatment_effect,
            },
            None if population_size != trial.population_size
                || treatment_group_size != trial.treatment_group_size =>
            {
                TrialConfig::with_derived_control(
                    population_size,
                    treatment_group_size,
                    treatment_effect,
                )
            }
            None => TrialConfig {
                treatment_effect,
                ..trial
            },
        };

        Self {
            trial,
            seed: overrides.seed.or(self.seed),
            p_value_method: if overrides.exact {
                PValueMethod::Exact
            } else {
                self.p_value_method
            },
            histogram_bins: overrides.histogram_bins.unwrap_or(self.histogram_bins),
            legacy: self.legacy || overrides.legacy,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, RctsimErr> {
        toml::from_str(s).map_err(|e| SettingsError::Parse(e).into())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RctsimErr> {
        let contents = std::fs::read_to_string(path).map_err(SettingsError::Io)?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_settings_are_default() {
        assert_eq!(SimSettings::from_toml_str("").unwrap(), SimSettings::default());
    }

    #[test]
    fn partial_settings() {
        let settings = SimSettings::from_toml_str(
            r#"
            seed = 24601
            p_value_method = "exact"

            [trial]
            population_size = 200
            treatment_group_size = 80
            control_group_size = 120
            "#,
        )
        .unwrap();
        assert_eq!(settings.seed, Some(24601));
        assert_eq!(settings.p_value_method, PValueMethod::Exact);
        assert_eq!(settings.trial.population_size, 200);
        assert_eq!(settings.trial.control_group_size, 120);
        // Missing key falls back to the default effect
        assert_eq!(settings.trial.treatment_effect, 0.2);
        assert_eq!(settings.histogram_bins, 10);
        assert!(!settings.legacy);
    }

    #[test]
    fn no_overrides_keeps_settings() {
        let settings = SimSettings {
            seed: Some(3),
            ..SimSettings::default()
        };
        assert_eq!(settings.with_overrides(&SettingsOverrides::default()), settings);
    }

    #[test]
    fn effect_only_keeps_configured_control() {
        // Inconsistent sizes from the file are left for validation to reject
        let settings = SimSettings {
            trial: TrialConfig {
                population_size: 100,
                treatment_group_size: 40,
                control_group_size: 50,
                treatment_effect: 0.2,
            },
            ..SimSettings::default()
        };
        let overridden = settings.with_overrides(&SettingsOverrides {
            treatment_effect: Some(-0.3),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.trial.control_group_size, 50);
        assert_eq!(overridden.trial.treatment_effect, -0.3);
    }

    #[test]
    fn changed_population_derives_control() {
        let overridden = SimSettings::default().with_overrides(&SettingsOverrides {
            population_size: Some(300),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.trial.population_size, 300);
        assert_eq!(overridden.trial.treatment_group_size, 500);
        // 300 - 500 saturates, and validation reports it
        assert_eq!(overridden.trial.control_group_size, 0);

        let overridden = SimSettings::default().with_overrides(&SettingsOverrides {
            treatment_group_size: Some(200),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.trial.control_group_size, 800);
        assert!(overridden.trial.validate().is_ok());
    }

    #[test]
    fn same_values_do_not_count_as_changes() {
        let settings = SimSettings {
            trial: TrialConfig {
                population_size: 10,
                treatment_group_size: 4,
                control_group_size: 5,
                treatment_effect: 0.0,
            },
            ..SimSettings::default()
        };
        let overridden = settings.with_overrides(&SettingsOverrides {
            population_size: Some(10),
            treatment_group_size: Some(4),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.trial.control_group_size, 5);
    }

    #[test]
    fn explicit_control_wins() {
        let overridden = SimSettings::default().with_overrides(&SettingsOverrides {
            population_size: Some(60),
            treatment_group_size: Some(20),
            control_group_size: Some(10),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.trial.control_group_size, 10);
        assert_eq!(
            overridden.trial.validate().unwrap_err().field(),
            "control_group_size"
        );
    }

    #[test]
    fn flags_and_scalars_override() {
        let settings = SimSettings {
            seed: Some(1),
            legacy: true,
            ..SimSettings::default()
        };
        let overridden = settings.with_overrides(&SettingsOverrides {
            seed: Some(24601),
            exact: true,
            histogram_bins: Some(25),
            ..SettingsOverrides::default()
        });
        assert_eq!(overridden.seed, Some(24601));
        assert_eq!(overridden.p_value_method, PValueMethod::Exact);
        assert_eq!(overridden.histogram_bins, 25);
        // A file asking for legacy mode is not undone by an absent flag
        assert!(overridden.legacy);
    }

    #[test]
    fn bad_method_err() {
        if let Err(e) = SimSettings::from_toml_str("p_value_method = \"bootstrap\"") {
            assert!(
                format!("{}", e).starts_with("while loading settings: could not parse settings")
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn missing_file_err() {
        assert!(matches!(
            SimSettings::from_file("/nonexistent/rctsim.toml"),
            Err(RctsimErr::Settings(SettingsError::Io(_)))
        ));
    }
}
