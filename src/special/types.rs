//----------------------------------------
// special functions mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

/// Which Student's t CDF feeds the reported p-value
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PValueMethod {
    /// Closed-form approximation built on the pointwise beta integrand.
    /// Matches historical results but is not a valid significance level.
    #[default]
    Simplified,
    /// Exact t distribution (continued-fraction incomplete beta)
    Exact,
}
