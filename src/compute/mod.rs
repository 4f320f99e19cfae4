//----------------------------------------
// compute mod
//----------------------------------------
pub use crate::randomization::outcomes::OutcomeGenerator;
pub use crate::randomization::permutation::fisher_yates_shuffle;
pub use crate::special::incomplete_beta::{
    regularized_incomplete_beta, regularized_incomplete_beta_exact,
};
pub use crate::special::ln_gamma::ln_gamma;
pub use crate::special::students_t::{t_cdf, t_cdf_exact, t_cdf_with, two_sided_p_value};
pub use crate::statistics::histogram::histogram;
pub use crate::statistics::summary::{mean, summarize, variance};
pub use crate::trial::partition::partition_population;
pub use crate::trial::run_trial::{run_trial, run_trial_unchecked, simulate_trial};
