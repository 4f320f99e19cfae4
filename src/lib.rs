//----------------------------------------
// Root lib
//----------------------------------------
//! Simulation of a simple two-arm randomized controlled trial. Participants
//! are split into treatment and control, synthetic outcomes are drawn for
//! each arm, and the treatment effect is tested with a two-sample
//! t-statistic whose p-value is computed from in-crate special functions
//! (Lanczos log-gamma, incomplete beta, Student's t CDF).
//!
//! The default p-value follows a simplified incomplete-beta formula kept for
//! parity with historical results; it is not a valid significance level.
//! Select [`types::PValueMethod::Exact`] for the true t distribution.

/// This module houses the public API for running trials and evaluating the
/// statistical primitives
pub mod compute;
/// This module contains error types
pub mod error;
mod randomization;
pub mod settings;
mod special;
mod statistics;
mod trial;

/// Plain data types exchanged with hosts
pub mod types {
    pub use crate::special::types::PValueMethod;
    pub use crate::statistics::types::{OutcomeHistogram, SampleSummary};
    pub use crate::trial::types::{Arm, TrialConfig, TrialResult, TrialRun};
}

