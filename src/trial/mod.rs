//----------------------------------------
// trial mod
//----------------------------------------
pub mod error;
pub mod partition;
pub mod run_trial;
pub mod types;
