//----------------------------------------
// special functions mod
//----------------------------------------
pub mod error;
pub mod incomplete_beta;
pub mod ln_gamma;
pub mod students_t;
pub mod types;
