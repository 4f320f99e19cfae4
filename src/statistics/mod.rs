//----------------------------------------
// statistics mod
//----------------------------------------
pub mod error;
pub mod histogram;
pub mod summary;
pub mod types;
