//----------------------------------------
// statistics errors
//----------------------------------------
use crate::error::RctsimErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum StatisticsError {
    #[error("sample is empty; group sizes must be positive")]
    EmptySample,
    #[error("histogram needs at least one bin")]
    ZeroBins,
}

impl From<StatisticsError> for RctsimErr {
    fn from(e: StatisticsError) -> Self {
        RctsimErr::Statistics(e)
    }
}
