//----------------------------------------
// special function errors
//----------------------------------------
use crate::error::RctsimErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DistributionError {
    #[error("degrees of freedom should be positive; got {0}")]
    InvalidDegreesOfFreedom(f64),
    #[error("beta shape parameters should be positive; got a = {a}, b = {b}")]
    InvalidShape { a: f64, b: f64 },
}

impl From<DistributionError> for RctsimErr {
    fn from(e: DistributionError) -> Self {
        RctsimErr::Distribution(e)
    }
}
