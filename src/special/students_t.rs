use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::error::RctsimErr;
use crate::special::{
    error::DistributionError, incomplete_beta::regularized_incomplete_beta, types::PValueMethod,
};

// sign(0) = 0, unlike f64::signum
fn sign(t: f64) -> f64 {
    if t > 0.0 {
        1.0
    } else if t < 0.0 {
        -1.0
    } else {
        t
    }
}

/// Approximate Student's t CDF,
/// `0.5 + 0.5 sign(t) I(df / (df + t^2), df / 2, 1 / 2)`,
/// using the simplified incomplete beta. Inherits its inaccuracy: the value
/// is nominally in [0, 1] but is not P(T <= t).
pub fn t_cdf(t: f64, df: f64) -> f64 {
    0.5 + 0.5 * sign(t) * regularized_incomplete_beta(df / (df + t * t), df / 2.0, 0.5)
}

/// Exact Student's t CDF with `df` degrees of freedom
pub fn t_cdf_exact(t: f64, df: f64) -> Result<f64, RctsimErr> {
    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|_| DistributionError::InvalidDegreesOfFreedom(df))?;
    if t.is_nan() {
        return Ok(f64::NAN);
    }
    Ok(dist.cdf(t))
}

pub fn t_cdf_with(method: PValueMethod, t: f64, df: f64) -> Result<f64, RctsimErr> {
    match method {
        PValueMethod::Simplified => Ok(t_cdf(t, df)),
        PValueMethod::Exact => t_cdf_exact(t, df),
    }
}

/// `2 (1 - cdf(|t|, df))`
pub fn two_sided_p_value(method: PValueMethod, t: f64, df: f64) -> Result<f64, RctsimErr> {
    Ok(2.0 * (1.0 - t_cdf_with(method, t.abs(), df)?))
}
