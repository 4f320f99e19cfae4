use statrs::function::beta::checked_beta_reg;

use crate::error::RctsimErr;
use crate::special::{error::DistributionError, ln_gamma::ln_gamma};

/// Simplified stand-in for the regularized incomplete beta function I_x(a, b).
///
/// Outside the open unit interval the boundary values are exact (`0` for
/// `x <= 0`, `1` for `x >= 1`). Inside it this evaluates the beta integrand
/// pointwise,
///
/// `exp(lnG(a + b) - lnG(a) - lnG(b) + a ln(x) + b ln(1 - x))`,
///
/// instead of the continued-fraction expansion, so it only coincides with
/// the true I_x(a, b) in narrow regimes. Every simplified p-value is built
/// on this formula; use [`regularized_incomplete_beta_exact`] when a
/// statistically meaningful value is needed.
pub fn regularized_incomplete_beta(x: f64, a: f64, b: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    (ln_gamma(a + b) - ln_gamma(a) - ln_gamma(b) + a * x.ln() + b * (1.0 - x).ln()).exp()
}

/// The true regularized incomplete beta function, with the same boundary
/// handling as [`regularized_incomplete_beta`]
pub fn regularized_incomplete_beta_exact(x: f64, a: f64, b: f64) -> Result<f64, RctsimErr> {
    if !(a > 0.0 && b > 0.0) {
        return Err(DistributionError::InvalidShape { a, b }.into());
    }
    if x <= 0.0 {
        return Ok(0.0);
    }
    if x >= 1.0 {
        return Ok(1.0);
    }
    if x.is_nan() {
        return Ok(f64::NAN);
    }
    checked_beta_reg(a, b, x).map_err(|_| DistributionError::InvalidShape { a, b }.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn boundaries_exact() {
        for &(a, b) in &[(1.0, 0.5), (10.0, 0.5), (0.3, 7.0), (-1.5, 2.0)] {
            assert_eq!(regularized_incomplete_beta(0.0, a, b), 0.0);
            assert_eq!(regularized_incomplete_beta(-0.2, a, b), 0.0);
            assert_eq!(regularized_incomplete_beta(1.0, a, b), 1.0);
            assert_eq!(regularized_incomplete_beta(3.0, a, b), 1.0);
        }
    }

    #[test]
    fn pointwise_integrand_value() {
        // Gamma(1.5) / (Gamma(1) Gamma(0.5)) * (2/3) * (1/3)^0.5 = 1 / (3 sqrt(3))
        assert_abs_diff_eq!(
            regularized_incomplete_beta(2.0 / 3.0, 1.0, 0.5),
            1.0 / (3.0 * 3f64.sqrt()),
            epsilon = 1e-13
        );
    }

    #[test]
    fn simplified_differs_from_exact() {
        // I_x(1, 1) = x, while the pointwise form gives x (1 - x)
        assert_abs_diff_eq!(regularized_incomplete_beta(0.5, 1.0, 1.0), 0.25, epsilon = 1e-13);
        assert_abs_diff_eq!(
            regularized_incomplete_beta_exact(0.5, 1.0, 1.0).unwrap(),
            0.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn exact_boundaries() {
        assert_eq!(regularized_incomplete_beta_exact(0.0, 2.0, 3.0).unwrap(), 0.0);
        assert_eq!(regularized_incomplete_beta_exact(1.0, 2.0, 3.0).unwrap(), 1.0);
    }

    #[test]
    fn exact_bad_shape_err() {
        if let Err(e) = regularized_incomplete_beta_exact(0.5, 0.0, 1.0) {
            assert_eq!(
                String::from(
                    "while evaluating t distribution: \
                     beta shape parameters should be positive; got a = 0, b = 1"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
