use itertools::{Itertools, MinMaxResult};

use crate::error::RctsimErr;
use crate::statistics::{error::StatisticsError, types::OutcomeHistogram};

/// Splits `[min(xs), max(xs)]` into `bins` equal-width bins and counts the
/// outcomes in each. Bins are half-open except the last, which also holds
/// the maximum. A constant sample lands entirely in the first bin.
pub fn histogram(xs: &[f64], bins: usize) -> Result<OutcomeHistogram, RctsimErr> {
    if bins == 0 {
        return Err(StatisticsError::ZeroBins.into());
    }
    let (lower, upper) = match xs.iter().copied().minmax_by(|a, b| a.total_cmp(b)) {
        MinMaxResult::NoElements => return Err(StatisticsError::EmptySample.into()),
        MinMaxResult::OneElement(x) => (x, x),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };

    let bin_width = (upper - lower) / (bins as f64);
    let mut counts = vec![0; bins];
    for &x in xs {
        let idx = if bin_width > 0.0 {
            (((x - lower) / bin_width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    Ok(OutcomeHistogram {
        lower,
        upper,
        bin_width,
        counts,
    })
}
