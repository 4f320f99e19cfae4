use crate::error::RctsimErr;
use crate::statistics::{error::StatisticsError, types::SampleSummary};

/// Arithmetic mean of `xs`
pub fn mean(xs: &[f64]) -> Result<f64, RctsimErr> {
    if xs.is_empty() {
        return Err(StatisticsError::EmptySample.into());
    }
    Ok(xs.iter().sum::<f64>() / (xs.len() as f64))
}

/// Population variance of `xs`: mean squared deviation from the mean,
/// dividing by `n` rather than `n - 1`. The standard error in the trial
/// engine is built on this biased estimator.
pub fn variance(xs: &[f64]) -> Result<f64, RctsimErr> {
    let m = mean(xs)?;
    Ok(xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (xs.len() as f64))
}

pub fn summarize(xs: &[f64]) -> Result<SampleSummary, RctsimErr> {
    Ok(SampleSummary {
        n: xs.len(),
        mean: mean(xs)?,
        variance: variance(xs)?,
    })
}
