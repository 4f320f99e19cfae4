use rand::{Rng, SeedableRng, rngs};
use tracing::{debug, warn};

use crate::error::RctsimErr;
use crate::randomization::{outcomes::OutcomeGenerator, permutation::fisher_yates_shuffle};
use crate::special::{students_t::two_sided_p_value, types::PValueMethod};
use crate::statistics::summary::{mean, variance};
use crate::trial::partition::partition_population;
use crate::trial::types::{Arm, TrialConfig, TrialResult, TrialRun};

/// Runs one simulated trial on a validated `config`.
///
/// Participants `[0, treatment_group_size)` are treated and the rest are
/// controls; each arm is shuffled, outcomes are drawn for treatment then
/// control, and the two-sample t-test is computed from population
/// variances. Degenerate data (e.g. every outcome identical, or one
/// participant per arm leaving no degrees of freedom) is not an error: NaN
/// or infinity is carried into the result.
pub fn run_trial<R>(
    config: &TrialConfig,
    p_value_method: PValueMethod,
    rng: &mut R,
) -> Result<TrialRun, RctsimErr>
where
    R: Rng + ?Sized,
{
    config.validate()?;
    let (treatment_group, control_group, treatment_outcomes, control_outcomes) =
        assign_and_generate(config, rng);

    //----------------------------------------
    // Summaries
    let treatment_mean = mean(&treatment_outcomes)?;
    let control_mean = mean(&control_outcomes)?;
    let treatment_variance = variance(&treatment_outcomes)?;
    let control_variance = variance(&control_outcomes)?;

    let mut result = effect_estimate(
        config,
        treatment_mean,
        control_mean,
        treatment_variance,
        control_variance,
    );
    result.p_value = p_value_or_nan(p_value_method, &result);
    log_result(&result, p_value_method);

    Ok(TrialRun {
        config: *config,
        treatment_group,
        control_group,
        treatment_outcomes,
        control_outcomes,
        result,
    })
}

/// Runs a trial without validating `config`, reproducing the historical
/// arithmetic exactly: group means divide by the configured group sizes
/// (not the number of outcomes actually drawn), variances divide by the
/// number drawn, and an invalid exact-method input becomes a NaN p-value.
/// Inconsistent or zero sizes therefore show up as wrong or non-finite
/// numbers rather than as errors.
pub fn run_trial_unchecked<R>(
    config: &TrialConfig,
    p_value_method: PValueMethod,
    rng: &mut R,
) -> TrialRun
where
    R: Rng + ?Sized,
{
    let (treatment_group, control_group, treatment_outcomes, control_outcomes) =
        assign_and_generate(config, rng);

    let treatment_mean =
        treatment_outcomes.iter().sum::<f64>() / (config.treatment_group_size as f64);
    let control_mean = control_outcomes.iter().sum::<f64>() / (config.control_group_size as f64);

    let mut result = effect_estimate(
        config,
        treatment_mean,
        control_mean,
        raw_variance(&treatment_outcomes),
        raw_variance(&control_outcomes),
    );
    result.p_value = p_value_or_nan(p_value_method, &result);
    log_result(&result, p_value_method);

    TrialRun {
        config: *config,
        treatment_group,
        control_group,
        treatment_outcomes,
        control_outcomes,
        result,
    }
}

/// Runs a trial on a fresh generator: seeded when `seed` is given, from OS
/// entropy otherwise. No generator state outlives the call.
pub fn simulate_trial(
    config: &TrialConfig,
    p_value_method: PValueMethod,
    seed: Option<u64>,
) -> Result<TrialRun, RctsimErr> {
    let mut rng = match seed {
        Some(seed) => rngs::StdRng::seed_from_u64(seed),
        None => rngs::StdRng::from_entropy(),
    };
    run_trial(config, p_value_method, &mut rng)
}

fn assign_and_generate<R>(
    config: &TrialConfig,
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>, Vec<f64>, Vec<f64>)
where
    R: Rng + ?Sized,
{
    //----------------------------------------
    // Assignment
    let (mut treatment_group, mut control_group) =
        partition_population(config.population_size, config.treatment_group_size);
    fisher_yates_shuffle(&mut treatment_group, rng);
    fisher_yates_shuffle(&mut control_group, rng);
    debug!(
        treatment = treatment_group.len(),
        control = control_group.len(),
        "assigned participants"
    );

    //----------------------------------------
    // Outcomes
    let generator = OutcomeGenerator::new(config.treatment_effect);
    let treatment_outcomes = generator.generate(Arm::Treatment, treatment_group.len(), rng);
    let control_outcomes = generator.generate(Arm::Control, control_group.len(), rng);

    (treatment_group, control_group, treatment_outcomes, control_outcomes)
}

// p_value is left as NaN for the caller to fill in
fn effect_estimate(
    config: &TrialConfig,
    treatment_mean: f64,
    control_mean: f64,
    treatment_variance: f64,
    control_variance: f64,
) -> TrialResult {
    let treatment_effect_estimate = treatment_mean - control_mean;
    let standard_error = (treatment_variance / (config.treatment_group_size as f64)
        + control_variance / (config.control_group_size as f64))
        .sqrt();

    TrialResult {
        treatment_mean,
        control_mean,
        treatment_effect_estimate,
        standard_error,
        t_statistic: treatment_effect_estimate / standard_error,
        p_value: f64::NAN,
        degrees_of_freedom: config.degrees_of_freedom(),
    }
}

// The exact t distribution rejects df <= 0; that is a data degeneracy here,
// reported as a NaN p-value like every other one
fn p_value_or_nan(p_value_method: PValueMethod, result: &TrialResult) -> f64 {
    two_sided_p_value(p_value_method, result.t_statistic, result.degrees_of_freedom)
        .unwrap_or_else(|e| {
            warn!("p-value unavailable: {e}");
            f64::NAN
        })
}

fn log_result(result: &TrialResult, p_value_method: PValueMethod) {
    debug!(?result, ?p_value_method, "computed trial result");
    if result.standard_error == 0.0 || !result.is_finite() {
        warn!(
            standard_error = result.standard_error,
            t_statistic = result.t_statistic,
            "degenerate trial data; result contains non-finite values"
        );
    }
}

// Population variance over however many values were drawn; NaN when empty
fn raw_variance(xs: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let m = xs.iter().sum::<f64>() / n;
    xs.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / n
}
