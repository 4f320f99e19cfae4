//! rctsim CLI: run one simulated randomized controlled trial and report the
//! effect estimate and its t-test.

use clap::{Parser, Subcommand, ValueEnum};
use rand::{SeedableRng, rngs};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rctsim::compute::{histogram, run_trial, run_trial_unchecked, two_sided_p_value};
use rctsim::error::RctsimErr;
use rctsim::settings::{SettingsOverrides, SimSettings};
use rctsim::types::{OutcomeHistogram, PValueMethod, TrialRun};

#[derive(Parser)]
#[command(name = "rctsim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one trial
    Run {
        /// TOML settings file; flags below override it
        #[arg(short, long)]
        config: Option<String>,

        #[arg(short = 'n', long)]
        population_size: Option<usize>,

        #[arg(short, long)]
        treatment_size: Option<usize>,

        /// Defaults to population size minus treatment size
        #[arg(short = 'k', long)]
        control_size: Option<usize>,

        /// Treatment outcomes are drawn from Uniform[0, 1 + effect)
        #[arg(short, long, allow_negative_numbers = true)]
        effect: Option<f64>,

        #[arg(short, long)]
        seed: Option<u64>,

        /// Use the exact t distribution for the p-value
        #[arg(long)]
        exact: bool,

        /// Skip configuration checks and use the historical arithmetic
        #[arg(long)]
        legacy: bool,

        /// Histogram bins per arm
        #[arg(short, long)]
        bins: Option<usize>,

        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Two-sided p-value for a t-statistic
    PValue {
        #[arg(allow_negative_numbers = true)]
        t: f64,

        df: f64,

        #[arg(long)]
        exact: bool,
    },
}

#[derive(Serialize)]
struct Report<'a> {
    run: &'a TrialRun,
    treatment_histogram: Option<OutcomeHistogram>,
    control_histogram: Option<OutcomeHistogram>,
}

fn main() -> Result<(), RctsimErr> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match cli.command {
        Commands::Run {
            config,
            population_size,
            treatment_size,
            control_size,
            effect,
            seed,
            exact,
            legacy,
            bins,
            format,
        } => {
            let settings = match config {
                Some(path) => {
                    info!("Loading settings from {}", path);
                    SimSettings::from_file(&path)?
                }
                None => SimSettings::default(),
            }
            .with_overrides(&SettingsOverrides {
                population_size,
                treatment_group_size: treatment_size,
                control_group_size: control_size,
                treatment_effect: effect,
                seed,
                exact,
                legacy,
                histogram_bins: bins,
            });

            run(&settings, format)
        }
        Commands::PValue { t, df, exact } => {
            let method = if exact {
                PValueMethod::Exact
            } else {
                PValueMethod::Simplified
            };
            println!("{:.6}", two_sided_p_value(method, t, df)?);
            Ok(())
        }
    }
}

fn run(settings: &SimSettings, format: OutputFormat) -> Result<(), RctsimErr> {
    info!(
        population = settings.trial.population_size,
        treatment = settings.trial.treatment_group_size,
        control = settings.trial.control_group_size,
        effect = settings.trial.treatment_effect,
        method = ?settings.p_value_method,
        legacy = settings.legacy,
        "Running trial"
    );

    let mut rng = match settings.seed {
        Some(seed) => rngs::StdRng::seed_from_u64(seed),
        None => rngs::StdRng::from_entropy(),
    };
    let trial_run = if settings.legacy {
        run_trial_unchecked(&settings.trial, settings.p_value_method, &mut rng)
    } else {
        run_trial(&settings.trial, settings.p_value_method, &mut rng)?
    };

    // Arms can be empty on the legacy path
    let report = Report {
        run: &trial_run,
        treatment_histogram: histogram(&trial_run.treatment_outcomes, settings.histogram_bins).ok(),
        control_histogram: histogram(&trial_run.control_outcomes, settings.histogram_bins).ok(),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_table(&report),
    }
    Ok(())
}

fn print_table(report: &Report) {
    let config = &report.run.config;
    let result = &report.run.result;

    println!("Population Size: {}", config.population_size);
    println!("Treatment Group Size: {}", config.treatment_group_size);
    println!("Control Group Size: {}", config.control_group_size);
    println!("Treatment Effect: {:.2}", config.treatment_effect);
    println!("----------------------------------------");
    println!("Treatment Mean: {:.4}", result.treatment_mean);
    println!("Control Mean: {:.4}", result.control_mean);
    println!("Treatment Effect Estimate: {:.2}", result.treatment_effect_estimate);
    println!("Standard Error: {:.4}", result.standard_error);
    println!("t-statistic: {:.4} (df = {})", result.t_statistic, result.degrees_of_freedom);
    println!("P-value: {:.4}", result.p_value);

    for (name, hist) in [
        ("Treatment", &report.treatment_histogram),
        ("Control", &report.control_histogram),
    ] {
        let Some(hist) = hist else {
            continue;
        };
        println!("----------------------------------------");
        println!("{name} outcome distribution");
        let widest = hist.counts.iter().copied().max().unwrap_or(0).max(1);
        for (start, count) in hist.bin_starts().iter().zip(hist.counts.iter()) {
            let bar = "#".repeat(count * 40 / widest);
            println!("{start:>8.3} | {bar} {count}");
        }
    }
}
