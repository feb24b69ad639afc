//! MSM-BT volatility estimator
//!
//! Fits a binomial Markov-switching multifractal model to a CSV of returns
//! and forecasts realized volatility over a window by Monte-Carlo simulation.
//!
//! Usage:
//! ```bash
//! msm_bt -k 4 -i returns.csv -o results.csv --seed 7 --restarts 3
//! ```

use clap::Parser;
use msm_volatility::{
    msm::{
        estimate_and_forecast, MSMConfig, MSMError, MSMFitResult, MSMForecastResult, MSMOptions,
        MSMResult, ReturnSeries, SimStart,
    },
    optimization::loglik_optimizer::{
        MLEOptions, Tolerances, DEFAULT_SIMPLEX_STEP, DEFAULT_TOL_SD,
    },
    utils::{read_returns, write_results},
};
use std::{path::PathBuf, process::ExitCode};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "msm_bt")]
#[command(version, about = "Binomial Markov-switching multifractal volatility estimator", long_about = None)]
struct Cli {
    /// Number of binary volatility components (1..=12)
    #[arg(short = 'k', long)]
    dimension: usize,

    /// Forecast window, i.e. length of each simulated path
    #[arg(short = 'w', long, default_value_t = 30)]
    window: usize,

    /// Number of Monte-Carlo paths
    #[arg(short = 'n', long, default_value_t = 200)]
    samples: usize,

    /// Input CSV; returns are read from the first column
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Output CSV
    #[arg(short = 'o', long, default_value = "results.csv")]
    output: PathBuf,

    /// Master RNG seed (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Independent optimizer starts
    #[arg(long, default_value_t = 1)]
    restarts: usize,

    /// Nelder–Mead iteration cap
    #[arg(long, default_value_t = 5000)]
    max_iter: usize,

    /// Input CSV has a header row
    #[arg(long)]
    header: bool,

    /// Start simulated paths from the stationary law instead of row 0
    #[arg(long)]
    stationary_start: bool,

    /// Use returns as given instead of subtracting the sample mean
    #[arg(long)]
    no_demean: bool,

    /// Per-iteration optimizer traces (needs the `obs_slog` feature)
    #[arg(long)]
    verbose: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn build_options(cli: &Cli) -> MSMResult<MSMOptions> {
    let tols = Tolerances::new(Some(DEFAULT_TOL_SD), Some(cli.max_iter))?;
    let mle_opts = MLEOptions::new(tols, DEFAULT_SIMPLEX_STEP, cli.verbose)?;
    let sim_start = if cli.stationary_start { SimStart::Stationary } else { SimStart::RowZero };
    MSMOptions::new(mle_opts, cli.restarts, sim_start)
}

fn run(cli: &Cli) -> MSMResult<(MSMFitResult, MSMForecastResult)> {
    let config = MSMConfig::new(cli.dimension, cli.window, cli.samples, cli.seed)?;
    let options = build_options(cli)?;

    let raw = read_returns(&cli.input, cli.header)?;
    let series =
        if cli.no_demean { ReturnSeries::new(raw)? } else { ReturnSeries::demeaned(raw)? };
    info!(
        input = %cli.input.display(),
        observations = series.len(),
        k = config.k(),
        restarts = options.n_restarts,
        "estimating MSM-BT model"
    );

    let (fit, forecast) = estimate_and_forecast(&series, &config, &options)?;
    write_results(&cli.output, &fit, &forecast)?;
    Ok((fit, forecast))
}

fn print_summary(fit: &MSMFitResult, forecast: &MSMForecastResult) {
    println!("MSM-BT fit (k = {})", fit.k);
    println!("  m0        {:.6}", fit.params.m0);
    println!("  s0        {:.6}", fit.params.s0);
    for (i, p) in fit.params.probs.iter().enumerate() {
        println!("  p{:<8} {:.6}", i + 1, p);
    }
    println!("  nll       {:.6}", fit.nll);
    println!("  converged {} ({}, {} iterations)", fit.converged, fit.status, fit.iterations);
    println!("Volatility forecast ({} paths x {} steps)", forecast.num_paths, forecast.path_len);
    println!("  mean      {:.6}", forecast.mean);
    println!("  std err   {:.6}", forecast.standard_error);
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok((fit, forecast)) => {
            print_summary(&fit, &forecast);
            info!(output = %cli.output.display(), "results written");
            ExitCode::SUCCESS
        }
        Err(err @ MSMError::MalformedRecord { .. }) => {
            error!("{}: {err}", cli.input.display());
            ExitCode::FAILURE
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
