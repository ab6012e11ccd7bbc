//! Command-line harness for the parquad engine.
//!
//! Run with: cargo run --release --bin parquad -- --workers 4 --tolerance 1e-8 -a 0.01 -b 2
//!
//! Diagnostics go to stderr, filtered by `PARQUAD_LOG` (default `warn`); the
//! summary goes to stdout.

use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing::error;
use tracing_subscriber::EnvFilter;

use parquad::prelude::*;

/// Integrand selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliIntegrand {
    /// sin(1/x), the oscillatory benchmark integrand
    SinInverse,
    /// x
    Identity,
    /// x^2
    Square,
    /// sin(x)
    Sine,
}

impl From<CliIntegrand> for BuiltinIntegrand {
    fn from(value: CliIntegrand) -> Self {
        match value {
            CliIntegrand::SinInverse => BuiltinIntegrand::SinInverse,
            CliIntegrand::Identity => BuiltinIntegrand::Identity,
            CliIntegrand::Square => BuiltinIntegrand::Square,
            CliIntegrand::Sine => BuiltinIntegrand::Sine,
        }
    }
}

/// Load-balance signal selection on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CliBalance {
    /// Per-worker active time
    Time,
    /// Per-worker evaluation count
    Evaluations,
}

impl From<CliBalance> for BalanceSignal {
    fn from(value: CliBalance) -> Self {
        match value {
            CliBalance::Time => BalanceSignal::ActiveTime,
            CliBalance::Evaluations => BalanceSignal::Evaluations,
        }
    }
}

/// Parallel adaptive quadrature over a fixed worker pool.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of worker threads (default: available parallelism)
    #[arg(short = 'w', long = "workers", value_name = "N")]
    workers: Option<usize>,

    /// Global error tolerance
    #[arg(short = 'e', long = "tolerance", default_value_t = 1e-8)]
    tolerance: f64,

    /// Lower bound of the domain
    #[arg(short = 'a', long = "lower", default_value_t = 0.01, allow_negative_numbers = true)]
    lower: f64,

    /// Upper bound of the domain
    #[arg(short = 'b', long = "upper", default_value_t = 2.0, allow_negative_numbers = true)]
    upper: f64,

    /// Number of tasks (default: max(100, workers * 500))
    #[arg(long = "tasks", value_name = "N")]
    tasks: Option<usize>,

    /// Recursion ceiling of the kernel
    #[arg(long = "max-depth", default_value_t = 20)]
    max_depth: u32,

    /// Signal used for the load-balance figure
    #[arg(long = "balance", value_enum, default_value_t = CliBalance::Time)]
    balance: CliBalance,

    /// Function to integrate
    #[arg(long = "integrand", value_enum, default_value_t = CliIntegrand::SinInverse)]
    integrand: CliIntegrand,
}

impl Args {
    fn config(&self) -> EngineConfig {
        let mut config = EngineConfig::default()
            .with_tolerance(self.tolerance)
            .with_domain(self.lower, self.upper)
            .with_max_depth(self.max_depth)
            .with_balance_signal(self.balance.into());
        if let Some(workers) = self.workers {
            config = config.with_workers(workers);
        }
        if let Some(tasks) = self.tasks {
            config = config.with_task_count(tasks);
        }
        config
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("PARQUAD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let integrand = BuiltinIntegrand::from(args.integrand);

    match parquad::integrate(&integrand, args.config()) {
        Ok(outcome) => {
            println!("Integrand: {}", integrand.formula());
            println!("{}", Summary::new(&outcome));
            if let Some(exact) = integrand.exact_integral(outcome.domain.lower(), outcome.domain.upper()) {
                println!("Absolute error vs closed form: {:e}", (outcome.integral() - exact).abs());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "run rejected");
            eprintln!("parquad: {err}");
            ExitCode::FAILURE
        }
    }
}
