//! Command-line arguments for the bench binary.

use clap::Parser;

use crate::config::Settings;

/// Compare unwind-based and outcome-based control flow.
#[derive(Parser, Debug)]
#[command(name = "keystone-bench")]
#[command(about = "Time unwind-based against outcome-based control flow")]
pub struct Cli {
    /// Scenarios to run, by name (case-insensitive). Runs all when omitted.
    #[arg(value_name = "SCENARIO")]
    pub scenarios: Vec<String>,

    /// Measured iterations per scenario, overriding `bench.iterations`.
    #[arg(long, short = 'n')]
    pub iterations: Option<u32>,

    /// Warmup iterations per scenario, overriding `bench.warmup_iterations`.
    #[arg(long, short = 'w')]
    pub warmup_iterations: Option<u32>,

    /// Log filter, overriding `logging.level`.
    #[arg(long, short = 'l')]
    pub log_level: Option<String>,
}

impl Cli {
    /// Applies the command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(iterations) = self.iterations {
            settings.bench.iterations = iterations;
        }
        if let Some(warmup) = self.warmup_iterations {
            settings.bench.warmup_iterations = warmup;
        }
        if let Some(level) = &self.log_level {
            settings.logging.level.clone_from(level);
        }
    }
}
