//! Benchmark scenarios.
//!
//! ## Summary
//! Each scenario is a closure run a fixed number of times. Timings cover the
//! measured loop only; the warmup loop is discarded.

use std::hint::black_box;
use std::panic;
use std::time::{Duration, Instant};

use keystone_core::error::CoreError;
use keystone_core::{Enumeration, Error, Outcome, enumeration};

use crate::config::BenchConfig;
use crate::error::BenchResult;

enumeration! {
    /// The scenarios the harness knows how to run.
    pub struct ScenarioKind {
        /// Raise and catch a panic.
        UNWIND_CONTROL_FLOW = (1, "unwind_control_flow"),
        /// Build an error and wrap it in a failed outcome.
        OUTCOME_CONTROL_FLOW = (2, "outcome_control_flow"),
        /// Same as above with one extension entry.
        OUTCOME_CONTROL_FLOW_WITH_EXTENSIONS = (3, "outcome_control_flow_with_extensions"),
        /// Parse an enumeration by id and by value.
        ENUMERATION_LOOKUP = (4, "enumeration_lookup"),
    }
}

/// Timing of one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioReport {
    pub kind: ScenarioKind,
    pub iterations: u32,
    pub elapsed: Duration,
}

impl ScenarioReport {
    /// Mean wall-clock time per measured iteration.
    #[must_use]
    pub fn mean_nanos(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e9 / f64::from(self.iterations.max(1))
    }
}

#[derive(Debug)]
struct InvalidOperation;

/// Raises a panic and catches it; `true` when the unwind was caught.
fn raise_and_catch() -> bool {
    panic::catch_unwind(|| panic::panic_any(InvalidOperation)).is_err()
}

fn unwind_control_flow() -> BenchResult<()> {
    black_box(raise_and_catch());
    Ok(())
}

fn outcome_control_flow() -> BenchResult<()> {
    let error = Error::new("Message", 500, "Message")?;
    let outcome: Outcome = Outcome::failure(error);
    black_box(outcome);
    Ok(())
}

fn outcome_control_flow_with_extensions() -> BenchResult<()> {
    let error = Error::with_extensions("Message", 500, "Message", [("Key", "Value")])?;
    let outcome: Outcome = Outcome::failure(error);
    black_box(outcome);
    Ok(())
}

fn enumeration_lookup() -> BenchResult<()> {
    black_box(ScenarioKind::from_id(black_box(2))?);
    black_box(ScenarioKind::from_value(black_box("ENUMERATION_LOOKUP"))?);
    Ok(())
}

type Runner = fn() -> BenchResult<()>;

static RUNNERS: [(ScenarioKind, Runner); 4] = [
    (ScenarioKind::UNWIND_CONTROL_FLOW, unwind_control_flow),
    (ScenarioKind::OUTCOME_CONTROL_FLOW, outcome_control_flow),
    (
        ScenarioKind::OUTCOME_CONTROL_FLOW_WITH_EXTENSIONS,
        outcome_control_flow_with_extensions,
    ),
    (ScenarioKind::ENUMERATION_LOOKUP, enumeration_lookup),
];

impl ScenarioKind {
    fn body(&self) -> BenchResult<Runner> {
        RUNNERS
            .iter()
            .find(|(kind, _)| kind == self)
            .map(|(_, runner)| *runner)
            .ok_or_else(|| CoreError::NotFound(format!("no runner for scenario {self}")).into())
    }

    /// ## Summary
    /// Runs the scenario `warmup_iterations` times, then measures
    /// `iterations` runs.
    ///
    /// The unwind scenario silences the panic hook for the duration of the run
    /// and restores the previous hook afterwards.
    ///
    /// ## Errors
    /// Returns the first error raised by the scenario body.
    pub fn run(&self, config: &BenchConfig) -> BenchResult<ScenarioReport> {
        let body = self.body()?;
        let silence = *self == Self::UNWIND_CONTROL_FLOW;
        let previous_hook = silence.then(|| {
            let previous = panic::take_hook();
            panic::set_hook(Box::new(|_| {}));
            previous
        });

        let result = Self::measure(body, config);

        if let Some(previous) = previous_hook {
            panic::set_hook(previous);
        }

        let elapsed = result?;
        tracing::debug!(scenario = %self, ?elapsed, "Scenario finished");
        Ok(ScenarioReport {
            kind: self.clone(),
            iterations: config.iterations,
            elapsed,
        })
    }

    fn measure(body: Runner, config: &BenchConfig) -> BenchResult<Duration> {
        for _ in 0..config.warmup_iterations {
            body()?;
        }
        let start = Instant::now();
        for _ in 0..config.iterations {
            body()?;
        }
        Ok(start.elapsed())
    }
}

/// ## Summary
/// Resolves scenario names given on the command line; no names selects all.
///
/// ## Errors
/// Returns `NotFound` for an unknown name and `InvalidArgument` for a blank one.
pub fn select<S: AsRef<str>>(names: &[S]) -> BenchResult<Vec<ScenarioKind>> {
    if names.is_empty() {
        return Ok(ScenarioKind::all().to_vec());
    }
    names
        .iter()
        .map(|name| ScenarioKind::from_value(name.as_ref()).map_err(Into::into))
        .collect()
}
