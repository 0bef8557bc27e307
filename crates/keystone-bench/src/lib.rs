//! Benchmark harness comparing unwind-based and outcome-based control flow.

pub mod cli;
pub mod config;
pub mod error;
pub mod scenario;
