//! Cross-module integration tests.

mod outcome_flow;
mod registry;
mod serialization;
