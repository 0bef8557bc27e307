//! Keystone value model - integration test support.
//!
//! This crate re-exports the core crate so integration tests can use
//! `keystone_test::` paths.

pub mod component {
    pub use keystone_core::*;
}
