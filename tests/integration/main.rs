//! Cross-layer integration tests for Crossup
//!
//! Tests that verify correct interaction between multiple crates.

mod scenarios;
