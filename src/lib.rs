//! Crossup - Fighting-game input-command recognition
//!
//! This crate re-exports all layers of the Crossup system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: crossup_runtime    — notation lab REPL, CLI driver
//! Layer 2: crossup_command    — tokenizer, parser, predicate compiler,
//!                               command matcher, command registry
//! Layer 1: crossup_history    — per-player frame-sample history
//! Layer 0: crossup_foundation — input alphabet, frame samples, errors
//! ```

pub use crossup_command as command;
pub use crossup_foundation as foundation;
pub use crossup_history as history;
pub use crossup_runtime as runtime;
