//! Interactive notation lab and CLI driver for Crossup.
//!
//! This crate provides:
//! - [`Repl`] - An interactive session for inspecting notation: token
//!   streams, parse trees, compiled predicates, and command execution
//!   against a scratch history fed one frame at a time.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod repl;

pub use repl::Repl;
