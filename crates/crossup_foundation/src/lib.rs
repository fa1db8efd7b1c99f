//! Input alphabet, frame samples, and error types for Crossup.
//!
//! This crate provides:
//! - [`GameInput`] - The closed set of direction and button symbols
//! - [`Facing`] - Horizontal facing used for command mirroring
//! - [`FrameSample`] - The set of inputs active during one simulation frame
//! - [`Error`] - Categorized error types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod input;
pub mod sample;

pub use error::{Error, ErrorKind, Result};
pub use input::{Facing, GameInput};
pub use sample::FrameSample;
