//! Error types for the Crossup system.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Crossup operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an error for notation that tokenized but did not parse.
    #[must_use]
    pub fn unparseable(notation: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unparseable(notation.into()))
    }

    /// Creates an error for a character outside the notation alphabet.
    #[must_use]
    pub fn unknown_symbol(symbol: char) -> Self {
        Self::new(ErrorKind::UnknownSymbol(symbol))
    }

    /// Creates an error for a lookback past the history capacity.
    #[must_use]
    pub fn lookback_out_of_range(lookback: usize, capacity: usize) -> Self {
        Self::new(ErrorKind::LookbackOutOfRange { lookback, capacity })
    }

    /// Creates an error for a player index past the player count.
    #[must_use]
    pub fn player_out_of_range(player: usize, count: usize) -> Self {
        Self::new(ErrorKind::PlayerOutOfRange { player, count })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ErrorKind {
    /// Notation tokenized but matched no grammar production.
    ///
    /// Carries the offending substring. This is a content-authoring error
    /// surfaced at command-definition time, not during gameplay.
    #[error("unparseable input notation: {0:?}")]
    Unparseable(String),

    /// Character outside the direction/button alphabet reached compilation.
    #[error("unknown notation symbol: {0:?}")]
    UnknownSymbol(char),

    /// Lookback request exceeded the history capacity.
    ///
    /// The history is always fully populated, so this is a caller bug
    /// rather than a data-availability problem.
    #[error("lookback out of range: {lookback} (capacity {capacity})")]
    LookbackOutOfRange {
        /// The requested lookback depth.
        lookback: usize,
        /// The fixed capacity of the history.
        capacity: usize,
    },

    /// Player index exceeded the configured player count.
    #[error("player index out of range: {player} (count {count})")]
    PlayerOutOfRange {
        /// The requested player index.
        player: usize,
        /// The number of players with histories.
        count: usize,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}
