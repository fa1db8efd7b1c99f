//! Per-player history context.
//!
//! The reference design reached histories through a process-wide input
//! plugin accessor. Here the histories are an explicit value: the scene
//! owns a [`PlayerHistories`], feeds it one sample per player per frame,
//! and passes it into command evaluation.

use crossup_foundation::{Error, FrameSample, Result};

use crate::history::InputHistory;

/// One input history per player.
#[derive(Clone, Debug)]
pub struct PlayerHistories {
    histories: Vec<InputHistory>,
}

impl PlayerHistories {
    /// Creates histories for `players` players at the default capacity.
    #[must_use]
    pub fn new(players: usize) -> Self {
        Self {
            histories: (0..players).map(|_| InputHistory::new()).collect(),
        }
    }

    /// Creates histories for `players` players retaining `capacity` frames.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(players: usize, capacity: usize) -> Self {
        Self {
            histories: (0..players)
                .map(|_| InputHistory::with_capacity(capacity))
                .collect(),
        }
    }

    /// Returns the number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.histories.len()
    }

    /// Returns true if there are no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }

    /// Returns the history for one player.
    ///
    /// # Errors
    /// Returns [`crossup_foundation::ErrorKind::PlayerOutOfRange`] for an
    /// unknown player index.
    pub fn player(&self, player: usize) -> Result<&InputHistory> {
        self.histories
            .get(player)
            .ok_or_else(|| Error::player_out_of_range(player, self.histories.len()))
    }

    /// Returns the mutable history for one player.
    ///
    /// # Errors
    /// Returns [`crossup_foundation::ErrorKind::PlayerOutOfRange`] for an
    /// unknown player index.
    pub fn player_mut(&mut self, player: usize) -> Result<&mut InputHistory> {
        let count = self.histories.len();
        self.histories
            .get_mut(player)
            .ok_or_else(|| Error::player_out_of_range(player, count))
    }

    /// Appends one player's sample for the current frame.
    ///
    /// # Errors
    /// Fails fast for an unknown player index.
    pub fn push(&mut self, player: usize, sample: FrameSample) -> Result<()> {
        self.player_mut(player)?.push(sample);
        Ok(())
    }

    /// Refills every history with empty samples (scene restart).
    pub fn reset_all(&mut self) {
        for history in &mut self.histories {
            history.reset();
        }
    }
}
