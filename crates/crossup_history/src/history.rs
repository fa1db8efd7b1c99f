//! Fixed-capacity input history.
//!
//! The history is a ring of frame samples, newest at the logical tail.
//! It is pre-filled with empty samples on construction and on reset, so
//! lookback queries never fail for lack of data; they fail only when the
//! requested lookback exceeds the fixed capacity.

use std::collections::VecDeque;

use crossup_foundation::{Error, FrameSample, GameInput, Result};

/// Default number of retained frames (about 1.6s at 60fps).
pub const DEFAULT_CAPACITY: usize = 100;

/// An always-full log of frame samples for one player.
///
/// Exactly one sample is pushed per simulation frame, strictly before
/// that frame's command evaluation, so lookback 0 is always the current
/// frame from the matcher's point of view.
#[derive(Clone, Debug)]
pub struct InputHistory {
    /// Retained samples, oldest at the front.
    frames: VecDeque<FrameSample>,
    /// Fixed capacity; never changes after construction.
    capacity: usize,
}

impl InputHistory {
    /// Creates a history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a history retaining `capacity` frames.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "history capacity must be nonzero");
        let mut frames = VecDeque::with_capacity(capacity);
        frames.resize(capacity, FrameSample::new());
        Self { frames, capacity }
    }

    /// Returns the fixed capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Appends the current frame's sample, evicting the oldest.
    pub fn push(&mut self, sample: FrameSample) {
        self.frames.pop_front();
        self.frames.push_back(sample);
    }

    /// Refills the history with empty samples.
    pub fn reset(&mut self) {
        self.frames.clear();
        self.frames.resize(self.capacity, FrameSample::new());
    }

    /// Returns the sample `lookback` frames before the current one.
    ///
    /// Lookback 0 is the current frame.
    ///
    /// # Errors
    /// Returns [`crossup_foundation::ErrorKind::LookbackOutOfRange`] when
    /// `lookback` is at or past the capacity.
    pub fn sample(&self, lookback: usize) -> Result<&FrameSample> {
        if lookback >= self.capacity {
            return Err(Error::lookback_out_of_range(lookback, self.capacity));
        }
        Ok(&self.frames[self.capacity - 1 - lookback])
    }

    /// Returns true if `input` was active at the given lookback.
    ///
    /// # Errors
    /// Fails fast on an out-of-range lookback.
    pub fn is_down(&self, input: GameInput, lookback: usize) -> Result<bool> {
        Ok(self.sample(lookback)?.contains(input))
    }

    /// Returns true if `input` became active at the given lookback:
    /// present in that frame and absent the frame before it.
    ///
    /// The frame before the oldest retained one counts as empty, so
    /// presence at the oldest edge reads as a press.
    ///
    /// # Errors
    /// Fails fast on an out-of-range lookback.
    pub fn is_pressed(&self, input: GameInput, lookback: usize) -> Result<bool> {
        Ok(self.sample(lookback)?.contains(input) && !self.held_before(input, lookback))
    }

    /// Returns true if `input` was let go at the given lookback:
    /// absent in that frame and present the frame before it.
    ///
    /// # Errors
    /// Fails fast on an out-of-range lookback.
    pub fn is_released(&self, input: GameInput, lookback: usize) -> Result<bool> {
        Ok(!self.sample(lookback)?.contains(input) && self.held_before(input, lookback))
    }

    /// Returns true if no inputs were active at the given lookback.
    ///
    /// # Errors
    /// Fails fast on an out-of-range lookback.
    pub fn is_idle(&self, lookback: usize) -> Result<bool> {
        Ok(self.sample(lookback)?.is_empty())
    }

    /// Whether `input` was active one frame before `lookback`, treating
    /// the frame past the oldest edge as empty.
    fn held_before(&self, input: GameInput, lookback: usize) -> bool {
        let before = lookback + 1;
        before < self.capacity && self.frames[self.capacity - 1 - before].contains(input)
    }
}

impl Default for InputHistory {
    fn default() -> Self {
        Self::new()
    }
}
