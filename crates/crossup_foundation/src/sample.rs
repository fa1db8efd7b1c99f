//! Per-frame input sets.
//!
//! A [`FrameSample`] is the set of input symbols active during one
//! simulation frame. It is backed by the `im` crate's persistent hash set,
//! so cloning a sample (and therefore snapshotting a whole history) shares
//! structure instead of copying.

use std::fmt;

use crate::input::GameInput;

/// The set of inputs active during one simulation frame.
///
/// Inserting a vertical and a horizontal direction in the same frame
/// synthesizes the corresponding diagonal: raw `Up`/`Down` and
/// `Left`/`Right` never coexist with their synthesized diagonal.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FrameSample(im::HashSet<GameInput>);

impl FrameSample {
    /// Creates an empty sample.
    #[must_use]
    pub fn new() -> Self {
        Self(im::HashSet::new())
    }

    /// Builds a sample from raw inputs, applying diagonal synthesis.
    #[must_use]
    pub fn from_inputs(inputs: impl IntoIterator<Item = GameInput>) -> Self {
        let mut sample = Self::new();
        for input in inputs {
            sample.insert(input);
        }
        sample
    }

    /// Inserts an input, synthesizing a diagonal when a vertical and a
    /// horizontal direction meet.
    pub fn insert(&mut self, input: GameInput) {
        match input {
            GameInput::Up | GameInput::Down => {
                for horizontal in [GameInput::Left, GameInput::Right] {
                    if self.0.contains(&horizontal) {
                        self.0.remove(&horizontal);
                        self.0.insert(diagonal(input, horizontal));
                        return;
                    }
                }
                self.0.insert(input);
            }
            GameInput::Left | GameInput::Right => {
                for vertical in [GameInput::Up, GameInput::Down] {
                    if self.0.contains(&vertical) {
                        self.0.remove(&vertical);
                        self.0.insert(diagonal(vertical, input));
                        return;
                    }
                }
                self.0.insert(input);
            }
            other => {
                self.0.insert(other);
            }
        }
    }

    /// Returns true if the input is active this frame.
    #[must_use]
    pub fn contains(&self, input: GameInput) -> bool {
        self.0.contains(&input)
    }

    /// Returns true if no inputs are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of active inputs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the active inputs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &GameInput> {
        self.0.iter()
    }
}

impl FromIterator<GameInput> for FrameSample {
    fn from_iter<I: IntoIterator<Item = GameInput>>(iter: I) -> Self {
        Self::from_inputs(iter)
    }
}

impl fmt::Debug for FrameSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<char> = self.0.iter().map(|i| i.symbol()).collect();
        symbols.sort_unstable();
        write!(f, "FrameSample(")?;
        for symbol in symbols {
            write!(f, "{symbol}")?;
        }
        write!(f, ")")
    }
}

/// Combines a vertical and a horizontal direction into a diagonal.
const fn diagonal(vertical: GameInput, horizontal: GameInput) -> GameInput {
    match (vertical, horizontal) {
        (GameInput::Up, GameInput::Left) => GameInput::UpLeft,
        (GameInput::Up, _) => GameInput::UpRight,
        (GameInput::Down, GameInput::Left) => GameInput::DownLeft,
        (_, _) => GameInput::DownRight,
    }
}
