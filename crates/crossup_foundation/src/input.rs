//! The closed input alphabet and facing direction.
//!
//! Notation symbols follow the numeric-keypad layout: `1`-`9` map to the
//! eight directions (`5` is neutral and unused), `a`-`d` are the four
//! attack buttons, and `l` is guard. Direction symbols are written from
//! the perspective of a right-facing character; a left-facing character
//! resolves them through the mirror table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One symbol from the fixed direction/button alphabet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameInput {
    /// Jump / up.
    Up,
    /// Crouch / down.
    Down,
    /// Toward the left edge of the screen.
    Left,
    /// Toward the right edge of the screen.
    Right,
    /// Up-left diagonal.
    UpLeft,
    /// Up-right diagonal.
    UpRight,
    /// Down-left diagonal.
    DownLeft,
    /// Down-right diagonal.
    DownRight,
    /// Light attack.
    A,
    /// Medium attack.
    B,
    /// Heavy attack.
    C,
    /// Special attack.
    D,
    /// Guard.
    Guard,
}

impl GameInput {
    /// Every symbol in the alphabet, directions first.
    pub const ALL: [Self; 13] = [
        Self::Up,
        Self::Down,
        Self::Left,
        Self::Right,
        Self::UpLeft,
        Self::UpRight,
        Self::DownLeft,
        Self::DownRight,
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::Guard,
    ];

    /// Maps a notation character to its input symbol.
    ///
    /// Returns `None` for characters outside the alphabet, including the
    /// neutral `5`.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '1' => Some(Self::DownLeft),
            '2' => Some(Self::Down),
            '3' => Some(Self::DownRight),
            '4' => Some(Self::Left),
            '6' => Some(Self::Right),
            '7' => Some(Self::UpLeft),
            '8' => Some(Self::Up),
            '9' => Some(Self::UpRight),
            'a' => Some(Self::A),
            'b' => Some(Self::B),
            'c' => Some(Self::C),
            'd' => Some(Self::D),
            'l' => Some(Self::Guard),
            _ => None,
        }
    }

    /// Returns the notation character for this symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::DownLeft => '1',
            Self::Down => '2',
            Self::DownRight => '3',
            Self::Left => '4',
            Self::Right => '6',
            Self::UpLeft => '7',
            Self::Up => '8',
            Self::UpRight => '9',
            Self::A => 'a',
            Self::B => 'b',
            Self::C => 'c',
            Self::D => 'd',
            Self::Guard => 'l',
        }
    }

    /// Returns true if this character is part of the notation alphabet.
    #[must_use]
    pub const fn is_symbol(symbol: char) -> bool {
        Self::from_symbol(symbol).is_some()
    }

    /// Returns the mirror partner of this symbol.
    ///
    /// The mirrored pairs are Left/Right, UpLeft/UpRight, and
    /// DownLeft/DownRight; every other symbol is its own mirror.
    #[must_use]
    pub const fn mirrored(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::UpLeft => Self::UpRight,
            Self::UpRight => Self::UpLeft,
            Self::DownLeft => Self::DownRight,
            Self::DownRight => Self::DownLeft,
            other => other,
        }
    }

    /// Resolves this symbol for the given facing.
    ///
    /// Notation is authored facing right; a left-facing character swaps
    /// each mirrored pair.
    #[must_use]
    pub const fn resolve(self, facing: Facing) -> Self {
        match facing {
            Facing::Right => self,
            Facing::Left => self.mirrored(),
        }
    }

    /// Returns true for the eight direction symbols.
    #[must_use]
    pub const fn is_direction(self) -> bool {
        !self.is_button()
    }

    /// Returns true for the five button symbols.
    #[must_use]
    pub const fn is_button(self) -> bool {
        matches!(
            self,
            Self::A | Self::B | Self::C | Self::D | Self::Guard
        )
    }
}

impl fmt::Display for GameInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Horizontal facing of a character.
///
/// Commands are authored from the right-facing perspective, so facing is
/// consulted whenever a mirrored direction is evaluated.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Facing the left edge of the screen.
    Left,
    /// Facing the right edge of the screen.
    #[default]
    Right,
}

impl Facing {
    /// Returns the opposite facing.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}
