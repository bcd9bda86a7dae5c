//! Terrain states and the bidirectional color palette
//!
//! Every pixel of a map image must carry one of exactly four colors. Anything
//! else aborts decoding: guessing terrain would corrupt the logical map.

use crate::io::configuration::{EMPTY_COLOR, PATH_COLOR, START_COLOR, WALL_COLOR};
use crate::io::error::{ProcessingError, Result};
use std::fmt;

/// Discrete terrain state of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum State {
    /// Background outside the dungeon
    #[default]
    Empty,
    /// Impassable wall
    Wall,
    /// Walkable corridor
    Path,
    /// Starting area
    Start,
}

impl State {
    /// All states in canonical code order
    pub const ALL: [Self; 4] = [Self::Empty, Self::Wall, Self::Path, Self::Start];

    /// Canonical numeric code used for hashing
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Wall => 1,
            Self::Path => 2,
            Self::Start => 3,
        }
    }

    /// Canonical single-character form (`'0'..='3'`)
    pub const fn digit(self) -> char {
        match self {
            Self::Empty => '0',
            Self::Wall => '1',
            Self::Path => '2',
            Self::Start => '3',
        }
    }

    /// Parse a canonical digit
    ///
    /// # Errors
    ///
    /// Returns `UnknownState` if the character is not a state digit
    pub fn from_digit(digit: char) -> Result<Self> {
        let value = digit
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .unwrap_or(u8::MAX);
        Self::try_from(value)
    }
}

impl TryFrom<u8> for State {
    type Error = ProcessingError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Wall),
            2 => Ok(Self::Path),
            3 => Ok(Self::Start),
            _ => Err(ProcessingError::UnknownState { value }),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Wall => "wall",
            Self::Path => "path",
            Self::Start => "start",
        };
        f.write_str(name)
    }
}

/// Exact RGBA quad for each terrain state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Color of empty background
    pub empty: [u8; 4],
    /// Color of walls
    pub wall: [u8; 4],
    /// Color of walkable paths
    pub path: [u8; 4],
    /// Color of the starting area
    pub start: [u8; 4],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            empty: EMPTY_COLOR,
            wall: WALL_COLOR,
            path: PATH_COLOR,
            start: START_COLOR,
        }
    }
}

impl Palette {
    /// Map a color to its terrain state
    ///
    /// # Errors
    ///
    /// Returns `UnknownPixel` if the color is not one of the four palette entries.
    /// The reported coordinate is `(0, 0)`; callers that know the pixel
    /// position should use [`Palette::classify_at`].
    pub fn classify(&self, color: [u8; 4]) -> Result<State> {
        self.classify_at(color, (0, 0))
    }

    /// Map a color to its terrain state, reporting `pixel` on failure
    ///
    /// # Errors
    ///
    /// Returns `UnknownPixel` if the color is not one of the four palette entries
    pub fn classify_at(&self, color: [u8; 4], pixel: (usize, usize)) -> Result<State> {
        State::ALL
            .into_iter()
            .find(|&state| self.to_color(state) == color)
            .ok_or(ProcessingError::UnknownPixel {
                path: None,
                pixel,
                color,
            })
    }

    /// Color used to draw a terrain state
    pub const fn to_color(&self, state: State) -> [u8; 4] {
        match state {
            State::Empty => self.empty,
            State::Wall => self.wall,
            State::Path => self.path,
            State::Start => self.start,
        }
    }
}
