//! Player colors and per-color data storage.
//!
//! ## Color
//!
//! Red starts on row 0 and races toward row 7; blue starts on row 7 and
//! races toward row 0. Each color may only move in the five directions that
//! do not point back at its own starting edge.
//!
//! ## ColorMap
//!
//! Fixed two-slot storage indexed by `Color`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::coord::{Coord, Direction, BOARD_N};

const RED_DIRECTIONS: [Direction; 5] = [
    Direction::Right,
    Direction::Left,
    Direction::Down,
    Direction::DownRight,
    Direction::DownLeft,
];

const BLUE_DIRECTIONS: [Direction; 5] = [
    Direction::Right,
    Direction::Left,
    Direction::Up,
    Direction::UpRight,
    Direction::UpLeft,
];

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Both colors, red first.
    pub const BOTH: [Color; 2] = [Color::Red, Color::Blue];

    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    /// Directions this color is allowed to move or jump in.
    #[must_use]
    pub const fn directions(self) -> &'static [Direction; 5] {
        match self {
            Color::Red => &RED_DIRECTIONS,
            Color::Blue => &BLUE_DIRECTIONS,
        }
    }

    /// Row this color's frogs start on.
    #[must_use]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Blue => BOARD_N - 1,
        }
    }

    /// Row this color's frogs must all reach.
    #[must_use]
    pub const fn goal_row(self) -> u8 {
        self.opponent().home_row()
    }

    /// Rows remaining between `at` and this color's goal row.
    #[must_use]
    pub const fn distance_to_goal(self, at: Coord) -> u8 {
        match self {
            Color::Red => BOARD_N - 1 - at.r,
            Color::Blue => at.r,
        }
    }

    /// Index into per-color arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => f.write_str("RED"),
            Color::Blue => f.write_str("BLUE"),
        }
    }
}

/// Per-color data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use freckers::core::{Color, ColorMap};
///
/// let mut arrived: ColorMap<u32> = ColorMap::with_value(0);
/// arrived[Color::Blue] += 2;
/// assert_eq!(arrived[Color::Red], 0);
/// assert_eq!(arrived[Color::Blue], 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorMap<T> {
    data: [T; 2],
}

impl<T> ColorMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Color) -> T) -> Self {
        Self {
            data: [factory(Color::Red), factory(Color::Blue)],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over `(Color, &T)` pairs, red first.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::BOTH.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Color> for ColorMap<T> {
    type Output = T;

    fn index(&self, color: Color) -> &Self::Output {
        &self.data[color.index()]
    }
}

impl<T> IndexMut<Color> for ColorMap<T> {
    fn index_mut(&mut self, color: Color) -> &mut Self::Output {
        &mut self.data[color.index()]
    }
}
