//! Board coordinates and direction vectors.
//!
//! The board is a fixed 8×8 grid. Row 0 is red's home edge and row 7 is
//! blue's home edge, so "down" means increasing row index.
//!
//! Stepping off the board is a representable failure: [`Coord::step`] returns
//! `None` instead of clamping.

use serde::{Deserialize, Serialize};

/// Side length of the square board.
pub const BOARD_N: u8 = 8;

/// A cell on the board, `(row, column)`, both in `0..BOARD_N`.
///
/// Ordering is row-major, which gives deterministic iteration over the
/// persistent collections in `GameState`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub r: u8,
    pub c: u8,
}

impl Coord {
    /// Create a coordinate.
    ///
    /// Panics if either component is off the board.
    #[must_use]
    pub const fn new(r: u8, c: u8) -> Self {
        assert!(r < BOARD_N && c < BOARD_N, "Coordinate out of bounds");
        Self { r, c }
    }

    /// Create a coordinate, or `None` if it would be off the board.
    #[must_use]
    pub fn try_new(r: i16, c: i16) -> Option<Self> {
        let n = BOARD_N as i16;
        if (0..n).contains(&r) && (0..n).contains(&c) {
            Some(Self { r: r as u8, c: c as u8 })
        } else {
            None
        }
    }

    /// Move one cell in `direction`.
    ///
    /// Returns `None` if the result leaves the board.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Self::try_new(self.r as i16 + dr as i16, self.c as i16 + dc as i16)
    }

    /// The cell jumped over and the landing cell for a jump in `direction`.
    ///
    /// Returns `None` unless both cells are on the board.
    #[must_use]
    pub fn jump(self, direction: Direction) -> Option<(Self, Self)> {
        let mid = self.step(direction)?;
        let landing = mid.step(direction)?;
        Some((mid, landing))
    }

    /// All on-board 8-neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        Direction::ALL.into_iter().filter_map(move |d| self.step(d))
    }

    /// Iterate over every cell of the board in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_N).flat_map(|r| (0..BOARD_N).map(move |c| Coord { r, c }))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.r, self.c)
    }
}

/// One of the eight unit vectors on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Direction {
    /// Every direction, clockwise from `Up`.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::UpRight,
        Direction::Right,
        Direction::DownRight,
        Direction::Down,
        Direction::DownLeft,
        Direction::Left,
        Direction::UpLeft,
    ];

    /// `(row, column)` offset.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::Right => (0, 1),
            Direction::DownRight => (1, 1),
            Direction::Down => (1, 0),
            Direction::DownLeft => (1, -1),
            Direction::Left => (0, -1),
            Direction::UpLeft => (-1, -1),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "UP",
            Direction::UpRight => "UPRIGHT",
            Direction::Right => "RIGHT",
            Direction::DownRight => "DOWNRIGHT",
            Direction::Down => "DOWN",
            Direction::DownLeft => "DOWNLEFT",
            Direction::Left => "LEFT",
            Direction::UpLeft => "UPLEFT",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_in_bounds() {
        let c = Coord::new(3, 3);
        assert_eq!(c.step(Direction::Down), Some(Coord::new(4, 3)));
        assert_eq!(c.step(Direction::UpLeft), Some(Coord::new(2, 2)));
        assert_eq!(c.step(Direction::Right), Some(Coord::new(3, 4)));
    }

    #[test]
    fn test_step_out_of_bounds() {
        assert_eq!(Coord::new(0, 0).step(Direction::Up), None);
        assert_eq!(Coord::new(0, 0).step(Direction::Left), None);
        assert_eq!(Coord::new(7, 7).step(Direction::DownRight), None);
        assert_eq!(Coord::new(7, 3).step(Direction::Down), None);
    }

    #[test]
    fn test_jump_needs_both_cells_on_board() {
        assert_eq!(
            Coord::new(0, 3).jump(Direction::Down),
            Some((Coord::new(1, 3), Coord::new(2, 3)))
        );
        // Mid is on the board but the landing is not.
        assert_eq!(Coord::new(6, 3).jump(Direction::Down), None);
    }

    #[test]
    fn test_neighbours() {
        assert_eq!(Coord::new(0, 0).neighbours().count(), 3);
        assert_eq!(Coord::new(0, 4).neighbours().count(), 5);
        assert_eq!(Coord::new(4, 4).neighbours().count(), 8);
    }

    #[test]
    fn test_all_cells() {
        let cells: Vec<_> = Coord::all().collect();
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0], Coord::new(0, 0));
        assert_eq!(cells[63], Coord::new(7, 7));
    }

    #[test]
    fn test_row_major_ordering() {
        assert!(Coord::new(0, 7) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Coord::new(2, 5).to_string(), "2-5");
        assert_eq!(Direction::DownLeft.to_string(), "DOWNLEFT");
    }

    #[test]
    #[should_panic(expected = "Coordinate out of bounds")]
    fn test_new_out_of_bounds() {
        let _ = Coord::new(8, 0);
    }
}
