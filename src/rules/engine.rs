//! Terminal detection and game results.
//!
//! A game ends when every frog of one color stands on its goal row, or when
//! the turn counter reaches `MAX_TURNS`. On a turn-limit ending, the color
//! with more frogs on its goal row wins; equal counts are a draw.

use crate::core::{Color, GameState, MAX_TURNS};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(Color),
    /// Draw (no winner).
    Draw,
}

impl GameResult {
    /// Check if a color won.
    #[must_use]
    pub fn is_winner(&self, color: Color) -> bool {
        matches!(self, GameResult::Winner(c) if *c == color)
    }

    /// The winning color, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        match self {
            GameResult::Winner(c) => Some(*c),
            GameResult::Draw => None,
        }
    }
}

impl GameState {
    /// Check if the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.all_arrived(Color::Red) || self.all_arrived(Color::Blue) || self.turn_count >= MAX_TURNS
    }

    /// The winner of the position as it stands.
    ///
    /// A color with every frog home wins outright (red is checked first).
    /// Otherwise the color with strictly more frogs home leads; a tie is
    /// `None`. Only meaningful once `is_terminal()` holds.
    #[must_use]
    pub fn winner(&self) -> Option<Color> {
        if let Some(color) = Color::BOTH.into_iter().find(|&c| self.all_arrived(c)) {
            return Some(color);
        }

        let red = self.arrived_count(Color::Red);
        let blue = self.arrived_count(Color::Blue);
        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => Some(Color::Red),
            std::cmp::Ordering::Less => Some(Color::Blue),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Returns `Some(result)` if the game has ended, `None` if it continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        if !self.is_terminal() {
            return None;
        }
        Some(match self.winner() {
            Some(color) => GameResult::Winner(color),
            None => GameResult::Draw,
        })
    }
}
