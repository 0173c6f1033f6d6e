//! Errors raised when an action does not fit the state it is applied to.
//!
//! Move generation never produces these: off-board candidates are simply
//! skipped. They surface from `GameState::apply_action` and from
//! `Player::record`, when a caller hands in an action that is inconsistent
//! with the tracked state.

use thiserror::Error;

use crate::core::{Action, Color, Coord, Direction};

/// An action could not be applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    /// A move with no steps.
    #[error("move from {start} has no steps")]
    EmptyMove { start: Coord },

    /// No frog stands on the move's start cell.
    #[error("no frog at {at}")]
    NoFrog { at: Coord },

    /// The frog on the start cell belongs to the other player.
    #[error("frog at {at} belongs to {found}, not {expected}")]
    WrongOwner {
        at: Coord,
        expected: Color,
        found: Color,
    },

    /// A step would leave the board.
    #[error("step {direction} from {from} leaves the board")]
    OutOfBounds { from: Coord, direction: Direction },

    /// The move would end on a cell that already holds another frog.
    #[error("destination {at} is occupied")]
    Occupied { at: Coord },

    /// The move resolves on the board but is not among the legal actions,
    /// e.g. a hop onto water or a chain step that jumps nothing.
    #[error("{action} is not a legal action")]
    IllegalAction { action: Action },
}

impl RulesError {
    /// Check if this error is a coordinate leaving the board.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        matches!(self, RulesError::OutOfBounds { .. })
    }
}
