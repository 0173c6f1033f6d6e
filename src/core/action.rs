//! Action representation: a frog move or a grow.
//!
//! Exactly two action shapes exist, so `Action` is a closed enum:
//! - `Move` carries the starting cell and one or more step directions.
//!   One step is a simple hop; two or more steps form a jump chain.
//! - `Grow` carries nothing.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, Direction};
use super::player::Color;

/// Step list of a move.
///
/// Most jump chains are short, so four steps are kept inline.
pub type Steps = SmallVec<[Direction; 4]>;

/// A complete game action.
///
/// ## Example
///
/// ```
/// use freckers::core::{Action, Coord, Direction};
///
/// let hop = Action::hop(Coord::new(0, 3), Direction::Down);
/// assert!(!hop.is_jump());
///
/// let chain = Action::chain(Coord::new(0, 3), &[Direction::Down, Direction::DownRight]);
/// assert!(chain.is_jump());
/// assert_eq!(chain.to_string(), "MOVE(0-3, [DOWN, DOWNRIGHT])");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the frog at `start` along `steps`.
    Move { start: Coord, steps: Steps },
    /// Add lily pads around all of the acting player's frogs.
    Grow,
}

impl Action {
    /// A single-step hop.
    #[must_use]
    pub fn hop(start: Coord, direction: Direction) -> Self {
        let mut steps = Steps::new();
        steps.push(direction);
        Action::Move { start, steps }
    }

    /// A move with the given step list.
    #[must_use]
    pub fn chain(start: Coord, steps: &[Direction]) -> Self {
        Action::Move {
            start,
            steps: Steps::from_slice(steps),
        }
    }

    /// Check if this is a jump chain (a move with more than one step).
    #[must_use]
    pub fn is_jump(&self) -> bool {
        matches!(self, Action::Move { steps, .. } if steps.len() > 1)
    }

    /// Check if this is the grow action.
    #[must_use]
    pub fn is_grow(&self) -> bool {
        matches!(self, Action::Grow)
    }

    /// Starting cell of a move.
    #[must_use]
    pub fn start(&self) -> Option<Coord> {
        match self {
            Action::Move { start, .. } => Some(*start),
            Action::Grow => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Grow => f.write_str("GROW"),
            Action::Move { start, steps } => {
                write!(f, "MOVE({start}, [")?;
                for (i, step) in steps.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{step}")?;
                }
                f.write_str("])")
            }
        }
    }
}

/// A performed action with the color that played it.
///
/// Used for the agent's game history and for replaying games in tests.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The color that acted.
    pub color: Color,

    /// The action taken.
    pub action: Action,

    /// Turn count before the action was applied.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(color: Color, action: Action, turn: u32) -> Self {
        Self { color, action, turn }
    }
}
