//! Static evaluation of leaf positions.
//!
//! The default `Heuristic` scores a position for one color as a weighted sum
//! of three differentials (own minus opponent's):
//! - **progress**: total rows the opponent's frogs still have to cover, minus
//!   our own total
//! - **mobility**: number of legal actions
//! - **adjacency**: lily pads around each frog
//!
//! Decided games override the sum with `±∞`; a drawn terminal position falls
//! through to the weighted sum.

use crate::core::{Color, Coord, GameState};

use super::config::EvalWeights;

/// Scores positions from one color's point of view. Higher is better.
pub trait Evaluator: Send + Sync {
    /// Score `state` for `perspective`.
    fn evaluate(&self, state: &GameState, perspective: Color) -> f64;
}

/// Weighted progress / mobility / adjacency heuristic.
#[derive(Clone, Debug, Default)]
pub struct Heuristic {
    weights: EvalWeights,
}

impl Heuristic {
    /// Create a heuristic with the given weights.
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// The weights in use.
    #[must_use]
    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Opponent goal distance minus own goal distance.
    #[must_use]
    pub fn progress(state: &GameState, me: Color) -> i32 {
        let distance = |color: Color| -> i32 {
            state
                .frogs_of(color)
                .map(|at| color.distance_to_goal(at) as i32)
                .sum()
        };
        distance(me.opponent()) - distance(me)
    }

    /// Own legal action count minus the opponent's.
    ///
    /// Both counts are taken on the same position regardless of whose turn it is.
    #[must_use]
    pub fn mobility(state: &GameState, me: Color) -> i32 {
        state.legal_action_count(me) as i32 - state.legal_action_count(me.opponent()) as i32
    }

    /// Pads around own frogs minus pads around opponent frogs.
    #[must_use]
    pub fn adjacency(state: &GameState, me: Color) -> i32 {
        state
            .frogs()
            .map(|(at, owner)| {
                let pads = adjacent_pads(state, at);
                if owner == me {
                    pads
                } else {
                    -pads
                }
            })
            .sum()
    }
}

impl Evaluator for Heuristic {
    fn evaluate(&self, state: &GameState, perspective: Color) -> f64 {
        if state.is_terminal() {
            match state.winner() {
                Some(winner) if winner == perspective => return f64::INFINITY,
                Some(_) => return f64::NEG_INFINITY,
                None => {}
            }
        }

        let w = &self.weights;
        w.progress * Self::progress(state, perspective) as f64
            + w.mobility * Self::mobility(state, perspective) as f64
            + w.adjacency * Self::adjacency(state, perspective) as f64
    }
}

fn adjacent_pads(state: &GameState, at: Coord) -> i32 {
    at.neighbours().filter(|&n| state.has_pad(n)).count() as i32
}
