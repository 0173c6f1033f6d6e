//! Host-facing players.
//!
//! A host drives a game through two calls per turn: `decide` on the player
//! whose turn it is, then `record` on every player with the action that was
//! actually performed. Each player keeps its own authoritative `GameState`,
//! mutated only by `record`.

mod alphabeta;
mod random;

pub use alphabeta::AlphaBetaAgent;
pub use random::RandomAgent;

use crate::core::{Action, Color, GameState};
use crate::rules::RulesError;

/// A game participant as seen by the host.
pub trait Player {
    /// The color this player plays.
    fn color(&self) -> Color;

    /// Choose an action for this player's turn. Always legal for the tracked state.
    fn decide(&mut self) -> Action;

    /// Apply an action performed by `color` to the tracked state.
    ///
    /// An error means the host and this player disagree about the game; the
    /// tracked state is left unchanged and the caller should treat it as fatal.
    fn record(&mut self, color: Color, action: &Action) -> Result<(), RulesError>;
}

/// Apply `action` as `color`, restoring the side to move if it is rejected.
///
/// Unlike `apply_action`, which the search drives with generated actions
/// only, a recorded move must be one `legal_actions_for(color)` would produce.
pub(crate) fn record_on(state: &mut GameState, color: Color, action: &Action) -> Result<(), RulesError> {
    let previous = state.current_player;
    state.current_player = color;

    let result = check_legal(state, action).and_then(|()| state.apply_action(action));
    if result.is_err() {
        state.current_player = previous;
    }
    result
}

/// Reject a move the player to move could not have generated.
fn check_legal(state: &GameState, action: &Action) -> Result<(), RulesError> {
    if let Action::Move { start, steps } = action {
        state.resolve_move(*start, steps)?;
        if !state.legal_actions_for(state.current_player).contains(action) {
            return Err(RulesError::IllegalAction {
                action: action.clone(),
            });
        }
    }
    Ok(())
}
