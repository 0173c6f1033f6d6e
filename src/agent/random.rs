//! Baseline agent that plays uniformly random legal actions.

use crate::core::{Action, Color, GameRng, GameState};
use crate::rules::RulesError;

use super::{record_on, Player};

/// Player that picks uniformly among legal actions.
///
/// Deterministic for a given seed.
pub struct RandomAgent {
    color: Color,
    state: GameState,
    rng: GameRng,
}

impl RandomAgent {
    /// Create an agent for `color` with a seeded RNG.
    pub fn new(color: Color, seed: u64) -> Self {
        Self {
            color,
            state: GameState::new(),
            rng: GameRng::new(seed),
        }
    }

    /// The tracked game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

impl Player for RandomAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn decide(&mut self) -> Action {
        let actions = self.state.legal_actions_for(self.color);
        self.rng.choose(&actions).cloned().unwrap_or(Action::Grow)
    }

    fn record(&mut self, color: Color, action: &Action) -> Result<(), RulesError> {
        record_on(&mut self.state, color, action)
    }
}
