//! Agent that picks its moves with alpha-beta search.

use log::debug;

use crate::core::{Action, ActionRecord, Color, GameState};
use crate::rules::RulesError;
use crate::search::{AlphaBetaSearch, Clock, Evaluator, MonotonicClock, SearchConfig, SearchStats};

use super::{record_on, Player};

/// Player backed by alpha-beta search.
pub struct AlphaBetaAgent {
    color: Color,
    state: GameState,
    search: AlphaBetaSearch,
    history: Vec<ActionRecord>,
    last_stats: Option<SearchStats>,
}

impl AlphaBetaAgent {
    /// Create an agent for `color`, starting from the standard position.
    pub fn new(color: Color, config: SearchConfig) -> Self {
        Self {
            color,
            state: GameState::new(),
            search: AlphaBetaSearch::new(config),
            history: Vec::new(),
            last_stats: None,
        }
    }

    /// Set a custom leaf evaluator.
    pub fn with_evaluator<V: Evaluator + 'static>(mut self, evaluator: V) -> Self {
        self.search = self.search.with_evaluator(evaluator);
        self
    }

    /// Choose an action, timing the search on `clock`.
    pub fn decide_with_clock(&mut self, clock: &dyn Clock) -> Action {
        self.state.current_player = self.color;
        let result = self.search.search_with_clock(&self.state, clock);
        self.last_stats = Some(result.stats);
        result.action
    }

    /// The tracked game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every recorded action, oldest first.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// Statistics of the most recent `decide`, if any.
    pub fn last_stats(&self) -> Option<&SearchStats> {
        self.last_stats.as_ref()
    }
}

impl Player for AlphaBetaAgent {
    fn color(&self) -> Color {
        self.color
    }

    fn decide(&mut self) -> Action {
        let clock = MonotonicClock::start();
        self.decide_with_clock(&clock)
    }

    fn record(&mut self, color: Color, action: &Action) -> Result<(), RulesError> {
        let turn = self.state.turn_count;
        record_on(&mut self.state, color, action)?;
        self.history.push(ActionRecord::new(color, action.clone(), turn));
        debug!("{color} played {action}\n{}", self.state);
        Ok(())
    }
}
