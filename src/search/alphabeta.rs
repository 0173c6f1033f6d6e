//! Fixed-depth alpha-beta minimax with a cooperative deadline.
//!
//! The searching color is the player to move at the root; root children are
//! min nodes. Each node clones the state before applying a candidate, so
//! sibling branches never see each other's changes.
//!
//! Time is checked on entry to every node and after every child. An expired
//! deadline makes a node return what it has: its static evaluation on entry,
//! or its running best after at least one child. The result under time
//! pressure is therefore an approximation of the true minimax value.

use log::{debug, trace, warn};

use crate::core::{Action, Color, GameState};

use super::clock::{Clock, Deadline, MonotonicClock};
use super::config::SearchConfig;
use super::eval::{Evaluator, Heuristic};
use super::stats::SearchStats;

/// Outcome of one search.
#[derive(Clone, Debug)]
pub struct SearchResult {
    /// Action chosen for the player to move. Always legal.
    pub action: Action,

    /// Backed-up value of `action` from the mover's point of view.
    pub value: f64,

    /// Statistics for this search.
    pub stats: SearchStats,
}

/// Alpha-beta search context.
///
/// Owns the configuration and the evaluator; holds no game state between
/// searches.
pub struct AlphaBetaSearch {
    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    evaluator: Box<dyn Evaluator>,

    /// Statistics of the most recent search.
    stats: SearchStats,
}

impl AlphaBetaSearch {
    /// Create a search using the `Heuristic` evaluator with the configured weights.
    pub fn new(config: SearchConfig) -> Self {
        let evaluator = Heuristic::new(config.weights.clone());
        Self {
            config,
            evaluator: Box::new(evaluator),
            stats: SearchStats::default(),
        }
    }

    /// Set a custom evaluator.
    pub fn with_evaluator<V: Evaluator + 'static>(mut self, evaluator: V) -> Self {
        self.evaluator = Box::new(evaluator);
        self
    }

    /// Search `state` for the player to move, timed on the wall clock.
    pub fn search(&mut self, state: &GameState) -> SearchResult {
        let clock = MonotonicClock::start();
        self.search_with_clock(state, &clock)
    }

    /// Search `state` for the player to move, timed on `clock`.
    ///
    /// The budget is `config.time_limit` measured from the clock's start.
    pub fn search_with_clock(&mut self, state: &GameState, clock: &dyn Clock) -> SearchResult {
        self.stats.reset();
        let deadline = Deadline::new(clock, self.config.time_limit);
        let me = state.current_player;
        let depth = self.config.depth.max(1);

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_value = f64::NEG_INFINITY;
        let mut best_action = Action::Grow;

        for action in state.legal_actions() {
            let Some(child) = self.child(state, &action) else {
                continue;
            };
            let value = self.min_value(&child, depth - 1, alpha, beta, me, &deadline);
            trace!("root {action}: {value}");

            if value > best_value {
                best_value = value;
                best_action = action;
                alpha = alpha.max(value);
            }
            if alpha >= beta || self.out_of_time(&deadline) {
                break;
            }
        }

        self.stats.elapsed_us = deadline.elapsed().as_micros() as u64;
        if self.stats.timed_out {
            warn!(
                "search deadline of {:?} expired after {} nodes",
                self.config.time_limit, self.stats.nodes
            );
        }
        debug!(
            "{me} chose {best_action} (value {best_value}, {} nodes, {} cutoffs, {}us)",
            self.stats.nodes, self.stats.cutoffs, self.stats.elapsed_us
        );

        SearchResult {
            action: best_action,
            value: best_value,
            stats: self.stats.clone(),
        }
    }

    fn max_value(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        beta: f64,
        me: Color,
        deadline: &Deadline<'_>,
    ) -> f64 {
        self.stats.nodes += 1;
        if depth == 0 || state.is_terminal() || self.out_of_time(deadline) {
            return self.evaluate(state, me);
        }

        let mut value = f64::NEG_INFINITY;
        for action in state.legal_actions() {
            let Some(child) = self.child(state, &action) else {
                continue;
            };
            value = value.max(self.min_value(&child, depth - 1, alpha, beta, me, deadline));

            if value >= beta {
                self.stats.cutoffs += 1;
                return value;
            }
            if self.out_of_time(deadline) {
                return value;
            }
            alpha = alpha.max(value);
        }
        value
    }

    fn min_value(
        &mut self,
        state: &GameState,
        depth: u32,
        alpha: f64,
        mut beta: f64,
        me: Color,
        deadline: &Deadline<'_>,
    ) -> f64 {
        self.stats.nodes += 1;
        if depth == 0 || state.is_terminal() || self.out_of_time(deadline) {
            return self.evaluate(state, me);
        }

        let mut value = f64::INFINITY;
        for action in state.legal_actions() {
            let Some(child) = self.child(state, &action) else {
                continue;
            };
            value = value.min(self.max_value(&child, depth - 1, alpha, beta, me, deadline));

            if value <= alpha {
                self.stats.cutoffs += 1;
                return value;
            }
            if self.out_of_time(deadline) {
                return value;
            }
            beta = beta.min(value);
        }
        value
    }

    /// Successor of `state` under a generated action.
    fn child(&self, state: &GameState, action: &Action) -> Option<GameState> {
        match state.successor(action) {
            Ok(next) => Some(next),
            Err(err) => {
                warn!("generated action {action} rejected: {err}");
                None
            }
        }
    }

    fn evaluate(&mut self, state: &GameState, me: Color) -> f64 {
        self.stats.evaluations += 1;
        self.evaluator.evaluate(state, me)
    }

    fn out_of_time(&mut self, deadline: &Deadline<'_>) -> bool {
        let expired = deadline.expired();
        self.stats.timed_out |= expired;
        expired
    }

    /// Get statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
