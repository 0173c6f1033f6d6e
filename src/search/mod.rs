//! Time-bounded alpha-beta search for freckers.
//!
//! ## Overview
//!
//! A single fixed-depth alpha-beta minimax (no iterative deepening, no
//! transposition table). Key features:
//!
//! - **Cooperative deadline**: every node samples a `Clock`; on expiry the
//!   node returns what it has instead of recursing further
//! - **Move ordering**: relies on the ordering of `GameState::legal_actions`
//! - **Pluggable evaluation**: `Heuristic` by default, any `Evaluator` via
//!   `with_evaluator`
//!
//! ## Usage
//!
//! ```rust
//! use std::time::Duration;
//! use freckers::core::GameState;
//! use freckers::search::{AlphaBetaSearch, SearchConfig};
//!
//! let state = GameState::new();
//! let config = SearchConfig::default()
//!     .with_depth(2)
//!     .with_time_limit(Duration::from_millis(500));
//! let mut search = AlphaBetaSearch::new(config);
//!
//! let result = search.search(&state);
//! assert!(state.legal_actions().contains(&result.action));
//! ```

pub mod alphabeta;
pub mod clock;
pub mod config;
pub mod eval;
pub mod stats;

pub use alphabeta::{AlphaBetaSearch, SearchResult};
pub use clock::{Clock, Deadline, MonotonicClock, TickClock};
pub use config::{EvalWeights, SearchConfig};
pub use eval::{Evaluator, Heuristic};
pub use stats::SearchStats;
