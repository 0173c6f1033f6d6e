//! # freckers
//!
//! A time-bounded alpha-beta agent for Freckers, a two-player race game on an
//! 8x8 board of lily pads.
//!
//! ## Design Principles
//!
//! 1. **Strict Layering**: the rules know nothing about time or search; the
//!    search only talks to the rules through `GameState` methods.
//!
//! 2. **Cheap Branching**: `GameState` is built on `im-rs` persistent
//!    collections, so cloning per search node is O(1).
//!
//! 3. **Explicit Time**: the deadline is a value passed through the search,
//!    never a global, so tests can drive it with a fake clock.
//!
//! ## Modules
//!
//! - `core`: Coordinates, directions, colors, actions, state, RNG
//! - `rules`: Move generation, action application, terminal detection
//! - `search`: Alpha-beta search, evaluation, clocks, statistics
//! - `agent`: Host-facing `Player` implementations

pub mod agent;
pub mod core;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, Color, ColorMap, Coord, Direction, GameRng, GameState, BOARD_N,
    FROGS_PER_COLOR, MAX_TURNS,
};

pub use crate::rules::{GameResult, RulesError};

pub use crate::search::{
    AlphaBetaSearch, Clock, EvalWeights, Evaluator, Heuristic, MonotonicClock, SearchConfig,
    SearchResult, SearchStats, TickClock,
};

pub use crate::agent::{AlphaBetaAgent, Player, RandomAgent};
