//! Freckers rules.
//!
//! Implemented as methods on `GameState`:
//! - `legal_actions` / `legal_actions_for` / `legal_action_count`: move generation
//! - `apply_action` / `successor` / `resolve_move`: applying actions
//! - `is_terminal` / `winner` / `outcome`: end-of-game detection
//!
//! Everything here is pure and deterministic; nothing knows about time.

mod apply;
pub mod engine;
pub mod error;
mod movegen;

pub use engine::GameResult;
pub use error::RulesError;
