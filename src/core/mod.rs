//! Core game types: coordinates, colors, actions, state, RNG.
//!
//! This module owns the data model only. How actions are generated and
//! applied is the business of `crate::rules`.

pub mod action;
pub mod coord;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord, Steps};
pub use coord::{Coord, Direction, BOARD_N};
pub use player::{Color, ColorMap};
pub use rng::GameRng;
pub use state::{GameState, FROGS_PER_COLOR, MAX_TURNS};
