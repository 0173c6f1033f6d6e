//! Action application.
//!
//! - `Grow` adds a pad to every empty, pad-less cell adjacent to one of the
//!   mover's frogs. Candidates are computed from the pre-grow board and
//!   inserted as one batch.
//! - `Move` takes the frog off its start pad (the pad is consumed), walks the
//!   steps, and places the frog at the final cell. Each step jumps if the next
//!   cell holds a frog and the cell after it is an open pad; otherwise it
//!   advances one cell.
//!
//! A move is fully resolved before anything is mutated, so a rejected action
//! leaves the state exactly as it was.

use crate::core::{Action, Coord, Direction, GameState};

use super::error::RulesError;

impl GameState {
    /// Apply `action` for the player to move, then pass the turn.
    ///
    /// On error the state is unchanged.
    pub fn apply_action(&mut self, action: &Action) -> Result<(), RulesError> {
        match action {
            Action::Grow => self.grow(),
            Action::Move { start, steps } => {
                let dest = self.resolve_move(*start, steps)?;
                self.lily_pads.remove(start);
                self.frogs.remove(start);
                self.frogs.insert(dest, self.current_player);
            }
        }

        self.current_player = self.current_player.opponent();
        self.turn_count += 1;
        Ok(())
    }

    /// Clone the state and apply `action` to the clone.
    pub fn successor(&self, action: &Action) -> Result<GameState, RulesError> {
        let mut next = self.clone();
        next.apply_action(action)?;
        Ok(next)
    }

    /// Final cell of a move, validated against the current state.
    pub fn resolve_move(&self, start: Coord, steps: &[Direction]) -> Result<Coord, RulesError> {
        if steps.is_empty() {
            return Err(RulesError::EmptyMove { start });
        }
        match self.frog_at(start) {
            None => return Err(RulesError::NoFrog { at: start }),
            Some(found) if found != self.current_player => {
                return Err(RulesError::WrongOwner {
                    at: start,
                    expected: self.current_player,
                    found,
                });
            }
            Some(_) => {}
        }

        let mut at = start;
        for &direction in steps {
            at = match at.jump(direction) {
                Some((mid, landing)) if self.has_frog(mid) && self.is_open_pad(landing) => landing,
                _ => at
                    .step(direction)
                    .ok_or(RulesError::OutOfBounds { from: at, direction })?,
            };
        }

        if at != start && self.has_frog(at) {
            return Err(RulesError::Occupied { at });
        }
        Ok(at)
    }

    fn grow(&mut self) {
        let new_pads: Vec<Coord> = self
            .frogs_of(self.current_player)
            .flat_map(Coord::neighbours)
            .filter(|&at| !self.has_pad(at) && !self.has_frog(at))
            .collect();

        for at in new_pads {
            self.lily_pads.insert(at);
        }
    }
}
