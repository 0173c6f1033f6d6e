//! Legal action generation.
//!
//! For each frog of the moving color:
//! - **Hops**: one step in an allowed direction onto an open lily pad.
//! - **Jump chains**: depth-first search over jumps (over any frog onto an
//!   open pad two cells away). Every prefix of a chain is its own action.
//!   A single visited-landing set is shared across the recursion and
//!   backtracked, so a chain never lands on the same cell twice while
//!   sibling branches may still reuse it.
//!
//! `Grow` is always legal and always last.
//!
//! The returned list is ordered for alpha-beta: chains, then hops, then
//! grow; within each group, more forward progress first, then less lateral
//! drift. Ordering never changes which actions are legal.

use rustc_hash::FxHashSet;

use crate::core::{Action, Color, Coord, GameState, Steps};

impl GameState {
    /// All legal actions for the player to move, in search order.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        self.legal_actions_for(self.current_player)
    }

    /// All legal actions for `color`, in search order.
    ///
    /// Does not read or modify `current_player`, so it can probe either side.
    #[must_use]
    pub fn legal_actions_for(&self, color: Color) -> Vec<Action> {
        let mut actions = Vec::new();
        self.push_moves(color, &mut actions);
        actions.push(Action::Grow);
        actions.sort_by_key(|action| ordering_key(color, action));
        actions
    }

    /// Number of legal actions for `color`, including `Grow`.
    #[must_use]
    pub fn legal_action_count(&self, color: Color) -> usize {
        let mut moves = Vec::new();
        self.push_moves(color, &mut moves);
        moves.len() + 1
    }

    /// Append every hop and jump chain for `color`, unordered.
    fn push_moves(&self, color: Color, out: &mut Vec<Action>) {
        let mut visited = FxHashSet::default();
        let mut path = Steps::new();

        for from in self.frogs_of(color) {
            for &d in color.directions() {
                if let Some(dest) = from.step(d) {
                    if self.is_open_pad(dest) {
                        out.push(Action::hop(from, d));
                    }
                }
            }

            visited.clear();
            self.push_jumps(color, from, from, &mut path, &mut visited, out);
        }
    }

    /// Depth-first jump-chain search from `at`.
    ///
    /// `path` holds the steps taken from `source` so far; `visited` holds the
    /// landings already used on this chain. Both are restored before return.
    fn push_jumps(
        &self,
        color: Color,
        source: Coord,
        at: Coord,
        path: &mut Steps,
        visited: &mut FxHashSet<Coord>,
        out: &mut Vec<Action>,
    ) {
        for &d in color.directions() {
            let Some((mid, landing)) = at.jump(d) else {
                continue;
            };
            if !self.has_frog(mid) || !self.is_open_pad(landing) || visited.contains(&landing) {
                continue;
            }

            path.push(d);
            out.push(Action::Move {
                start: source,
                steps: path.clone(),
            });

            visited.insert(landing);
            self.push_jumps(color, source, landing, path, visited, out);
            visited.remove(&landing);
            path.pop();
        }
    }
}

/// Sort key for move ordering: `(group, -forward, lateral)`.
///
/// Progress is measured on the summed step vectors, so a multi-step chain
/// ranks by how far its directions point toward the goal row.
fn ordering_key(color: Color, action: &Action) -> (u8, i16, i16) {
    match action {
        Action::Grow => (2, 0, 0),
        Action::Move { steps, .. } => {
            let (dr, dc) = steps.iter().fold((0i16, 0i16), |(r, c), d| {
                let (sr, sc) = d.delta();
                (r + sr as i16, c + sc as i16)
            });
            let forward = match color {
                Color::Red => dr,
                Color::Blue => -dr,
            };
            let group = if steps.len() > 1 { 0 } else { 1 };
            (group, -forward, dc.abs())
        }
    }
}
