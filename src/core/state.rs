//! Game state: lily pads, frogs, side to move, turn counter.
//!
//! Uses `im` persistent collections so that `clone()` is O(1). The search
//! clones the state once per node, and sibling branches never observe each
//! other's mutations.
//!
//! Ordered collections (`OrdSet`, `OrdMap`) keep iteration deterministic,
//! which in turn keeps move generation and search results reproducible.
//!
//! Rules (move generation, application, terminal tests) live in
//! `crate::rules`; this module only owns the data.

use im::{OrdMap, OrdSet};
use serde::{Deserialize, Serialize};

use super::coord::{Coord, BOARD_N};
use super::player::{Color, ColorMap};

/// Number of frogs each color owns for the whole game.
pub const FROGS_PER_COLOR: usize = 6;

/// Turn count at which the game ends regardless of position.
pub const MAX_TURNS: u32 = 150;

/// Complete game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Cells a frog may hop or jump onto.
    pub(crate) lily_pads: OrdSet<Coord>,

    /// Frog positions and owners. At most one frog per cell.
    pub(crate) frogs: OrdMap<Coord, Color>,

    /// Whose turn it is.
    pub current_player: Color,

    /// Number of actions applied so far.
    pub turn_count: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the standard starting position.
    ///
    /// 28 lily pads: the full home rows plus columns 1-6 of rows 1 and 6.
    /// Red frogs on `(0,1)..(0,6)`, blue frogs on `(7,1)..(7,6)`. Red moves first.
    #[must_use]
    pub fn new() -> Self {
        let last = BOARD_N - 1;
        let mut lily_pads = OrdSet::new();
        for c in 0..BOARD_N {
            lily_pads.insert(Coord::new(0, c));
            lily_pads.insert(Coord::new(last, c));
        }
        for c in 1..last {
            lily_pads.insert(Coord::new(1, c));
            lily_pads.insert(Coord::new(last - 1, c));
        }

        let mut frogs = OrdMap::new();
        for c in 1..last {
            frogs.insert(Coord::new(0, c), Color::Red);
            frogs.insert(Coord::new(last, c), Color::Blue);
        }

        Self {
            lily_pads,
            frogs,
            current_player: Color::Red,
            turn_count: 0,
        }
    }

    /// Build an arbitrary position.
    ///
    /// No layout invariants are checked; this is intended for analysis and
    /// tests. A later entry for the same cell replaces an earlier one.
    pub fn from_parts(
        lily_pads: impl IntoIterator<Item = Coord>,
        frogs: impl IntoIterator<Item = (Coord, Color)>,
        current_player: Color,
        turn_count: u32,
    ) -> Self {
        Self {
            lily_pads: lily_pads.into_iter().collect(),
            frogs: frogs.into_iter().collect(),
            current_player,
            turn_count,
        }
    }

    // === Queries ===

    /// Check if `at` holds a lily pad.
    #[must_use]
    pub fn has_pad(&self, at: Coord) -> bool {
        self.lily_pads.contains(&at)
    }

    /// Owner of the frog at `at`, if any.
    #[must_use]
    pub fn frog_at(&self, at: Coord) -> Option<Color> {
        self.frogs.get(&at).copied()
    }

    /// Check if `at` holds a frog of either color.
    #[must_use]
    pub fn has_frog(&self, at: Coord) -> bool {
        self.frogs.contains_key(&at)
    }

    /// Check if a frog could land on `at`: a pad with no frog on it.
    #[must_use]
    pub fn is_open_pad(&self, at: Coord) -> bool {
        self.has_pad(at) && !self.has_frog(at)
    }

    /// Iterate over lily pads in row-major order.
    pub fn lily_pads(&self) -> impl Iterator<Item = Coord> + '_ {
        self.lily_pads.iter().copied()
    }

    /// Number of lily pads on the board.
    #[must_use]
    pub fn pad_count(&self) -> usize {
        self.lily_pads.len()
    }

    /// Iterate over all frogs in row-major order.
    pub fn frogs(&self) -> impl Iterator<Item = (Coord, Color)> + '_ {
        self.frogs.iter().map(|(&at, &color)| (at, color))
    }

    /// Iterate over the frogs of one color in row-major order.
    pub fn frogs_of(&self, color: Color) -> impl Iterator<Item = Coord> + '_ {
        self.frogs
            .iter()
            .filter(move |&(_, &owner)| owner == color)
            .map(|(&at, _)| at)
    }

    /// Number of frogs per color.
    #[must_use]
    pub fn frog_counts(&self) -> ColorMap<usize> {
        let mut counts = ColorMap::with_value(0);
        for (_, color) in self.frogs() {
            counts[color] += 1;
        }
        counts
    }

    /// Number of frogs of `color` standing on that color's goal row.
    #[must_use]
    pub fn arrived_count(&self, color: Color) -> usize {
        let goal = color.goal_row();
        self.frogs_of(color).filter(|at| at.r == goal).count()
    }

    /// Check if `color` has frogs and every one of them is on its goal row.
    #[must_use]
    pub fn all_arrived(&self, color: Color) -> bool {
        let goal = color.goal_row();
        let mut frogs = self.frogs_of(color).peekable();
        frogs.peek().is_some() && frogs.all(|at| at.r == goal)
    }
}

impl std::fmt::Display for GameState {
    /// ASCII board: `R`/`B` frogs, `*` lily pads, `.` water.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "turn {} ({} to move)", self.turn_count, self.current_player)?;
        for r in 0..BOARD_N {
            for c in 0..BOARD_N {
                let at = Coord::new(r, c);
                let cell = match self.frog_at(at) {
                    Some(Color::Red) => 'R',
                    Some(Color::Blue) => 'B',
                    None if self.has_pad(at) => '*',
                    None => '.',
                };
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
