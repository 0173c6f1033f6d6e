//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one alpha-beta search.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Max/min nodes visited (the root is not counted).
    pub nodes: u64,

    /// Static evaluations performed.
    pub evaluations: u64,

    /// Beta and alpha cutoffs taken.
    pub cutoffs: u64,

    /// Whether the deadline expired before the search finished.
    pub timed_out: bool,

    /// Total time spent searching (microseconds).
    pub elapsed_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.elapsed_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.elapsed_us as f64 / 1_000_000.0)
        }
    }
}
