//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Weights of the static evaluation terms.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Weight of the goal-distance differential.
    pub progress: f64,

    /// Weight of the legal-action-count differential.
    pub mobility: f64,

    /// Weight of the adjacent-lily-pad differential.
    pub adjacency: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            progress: 40.0,
            mobility: 5.0,
            adjacency: 1.0,
        }
    }
}

/// Alpha-beta search configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies of lookahead (default: 3). Values below 1 are treated as 1.
    pub depth: u32,

    /// Wall-clock budget per decision (default: 1 second).
    /// Checked cooperatively, so the search may overrun by one node's work.
    pub time_limit: Duration,

    /// Static evaluation weights.
    pub weights: EvalWeights,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            time_limit: Duration::from_secs(1),
            weights: EvalWeights::default(),
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom search depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with custom time limit.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Create a new config with custom evaluation weights.
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }
}
