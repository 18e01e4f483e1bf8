//! Game configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Largest supported vertex count. Flip and movement are O(V²).
pub const MAX_VERTICES: usize = 1024;

/// Parameters fixed at game start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of vertices (default: 6).
    pub vertex_count: usize,

    /// Probability that any given vertex pair starts connected (default: 0.5).
    pub edge_probability: f64,

    /// Seed for graph generation and runner placement.
    /// `None` draws a seed from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            vertex_count: 6,
            edge_probability: 0.5,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new config with a custom vertex count.
    #[must_use]
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    /// Create a new config with a custom edge probability.
    #[must_use]
    pub fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before a game is built from it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.vertex_count == 0 {
            return Err(ConfigError::NoVertices);
        }
        if self.vertex_count > MAX_VERTICES {
            return Err(ConfigError::TooManyVertices {
                requested: self.vertex_count,
                max: MAX_VERTICES,
            });
        }
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(ConfigError::InvalidEdgeProbability {
                value: self.edge_probability,
            });
        }
        Ok(())
    }
}
