//! Clustering configuration
//!
//! All tunable parameters of a clustering run live in [`ClusteringConfig`].
//! Distance is always Euclidean over normalized sRGB samples; the only
//! user-facing knob is the cluster count, everything else defaults from
//! [`crate::constants::clustering`].

use serde::{Deserialize, Serialize};

use crate::constants::clustering;
use crate::error::{AnalysisError, Result};

/// Parameters for clustering one image's pixel samples.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Number of color groups to produce per image
    pub cluster_count: usize,

    /// Independent random initializations; the run with the lowest
    /// within-cluster score is kept
    pub init_runs: usize,

    /// Iteration cap per initialization run
    pub max_iterations: usize,

    /// Convergence threshold on centroid movement, in normalized sRGB units
    pub convergence_threshold: f32,

    /// Seed for centroid initialization; `None` draws a fresh random seed
    /// per analysis, so exact centroid values are not reproducible run to run
    pub seed: Option<u64>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            cluster_count: clustering::DEFAULT_CLUSTER_COUNT,
            init_runs: clustering::DEFAULT_INIT_RUNS,
            max_iterations: clustering::DEFAULT_MAX_ITERATIONS,
            convergence_threshold: clustering::DEFAULT_CONVERGENCE,
            seed: None,
        }
    }
}

impl ClusteringConfig {
    /// Default configuration with a specific cluster count
    pub fn with_cluster_count(cluster_count: usize) -> Self {
        Self {
            cluster_count,
            ..Self::default()
        }
    }

    /// Check parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InputFormat` if the cluster count is zero or
    /// above [`clustering::MAX_CLUSTER_COUNT`], or if the run/iteration
    /// counts are zero.
    pub fn validate(&self) -> Result<()> {
        if self.cluster_count == 0 || self.cluster_count > clustering::MAX_CLUSTER_COUNT {
            return Err(AnalysisError::input_format(format!(
                "cluster count must be between 1 and {}, got {}",
                clustering::MAX_CLUSTER_COUNT,
                self.cluster_count
            )));
        }
        if self.init_runs == 0 {
            return Err(AnalysisError::input_format(
                "initialization run count must be at least 1",
            ));
        }
        if self.max_iterations == 0 {
            return Err(AnalysisError::input_format(
                "iteration cap must be at least 1",
            ));
        }
        Ok(())
    }
}
