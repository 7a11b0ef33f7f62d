//! Single-image dominant-color analysis
//!
//! Produces a per-image color distribution:
//! - Decode with the transparency channel preserved
//! - Sample only pixels whose alpha is nonzero
//! - Cluster the samples into K groups
//! - Report each group's representative color with its percentage share of
//!   the included pixels

use std::collections::HashMap;
use std::path::Path;

use image::DynamicImage;
use tracing::debug;

use crate::cluster;
use crate::config::ClusteringConfig;
use crate::error::Result;
use crate::sampling;
use crate::ColorDistribution;

/// Computes a dominant-color distribution for one image
pub struct ImageAnalyzer {
    config: ClusteringConfig,
}

impl ImageAnalyzer {
    /// Create an analyzer producing `cluster_count` color groups per image
    pub fn new(cluster_count: usize) -> Self {
        Self {
            config: ClusteringConfig::with_cluster_count(cluster_count),
        }
    }

    /// Create an analyzer with full clustering configuration
    pub fn with_config(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// The clustering configuration in use
    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    /// Analyze the image at `path`.
    ///
    /// # Returns
    ///
    /// The mapping from representative color to percentage of the image's
    /// included pixels. An image with zero included pixels (fully
    /// transparent) yields an empty distribution, which is a success.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageRead` if decoding fails and
    /// `AnalysisError::Processing` if sampling or clustering fails. No
    /// partial result is produced on error.
    pub fn analyze(&self, path: &Path) -> Result<ColorDistribution> {
        let image = sampling::load_image(path)?;
        self.analyze_decoded(&image)
    }

    /// Analyze an already-decoded image
    pub fn analyze_decoded(&self, image: &DynamicImage) -> Result<ColorDistribution> {
        let samples = sampling::extract_samples(image)?;
        if samples.is_empty() {
            return Ok(ColorDistribution::default());
        }

        let clusters = cluster::cluster_samples(&samples, &self.config)?;

        let total = samples.len();
        let mut shares = HashMap::with_capacity(clusters.len());
        for cluster in &clusters {
            // identical representative colors collapse, last cluster wins
            shares.insert(
                cluster.color,
                100.0 * cluster.member_count as f64 / total as f64,
            );
        }

        debug!(clusters = clusters.len(), samples = total, "image analyzed");
        Ok(ColorDistribution::from_shares(shares))
    }
}
