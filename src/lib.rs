//! # Sprite Palette
//!
//! Dominant-color analysis for folders of PNG images (sprite sheets, design
//! review batches).
//!
//! Each image is summarized by k-means clustering of its opaque pixel
//! colors; per-image summaries are then merged into a folder-wide
//! distribution:
//! - PNG decoding with the transparency channel preserved
//! - Sampling only pixels with nonzero alpha
//! - Clustering into K representative colors, keeping the best of several
//!   random initializations
//! - Pixel-weighted aggregation of per-image percentages across the folder
//!
//! ## Example
//!
//! ```rust,no_run
//! use sprite_palette::analyze_folder;
//! use std::path::Path;
//!
//! let distribution = analyze_folder(Path::new("sprites"), 5)?;
//! for share in distribution.sorted_shares() {
//!     println!("BGR Group: {}, Percentage: {:.4}%", share.color, share.percentage);
//! }
//! # Ok::<(), sprite_palette::AnalysisError>(())
//! ```

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod aggregate;
pub mod analysis;
pub mod cluster;
pub mod config;
pub mod constants;
pub mod error;
pub mod report;
pub mod sampling;

pub use aggregate::{is_eligible_file, FolderAggregator};
pub use analysis::ImageAnalyzer;
pub use cluster::ColorCluster;
pub use config::ClusteringConfig;
pub use error::{AnalysisError, Result};
pub use report::render_report;
pub use sampling::PixelSample;

/// Representative color of one cluster group.
///
/// Channels are stored in the decoder's native RGB order; the `Display`
/// implementation renders the `(b, g, r)` tuple used by the report.
/// Distributions key by this value, so numerically identical representative
/// colors merge regardless of which image or cluster produced them.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct GroupColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl GroupColor {
    /// Create a color from 8-bit RGB channels
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for GroupColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.b, self.g, self.r)
    }
}

/// One color's percentage share of a distribution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorShare {
    /// Representative color of the group
    pub color: GroupColor,
    /// Percentage of included pixels assigned to the group
    pub percentage: f64,
}

/// Mapping from representative color to percentage of included pixels.
///
/// Produced per image by [`ImageAnalyzer`] and per folder by
/// [`FolderAggregator`]. Shares are non-negative and sum to ~100.0 for any
/// non-empty input; all distributions are transient per-invocation values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorDistribution {
    shares: HashMap<GroupColor, f64>,
}

impl ColorDistribution {
    pub(crate) fn from_shares(shares: HashMap<GroupColor, f64>) -> Self {
        Self { shares }
    }

    /// True when no color carries a share
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Number of distinct representative colors
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Percentage share of a specific color, if present
    pub fn share_of(&self, color: GroupColor) -> Option<f64> {
        self.shares.get(&color).copied()
    }

    /// Iterate over (color, percentage) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (GroupColor, f64)> + '_ {
        self.shares.iter().map(|(color, share)| (*color, *share))
    }

    /// Shares sorted by descending percentage, ties broken by color value
    pub fn sorted_shares(&self) -> Vec<ColorShare> {
        let mut shares: Vec<ColorShare> = self
            .shares
            .iter()
            .map(|(color, percentage)| ColorShare {
                color: *color,
                percentage: *percentage,
            })
            .collect();
        shares.sort_by(|a, b| {
            b.percentage
                .total_cmp(&a.percentage)
                .then_with(|| a.color.cmp(&b.color))
        });
        shares
    }

    /// Sum of all shares; ~100.0 for any non-empty distribution
    pub fn total_share(&self) -> f64 {
        self.shares.values().sum()
    }
}

/// Analyze a single image into its dominant-color distribution.
///
/// Convenience wrapper around [`ImageAnalyzer`] with default clustering
/// parameters and an unseeded (random) initialization.
pub fn analyze_image(path: &Path, cluster_count: usize) -> Result<ColorDistribution> {
    ImageAnalyzer::new(cluster_count).analyze(path)
}

/// Analyze every eligible image in `folder` into one aggregate distribution.
///
/// Convenience wrapper around [`FolderAggregator`]; unreadable files are
/// logged and skipped rather than aborting the batch.
pub fn analyze_folder(folder: &Path, cluster_count: usize) -> Result<ColorDistribution> {
    FolderAggregator::new(cluster_count).aggregate(folder)
}
