//! Folder-level aggregation of per-image color distributions
//!
//! Every eligible image in a folder is analyzed independently; its per-image
//! percentages are converted back into absolute pixel counts, weighted by
//! that image's included pixel count, and accumulated per representative
//! color. The final distribution renormalizes the accumulated counts over
//! the grand total of included pixels.
//!
//! A single unreadable file never aborts the batch: its error is logged and
//! the file contributes nothing.

use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, error};

use crate::analysis::ImageAnalyzer;
use crate::config::ClusteringConfig;
use crate::constants::files::SUPPORTED_SUFFIX;
use crate::error::{AnalysisError, Result};
use crate::sampling;
use crate::{ColorDistribution, GroupColor};

/// Aggregates dominant-color distributions across a folder of images
pub struct FolderAggregator {
    analyzer: ImageAnalyzer,
}

impl FolderAggregator {
    /// Create an aggregator producing `cluster_count` color groups per image
    pub fn new(cluster_count: usize) -> Self {
        Self {
            analyzer: ImageAnalyzer::new(cluster_count),
        }
    }

    /// Create an aggregator with full clustering configuration
    pub fn with_config(config: ClusteringConfig) -> Self {
        Self {
            analyzer: ImageAnalyzer::with_config(config),
        }
    }

    /// Aggregate every eligible image in `folder` into one distribution.
    ///
    /// Files that fail to decode or cluster are logged and skipped; an empty
    /// distribution is returned when no file contributes any pixels.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InputFormat` if `folder` is not a directory
    /// or the clustering configuration is out of range;
    /// `AnalysisError::Processing` if the directory cannot be listed.
    pub fn aggregate(&self, folder: &Path) -> Result<ColorDistribution> {
        let files = collect_image_files(folder)?;

        let mut accumulated: HashMap<GroupColor, f64> = HashMap::new();
        let mut grand_total = 0usize;

        for path in files {
            let distribution = match self.analyzer.analyze(&path) {
                Ok(distribution) => distribution,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    error!(path = %path.display(), "skipping image: {err}");
                    continue;
                }
            };
            if distribution.is_empty() {
                debug!(path = %path.display(), "no included pixels");
                continue;
            }

            // the weighting denominator is re-derived from the file itself,
            // not from the per-image percentages
            let included = match sampling::load_image(&path)
                .and_then(|image| sampling::included_pixel_count(&image))
            {
                Ok(count) => count,
                Err(err) => {
                    error!(path = %path.display(), "skipping image: {err}");
                    continue;
                }
            };

            grand_total += included;
            for (color, percentage) in distribution.iter() {
                *accumulated.entry(color).or_insert(0.0) += percentage / 100.0 * included as f64;
            }
            debug!(path = %path.display(), pixels = included, "image aggregated");
        }

        if grand_total == 0 {
            return Ok(ColorDistribution::default());
        }

        let shares = accumulated
            .into_iter()
            .map(|(color, count)| (color, 100.0 * count / grand_total as f64))
            .collect();
        Ok(ColorDistribution::from_shares(shares))
    }
}

/// True for regular files whose name ends with `.png`, in any casing
pub fn is_eligible_file(path: &Path) -> bool {
    path.is_file()
        && path
            .file_name()
            .and_then(OsStr::to_str)
            .map(|name| name.to_ascii_lowercase().ends_with(SUPPORTED_SUFFIX))
            .unwrap_or(false)
}

/// Collect eligible files, sorted for a deterministic processing order
fn collect_image_files(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        return Err(AnalysisError::input_format(format!(
            "folder {} does not exist or is not a directory",
            folder.display()
        )));
    }

    let entries = fs::read_dir(folder)
        .map_err(|e| AnalysisError::processing(format!("failed to list {}: {e}", folder.display())))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AnalysisError::processing(format!("failed to list {}: {e}", folder.display()))
        })?;
        let path = entry.path();
        if is_eligible_file(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
