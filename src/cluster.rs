//! k-means grouping of pixel samples
//!
//! Samples are clustered with Euclidean distance in normalized sRGB space.
//! Each call performs several independent randomly-initialized runs and keeps
//! the one with the lowest within-cluster score; a single bad initialization
//! can otherwise produce degenerate clusters on images with few distinct
//! colors.

use kmeans_colors::{get_kmeans, Kmeans};
use palette::Srgb;

use crate::config::ClusteringConfig;
use crate::error::{AnalysisError, Result};
use crate::sampling::PixelSample;
use crate::GroupColor;

/// One color group produced by clustering a single image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorCluster {
    /// Representative color: the centroid with each channel truncated
    /// toward zero to an integer
    pub color: GroupColor,

    /// Number of samples assigned to this cluster
    pub member_count: usize,
}

/// Group `samples` into `config.cluster_count` clusters.
///
/// Every cluster is reported, including empty ones (zero members); membership
/// counts over all clusters sum to `samples.len()`.
///
/// # Errors
///
/// Returns `AnalysisError::InputFormat` for out-of-range configuration and
/// `AnalysisError::Processing` when there are fewer samples than requested
/// clusters.
pub fn cluster_samples(
    samples: &[PixelSample],
    config: &ClusteringConfig,
) -> Result<Vec<ColorCluster>> {
    config.validate()?;

    let k = config.cluster_count;
    if samples.len() < k {
        return Err(AnalysisError::processing(format!(
            "cannot form {} clusters from {} samples",
            k,
            samples.len()
        )));
    }

    let buffer: Vec<Srgb<f32>> = samples.iter().map(|sample| sample.into_format()).collect();
    let seed = config.seed.unwrap_or_else(rand::random);

    let mut best = Kmeans::new();
    for run in 0..config.init_runs {
        let result = get_kmeans(
            k,
            config.max_iterations,
            config.convergence_threshold,
            false,
            &buffer,
            seed.wrapping_add(run as u64),
        );
        if result.score < best.score {
            best = result;
        }
    }

    let mut member_counts = vec![0usize; k];
    for &index in &best.indices {
        member_counts[index as usize] += 1;
    }

    let clusters = best
        .centroids
        .iter()
        .zip(member_counts)
        .map(|(centroid, member_count)| ColorCluster {
            color: centroid_color(*centroid),
            member_count,
        })
        .collect();

    Ok(clusters)
}

/// Truncate each centroid channel toward zero into an 8-bit value
fn centroid_color(centroid: Srgb<f32>) -> GroupColor {
    GroupColor::new(
        (centroid.red * 255.0) as u8,
        (centroid.green * 255.0) as u8,
        (centroid.blue * 255.0) as u8,
    )
}
