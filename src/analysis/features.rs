//! Sort strategies and per-image feature extraction
//!
//! Each strategy reduces a decoded cover image to a single comparable
//! scalar, the value the sorter orders tiles by.

use crate::analysis::color::ColorSample;
use crate::analysis::kmeans::{self, Clustering};
use crate::io::configuration::{DEFAULT_CLUSTER_COUNT, DEFAULT_SEED, KMEANS_MAX_ITERATIONS};
use crate::io::error::{self, Result};
use image::RgbImage;
use ndarray::Array2;

/// The closed set of ranking strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    /// Order by BT.709 luminance of the average color
    Luminance,
    /// Order by HSV saturation of the average color
    Saturation,
    /// Order by channel sum of the dominant cluster centroid
    DominantColor,
}

impl SortStrategy {
    /// All strategies, in the order the pipeline runs them
    pub const ALL: [Self; 3] = [Self::Luminance, Self::Saturation, Self::DominantColor];

    /// Strategy name used in output filenames and status messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Luminance => "luminance",
            Self::Saturation => "saturation",
            Self::DominantColor => "dominant_color",
        }
    }

    /// Reduce an image to its ranking value under this strategy
    ///
    /// # Errors
    ///
    /// Returns an error if the image has no pixels or the clustering
    /// options are invalid.
    pub fn measure(self, image: &RgbImage, options: &FeatureOptions) -> Result<f64> {
        match self {
            Self::Luminance => Ok(average_color(image)?.luminance()),
            Self::Saturation => Ok(average_color(image)?.saturation()),
            Self::DominantColor => Ok(dominant_color(image, options)?.channel_sum()),
        }
    }
}

/// Tunables for dominant-color extraction
#[derive(Debug, Clone, Copy)]
pub struct FeatureOptions {
    /// Number of k-means clusters
    pub clusters: usize,
    /// RNG seed for centroid initialization
    pub seed: u64,
    /// Iteration cap for Lloyd's algorithm
    pub max_iterations: usize,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            clusters: DEFAULT_CLUSTER_COUNT,
            seed: DEFAULT_SEED,
            max_iterations: KMEANS_MAX_ITERATIONS,
        }
    }
}

/// Per-channel mean color over all pixels
///
/// # Errors
///
/// Returns an error for zero-pixel images.
pub fn average_color(image: &RgbImage) -> Result<ColorSample> {
    let pixel_count = u64::from(image.width()) * u64::from(image.height());
    if pixel_count == 0 {
        return Err(error::invalid_source(&"image has no pixels"));
    }

    let mut sums = [0u64; 3];
    for pixel in image.pixels() {
        for (channel, value) in pixel.0.iter().enumerate() {
            if let Some(sum) = sums.get_mut(channel) {
                *sum += u64::from(*value);
            }
        }
    }

    let divisor = pixel_count as f64;
    Ok(ColorSample::from_channels(
        sums[0] as f64 / divisor,
        sums[1] as f64 / divisor,
        sums[2] as f64 / divisor,
    ))
}

/// Flatten an image into an N x 3 matrix of channel values
pub fn pixel_matrix(image: &RgbImage) -> Array2<f64> {
    let pixel_count = (u64::from(image.width()) * u64::from(image.height())) as usize;
    let mut matrix = Array2::zeros((pixel_count, 3));
    for (index, pixel) in image.pixels().enumerate() {
        for (channel, value) in pixel.0.iter().enumerate() {
            if let Some(cell) = matrix.get_mut((index, channel)) {
                *cell = f64::from(*value);
            }
        }
    }
    matrix
}

/// Cluster an image's pixels and return the full clustering
///
/// # Errors
///
/// Returns an error if the image has no pixels or `options.clusters` is zero.
pub fn cluster_image(image: &RgbImage, options: &FeatureOptions) -> Result<Clustering> {
    let matrix = pixel_matrix(image);
    kmeans::cluster_pixels(&matrix, options.clusters, options.seed, options.max_iterations)
}

/// Dominant color of an image: the first cluster centroid
///
/// With the default single cluster this coincides with
/// [`Clustering::largest`]; for multi-cluster runs the population-weighted
/// centroid is available through [`cluster_image`].
///
/// # Errors
///
/// Returns an error if the image has no pixels or `options.clusters` is zero.
pub fn dominant_color(image: &RgbImage, options: &FeatureOptions) -> Result<ColorSample> {
    cluster_image(image, options)?
        .first()
        .ok_or_else(|| error::invalid_source(&"clustering produced no centroids"))
}
