//! Analysis modules for color math and image ranking
//!
//! This module contains the feature-extraction side of the pipeline:
//! - Color samples and the scalar metrics derived from them
//! - K-means clustering over pixel matrices
//! - Sort strategies that turn an image into a ranking value
//! - Stable ranking of a whole collection

/// Color samples and luminance/saturation math
pub mod color;
/// Sort strategies and per-image feature extraction
pub mod features;
/// K-means clustering in RGB space
pub mod kmeans;
/// Stable ordering of images by feature value
pub mod ranking;

pub use color::ColorSample;
pub use features::SortStrategy;
