//! Defaults and tuning constants

// Tile geometry defaults
/// Default width of each mosaic tile in pixels
pub const DEFAULT_TILE_WIDTH: u32 = 100;
/// Default height of each mosaic tile in pixels
pub const DEFAULT_TILE_HEIGHT: u32 = 100;
/// Default gap between adjacent tiles in pixels
pub const DEFAULT_SPACING: u32 = 10;

/// Default canvas background color (mid-grey)
pub const DEFAULT_BACKGROUND: [u8; 3] = [128, 128, 128];

// Dominant-color clustering defaults
/// Default number of k-means clusters for dominant-color extraction
pub const DEFAULT_CLUSTER_COUNT: usize = 1;
/// Fixed seed for reproducible centroid initialization
pub const DEFAULT_SEED: u64 = 0;
/// Iteration cap for Lloyd's algorithm
pub const KMEANS_MAX_ITERATIONS: usize = 50;

// Output settings
/// Prefix for generated mosaic filenames
pub const OUTPUT_PREFIX: &str = "mosaic";
/// Extensions treated as candidate cover images (lowercase)
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
