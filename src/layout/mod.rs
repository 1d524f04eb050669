//! Grid layout arithmetic and mosaic compositing
//!
//! This module turns an ordered tile sequence into a finished raster:
//! - Grid dimension derivation from the tile count
//! - Canvas construction, tile resizing, and row-major placement

/// Tile blitting onto the mosaic canvas
pub mod compositor;
/// Grid dimension and canvas size derivation
pub mod grid;

pub use grid::GridSpec;
