//! Photo-mosaic generation from album cover collections
//!
//! The pipeline extracts a scalar visual feature from each cover image,
//! orders the collection by that feature, and composites the sorted tiles
//! into a single near-square mosaic raster.

#![forbid(unsafe_code)]

/// Color math, clustering, feature extraction, and image ranking
pub mod analysis;
/// Input/output operations, CLI driver, and error handling
pub mod io;
/// Grid layout arithmetic and mosaic compositing
pub mod layout;

pub use io::error::{MosaicError, Result};
