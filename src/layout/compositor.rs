//! Tile blitting onto the mosaic canvas

use crate::analysis::ranking::RankedImage;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_SPACING, DEFAULT_TILE_HEIGHT, DEFAULT_TILE_WIDTH,
};
use crate::io::error::{self, Result};
use crate::layout::grid::GridSpec;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

/// Geometry and background settings for one compositing run
#[derive(Debug, Clone, Copy)]
pub struct CompositorOptions {
    /// Width every tile is resized to
    pub tile_width: u32,
    /// Height every tile is resized to
    pub tile_height: u32,
    /// Gap between adjacent tiles
    pub spacing: u32,
    /// Canvas fill color
    pub background: Rgb<u8>,
}

impl Default for CompositorOptions {
    fn default() -> Self {
        Self {
            tile_width: DEFAULT_TILE_WIDTH,
            tile_height: DEFAULT_TILE_HEIGHT,
            spacing: DEFAULT_SPACING,
            background: Rgb(DEFAULT_BACKGROUND),
        }
    }
}

impl CompositorOptions {
    /// Reject geometry that cannot produce a visible mosaic
    ///
    /// # Errors
    ///
    /// Returns an error if either tile dimension is zero.
    pub fn validate(&self) -> Result<()> {
        if self.tile_width == 0 {
            return Err(error::invalid_parameter(
                "tile_width",
                &self.tile_width,
                &"must be positive",
            ));
        }
        if self.tile_height == 0 {
            return Err(error::invalid_parameter(
                "tile_height",
                &self.tile_height,
                &"must be positive",
            ));
        }
        Ok(())
    }
}

/// Finished canvas plus placement bookkeeping
#[derive(Debug)]
pub struct CompositeOutcome {
    /// The composited mosaic raster
    pub canvas: RgbImage,
    /// Number of tiles actually blitted
    pub placed: usize,
    /// Ids of tiles whose re-load failed; their cells stay background
    pub skipped: Vec<String>,
}

/// Composite ordered tiles onto a fresh background canvas
///
/// Tiles fill the grid row-major, left to right then top to bottom. Each
/// tile is loaded through `loader`, resized to the fixed tile size, blitted,
/// and released before the next one is opened, so at most one decoded tile
/// is held at a time. Every call builds its own canvas; nothing is shared
/// between runs.
///
/// # Errors
///
/// Returns an error for invalid geometry or when the tile sequence exceeds
/// the grid capacity.
pub fn composite<L>(
    tiles: &[RankedImage],
    spec: &GridSpec,
    options: &CompositorOptions,
    loader: L,
) -> Result<CompositeOutcome>
where
    L: Fn(&Path) -> Result<RgbImage>,
{
    options.validate()?;
    if tiles.len() > spec.capacity() {
        return Err(error::invalid_parameter(
            "tile_count",
            &tiles.len(),
            &format!(
                "exceeds grid capacity {} ({}x{})",
                spec.capacity(),
                spec.columns,
                spec.rows
            ),
        ));
    }

    let (width, height) = spec.canvas_size(options.tile_width, options.tile_height, options.spacing);
    let mut canvas = RgbImage::from_pixel(width, height, options.background);

    let mut placed = 0;
    let mut skipped = Vec::new();
    for (index, tile) in tiles.iter().enumerate() {
        let column = index % spec.columns;
        let row = index / spec.columns;
        let x = column as u32 * (options.tile_width + options.spacing);
        let y = row as u32 * (options.tile_height + options.spacing);

        match loader(&tile.path) {
            Ok(image) => {
                let resized = imageops::resize(
                    &image,
                    options.tile_width,
                    options.tile_height,
                    FilterType::Triangle,
                );
                imageops::replace(&mut canvas, &resized, i64::from(x), i64::from(y));
                placed += 1;
            }
            Err(_) => skipped.push(tile.id.clone()),
        }
    }

    Ok(CompositeOutcome {
        canvas,
        placed,
        skipped,
    })
}
