//! Grid dimension and canvas size derivation

use crate::io::error::{self, Result};

/// Mosaic grid dimensions for a given tile count
///
/// Columns are the integer floor of the square root of the tile count, so
/// non-square counts produce a layout wider than tall. The last row may be
/// partially filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    /// Number of tile columns
    pub columns: usize,
    /// Number of tile rows
    pub rows: usize,
}

impl GridSpec {
    /// Derive grid dimensions from a tile count
    ///
    /// Guarantees `columns >= 1`, `columns * rows >= count`, and
    /// `columns * (rows - 1) < count`.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero tile count.
    pub fn for_tile_count(count: usize) -> Result<Self> {
        if count == 0 {
            return Err(error::invalid_parameter(
                "tile_count",
                &count,
                &"cannot lay out an empty mosaic",
            ));
        }

        let columns = integer_sqrt(count);
        let rows = count.div_ceil(columns);
        Ok(Self { columns, rows })
    }

    /// Total canvas dimensions in pixels
    ///
    /// Each grid cell occupies the tile size plus spacing, with the
    /// trailing gap trimmed from both edges.
    pub const fn canvas_size(&self, tile_width: u32, tile_height: u32, spacing: u32) -> (u32, u32) {
        let width = self.columns as u32 * (tile_width + spacing) - spacing;
        let height = self.rows as u32 * (tile_height + spacing) - spacing;
        (width, height)
    }

    /// Total number of grid cells
    pub const fn capacity(&self) -> usize {
        self.columns * self.rows
    }
}

// Floor of the square root, exact for all usize inputs
fn integer_sqrt(value: usize) -> usize {
    let mut root = (value as f64).sqrt() as usize;
    while root.saturating_mul(root) > value {
        root -= 1;
    }
    while (root + 1).saturating_mul(root + 1) <= value {
        root += 1;
    }
    root
}

#[cfg(test)]
mod tests {
    use super::integer_sqrt;

    #[test]
    fn test_integer_sqrt_handles_perfect_squares_and_neighbors() {
        assert_eq!(integer_sqrt(1), 1);
        assert_eq!(integer_sqrt(3), 1);
        assert_eq!(integer_sqrt(4), 2);
        assert_eq!(integer_sqrt(99), 9);
        assert_eq!(integer_sqrt(100), 10);
    }
}
