//! Stable ordering of images by feature value

use crate::analysis::features::{FeatureOptions, SortStrategy};
use crate::io::error::Result;
use crate::io::image::image_id;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// One source image paired with its computed ranking value
#[derive(Debug, Clone)]
pub struct RankedImage {
    /// Identifier derived from the filename stem (the upstream release id)
    pub id: String,
    /// Path the image can be re-opened from
    pub path: PathBuf,
    /// Scalar the tile is ordered by
    pub value: f64,
}

/// Ordered tiles plus the identifiers of images that failed to load
#[derive(Debug, Default)]
pub struct RankingOutcome {
    /// Tiles in ascending feature-value order
    pub ranked: Vec<RankedImage>,
    /// Ids of images skipped because of load or extraction failures
    pub skipped: Vec<String>,
}

/// Extract one feature value per image and sort ascending
///
/// Each image is decoded exactly once through `loader`, measured, and
/// released before the next is opened. Unreadable images are skipped and
/// recorded by id rather than aborting the batch. The sort is stable, so
/// images with equal values keep their input order. `observer` receives
/// each id as it is processed, for status display.
pub fn rank_images<L, O>(
    paths: &[PathBuf],
    strategy: SortStrategy,
    options: &FeatureOptions,
    loader: L,
    mut observer: O,
) -> RankingOutcome
where
    L: Fn(&Path) -> Result<RgbImage>,
    O: FnMut(&str),
{
    let mut outcome = RankingOutcome::default();

    for path in paths {
        let id = image_id(path);
        observer(&id);

        let measured = loader(path).and_then(|image| strategy.measure(&image, options));
        match measured {
            Ok(value) => outcome.ranked.push(RankedImage {
                id,
                path: path.clone(),
                value,
            }),
            Err(_) => outcome.skipped.push(id),
        }
    }

    outcome.ranked.sort_by(|a, b| a.value.total_cmp(&b.value));
    outcome
}
