//! K-means clustering in RGB space
//!
//! Lloyd's algorithm over an N x 3 pixel matrix with seeded centroid
//! initialization for reproducible results. Degenerate inputs (fewer
//! distinct colors than requested clusters) are legal: empty clusters keep
//! their initial centroid and duplicate centroids are allowed.

use crate::analysis::color::ColorSample;
use crate::io::error::{self, Result};
use ndarray::{Array2, ArrayView1};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Centroids and cluster populations produced by [`cluster_pixels`]
#[derive(Debug, Clone)]
pub struct Clustering {
    centroids: Vec<[f64; 3]>,
    counts: Vec<usize>,
}

impl Clustering {
    /// Centroid colors on the 0-255 scale, in initialization order
    pub fn centroids(&self) -> &[[f64; 3]] {
        &self.centroids
    }

    /// Number of pixels assigned to each centroid
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// The first centroid, converted to an 8-bit color sample
    pub fn first(&self) -> Option<ColorSample> {
        self.centroids
            .first()
            .map(|c| ColorSample::from_channels(c[0], c[1], c[2]))
    }

    /// The centroid of the most populous cluster
    ///
    /// Ties resolve to the earlier centroid.
    pub fn largest(&self) -> Option<ColorSample> {
        let index = self
            .counts
            .iter()
            .enumerate()
            .max_by(|(left_index, left), (right_index, right)| {
                left.cmp(right).then(right_index.cmp(left_index))
            })
            .map(|(index, _)| index)?;
        self.centroids
            .get(index)
            .map(|c| ColorSample::from_channels(c[0], c[1], c[2]))
    }
}

fn row_color(row: &ArrayView1<'_, f64>) -> [f64; 3] {
    [
        row.get(0).copied().unwrap_or(0.0),
        row.get(1).copied().unwrap_or(0.0),
        row.get(2).copied().unwrap_or(0.0),
    ]
}

fn squared_distance(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    let dr = a[0] - b[0];
    let dg = a[1] - b[1];
    let db = a[2] - b[2];
    db.mul_add(db, dr.mul_add(dr, dg * dg))
}

// Farthest-point seeding: a random first centroid, then the pixel furthest
// from all chosen centroids, repeated. Deterministic for a given seed and
// well-separated even when the random pick lands in a dominant color mass.
fn initial_centroids(pixels: &Array2<f64>, clusters: usize, rng: &mut StdRng) -> Vec<[f64; 3]> {
    let pixel_count = pixels.nrows();
    let first = rng.random_range(0..pixel_count);
    let mut centroids = vec![row_color(&pixels.row(first))];

    while centroids.len() < clusters {
        let mut farthest = centroids.last().copied().unwrap_or([0.0; 3]);
        let mut farthest_distance = -1.0;
        for row in pixels.rows() {
            let color = row_color(&row);
            let distance = centroids
                .iter()
                .map(|centroid| squared_distance(&color, centroid))
                .fold(f64::INFINITY, f64::min);
            if distance > farthest_distance {
                farthest_distance = distance;
                farthest = color;
            }
        }
        // Fewer distinct colors than clusters yields duplicate centroids
        centroids.push(farthest);
    }
    centroids
}

fn nearest_centroid(color: &[f64; 3], centroids: &[[f64; 3]]) -> usize {
    let mut best_index = 0;
    let mut best_distance = f64::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = squared_distance(color, centroid);
        if distance < best_distance {
            best_distance = distance;
            best_index = index;
        }
    }
    best_index
}

/// Partition pixel colors into `clusters` groups by Euclidean distance
///
/// `pixels` is an N x 3 matrix of channel values on the 0-255 scale. The
/// seeded RNG picks the initial centroids, so identical inputs always
/// produce identical clusterings.
///
/// # Errors
///
/// Returns an error if `clusters` is zero or the pixel matrix is empty.
pub fn cluster_pixels(
    pixels: &Array2<f64>,
    clusters: usize,
    seed: u64,
    max_iterations: usize,
) -> Result<Clustering> {
    if clusters == 0 {
        return Err(error::invalid_parameter(
            "clusters",
            &clusters,
            &"must be at least 1",
        ));
    }
    let pixel_count = pixels.nrows();
    if pixel_count == 0 {
        return Err(error::invalid_source(&"pixel matrix is empty"));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut centroids = initial_centroids(pixels, clusters, &mut rng);

    let mut assignments = vec![0usize; pixel_count];
    for _ in 0..max_iterations {
        let mut changed = false;
        for (pixel_index, row) in pixels.rows().into_iter().enumerate() {
            let color = row_color(&row);
            let nearest = nearest_centroid(&color, &centroids);
            if let Some(assignment) = assignments.get_mut(pixel_index) {
                if *assignment != nearest {
                    *assignment = nearest;
                    changed = true;
                }
            }
        }

        let mut sums = vec![[0.0f64; 3]; centroids.len()];
        let mut counts = vec![0usize; centroids.len()];
        for (pixel_index, row) in pixels.rows().into_iter().enumerate() {
            let cluster = assignments.get(pixel_index).copied().unwrap_or(0);
            let color = row_color(&row);
            if let Some(sum) = sums.get_mut(cluster) {
                sum[0] += color[0];
                sum[1] += color[1];
                sum[2] += color[2];
            }
            if let Some(count) = counts.get_mut(cluster) {
                *count += 1;
            }
        }
        for (cluster, centroid) in centroids.iter_mut().enumerate() {
            let count = counts.get(cluster).copied().unwrap_or(0);
            if count > 0 {
                if let Some(sum) = sums.get(cluster) {
                    let divisor = count as f64;
                    *centroid = [sum[0] / divisor, sum[1] / divisor, sum[2] / divisor];
                }
            }
            // Empty clusters keep their initial centroid
        }

        if !changed {
            break;
        }
    }

    let mut counts = vec![0usize; centroids.len()];
    for assignment in &assignments {
        if let Some(count) = counts.get_mut(*assignment) {
            *count += 1;
        }
    }

    Ok(Clustering { centroids, counts })
}
