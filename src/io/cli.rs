//! Command-line interface and pipeline driver
//!
//! Runs the feature-extraction, sorting, layout, and compositing stages for
//! each selected strategy, writing one mosaic per strategy. Strategies are
//! isolated: a failure in one is reported and the rest still run.

use crate::analysis::features::{FeatureOptions, SortStrategy};
use crate::analysis::ranking;
use crate::io::configuration::{
    DEFAULT_BACKGROUND, DEFAULT_CLUSTER_COUNT, DEFAULT_SEED, DEFAULT_SPACING, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, KMEANS_MAX_ITERATIONS, OUTPUT_PREFIX,
};
use crate::io::error::{self, MosaicError, Result};
use crate::io::image::{list_candidate_images, load_rgb, save_canvas};
use crate::io::progress::ProgressManager;
use crate::layout::compositor::{self, CompositorOptions};
use crate::layout::grid::GridSpec;
use clap::{Parser, ValueEnum};
use image::Rgb;
use std::path::PathBuf;

/// Strategy selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Sort by average-color luminance
    Luminance,
    /// Sort by average-color saturation
    Saturation,
    /// Sort by dominant cluster color
    DominantColor,
}

impl StrategyArg {
    /// Map the CLI choice onto the pipeline strategy
    pub const fn to_strategy(self) -> SortStrategy {
        match self {
            Self::Luminance => SortStrategy::Luminance,
            Self::Saturation => SortStrategy::Saturation,
            Self::DominantColor => SortStrategy::DominantColor,
        }
    }
}

#[derive(Parser)]
#[command(name = "covermosaic")]
#[command(
    author,
    version,
    about = "Build sorted photo-mosaics from a directory of album covers"
)]
/// Command-line arguments for the mosaic generator
pub struct Cli {
    /// Directory containing the downloaded cover images
    #[arg(value_name = "COLLECTION")]
    pub collection: PathBuf,

    /// Directory the mosaics are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Width each tile is resized to, in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: u32,

    /// Height each tile is resized to, in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: u32,

    /// Gap between adjacent tiles, in pixels
    #[arg(short, long, default_value_t = DEFAULT_SPACING)]
    pub spacing: u32,

    /// Number of k-means clusters for the dominant-color strategy
    #[arg(short, long, default_value_t = DEFAULT_CLUSTER_COUNT)]
    pub clusters: usize,

    /// Random seed for reproducible clustering
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Run a single strategy instead of all three
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Canvas background color as three channel values
    #[arg(long, num_args = 3, value_names = ["R", "G", "B"], default_values_t = DEFAULT_BACKGROUND)]
    pub background: Vec<u8>,

    /// Suppress progress output and summaries
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Clustering tunables derived from the arguments
    pub const fn feature_options(&self) -> FeatureOptions {
        FeatureOptions {
            clusters: self.clusters,
            seed: self.seed,
            max_iterations: KMEANS_MAX_ITERATIONS,
        }
    }

    /// Compositor geometry derived from the arguments
    pub fn compositor_options(&self) -> CompositorOptions {
        let channel = |index: usize| self.background.get(index).copied().unwrap_or(128);
        CompositorOptions {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            spacing: self.spacing,
            background: Rgb([channel(0), channel(1), channel(2)]),
        }
    }
}

/// Outcome of one strategy run, reported in the post-run summary
#[derive(Debug)]
pub struct StrategyReport {
    /// Path the mosaic was written to
    pub output: PathBuf,
    /// Number of tiles placed on the canvas
    pub placed: usize,
    /// Ids of images skipped during extraction or compositing
    pub skipped: Vec<String>,
}

/// Orchestrates the extract-sort-layout-composite pipeline per strategy
pub struct MosaicPipeline {
    cli: Cli,
    progress: Option<ProgressManager>,
}

impl MosaicPipeline {
    /// Create a pipeline driver from parsed CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = cli.should_show_progress().then(ProgressManager::new);
        Self { cli, progress }
    }

    /// Run every selected strategy over the collection
    ///
    /// Validation failures and an empty collection abort before any
    /// processing. After that, each strategy runs to completion in
    /// isolation; the first error is returned only if no strategy
    /// produced a mosaic.
    ///
    /// # Errors
    ///
    /// Returns an error for invalid configuration, an unreadable or empty
    /// collection directory, or when all strategies fail.
    pub fn run(&mut self) -> Result<()> {
        self.validate()?;

        let candidates = list_candidate_images(&self.cli.collection)?;
        if candidates.is_empty() {
            return Err(error::invalid_source(&format!(
                "no candidate images in '{}'",
                self.cli.collection.display()
            )));
        }

        let strategies: Vec<SortStrategy> = self
            .cli
            .strategy
            .map_or_else(|| SortStrategy::ALL.to_vec(), |s| vec![s.to_strategy()]);

        let mut first_error = None;
        let mut succeeded = 0usize;
        for strategy in strategies {
            match self.run_strategy(strategy, &candidates) {
                Ok(report) => {
                    succeeded += 1;
                    self.print_report(strategy, &report);
                }
                Err(e) => {
                    Self::print_failure(strategy, &e);
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }

        match (succeeded, first_error) {
            (0, Some(e)) => Err(e),
            _ => Ok(()),
        }
    }

    fn validate(&self) -> Result<()> {
        if !self.cli.collection.is_dir() {
            return Err(error::invalid_parameter(
                "collection",
                &self.cli.collection.display(),
                &"must be an existing directory",
            ));
        }
        if self.cli.clusters == 0 {
            return Err(error::invalid_parameter(
                "clusters",
                &self.cli.clusters,
                &"must be at least 1",
            ));
        }
        self.cli.compositor_options().validate()
    }

    fn run_strategy(&mut self, strategy: SortStrategy, candidates: &[PathBuf]) -> Result<StrategyReport> {
        if let Some(ref mut pm) = self.progress {
            pm.start_strategy(strategy.label(), candidates.len());
        }

        let result = self.build_strategy(strategy, candidates);

        if let Some(ref mut pm) = self.progress {
            pm.finish_strategy();
        }
        result
    }

    fn build_strategy(
        &self,
        strategy: SortStrategy,
        candidates: &[PathBuf],
    ) -> Result<StrategyReport> {
        let features = self.cli.feature_options();
        let progress = self.progress.as_ref();
        let outcome = ranking::rank_images(candidates, strategy, &features, load_rgb, |id| {
            if let Some(pm) = progress {
                pm.image_started(id);
            }
        });

        if outcome.ranked.is_empty() {
            return Err(error::invalid_source(&"every candidate image failed to load"));
        }

        let spec = GridSpec::for_tile_count(outcome.ranked.len())?;
        let options = self.cli.compositor_options();
        let composed = compositor::composite(&outcome.ranked, &spec, &options, load_rgb)?;

        let output = self.output_path(strategy);
        save_canvas(&composed.canvas, &output)?;

        let mut skipped = outcome.skipped;
        skipped.extend(composed.skipped);
        Ok(StrategyReport {
            output,
            placed: composed.placed,
            skipped,
        })
    }

    fn output_path(&self, strategy: SortStrategy) -> PathBuf {
        self.cli
            .output_dir
            .join(format!("{OUTPUT_PREFIX}_{}.png", strategy.label()))
    }

    // Allow print for the post-run summary shown to the user
    #[allow(clippy::print_stdout)]
    fn print_report(&self, strategy: SortStrategy, report: &StrategyReport) {
        if self.cli.quiet {
            return;
        }
        println!(
            "{}: {} tiles placed -> {}",
            strategy.label(),
            report.placed,
            report.output.display()
        );
        if !report.skipped.is_empty() {
            println!(
                "  skipped {} image(s): {}",
                report.skipped.len(),
                report.skipped.join(", ")
            );
        }
    }

    // Failures are always surfaced, even in quiet mode
    #[allow(clippy::print_stderr)]
    fn print_failure(strategy: SortStrategy, failure: &MosaicError) {
        eprintln!("Strategy '{}' failed: {failure}", strategy.label());
    }
}
