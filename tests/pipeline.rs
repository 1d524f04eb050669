//! End-to-end pipeline scenarios over real temporary directories

use covermosaic::analysis::features::{FeatureOptions, SortStrategy};
use covermosaic::analysis::ranking;
use covermosaic::io::cli::{Cli, MosaicPipeline, StrategyArg};
use covermosaic::io::image::{list_candidate_images, load_rgb};
use image::{Rgb, RgbImage};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_gray_cover(directory: &Path, name: &str, level: u8) {
    let image = RgbImage::from_pixel(6, 6, Rgb([level, level, level]));
    image.save(directory.join(name)).unwrap();
}

fn cli_for(collection: &Path, output: &Path, strategy: Option<StrategyArg>) -> Cli {
    Cli {
        collection: collection.to_path_buf(),
        output_dir: output.to_path_buf(),
        tile_width: 10,
        tile_height: 10,
        spacing: 0,
        clusters: 1,
        seed: 0,
        strategy,
        background: vec![128, 128, 128],
        quiet: true,
    }
}

#[test]
fn test_luminance_mosaic_orders_tiles_left_to_right_top_to_bottom() {
    let covers = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    // Names deliberately reverse the luminance order so sorting must reorder
    write_gray_cover(covers.path(), "1.png", 200);
    write_gray_cover(covers.path(), "2.png", 120);
    write_gray_cover(covers.path(), "3.png", 60);
    write_gray_cover(covers.path(), "4.png", 10);

    let cli = cli_for(covers.path(), output.path(), Some(StrategyArg::Luminance));
    MosaicPipeline::new(cli).run().unwrap();

    let mosaic_path = output.path().join("mosaic_luminance.png");
    let mosaic = image::open(&mosaic_path).unwrap().to_rgb8();

    // 4 tiles in a 2x2 grid of 10x10 cells with no spacing
    assert_eq!(mosaic.dimensions(), (20, 20));
    assert_eq!(mosaic.get_pixel(5, 5), &Rgb([10, 10, 10]));
    assert_eq!(mosaic.get_pixel(15, 5), &Rgb([60, 60, 60]));
    assert_eq!(mosaic.get_pixel(5, 15), &Rgb([120, 120, 120]));
    assert_eq!(mosaic.get_pixel(15, 15), &Rgb([200, 200, 200]));
}

#[test]
fn test_all_strategies_write_distinct_outputs() {
    let covers = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    write_gray_cover(covers.path(), "10.png", 40);
    write_gray_cover(covers.path(), "11.jpg", 90);
    write_gray_cover(covers.path(), "12.jpeg", 160);

    let cli = cli_for(covers.path(), output.path(), None);
    MosaicPipeline::new(cli).run().unwrap();

    for name in [
        "mosaic_luminance.png",
        "mosaic_saturation.png",
        "mosaic_dominant_color.png",
    ] {
        assert!(output.path().join(name).exists(), "{name} should exist");
    }
}

#[test]
fn test_empty_collection_fails_fast_with_no_output() {
    let covers = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    let cli = cli_for(covers.path(), output.path(), Some(StrategyArg::Luminance));
    let result = MosaicPipeline::new(cli).run();

    assert!(result.is_err());
    assert!(!output.path().join("mosaic_luminance.png").exists());
}

#[test]
fn test_non_image_files_and_subdirectories_are_ignored() {
    let covers = TempDir::new().unwrap();

    write_gray_cover(covers.path(), "5.png", 100);
    fs::write(covers.path().join("notes.txt"), "not an image").unwrap();
    fs::create_dir(covers.path().join("nested")).unwrap();
    write_gray_cover(&covers.path().join("nested"), "6.png", 100);

    let candidates = list_candidate_images(covers.path()).unwrap();
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates, vec![covers.path().join("5.png")]);
}

#[test]
fn test_corrupt_image_is_skipped_and_reported() {
    let covers = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();

    write_gray_cover(covers.path(), "1.png", 20);
    write_gray_cover(covers.path(), "2.png", 70);
    write_gray_cover(covers.path(), "3.png", 130);
    write_gray_cover(covers.path(), "4.png", 220);
    fs::write(covers.path().join("999.png"), b"definitely not a png").unwrap();

    // The ranking stage records the corrupt id and keeps the batch alive
    let candidates = list_candidate_images(covers.path()).unwrap();
    let outcome = ranking::rank_images(
        &candidates,
        SortStrategy::Luminance,
        &FeatureOptions::default(),
        load_rgb,
        |_| {},
    );
    assert_eq!(outcome.ranked.len(), 4);
    assert_eq!(outcome.skipped, vec!["999".to_string()]);

    // The full pipeline still produces a mosaic from the valid four
    let cli = cli_for(covers.path(), output.path(), Some(StrategyArg::Luminance));
    MosaicPipeline::new(cli).run().unwrap();

    let mosaic = image::open(output.path().join("mosaic_luminance.png"))
        .unwrap()
        .to_rgb8();
    assert_eq!(mosaic.dimensions(), (20, 20));
}

#[test]
fn test_missing_collection_directory_is_invalid() {
    let output = TempDir::new().unwrap();
    let cli = cli_for(
        &PathBuf::from("does/not/exist"),
        output.path(),
        Some(StrategyArg::Luminance),
    );
    assert!(MosaicPipeline::new(cli).run().is_err());
}

#[test]
fn test_invalid_geometry_is_rejected_before_processing() {
    let covers = TempDir::new().unwrap();
    let output = TempDir::new().unwrap();
    write_gray_cover(covers.path(), "1.png", 50);

    let mut flat_tiles = cli_for(covers.path(), output.path(), Some(StrategyArg::Luminance));
    flat_tiles.tile_height = 0;
    assert!(MosaicPipeline::new(flat_tiles).run().is_err());
    assert!(!output.path().join("mosaic_luminance.png").exists());

    let mut no_clusters = cli_for(covers.path(), output.path(), Some(StrategyArg::DominantColor));
    no_clusters.clusters = 0;
    assert!(MosaicPipeline::new(no_clusters).run().is_err());
}
