//! CLI entry point for the album-cover mosaic generator

use clap::Parser;
use covermosaic::io::cli::{Cli, MosaicPipeline};

fn main() -> covermosaic::Result<()> {
    let cli = Cli::parse();
    let mut pipeline = MosaicPipeline::new(cli);
    pipeline.run()
}
