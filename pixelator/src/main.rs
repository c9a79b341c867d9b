//! pixelator command-line interface
//!
//! Decodes each input image, runs the optional pre-processing filters,
//! feeds the result through every registered strategy, and assembles
//! one HTML document. A failure on one image is reported and skipped;
//! the rest of the batch still renders.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use pixelator::document::{document_shell, render_image_section};
use pixelator::io::{read_raster, DynamicRangeReduce, Filter};
use pixelator::strategy::{strategies, Options, DEFAULT_MIN_SIZE, DEFAULT_THRESHOLD};
use pixelator::PixelatorResult;
use pixelator_core::Raster;

#[derive(Parser, Debug)]
#[command(name = "pixelator", version, about = "Convert images into nested HTML table mosaics")]
struct Args {
    /// Input image files
    #[arg(required = true)]
    images: Vec<PathBuf>,

    /// Minimum block size: regions whose half-dimension would drop
    /// below this never split
    #[arg(long, default_value_t = DEFAULT_MIN_SIZE)]
    min_size: u32,

    /// Per-channel variance threshold; larger values produce coarser
    /// mosaics
    #[arg(long, default_value_t = DEFAULT_THRESHOLD, allow_hyphen_values = true)]
    threshold: i32,

    /// Apply dynamic range reduction before decomposing
    #[arg(long)]
    reduce_range: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn process_image(
    path: &Path,
    filters: &[Box<dyn Filter>],
    list: &[Box<dyn pixelator::Strategy>],
) -> PixelatorResult<String> {
    let mut raster: Raster = read_raster(path)?;
    for filter in filters {
        raster = filter.apply(&raster)?;
    }
    info!(
        "{}: {}x{} pixels",
        path.display(),
        raster.width(),
        raster.height()
    );
    render_image_section(&path.display().to_string(), &raster, list)
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut filters: Vec<Box<dyn Filter>> = Vec::new();
    if args.reduce_range {
        filters.push(Box::new(DynamicRangeReduce));
    }

    let options = Options {
        min_size: args.min_size,
        threshold: args.threshold,
    };
    let list = strategies(&options);

    let mut sections = String::new();
    let mut rendered = 0usize;
    for path in &args.images {
        match process_image(path, &filters, &list) {
            Ok(section) => {
                sections.push_str(&section);
                rendered += 1;
            }
            Err(err) => error!("{}: {}", path.display(), err),
        }
    }

    if rendered == 0 {
        error!("no image could be processed");
        return ExitCode::FAILURE;
    }

    let document = document_shell(&sections);
    match &args.output {
        Some(path) => {
            if let Err(err) = fs::write(path, &document) {
                error!("{}: {}", path.display(), err);
                return ExitCode::FAILURE;
            }
        }
        None => print!("{}", document),
    }

    ExitCode::SUCCESS
}
