//! Traffic-signal intersection finder
//!
//! Reads a city's traffic signals from CSV, clusters them into intersections,
//! labels each intersection by its roads and writes `manifest.json`.

use clap::Parser;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use signal_intersections::cluster::SelfMatch;
use signal_intersections::cluster::candidate::DEFAULT_PROXIMITY;
use signal_intersections::cluster::dbscan::{DEFAULT_EPS, DEFAULT_MIN_POINTS};
use signal_intersections::manifest::ImageNamer;
use signal_intersections::source::{CsvRoadIndex, CsvSignalSource, SignalSource};
use signal_intersections::{PipelineConfig, Report, Result, build_manifest, find_intersections};


#[derive(Parser)]
#[command(name = "signal_intersections")]
#[command(about = "Finds interesting traffic-signal intersections in a city", long_about = None)]
struct Args {
    /// City to search
    #[arg(default_value = "Baltimore")]
    city: String,

    /// Number of intersections to label
    #[arg(default_value_t = 100)]
    count: usize,

    /// CSV file with latitude,longitude[,city] signal rows
    #[arg(long, default_value = "signals.csv")]
    signals: PathBuf,

    /// CSV file with latitude,longitude,name road samples
    #[arg(long, default_value = "roads.csv")]
    roads: PathBuf,

    /// Manifest file to write
    #[arg(short, long, default_value = "manifest.json")]
    output: PathBuf,

    /// Seed for image filename suffixes
    #[arg(long)]
    seed: Option<u64>,

    /// DBSCAN epsilon parameter (clustering radius in degrees)
    #[arg(short, long, default_value_t = DEFAULT_EPS)]
    eps: f64,

    /// DBSCAN minPoints parameter (minimum points in cluster)
    #[arg(short = 'm', long, default_value_t = DEFAULT_MIN_POINTS)]
    min_points: usize,

    /// Distance in degrees under which two signals are neighbours
    #[arg(short, long, default_value_t = DEFAULT_PROXIMITY)]
    proximity: f64,

    /// Never pair signals sitting at the exact same coordinate
    #[arg(long)]
    mask_duplicates: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            proximity: self.proximity,
            self_match: if self.mask_duplicates {
                SelfMatch::MaskNearZero
            } else {
                SelfMatch::ByIndex
            },
            eps: self.eps,
            min_points: self.min_points,
            ..PipelineConfig::default()
        }
    }
}

fn main() {
    let args = Args::parse();

    let default_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    if let Err(e) = run(&args) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<Report> {
    let config = args.config();
    config.validate()?;

    info!("Finding interesting intersections in {}...", args.city);
    let signals = CsvSignalSource::new(&args.signals).signals(&args.city)?;
    let centroids = find_intersections(&signals, &config);

    let roads = CsvRoadIndex::open(&args.roads)?;
    let mut namer = ImageNamer::new(args.seed);
    let report = build_manifest(
        &args.city,
        &centroids,
        args.count,
        &roads,
        &mut namer,
        &config,
    );

    report.manifest.save(&args.output)?;
    info!(
        images = report.manifest.images.len(),
        failed = report.failures.len(),
        path = ?args.output,
        "wrote manifest"
    );
    Ok(report)
}
