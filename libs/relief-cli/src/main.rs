//! relief - cylindrical relief mesh generator
//!
//! Wraps heightmap images around a cylinder and writes carved OBJ meshes
//! (`<stem>.obj`) with a metrics report (`<stem>.txt` or `<stem>.json`).

mod convert;
mod discover;

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use config::constants::{DepthMode, ReliefConfig, DEPTH_FACTOR, PIXEL_SIZE};
use relief_mesh::export::MetricsFormat;
use relief_mesh::ProjectionMode;
use std::path::PathBuf;

use crate::convert::{convert_file, Settings};

#[derive(Parser)]
#[command(name = "relief")]
#[command(about = "Wrap heightmap images around a cylinder as carved OBJ meshes")]
#[command(version)]
struct Cli {
    /// Heightmap images to convert (PNG/JPEG). Scans --input-dir when empty.
    inputs: Vec<PathBuf>,

    /// Directory scanned for images when no inputs are given
    #[arg(long, default_value = ".")]
    input_dir: PathBuf,

    /// Output directory (defaults to each input's directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Physical size of one pixel
    #[arg(long, default_value_t = PIXEL_SIZE)]
    pixel_size: f64,

    /// Maximum carve depth as a fraction of the cylinder radius
    #[arg(long, default_value_t = DEPTH_FACTOR, conflicts_with = "depth")]
    depth_fraction: f64,

    /// Maximum carve depth as an absolute length
    #[arg(long)]
    depth: Option<f64>,

    /// Project rows in parallel
    #[arg(long)]
    parallel: bool,

    /// Format of the metrics report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    metrics_format: ReportFormat,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
}

impl From<ReportFormat> for MetricsFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Text => MetricsFormat::Text,
            ReportFormat::Json => MetricsFormat::Json,
        }
    }
}

impl Cli {
    fn settings(&self) -> Result<Settings> {
        let depth = match self.depth {
            Some(depth) => DepthMode::Absolute(depth),
            None => DepthMode::FractionOfRadius(self.depth_fraction),
        };
        Ok(Settings {
            config: ReliefConfig::new(self.pixel_size, depth)?,
            mode: if self.parallel {
                ProjectionMode::Parallel
            } else {
                ProjectionMode::Sequential
            },
            metrics_format: self.metrics_format.into(),
            output_dir: self.output_dir.clone(),
        })
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let settings = cli.settings()?;
    tracing::debug!(
        pixel_size = settings.config.pixel_size,
        depth = %settings.config.depth,
        mode = ?settings.mode,
        "resolved settings"
    );

    let inputs = if cli.inputs.is_empty() {
        discover::find_heightmaps(&cli.input_dir)?
    } else {
        cli.inputs.clone()
    };
    if inputs.is_empty() {
        bail!("No heightmap images found in {}", cli.input_dir.display());
    }

    for (i, input) in inputs.iter().enumerate() {
        tracing::info!("[{}/{}] Converting {}", i + 1, inputs.len(), input.display());
        let metrics = convert_file(input, &settings)?;
        tracing::info!(
            "{}x{} -> {} vertices, {} triangles, {} bytes",
            metrics.width,
            metrics.height,
            metrics.vertex_count,
            metrics.triangle_count,
            metrics.file_size
        );
    }

    tracing::info!("Converted {} heightmap(s)", inputs.len());
    Ok(())
}
