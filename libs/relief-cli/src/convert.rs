//! Single-file conversion: load, convert, export.

use anyhow::{Context, Result};
use config::constants::ReliefConfig;
use relief_mesh::export::{export_metrics, export_obj, MeshMetrics, MetricsFormat};
use relief_mesh::loader::load_heightmap;
use relief_mesh::{convert_with_params, PhysicalParams, ProjectionMode};
use std::path::{Path, PathBuf};

/// Settings shared by every conversion in a batch.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: ReliefConfig,
    pub mode: ProjectionMode,
    pub metrics_format: MetricsFormat,
    pub output_dir: Option<PathBuf>,
}

/// Where the mesh and report for `input` are written.
pub fn output_paths(
    input: &Path,
    output_dir: Option<&Path>,
    format: MetricsFormat,
) -> (PathBuf, PathBuf) {
    let dir = output_dir
        .map(Path::to_path_buf)
        .or_else(|| input.parent().map(Path::to_path_buf))
        .unwrap_or_default();
    let stem = input.file_stem().unwrap_or(input.as_os_str());
    let named = |extension: &str| {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(extension);
        dir.join(name)
    };

    (named("obj"), named(format.extension()))
}

/// Converts one heightmap image and writes its mesh and metrics report.
pub fn convert_file(input: &Path, settings: &Settings) -> Result<MeshMetrics> {
    let grid = load_heightmap(input)
        .with_context(|| format!("Failed to load heightmap: {}", input.display()))?;

    let params = PhysicalParams::for_width(grid.width(), &settings.config)
        .with_context(|| format!("Invalid parameters for {}", input.display()))?;
    let mesh = convert_with_params(&grid, &params, settings.mode)
        .with_context(|| format!("Failed to build mesh for {}", input.display()))?;

    let (mesh_path, report_path) =
        output_paths(input, settings.output_dir.as_deref(), settings.metrics_format);
    let file_size = export_obj(&mesh, &mesh_path)
        .with_context(|| format!("Failed to write mesh: {}", mesh_path.display()))?;

    let metrics = MeshMetrics::collect(&mesh, &params, file_size);
    export_metrics(&metrics, &report_path, settings.metrics_format)
        .with_context(|| format!("Failed to write report: {}", report_path.display()))?;

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_next_to_input() {
        let (mesh, report) = output_paths(Path::new("scans/ring.png"), None, MetricsFormat::Text);
        assert_eq!(mesh, PathBuf::from("scans/ring.obj"));
        assert_eq!(report, PathBuf::from("scans/ring.txt"));
    }

    #[test]
    fn test_output_paths_in_output_dir() {
        let (mesh, report) = output_paths(
            Path::new("scans/ring.jpeg"),
            Some(Path::new("out")),
            MetricsFormat::Json,
        );
        assert_eq!(mesh, PathBuf::from("out/ring.obj"));
        assert_eq!(report, PathBuf::from("out/ring.json"));
    }

    #[test]
    fn test_output_paths_keep_inner_dots() {
        let (mesh, _) = output_paths(Path::new("ring.v2.png"), None, MetricsFormat::Text);
        assert_eq!(mesh, PathBuf::from("ring.v2.obj"));
    }

    #[test]
    fn test_output_paths_bare_file_name() {
        let (mesh, _) = output_paths(Path::new("ring.png"), None, MetricsFormat::Text);
        assert_eq!(mesh, PathBuf::from("ring.obj"));
    }
}
