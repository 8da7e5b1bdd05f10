//! Metrics report written next to each exported mesh.

use crate::error::ReliefResult;
use crate::mesh::CylinderMesh;
use crate::params::PhysicalParams;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Output format of the metrics report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MetricsFormat {
    /// Six `Label: value` lines.
    #[default]
    Text,
    /// Pretty-printed JSON object.
    Json,
}

impl MetricsFormat {
    /// File extension conventionally used for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            MetricsFormat::Text => "txt",
            MetricsFormat::Json => "json",
        }
    }
}

/// Summary of one conversion.
///
/// # Example
///
/// ```rust
/// use relief_mesh::export::MeshMetrics;
///
/// let metrics = MeshMetrics {
///     width: 3,
///     height: 2,
///     cylinder_height: 0.038,
///     radius: 0.5,
///     vertex_count: 6,
///     triangle_count: 6,
///     file_size: 420,
/// };
/// assert!(metrics.to_string().starts_with("Image size: 3x2\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeshMetrics {
    /// Image width in pixels.
    pub width: usize,
    /// Image height in pixels.
    pub height: usize,
    /// Axial length of the cylinder.
    pub cylinder_height: f64,
    /// Undisplaced cylinder radius.
    pub radius: f64,
    /// Number of vertices written.
    pub vertex_count: usize,
    /// Number of triangles written.
    pub triangle_count: usize,
    /// Size of the exported mesh file in bytes.
    pub file_size: u64,
}

impl MeshMetrics {
    /// Gathers metrics for a mesh exported to a file of `file_size` bytes.
    pub fn collect(mesh: &CylinderMesh, params: &PhysicalParams, file_size: u64) -> Self {
        let index = mesh.grid_index();
        Self {
            width: index.width(),
            height: index.height(),
            cylinder_height: params.cylinder_height(index.height()),
            radius: params.radius(),
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            file_size,
        }
    }

    /// Renders the report in the requested format.
    pub fn render(&self, format: MetricsFormat) -> ReliefResult<String> {
        match format {
            MetricsFormat::Text => Ok(self.to_string()),
            MetricsFormat::Json => {
                let mut json = serde_json::to_string_pretty(self)?;
                json.push('\n');
                Ok(json)
            }
        }
    }
}

impl fmt::Display for MeshMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image size: {}x{}", self.width, self.height)?;
        writeln!(f, "Cylinder height: {:?}", self.cylinder_height)?;
        writeln!(f, "Cylinder radius: {:?}", self.radius)?;
        writeln!(f, "Total number of vertices: {}", self.vertex_count)?;
        writeln!(f, "Total number of triangles: {}", self.triangle_count)?;
        writeln!(f, "Total file size: {} bytes", self.file_size)
    }
}

/// Writes the metrics report to `path`.
pub fn export_metrics(metrics: &MeshMetrics, path: &Path, format: MetricsFormat) -> ReliefResult<()> {
    fs::write(path, metrics.render(format)?)?;
    tracing::info!(path = %path.display(), ?format, "wrote metrics report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::IntensityGrid;
    use crate::projector::project;
    use crate::topology::build_triangles;

    fn sample() -> MeshMetrics {
        let grid = IntensityGrid::filled(4, 3, 0.0).unwrap();
        let params = PhysicalParams::new(1.0, 0.1, 0.5).unwrap();
        let arena = project(&grid, &params).unwrap();
        let mesh = CylinderMesh::assemble(arena, build_triangles(4, 3).unwrap()).unwrap();
        MeshMetrics::collect(&mesh, &params, 1234)
    }

    #[test]
    fn test_collect() {
        let metrics = sample();
        assert_eq!((metrics.width, metrics.height), (3, 4));
        assert_eq!(metrics.cylinder_height, 2.0);
        assert_eq!(metrics.radius, 1.0);
        assert_eq!(metrics.vertex_count, 12);
        assert_eq!(metrics.triangle_count, 18);
        assert_eq!(metrics.file_size, 1234);
    }

    #[test]
    fn test_text_report_layout() {
        let text = sample().render(MetricsFormat::Text).unwrap();
        assert_eq!(
            text,
            "Image size: 3x4\n\
             Cylinder height: 2.0\n\
             Cylinder radius: 1.0\n\
             Total number of vertices: 12\n\
             Total number of triangles: 18\n\
             Total file size: 1234 bytes\n"
        );
    }

    #[test]
    fn test_json_report_fields() {
        let json = sample().render(MetricsFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 3);
        assert_eq!(value["triangle_count"], 18);
        assert_eq!(value["file_size"], 1234);
    }

    #[test]
    fn test_export_metrics_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ring.txt");
        export_metrics(&sample(), &path, MetricsFormat::Text).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Total number of vertices: 12"));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(MetricsFormat::Text.extension(), "txt");
        assert_eq!(MetricsFormat::Json.extension(), "json");
    }
}
