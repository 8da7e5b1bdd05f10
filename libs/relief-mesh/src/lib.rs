//! # Relief Mesh
//!
//! Converts a single-channel heightmap into a cylindrical relief mesh.
//! Each pixel row becomes a ring around the cylinder and each pixel's
//! intensity is carved inward as radial depth.
//!
//! ## Architecture
//!
//! ```text
//! image (loader) → IntensityGrid → projector → VertexArena ┐
//!                       (H, W) → topology  → triangles    ┴→ CylinderMesh → export (OBJ + metrics)
//! ```
//!
//! The vertex projected from cell `(row, col)` has index `row * width + col`,
//! and the topology builder emits triangles against that same index function
//! ([`GridIndex`]). The two stages never exchange anything except the grid
//! dimensions.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::ReliefConfig;
//! use relief_mesh::{convert, IntensityGrid, ProjectionMode};
//!
//! let grid = IntensityGrid::filled(4, 8, 0.5).unwrap();
//! let mesh = convert(&grid, &ReliefConfig::default(), ProjectionMode::Sequential).unwrap();
//! assert_eq!(mesh.vertex_count(), 32);
//! assert_eq!(mesh.triangle_count(), 2 * 3 * 8);
//! ```

pub mod error;
pub mod export;
pub mod grid;
#[cfg(feature = "image-loader")]
pub mod loader;
pub mod mesh;
pub mod params;
pub mod projector;
pub mod topology;

pub use error::{ReliefError, ReliefResult};
pub use grid::{GridIndex, IntensityGrid};
pub use mesh::{CylinderMesh, Vertex, VertexArena};
pub use params::PhysicalParams;
pub use projector::{project, project_parallel, project_with, ProjectionMode};
pub use topology::build_triangles;

use config::constants::ReliefConfig;

/// Converts one intensity grid into a cylinder mesh.
///
/// Derives the physical parameters from the grid width and `config`, then
/// projects the vertices and builds the topology. All validation happens
/// before any vertex is produced.
pub fn convert(
    grid: &IntensityGrid,
    config: &ReliefConfig,
    mode: ProjectionMode,
) -> ReliefResult<CylinderMesh> {
    let params = PhysicalParams::for_width(grid.width(), config)?;
    convert_with_params(grid, &params, mode)
}

/// Converts one intensity grid using explicit physical parameters.
pub fn convert_with_params(
    grid: &IntensityGrid,
    params: &PhysicalParams,
    mode: ProjectionMode,
) -> ReliefResult<CylinderMesh> {
    let arena = project_with(grid, params, mode)?;
    let triangles = build_triangles(grid.height(), grid.width())?;
    let mesh = CylinderMesh::assemble(arena, triangles)?;

    tracing::debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "assembled cylinder mesh"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::constants::{DepthMode, PIXEL_SIZE};

    #[test]
    fn test_convert_default_config() {
        let grid = IntensityGrid::filled(3, 10, 1.0).unwrap();
        let config = ReliefConfig::default();
        let mesh = convert(&grid, &config, ProjectionMode::Sequential).unwrap();
        let params = PhysicalParams::for_width(10, &config).unwrap();
        mesh.validate(&params).unwrap();
        assert_eq!(mesh.vertex_count(), 30);
        assert_eq!(mesh.triangle_count(), 40);
    }

    #[test]
    fn test_convert_modes_agree() {
        let values: Vec<f64> = (0..5 * 6).map(|i| (i % 4) as f64 / 3.0).collect();
        let grid = IntensityGrid::new(5, 6, values).unwrap();
        let config = ReliefConfig::default();
        let sequential = convert(&grid, &config, ProjectionMode::Sequential).unwrap();
        let parallel = convert(&grid, &config, ProjectionMode::Parallel).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_convert_rejects_depth_beyond_radius() {
        let grid = IntensityGrid::filled(2, 2, 0.0).unwrap();
        let config = ReliefConfig::new(PIXEL_SIZE, DepthMode::Absolute(1.0)).unwrap();
        let err = convert(&grid, &config, ProjectionMode::Sequential).unwrap_err();
        assert!(matches!(err, ReliefError::InvalidPhysicalParams { .. }));
    }

    #[test]
    fn test_convert_with_explicit_params() {
        let grid = IntensityGrid::filled(2, 3, 0.0).unwrap();
        let params = PhysicalParams::new(1.0, 0.1, 0.019).unwrap();
        let mesh = convert_with_params(&grid, &params, ProjectionMode::Sequential).unwrap();
        assert_eq!(mesh.triangle_count(), 6);
        mesh.validate(&params).unwrap();
    }
}
