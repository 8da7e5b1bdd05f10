//! # Cylindrical Projector
//!
//! Maps every grid cell to a vertex on a cylinder around the Z axis. Columns
//! walk the circumference, rows walk the axis, and intensity carves the
//! surface inward along the radial direction.
//!
//! Column `0` and column `width - 1` land on the same angle (`0` and `2π`),
//! so the last column duplicates the first. The topology builder closes the
//! seam by connecting those two columns.
//!
//! Normals are the analytic normals of the undisplaced cylinder,
//! `(cos θ, sin θ, 0)`. They are not recomputed from the carved surface;
//! shading is approximate on steep carvings.

use crate::error::ReliefResult;
use crate::grid::IntensityGrid;
use crate::mesh::{Vertex, VertexArena};
use crate::params::PhysicalParams;
use glam::{DVec2, DVec3};
use rayon::prelude::*;
use std::f64::consts::TAU;

/// Execution strategy for the projection.
///
/// Both strategies produce bit-identical output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProjectionMode {
    /// Single-threaded, row by row.
    #[default]
    Sequential,
    /// Rows partitioned across the rayon thread pool.
    Parallel,
}

/// Projects a grid onto the cylinder described by `params`.
///
/// # Example
///
/// ```rust
/// use relief_mesh::{project, IntensityGrid, PhysicalParams};
///
/// let grid = IntensityGrid::filled(2, 3, 0.0).unwrap();
/// let params = PhysicalParams::new(1.0, 0.1, 0.019).unwrap();
/// let arena = project(&grid, &params).unwrap();
/// let v = arena.vertex(0, 0);
/// assert!((v.position.x - 1.0).abs() < 1e-12);
/// ```
pub fn project(grid: &IntensityGrid, params: &PhysicalParams) -> ReliefResult<VertexArena> {
    project_with(grid, params, ProjectionMode::Sequential)
}

/// Projects a grid with rows distributed across worker threads.
pub fn project_parallel(
    grid: &IntensityGrid,
    params: &PhysicalParams,
) -> ReliefResult<VertexArena> {
    project_with(grid, params, ProjectionMode::Parallel)
}

/// Projects a grid using the requested execution strategy.
///
/// Grids and parameters are validated on construction, so this currently
/// always returns `Ok`. The `Result` is kept so later checks do not change
/// the signature.
pub fn project_with(
    grid: &IntensityGrid,
    params: &PhysicalParams,
    mode: ProjectionMode,
) -> ReliefResult<VertexArena> {
    let index = grid.grid_index();
    let count = index.vertex_count();

    tracing::debug!(
        height = index.height(),
        width = index.width(),
        radius = params.radius(),
        max_depth = params.max_depth(),
        ?mode,
        "projecting heightmap onto cylinder"
    );

    let mut positions = vec![DVec3::ZERO; count];
    let mut uvs = vec![DVec2::ZERO; count];
    let mut normals = vec![DVec3::ZERO; count];

    let width = index.width();
    let fill_row = |row: usize, positions: &mut [DVec3], uvs: &mut [DVec2], normals: &mut [DVec3]| {
        for col in 0..width {
            let v = project_cell(grid, params, row, col);
            positions[col] = v.position;
            uvs[col] = v.uv;
            normals[col] = v.normal;
        }
    };

    match mode {
        ProjectionMode::Sequential => {
            positions
                .chunks_mut(width)
                .zip(uvs.chunks_mut(width))
                .zip(normals.chunks_mut(width))
                .enumerate()
                .for_each(|(row, ((p, u), n))| fill_row(row, p, u, n));
        }
        ProjectionMode::Parallel => {
            positions
                .par_chunks_mut(width)
                .zip(uvs.par_chunks_mut(width))
                .zip(normals.par_chunks_mut(width))
                .enumerate()
                .for_each(|(row, ((p, u), n))| fill_row(row, p, u, n));
        }
    }

    tracing::debug!(vertices = count, "projection complete");
    Ok(VertexArena::from_parts(index, positions, uvs, normals))
}

/// Angle of column `col` in a grid `width` columns wide.
///
/// Divides by `width - 1`, so the last column sits at `2π`. Callers pass a
/// validated width of at least 2.
#[inline]
pub(crate) fn column_angle(col: usize, width: usize) -> f64 {
    (col as f64 * TAU) / (width - 1) as f64
}

/// Computes the vertex for a single cell.
pub fn project_cell(
    grid: &IntensityGrid,
    params: &PhysicalParams,
    row: usize,
    col: usize,
) -> Vertex {
    let (height, width) = (grid.height(), grid.width());
    let radius = params.radius();

    let theta = column_angle(col, width);
    let (sin, cos) = theta.sin_cos();
    let world_z = (row as f64 / (height - 1) as f64) * params.cylinder_height(height);

    let base = DVec2::new(radius * cos, radius * sin);
    let length = base.length();
    let depth_offset = grid.get(row, col) * params.max_depth();

    let carved = if length > 0.0 {
        base * ((radius - depth_offset) / length)
    } else {
        base
    };

    Vertex {
        position: carved.extend(world_z),
        uv: DVec2::new(
            col as f64 / (width - 1) as f64,
            row as f64 / (height - 1) as f64,
        ),
        normal: DVec3::new(cos, sin, 0.0),
    }
}
