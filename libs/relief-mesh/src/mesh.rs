//! # Mesh Data Structure
//!
//! Row-major vertex arena produced by the projector, and the assembled
//! cylinder mesh handed to the exporter.

use crate::error::{ReliefError, ReliefResult};
use crate::grid::GridIndex;
use crate::params::PhysicalParams;
use crate::topology;
use config::constants::RADIAL_TOLERANCE;
use glam::{DVec2, DVec3};

/// One projected vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Carved position on the cylinder.
    pub position: DVec3,
    /// Texture coordinate in `[0, 1]^2`.
    pub uv: DVec2,
    /// Outward normal of the undisplaced cylinder.
    pub normal: DVec3,
}

/// Parallel per-vertex arrays indexed by [`GridIndex::index`].
///
/// All geometry calculations use f64. Arrays are filled once by the
/// projector and never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexArena {
    index: GridIndex,
    positions: Vec<DVec3>,
    uvs: Vec<DVec2>,
    normals: Vec<DVec3>,
}

impl VertexArena {
    pub(crate) fn from_parts(
        index: GridIndex,
        positions: Vec<DVec3>,
        uvs: Vec<DVec2>,
        normals: Vec<DVec3>,
    ) -> Self {
        Self {
            index,
            positions,
            uvs,
            normals,
        }
    }

    /// Grid dimensions the arena was projected from.
    #[inline]
    pub fn grid_index(&self) -> GridIndex {
        self.index
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns true if the arena holds no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex projected from cell `(row, col)`.
    #[inline]
    pub fn vertex(&self, row: usize, col: usize) -> Vertex {
        let i = self.index.index(row, col) as usize;
        Vertex {
            position: self.positions[i],
            uv: self.uvs[i],
            normal: self.normals[i],
        }
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        &self.uvs
    }

    /// Vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }
}

/// A carved, open-ended cylinder: projected vertices plus triangle indices.
///
/// # Example
///
/// ```rust
/// use relief_mesh::{project, build_triangles, CylinderMesh, IntensityGrid, PhysicalParams};
///
/// let grid = IntensityGrid::filled(2, 3, 0.0).unwrap();
/// let params = PhysicalParams::new(1.0, 0.1, 0.019).unwrap();
/// let arena = project(&grid, &params).unwrap();
/// let triangles = build_triangles(2, 3).unwrap();
/// let mesh = CylinderMesh::assemble(arena, triangles).unwrap();
/// assert_eq!(mesh.vertex_count(), 6);
/// assert_eq!(mesh.triangle_count(), 6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CylinderMesh {
    arena: VertexArena,
    triangles: Vec<[u32; 3]>,
}

impl CylinderMesh {
    /// Joins an arena with its triangle list.
    ///
    /// Checks that the three vertex arrays match the grid size and that every
    /// triangle index addresses an existing vertex.
    pub fn assemble(arena: VertexArena, triangles: Vec<[u32; 3]>) -> ReliefResult<Self> {
        let expected = arena.index.vertex_count();
        let lengths = [arena.positions.len(), arena.uvs.len(), arena.normals.len()];
        if lengths.iter().any(|&len| len != expected) {
            return Err(ReliefError::validation(format!(
                "vertex arrays must all hold {expected} entries, got positions={}, uvs={}, normals={}",
                lengths[0], lengths[1], lengths[2]
            )));
        }

        let vertex_count = expected as u32;
        if let Some((t, tri)) = triangles
            .iter()
            .enumerate()
            .find(|(_, tri)| tri.iter().any(|&i| i >= vertex_count))
        {
            return Err(ReliefError::validation(format!(
                "triangle {t} {tri:?} references a vertex outside 0..{vertex_count}"
            )));
        }

        Ok(Self { arena, triangles })
    }

    /// Checks the geometric invariants against the parameters used to build it.
    ///
    /// - triangle count is `2 * (height - 1) * width`
    /// - every vertex lies `radius - max_depth <= |(x, y)| <= radius`
    pub fn validate(&self, params: &PhysicalParams) -> ReliefResult<()> {
        let index = self.arena.index;
        let expected = topology::triangle_count(index.height(), index.width());
        if self.triangles.len() != expected {
            return Err(ReliefError::validation(format!(
                "expected {expected} triangles for a {}x{} grid, got {}",
                index.height(),
                index.width(),
                self.triangles.len()
            )));
        }

        let slack = params.radius() * RADIAL_TOLERANCE;
        let inner = params.radius() - params.max_depth() - slack;
        let outer = params.radius() + slack;
        for (i, p) in self.arena.positions.iter().enumerate() {
            let r = p.truncate().length();
            if r < inner || r > outer {
                return Err(ReliefError::validation(format!(
                    "vertex {i} at radial distance {r} lies outside [{}, {}]",
                    params.radius() - params.max_depth(),
                    params.radius()
                )));
            }
        }
        Ok(())
    }

    /// Grid dimensions of the source heightmap.
    #[inline]
    pub fn grid_index(&self) -> GridIndex {
        self.arena.index
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Vertex projected from cell `(row, col)`.
    #[inline]
    pub fn vertex(&self, row: usize, col: usize) -> Vertex {
        self.arena.vertex(row, col)
    }

    /// Returns a reference to the vertex arena.
    #[inline]
    pub fn arena(&self) -> &VertexArena {
        &self.arena
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        self.arena.positions()
    }

    /// Texture coordinates.
    #[inline]
    pub fn uvs(&self) -> &[DVec2] {
        self.arena.uvs()
    }

    /// Vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        self.arena.normals()
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let positions = self.positions();
        let Some(&first) = positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        positions[1..]
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }
}
