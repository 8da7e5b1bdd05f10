//! # Mesh Topology
//!
//! Triangle list connecting the projected vertices of an `height x width`
//! grid into an open tube.
//!
//! Every quad between rows `y` and `y + 1` is split along the fixed
//! `v0-v3` diagonal; no diagonal is chosen from the carved heights. The
//! seam band joins column `width - 1` back to column `0`. Both bands are
//! wound counter-clockwise seen from outside the cylinder. No end caps are
//! generated.
//!
//! Because the last column duplicates the first, seam triangles collapse to
//! zero area wherever the two columns carry the same intensity.

use crate::error::ReliefResult;
use crate::grid::GridIndex;

/// Number of triangles produced for a grid: `2 * (height - 1) * width`.
///
/// # Example
///
/// ```rust
/// use relief_mesh::topology::triangle_count;
///
/// assert_eq!(triangle_count(2, 2), 4);
/// assert_eq!(triangle_count(2, 3), 6);
/// ```
#[inline]
pub fn triangle_count(height: usize, width: usize) -> usize {
    2 * height.saturating_sub(1) * width
}

/// Builds the ordered triangle list for a `height x width` grid.
///
/// Interior triangles come first in row-major quad order, followed by the
/// seam triangles row by row.
///
/// # Example
///
/// ```rust
/// use relief_mesh::build_triangles;
///
/// let triangles = build_triangles(2, 2).unwrap();
/// assert_eq!(triangles, vec![[0, 1, 3], [0, 3, 2], [1, 0, 2], [1, 2, 3]]);
/// ```
pub fn build_triangles(height: usize, width: usize) -> ReliefResult<Vec<[u32; 3]>> {
    let index = GridIndex::new(height, width)?;
    let mut triangles = Vec::with_capacity(triangle_count(height, width));

    for y in 0..height - 1 {
        for x in 0..width - 1 {
            let v0 = index.index(y, x);
            let v1 = v0 + 1;
            let v2 = index.index(y + 1, x);
            let v3 = v2 + 1;

            triangles.push([v0, v1, v3]);
            triangles.push([v0, v3, v2]);
        }
    }

    for y in 0..height - 1 {
        let v0 = index.index(y, width - 1);
        let v1 = index.index(y, 0);
        let v2 = index.index(y + 1, width - 1);
        let v3 = index.index(y + 1, 0);

        triangles.push([v0, v1, v3]);
        triangles.push([v0, v3, v2]);
    }

    tracing::debug!(height, width, triangles = triangles.len(), "built cylinder topology");
    Ok(triangles)
}
