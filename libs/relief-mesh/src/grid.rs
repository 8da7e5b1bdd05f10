//! # Intensity Grid
//!
//! The normalized heightmap consumed by the projector, and the row-major
//! index function shared by the projector and the topology builder.

use crate::error::{ReliefError, ReliefResult};
use config::constants::{MAX_VERTICES, MIN_GRID_DIMENSION};

/// Validated grid dimensions with the row-major cell/vertex index function.
///
/// A cell's linear index `row * width + col` is also the index of the vertex
/// projected from it. Every triangle refers to vertices through this function.
///
/// # Example
///
/// ```rust
/// use relief_mesh::GridIndex;
///
/// let index = GridIndex::new(3, 4).unwrap();
/// assert_eq!(index.index(2, 1), 9);
/// assert_eq!(index.vertex_count(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridIndex {
    height: usize,
    width: usize,
}

impl GridIndex {
    /// Validates `height` rows by `width` columns.
    ///
    /// Both dimensions must be at least 2 and the vertex count must fit in a
    /// `u32` index.
    pub fn new(height: usize, width: usize) -> ReliefResult<Self> {
        if height < MIN_GRID_DIMENSION || width < MIN_GRID_DIMENSION {
            return Err(ReliefError::InvalidGridDimensions { height, width });
        }
        match height.checked_mul(width) {
            Some(count) if count <= MAX_VERTICES => Ok(Self { height, width }),
            _ => Err(ReliefError::TooManyVertices {
                count: height.saturating_mul(width),
                max: MAX_VERTICES,
            }),
        }
    }

    /// Number of rows (rings).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns (angular steps, seam column included).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of cells, and therefore vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.height * self.width
    }

    /// Row-major linear index of cell `(row, col)`.
    #[inline]
    pub fn index(&self, row: usize, col: usize) -> u32 {
        debug_assert!(row < self.height && col < self.width);
        (row * self.width + col) as u32
    }
}

/// Immutable grid of normalized intensities in `[0, 1]`.
///
/// Rows map to the cylinder axis, columns to the angle around it. Values are
/// expected to be inverted already, so `1.0` means fully carved.
///
/// # Example
///
/// ```rust
/// use relief_mesh::IntensityGrid;
///
/// let grid = IntensityGrid::new(2, 3, vec![0.0, 0.5, 1.0, 1.0, 0.5, 0.0]).unwrap();
/// assert_eq!(grid.get(1, 0), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityGrid {
    index: GridIndex,
    values: Vec<f64>,
}

impl IntensityGrid {
    /// Builds a grid from row-major values.
    ///
    /// Fails on bad dimensions, a buffer of the wrong length, or any value
    /// that is not a finite number in `[0, 1]`.
    pub fn new(height: usize, width: usize, values: Vec<f64>) -> ReliefResult<Self> {
        let index = GridIndex::new(height, width)?;
        if values.len() != index.vertex_count() {
            return Err(ReliefError::GridSizeMismatch {
                expected: index.vertex_count(),
                actual: values.len(),
            });
        }
        if let Some(pos) = values
            .iter()
            .position(|v| !v.is_finite() || !(0.0..=1.0).contains(v))
        {
            return Err(ReliefError::IntensityOutOfRange {
                row: pos / width,
                col: pos % width,
                value: values[pos],
            });
        }
        Ok(Self { index, values })
    }

    /// Builds a grid where every cell has the same intensity.
    pub fn filled(height: usize, width: usize, value: f64) -> ReliefResult<Self> {
        let index = GridIndex::new(height, width)?;
        Self::new(height, width, vec![value; index.vertex_count()])
    }

    /// Dimensions and index function of this grid.
    #[inline]
    pub fn grid_index(&self) -> GridIndex {
        self.index
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.index.height()
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.index.width()
    }

    /// Intensity at `(row, col)`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[self.index.index(row, col) as usize]
    }

    /// One row of intensities.
    #[inline]
    pub fn row(&self, row: usize) -> &[f64] {
        let start = row * self.width();
        &self.values[start..start + self.width()]
    }

    /// All intensities in row-major order.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}
