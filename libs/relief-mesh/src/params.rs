//! # Physical Parameters
//!
//! Radius, carve depth and pixel size of the target cylinder.

use crate::error::{ReliefError, ReliefResult};
use config::constants::{cylinder_height, cylinder_radius, ReliefConfig};

/// Physical dimensions used by the projector.
///
/// # Example
///
/// ```rust
/// use config::constants::ReliefConfig;
/// use relief_mesh::PhysicalParams;
///
/// let params = PhysicalParams::for_width(314, &ReliefConfig::default()).unwrap();
/// assert!(params.max_depth() < params.radius());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicalParams {
    radius: f64,
    max_depth: f64,
    pixel_size: f64,
}

impl PhysicalParams {
    /// Validates explicit parameters.
    ///
    /// Requires `radius > 0`, `0 <= max_depth < radius` and a positive pixel
    /// size, all finite.
    pub fn new(radius: f64, max_depth: f64, pixel_size: f64) -> ReliefResult<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ReliefError::invalid_params(format!(
                "radius must be positive and finite: {radius}"
            )));
        }
        if !max_depth.is_finite() || max_depth < 0.0 || max_depth >= radius {
            return Err(ReliefError::invalid_params(format!(
                "max_depth must satisfy 0 <= max_depth < radius: max_depth={max_depth}, radius={radius}"
            )));
        }
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(ReliefError::invalid_params(format!(
                "pixel_size must be positive and finite: {pixel_size}"
            )));
        }
        Ok(Self {
            radius,
            max_depth,
            pixel_size,
        })
    }

    /// Derives parameters for an image `width` pixels wide.
    ///
    /// The radius makes the circumference exactly `width * pixel_size`; the
    /// depth is resolved from the configured [`config::constants::DepthMode`].
    pub fn for_width(width: usize, config: &ReliefConfig) -> ReliefResult<Self> {
        let config = ReliefConfig::new(config.pixel_size, config.depth)?;
        let radius = cylinder_radius(width, config.pixel_size);
        let max_depth = config.depth.max_depth(radius);
        Self::new(radius, max_depth, config.pixel_size)
    }

    /// Undisplaced cylinder radius.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Carve depth applied at intensity `1.0`.
    #[inline]
    pub fn max_depth(&self) -> f64 {
        self.max_depth
    }

    /// Physical size of one pixel.
    #[inline]
    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    /// Axial length spanned by `rows` pixel rows.
    #[inline]
    pub fn cylinder_height(&self, rows: usize) -> f64 {
        cylinder_height(rows, self.pixel_size)
    }
}
