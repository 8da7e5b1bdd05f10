//! Centralized configuration values shared across the relief pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::TAU;
use std::fmt;

// =============================================================================
// PHYSICAL CONSTANTS
// =============================================================================

/// Physical edge length of one source pixel, in millimetres (19 µm).
///
/// The cylinder radius is derived from this value so that the rendered
/// circumference is exactly `width` pixels long.
///
/// # Examples
/// ```
/// use config::constants::PIXEL_SIZE;
/// assert_eq!(PIXEL_SIZE, 0.019);
/// ```
pub const PIXEL_SIZE: f64 = 0.019;

/// Default maximum carve depth, expressed as a fraction of the cylinder radius.
///
/// # Examples
/// ```
/// use config::constants::DEPTH_FACTOR;
/// let radius = 2.0;
/// assert!((radius * DEPTH_FACTOR - 0.2).abs() < 1e-12);
/// ```
pub const DEPTH_FACTOR: f64 = 0.1;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance applied when checking that every vertex lies inside the
/// `[radius - max_depth, radius]` band.
///
/// # Examples
/// ```
/// use config::constants::RADIAL_TOLERANCE;
/// let radius = 10.0;
/// let measured = 10.0 + 1e-12;
/// assert!(measured <= radius * (1.0 + RADIAL_TOLERANCE));
/// ```
pub const RADIAL_TOLERANCE: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Smallest number of rows or columns a grid may have.
///
/// Two rows are needed to span an axial band and two columns to close a seam.
///
/// # Examples
/// ```
/// use config::constants::MIN_GRID_DIMENSION;
/// assert_eq!(MIN_GRID_DIMENSION, 2);
/// ```
pub const MIN_GRID_DIMENSION: usize = 2;

/// Maximum number of vertices in a single mesh.
///
/// Triangle indices are stored as `u32`, so every vertex index must fit.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// let (height, width) = (4096usize, 4096usize);
/// assert!(height * width <= MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = u32::MAX as usize;

/// File extensions recognised as heightmap images when scanning a directory.
///
/// # Examples
/// ```
/// use config::constants::SUPPORTED_IMAGE_EXTENSIONS;
/// assert!(SUPPORTED_IMAGE_EXTENSIONS.contains(&"png"));
/// ```
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Radius of the cylinder whose circumference is `width` pixels long.
///
/// # Examples
/// ```
/// use config::constants::cylinder_radius;
/// let r = cylinder_radius(628, 0.01);
/// assert!((r - 6.28 / std::f64::consts::TAU).abs() < 1e-12);
/// ```
#[inline]
pub fn cylinder_radius(width: usize, pixel_size: f64) -> f64 {
    (width as f64 * pixel_size) / TAU
}

/// Physical length of the cylinder along its axis for `height` pixel rows.
///
/// # Examples
/// ```
/// use config::constants::cylinder_height;
/// assert!((cylinder_height(100, 0.019) - 1.9).abs() < 1e-12);
/// ```
#[inline]
pub fn cylinder_height(height: usize, pixel_size: f64) -> f64 {
    height as f64 * pixel_size
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Examples
/// ```
/// use config::constants::approx_equal;
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

// =============================================================================
// RELIEF CONFIGURATION
// =============================================================================

/// How the maximum carve depth is specified.
///
/// # Examples
/// ```
/// use config::constants::DepthMode;
/// let radius = 3.0;
/// assert!((DepthMode::FractionOfRadius(0.1).max_depth(radius) - 0.3).abs() < 1e-12);
/// assert_eq!(DepthMode::Absolute(0.25).max_depth(radius), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DepthMode {
    /// Maximum depth is `radius * fraction`.
    FractionOfRadius(f64),
    /// Maximum depth is an absolute length in the same units as the pixel size.
    Absolute(f64),
}

impl DepthMode {
    /// Resolves the maximum carve depth for a cylinder of the given radius.
    pub fn max_depth(&self, radius: f64) -> f64 {
        match *self {
            DepthMode::FractionOfRadius(fraction) => radius * fraction,
            DepthMode::Absolute(depth) => depth,
        }
    }
}

impl Default for DepthMode {
    fn default() -> Self {
        DepthMode::FractionOfRadius(DEPTH_FACTOR)
    }
}

impl fmt::Display for DepthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DepthMode::FractionOfRadius(fraction) => write!(f, "{fraction} x radius"),
            DepthMode::Absolute(depth) => write!(f, "{depth} absolute"),
        }
    }
}

/// Validated settings for one conversion run.
///
/// # Examples
/// ```
/// use config::constants::{DepthMode, ReliefConfig};
/// let config = ReliefConfig::new(0.05, DepthMode::Absolute(0.01)).expect("valid config");
/// assert_eq!(config.pixel_size, 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReliefConfig {
    /// Physical size of one pixel.
    pub pixel_size: f64,
    /// Maximum carve depth specification.
    pub depth: DepthMode,
}

impl ReliefConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// pixel size and depth.
    ///
    /// Whether an absolute depth fits inside a particular cylinder is only
    /// known once the image width is known, so that check happens later.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{ConfigError, DepthMode, ReliefConfig};
    /// let err = ReliefConfig::new(0.0, DepthMode::default()).unwrap_err();
    /// assert_eq!(err, ConfigError::InvalidPixelSize(0.0));
    /// ```
    pub fn new(pixel_size: f64, depth: DepthMode) -> Result<Self, ConfigError> {
        if !pixel_size.is_finite() || pixel_size <= 0.0 {
            return Err(ConfigError::InvalidPixelSize(pixel_size));
        }
        match depth {
            DepthMode::FractionOfRadius(fraction) => {
                if !fraction.is_finite() || !(0.0..1.0).contains(&fraction) {
                    return Err(ConfigError::InvalidDepthFraction(fraction));
                }
            }
            DepthMode::Absolute(value) => {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigError::InvalidAbsoluteDepth(value));
                }
            }
        }
        Ok(Self { pixel_size, depth })
    }
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            pixel_size: PIXEL_SIZE,
            depth: DepthMode::default(),
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the pixel size is zero, negative or not finite.
    InvalidPixelSize(f64),
    /// Raised when the depth fraction falls outside `[0, 1)`.
    InvalidDepthFraction(f64),
    /// Raised when an absolute depth is negative or not finite.
    InvalidAbsoluteDepth(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPixelSize(value) => {
                write!(f, "pixel_size must be positive and finite: {value}")
            }
            ConfigError::InvalidDepthFraction(value) => {
                write!(f, "depth fraction must be in [0, 1): {value}")
            }
            ConfigError::InvalidAbsoluteDepth(value) => {
                write!(f, "absolute depth must be non-negative and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
