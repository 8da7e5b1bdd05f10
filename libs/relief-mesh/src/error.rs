//! # Relief Errors
//!
//! Error types for relief mesh generation. All errors are explicit and
//! carry the offending values so a failure can be diagnosed without
//! inspecting internals.
//!
//! ## Error Policy
//!
//! - Validation happens before any vertex is produced
//! - No retries and no default substitution for invalid geometry
//! - I/O failures are surfaced unchanged

use config::constants::ConfigError;
use thiserror::Error;

/// Errors that can occur while building or exporting a relief mesh.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Grid has fewer than two rows or columns.
    #[error("Invalid grid dimensions: {height}x{width} (rows x columns), both must be at least 2")]
    InvalidGridDimensions {
        /// Number of rows supplied
        height: usize,
        /// Number of columns supplied
        width: usize,
    },

    /// Grid would produce more vertices than `u32` indices can address.
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices {
        /// Requested vertex count
        count: usize,
        /// Largest supported vertex count
        max: usize,
    },

    /// Radius, depth or pixel size cannot describe a carved cylinder.
    #[error("Invalid physical parameters: {message}")]
    InvalidPhysicalParams {
        /// Description including the offending values
        message: String,
    },

    /// Intensity buffer length does not match the grid dimensions.
    #[error("Grid size mismatch: expected {expected} values, got {actual}")]
    GridSizeMismatch {
        /// `height * width`
        expected: usize,
        /// Length of the supplied buffer
        actual: usize,
    },

    /// Intensity value is not finite or lies outside `[0, 1]`.
    #[error("Intensity out of range at row {row}, column {col}: {value}")]
    IntensityOutOfRange {
        /// Row of the offending cell
        row: usize,
        /// Column of the offending cell
        col: usize,
        /// Offending value
        value: f64,
    },

    /// Assembled mesh violates a structural invariant.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Which invariant failed and where
        message: String,
    },

    /// Reading or writing a file failed.
    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the metrics report failed.
    #[error("Metrics serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Decoding a heightmap image failed.
    #[cfg(feature = "image-loader")]
    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        /// Image that could not be decoded
        path: std::path::PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },
}

impl ReliefError {
    /// Creates an invalid physical parameters error.
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::InvalidPhysicalParams {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for ReliefError {
    fn from(err: ConfigError) -> Self {
        Self::invalid_params(err.to_string())
    }
}

/// Result type alias for relief operations.
pub type ReliefResult<T> = Result<T, ReliefError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_dimensions() {
        let err = ReliefError::InvalidGridDimensions {
            height: 1,
            width: 5,
        };
        let message = err.to_string();
        assert!(message.contains("1x5"));
    }

    #[test]
    fn test_config_error_becomes_physical_params() {
        let err: ReliefError = ConfigError::InvalidPixelSize(-2.0).into();
        match err {
            ReliefError::InvalidPhysicalParams { message } => assert!(message.contains("-2")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_io_error_is_preserved() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.png");
        let err: ReliefError = io.into();
        assert!(matches!(err, ReliefError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ReliefError>();
    }
}
