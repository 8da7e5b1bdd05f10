//! # Heightmap Loader
//!
//! Decodes PNG/JPEG images into an inverted, normalized [`IntensityGrid`]:
//! white pixels are left uncarved, black pixels are carved to full depth.

use crate::error::{ReliefError, ReliefResult};
use crate::grid::IntensityGrid;
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use std::path::Path;

/// Loads an image file and converts it to an intensity grid.
///
/// Colour images are reduced to 8-bit luma with ITU-R 601 weights before
/// normalization (see [`luma_from_rgb`]).
pub fn load_heightmap(path: &Path) -> ReliefResult<IntensityGrid> {
    let image = image::open(path).map_err(|source| match source {
        image::ImageError::IoError(io) => ReliefError::Io(io),
        source => ReliefError::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let luma = match image {
        DynamicImage::ImageLuma8(gray) => gray,
        other => luma_from_rgb(&other.to_rgb8()),
    };
    tracing::debug!(
        path = %path.display(),
        width = luma.width(),
        height = luma.height(),
        "decoded heightmap"
    );
    grid_from_luma(&luma)
}

/// Reduces an RGB image to 8-bit luma.
///
/// `L = (299 R + 587 G + 114 B + 500) / 1000`, the ITU-R 601 weighting with
/// round-half-up, so grey pixels keep their value.
pub fn luma_from_rgb(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b] = image.get_pixel(x, y).0;
        let weighted = u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114 + 500;
        Luma([(weighted / 1000) as u8])
    })
}

/// Converts an 8-bit grayscale image to an intensity grid.
///
/// Each pixel `p` becomes `1 - p / 255`.
///
/// # Example
///
/// ```rust
/// use image::{GrayImage, Luma};
/// use relief_mesh::loader::grid_from_luma;
///
/// let mut image = GrayImage::from_pixel(2, 2, Luma([255]));
/// image.put_pixel(1, 0, Luma([0]));
/// let grid = grid_from_luma(&image).unwrap();
/// assert_eq!(grid.get(0, 0), 0.0);
/// assert_eq!(grid.get(0, 1), 1.0);
/// ```
pub fn grid_from_luma(image: &GrayImage) -> ReliefResult<IntensityGrid> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let values = image
        .pixels()
        .map(|p| 1.0 - f64::from(p.0[0]) / 255.0)
        .collect();
    IntensityGrid::new(height, width, values)
}
