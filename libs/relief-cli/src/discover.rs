//! Heightmap discovery in a directory.

use anyhow::{Context, Result};
use config::constants::SUPPORTED_IMAGE_EXTENSIONS;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns `true` if `path` has a supported image extension (case-insensitive).
pub fn is_heightmap(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Lists the image files directly inside `dir`, sorted by path.
pub fn find_heightmaps(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut images = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && is_heightmap(&path) {
            images.push(path);
        }
    }
    images.sort();

    tracing::debug!(dir = %dir.display(), count = images.len(), "discovered heightmaps");
    Ok(images)
}
