//! Filesystem collaborators: enumerate, load, and save images
//!
//! The pipeline touches the filesystem only through this module, so tests
//! can substitute in-memory loaders for everything except directory
//! enumeration and the final save.

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{MosaicError, Result};
use image::RgbImage;
use std::path::{Path, PathBuf};

/// List candidate cover images in a directory
///
/// Only regular files with a png/jpg/jpeg extension (case-insensitive)
/// qualify; subdirectories are not traversed. Paths are sorted so the input
/// order, and with it stable-sort tie-breaking, is deterministic.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn list_candidate_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(directory).map_err(|e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: directory.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();
        if path.is_file() && has_supported_extension(&path) {
            candidates.push(path);
        }
    }
    candidates.sort();
    Ok(candidates)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .is_some_and(|extension| {
            let lowered = extension.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Identifier for an image: its filename stem
///
/// The upstream collection fetcher names files by release id, so the stem
/// is the stable id used in skip reports.
pub fn image_id(path: &Path) -> String {
    path.file_stem().unwrap_or_default().to_string_lossy().to_string()
}

/// Open an image and decode it into RGB
///
/// The file handle is scoped to this call; the returned buffer owns all
/// decoded data.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or undecodable.
pub fn load_rgb(path: &Path) -> Result<RgbImage> {
    let image = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(image.to_rgb8())
}

/// Serialize the finished canvas to disk
///
/// Creates missing parent directories first, matching the upstream
/// downloader's behavior for its covers directory.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the image
/// cannot be encoded and written.
pub fn save_canvas(canvas: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas.save(path).map_err(|e| MosaicError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}
