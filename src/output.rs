//! PNG output and output path resolution

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Save an RGBA image to a PNG file, overwriting any existing file.
///
/// Parent directories are created if they don't exist.
pub fn save_png(image: &RgbaImage, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    image.save(path)?;
    Ok(())
}

/// Default fragment directory for a sheet: a sibling directory named after
/// the sheet's file stem. Used when the slice command is invoked without an
/// explicit output directory.
///
/// `sprites/player.png` resolves to `sprites/player/`.
pub fn default_slice_dir(sheet_path: &Path) -> PathBuf {
    let stem = sheet_path.file_stem().unwrap_or_else(|| OsStr::new("rows"));
    sheet_path.with_file_name(stem)
}
