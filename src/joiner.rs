//! Sheet joining - pastes positioned fragments onto a fresh canvas
//!
//! The reverse of slicing. A reference sheet supplies the target dimensions
//! (its pixel content is discarded), each fragment's vertical offset comes
//! from its filename, and the composite is built on a brand-new transparent
//! canvas so that artifacts from the editing process never survive a join.

use std::path::{Path, PathBuf};

use image::{GenericImageView, Rgba, RgbaImage};
use thiserror::Error;

use crate::codec::{decode_offset, CodecError};
use crate::output::{save_png, OutputError};

/// Transparent color used for the blank canvas
const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Error while joining fragments into a sheet.
#[derive(Debug, Error)]
pub enum JoinError {
    /// Reference sheet could not be opened. Kept distinct from fragment
    /// failures so the CLI can point the user at the right argument.
    #[error("Cannot open reference sheet '{}': {source}", path.display())]
    ReferenceUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Fragment filename does not carry a decodable offset
    #[error(transparent)]
    BadFragmentName(#[from] CodecError),
    /// Fragment image could not be opened. Fatal: a composite missing a
    /// fragment must never be saved.
    #[error("Cannot open fragment '{}': {source}", path.display())]
    FragmentUnreadable {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// A fragment's box extends past the canvas
    #[error(
        "Fragment '{}' ({width}x{height} at y={offset}) exceeds canvas bounds ({canvas_width}x{canvas_height})",
        path.display()
    )]
    RegionOutOfBounds {
        path: PathBuf,
        offset: u32,
        width: u32,
        height: u32,
        canvas_width: u32,
        canvas_height: u32,
    },
    /// Composite could not be written
    #[error("Failed to save sheet: {0}")]
    Save(#[from] OutputError),
}

/// Rebuild a full sheet from fragments and save it to `target_path`.
///
/// External-output mode passes a `target_path` distinct from the reference;
/// in-place mode passes the reference path itself, overwriting the original
/// sheet. Everything else is identical between the two modes.
///
/// All fragments are decoded and opened before the canvas is allocated, so
/// any failure aborts the join with nothing written. Fragments are pasted
/// in input order at `(0, offset)`; where boxes overlap, the later fragment
/// wins outright (raw pixel copy, no alpha blending).
pub fn join_sheet(
    reference_path: &Path,
    target_path: &Path,
    fragment_paths: &[PathBuf],
) -> Result<(), JoinError> {
    let reference = image::open(reference_path).map_err(|source| JoinError::ReferenceUnreadable {
        path: reference_path.to_path_buf(),
        source,
    })?;
    let (canvas_width, canvas_height) = reference.dimensions();

    // Gather every fragment up front; a missing or misnamed fragment must
    // abort before any compositing happens.
    let mut parts = Vec::with_capacity(fragment_paths.len());
    for path in fragment_paths {
        let offset = decode_offset(path)?;
        let fragment = image::open(path)
            .map_err(|source| JoinError::FragmentUnreadable {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        let fits_horizontally = u64::from(fragment.width()) <= u64::from(canvas_width);
        let fits_vertically =
            u64::from(offset) + u64::from(fragment.height()) <= u64::from(canvas_height);
        if !fits_horizontally || !fits_vertically {
            return Err(JoinError::RegionOutOfBounds {
                path: path.clone(),
                offset,
                width: fragment.width(),
                height: fragment.height(),
                canvas_width,
                canvas_height,
            });
        }

        parts.push((offset, fragment));
    }

    // Fresh canvas, never the reference's own buffer: stale pixels from a
    // previous edit pass must not leak into the rejoined sheet.
    let mut canvas = RgbaImage::from_pixel(canvas_width, canvas_height, TRANSPARENT);

    for (offset, fragment) in &parts {
        paste(&mut canvas, fragment, *offset);
    }

    save_png(&canvas, target_path)?;
    Ok(())
}

/// Copy a fragment onto the canvas at `(0, offset)`, replacing whatever is
/// there. Bounds were checked by the caller.
fn paste(canvas: &mut RgbaImage, fragment: &RgbaImage, offset: u32) {
    for y in 0..fragment.height() {
        for x in 0..fragment.width() {
            let pixel = *fragment.get_pixel(x, y);
            canvas.put_pixel(x, offset + y, pixel);
        }
    }
}
