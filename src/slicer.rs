//! Sheet slicing - crops one fragment image per manifest row
//!
//! Each row descriptor maps to the box `(0, offset) .. (width, offset +
//! height)` of the source sheet; sprite rows always start at the sheet's
//! left edge. Fragments are written under the output directory with their
//! geometry encoded in the filename (see [`crate::codec`]), overwriting any
//! previous file without warning.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::imageops;
use image::RgbaImage;
use thiserror::Error;

use crate::codec::fragment_file_name;
use crate::manifest::RowDescriptor;
use crate::output::{save_png, OutputError};

/// Error while slicing a sheet into fragments.
#[derive(Debug, Error)]
pub enum SliceError {
    /// Source sheet could not be opened or decoded
    #[error("Cannot open sheet '{}': {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// Output directory could not be created
    #[error("Cannot create output directory '{}': {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A row's box extends past the sheet. Clipping instead would produce a
    /// fragment whose encoded size lies about its pixels, silently breaking
    /// the slice/join round trip.
    #[error(
        "Row '{label}' ({width}x{height} at y={offset}) exceeds sheet bounds ({sheet_width}x{sheet_height})"
    )]
    RegionOutOfBounds {
        label: String,
        offset: u32,
        width: u32,
        height: u32,
        sheet_width: u32,
        sheet_height: u32,
    },
    /// Fragment could not be written
    #[error("Failed to save fragment: {0}")]
    Save(#[from] OutputError),
}

/// Slice a sheet into one fragment per row descriptor.
///
/// The sheet is opened before anything is written, so an unreadable sheet
/// fails the whole run with no side effects. The output directory is
/// created if absent (no error when it already exists). Returns the written
/// fragment paths in row order.
///
/// Slicing is not transactional across rows: if a later row fails, the
/// fragments already written for earlier rows remain on disk.
pub fn slice_sheet(
    sheet_path: &Path,
    rows: &[RowDescriptor],
    out_dir: &Path,
) -> Result<Vec<PathBuf>, SliceError> {
    let sheet = image::open(sheet_path)
        .map_err(|source| SliceError::Open {
            path: sheet_path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    fs::create_dir_all(out_dir).map_err(|source| SliceError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(rows.len());

    for row in rows {
        check_row_bounds(row, &sheet)?;

        let fragment = imageops::crop_imm(&sheet, 0, row.offset, row.width, row.height).to_image();
        let path = out_dir.join(fragment_file_name(row));
        save_png(&fragment, &path)?;
        written.push(path);
    }

    Ok(written)
}

/// Reject a row whose box does not fit inside the sheet.
fn check_row_bounds(row: &RowDescriptor, sheet: &RgbaImage) -> Result<(), SliceError> {
    let fits_horizontally = u64::from(row.width) <= u64::from(sheet.width());
    let fits_vertically =
        u64::from(row.offset) + u64::from(row.height) <= u64::from(sheet.height());

    if fits_horizontally && fits_vertically {
        Ok(())
    } else {
        Err(SliceError::RegionOutOfBounds {
            label: row.label.clone(),
            offset: row.offset,
            width: row.width,
            height: row.height,
            sheet_width: sheet.width(),
            sheet_height: sheet.height(),
        })
    }
}
