//! Fragment filename codec
//!
//! The slicer and the joiner never run in the same invocation; the only
//! contract between them is the fragment's filename:
//!
//! ```text
//! <offset>-<width>x<height>-<label>.png
//! ```
//!
//! Both sides go through this module, so there is exactly one parsing rule
//! and the two pipelines cannot drift apart. The joiner only ever needs the
//! leading offset token; everything after the first dash is opaque to it.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::manifest::RowDescriptor;

/// Separates the offset, size, and label fields of a fragment name.
pub const FIELD_SEPARATOR: char = '-';

/// Joins multiple animation names merged onto one row. A dash is safe here
/// because animation names themselves may contain underscores
/// (eg. "grab_item"), and the decoder never reads past the first field.
pub const LABEL_SEPARATOR: char = '-';

/// File extension for fragment images.
pub const FRAGMENT_EXT: &str = "png";

/// Error while decoding a fragment filename.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Path has no UTF-8 file name component
    #[error("Fragment path '{}' has no usable file name", .0.display())]
    NoFileName(PathBuf),
    /// File name does not start with an integer offset token
    #[error("Fragment name '{0}' does not start with '<offset>-'")]
    BadOffset(String),
}

/// Build the fragment filename for a row.
pub fn fragment_file_name(row: &RowDescriptor) -> String {
    format!(
        "{offset}{sep}{width}x{height}{sep}{label}.{ext}",
        offset = row.offset,
        width = row.width,
        height = row.height,
        label = row.label,
        sep = FIELD_SEPARATOR,
        ext = FRAGMENT_EXT,
    )
}

/// Recover a fragment's vertical offset from its filename.
///
/// Only the text before the first [`FIELD_SEPARATOR`] is interpreted; the
/// rest of the name (including any merged label) is ignored.
pub fn decode_offset(path: &Path) -> Result<u32, CodecError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| CodecError::NoFileName(path.to_path_buf()))?;

    let token = name.split(FIELD_SEPARATOR).next().unwrap_or(name);
    token
        .parse()
        .map_err(|_| CodecError::BadOffset(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(offset: u32, width: u32, height: u32, label: &str) -> RowDescriptor {
        RowDescriptor {
            offset,
            width,
            height,
            label: label.to_string(),
        }
    }

    #[test]
    fn test_encode_single_label() {
        let name = fragment_file_name(&row(48, 64, 32, "run"));
        assert_eq!(name, "48-64x32-run.png");
    }

    #[test]
    fn test_encode_merged_labels() {
        let name = fragment_file_name(&row(0, 32, 16, "stand-grab_item"));
        assert_eq!(name, "0-32x16-stand-grab_item.png");
    }

    #[test]
    fn test_decode_offset() {
        let offset = decode_offset(Path::new("48-64x32-run.png")).unwrap();
        assert_eq!(offset, 48);
    }

    #[test]
    fn test_decode_ignores_directory_components() {
        let offset = decode_offset(Path::new("out/96-16x16-die.png")).unwrap();
        assert_eq!(offset, 96);
    }

    #[test]
    fn test_decode_merged_name() {
        // Extra dashes inside the label never reach the decoder.
        let offset = decode_offset(Path::new("0-32x16-stand-grab_item.png")).unwrap();
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_roundtrip() {
        let row = row(112, 128, 24, "walk");
        let name = fragment_file_name(&row);
        assert_eq!(decode_offset(Path::new(&name)).unwrap(), row.offset);
    }

    #[test]
    fn test_decode_rejects_non_numeric_prefix() {
        assert!(matches!(
            decode_offset(Path::new("edited-copy.png")),
            Err(CodecError::BadOffset(_))
        ));
    }

    #[test]
    fn test_decode_rejects_empty_prefix() {
        assert!(decode_offset(Path::new("-64x32-run.png")).is_err());
    }
}
