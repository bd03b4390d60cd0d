//! XML animation manifest parsing
//!
//! A manifest declares one `RectAnimation` element per animation, each with a
//! vertical sheet offset (`pos_y`), frame geometry, and a name. Several
//! animations may live on the same physical row of the sheet; those are
//! merged into a single [`RowDescriptor`] so the slicer never writes two
//! files for the same strip.

use std::fs;
use std::path::{Path, PathBuf};

use roxmltree::{Document, Node};
use thiserror::Error;

use crate::codec::LABEL_SEPARATOR;

/// Element name that carries row geometry in the manifest.
const ROW_ELEMENT: &str = "RectAnimation";

/// One physical horizontal strip of a spritesheet.
///
/// Strips always start at the sheet's left edge, so only the vertical
/// `offset` is stored; the horizontal position is implicitly 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDescriptor {
    /// Vertical pixel position of the strip's top edge. Unique per manifest.
    pub offset: u32,
    /// Strip width: `frame_width * frame_count` of the first entry seen.
    pub width: u32,
    /// Strip height: `frame_height` of the first entry seen.
    pub height: u32,
    /// Animation name(s) on this row, joined by [`LABEL_SEPARATOR`] in
    /// first-seen order.
    pub label: String,
}

/// Error while reading or interpreting a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("Failed to read manifest '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Document is not well-formed XML
    #[error("Malformed manifest XML: {0}")]
    Xml(#[from] roxmltree::Error),
    /// A row element lacks one of the required attributes
    #[error("{ROW_ELEMENT} element is missing required attribute '{0}'")]
    MissingAttribute(&'static str),
    /// A numeric attribute holds a non-numeric or negative value
    #[error("Attribute '{attribute}' must be a non-negative integer, got '{value}'")]
    InvalidAttribute {
        attribute: &'static str,
        value: String,
    },
    /// A row's total width (`frame_width * frame_count`) does not fit in
    /// 32 bits
    #[error("Row width {frame_width} * {frame_count} overflows the supported sheet size")]
    WidthOverflow { frame_width: u32, frame_count: u32 },
}

/// Parse a manifest file into row descriptors, one per distinct offset,
/// in first-seen document order.
pub fn parse_manifest(path: &Path) -> Result<Vec<RowDescriptor>, ManifestError> {
    let xml = fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_manifest_str(&xml)
}

/// Parse manifest XML from a string.
///
/// Entries sharing an offset are collapsed into one descriptor: the first
/// entry fixes the geometry, later entries only append their name to the
/// label. Rows that share a vertical start are assumed to share geometry,
/// so a later entry's conflicting `frame_height`/`frame_width` is dropped
/// without complaint (matching the behavior sliced sheets in the wild were
/// produced with).
pub fn parse_manifest_str(xml: &str) -> Result<Vec<RowDescriptor>, ManifestError> {
    let doc = Document::parse(xml)?;

    let mut rows: Vec<RowDescriptor> = Vec::new();

    for node in doc.descendants().filter(|n| n.has_tag_name(ROW_ELEMENT)) {
        let offset = numeric_attr(&node, "pos_y")?;
        let frame_height = numeric_attr(&node, "frame_height")?;
        let frame_width = numeric_attr(&node, "frame_width")?;
        let frame_count = numeric_attr(&node, "frame_count")?;
        let name = required_attr(&node, "name")?;

        match rows.iter_mut().find(|r| r.offset == offset) {
            Some(row) => {
                // Same physical row, additional animation: merge the name,
                // keep the first entry's geometry.
                row.label.push(LABEL_SEPARATOR);
                row.label.push_str(name);
            }
            None => {
                // A wrapped width would encode a size that lies about the
                // fragment's pixels, so overflow is a parse error.
                let width = frame_width.checked_mul(frame_count).ok_or(
                    ManifestError::WidthOverflow {
                        frame_width,
                        frame_count,
                    },
                )?;
                rows.push(RowDescriptor {
                    offset,
                    width,
                    height: frame_height,
                    label: name.to_string(),
                });
            }
        }
    }

    Ok(rows)
}

/// Fetch a required attribute, failing if absent.
fn required_attr<'a>(
    node: &Node<'a, '_>,
    attribute: &'static str,
) -> Result<&'a str, ManifestError> {
    node.attribute(attribute)
        .ok_or(ManifestError::MissingAttribute(attribute))
}

/// Fetch a required attribute and parse it as a non-negative integer.
fn numeric_attr(node: &Node<'_, '_>, attribute: &'static str) -> Result<u32, ManifestError> {
    let value = required_attr(node, attribute)?;
    value
        .parse()
        .map_err(|_| ManifestError::InvalidAttribute {
            attribute,
            value: value.to_string(),
        })
}
