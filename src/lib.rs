//! Sheetrows - slice animation spritesheets into per-row fragments and join
//! edited fragments back into a full sheet
//!
//! This library provides functionality to:
//! - Parse an XML animation manifest into per-row geometry
//! - Crop one fragment image per distinct row offset (slicing)
//! - Rebuild a full-size sheet from fragments whose filenames carry their
//!   vertical offset (joining)

pub mod cli;
pub mod codec;
pub mod joiner;
pub mod manifest;
pub mod output;
pub mod slicer;
