//! CLI dispatch for the `shr slice` command.

use std::path::Path;
use std::process::ExitCode;

use crate::manifest::parse_manifest;
use crate::output::default_slice_dir;
use crate::slicer::slice_sheet;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the slice command
pub fn run_slice(sheet: &Path, manifest: &Path, out_dir: Option<&Path>) -> ExitCode {
    let rows = match parse_manifest(manifest) {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    if rows.is_empty() {
        eprintln!(
            "Error: No animation rows found in '{}'",
            manifest.display()
        );
        return ExitCode::from(EXIT_ERROR);
    }

    let out_dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => default_slice_dir(sheet),
    };

    match slice_sheet(sheet, &rows, &out_dir) {
        Ok(written) => {
            for path in &written {
                println!("Saved: {}", path.display());
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
