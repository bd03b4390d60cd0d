//! CLI dispatch for the `shr join` and `shr join-in-place` commands.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use glob::{glob, Pattern};

use crate::joiner::join_sheet;

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Expand fragment arguments: a directory argument stands for the sorted
/// `*.png` files inside it, plain file paths pass through in argument order.
fn expand_fragments(args: &[PathBuf]) -> Vec<PathBuf> {
    let mut fragments = Vec::new();

    for arg in args {
        if arg.is_dir() {
            // Escape the directory part so names containing glob
            // metacharacters ("frames [v2]") still match their contents.
            let pattern = format!("{}/*.png", Pattern::escape(&arg.display().to_string()));
            if let Ok(paths) = glob(&pattern) {
                let mut found: Vec<PathBuf> = paths.filter_map(Result::ok).collect();
                found.sort();
                fragments.extend(found);
            }
        } else {
            fragments.push(arg.clone());
        }
    }

    fragments
}

/// Execute the join command (external-output mode)
pub fn run_join(reference: &Path, output: &Path, fragment_args: &[PathBuf]) -> ExitCode {
    let fragments = expand_fragments(fragment_args);

    if fragments.is_empty() {
        eprintln!("Error: No fragment images to join");
        return ExitCode::from(EXIT_ERROR);
    }

    match join_sheet(reference, output, &fragments) {
        Ok(()) => {
            println!("Saved: {}", output.display());
            ExitCode::from(EXIT_SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Execute the join-in-place command: the sheet supplies the dimensions and
/// is itself the save target.
pub fn run_join_in_place(sheet: &Path, fragment_args: &[PathBuf]) -> ExitCode {
    run_join(sheet, sheet, fragment_args)
}
