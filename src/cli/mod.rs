//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for the slice and join command implementations.

mod join;
mod slice;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit codes: usage failures share the generic error code 1, matching the
/// sheet tooling this replaces.
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Sheetrows - slice spritesheets into per-row fragments and join them back
#[derive(Parser)]
#[command(name = "shr")]
#[command(about = "Sheetrows - slice spritesheets into per-row fragments and join them back")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Slice a sheet into one fragment image per manifest row
    Slice {
        /// Source spritesheet image
        sheet: PathBuf,

        /// XML animation manifest describing the sheet's rows
        manifest: PathBuf,

        /// Output directory for fragments.
        /// If omitted: a sibling directory named after the sheet's file stem
        out_dir: Option<PathBuf>,
    },
    /// Join fragments onto a blank canvas sized from a reference sheet
    Join {
        /// Reference sheet supplying the output dimensions (never modified)
        reference: PathBuf,

        /// Path to save the rejoined sheet to
        output: PathBuf,

        /// Fragment images, or directories containing them
        #[arg(required = true)]
        fragments: Vec<PathBuf>,
    },
    /// Join fragments and overwrite the sheet itself with the result
    JoinInPlace {
        /// Sheet supplying both the output dimensions and the save target
        sheet: PathBuf,

        /// Fragment images, or directories containing them
        #[arg(required = true)]
        fragments: Vec<PathBuf>,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    // clap's default error exit code is 2; usage failures here keep the
    // historical exit code 1. Help and version requests also surface as
    // parse errors and must still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => EXIT_SUCCESS,
                _ => EXIT_ERROR,
            };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match cli.command {
        Commands::Slice {
            sheet,
            manifest,
            out_dir,
        } => slice::run_slice(&sheet, &manifest, out_dir.as_deref()),
        Commands::Join {
            reference,
            output,
            fragments,
        } => join::run_join(&reference, &output, &fragments),
        Commands::JoinInPlace { sheet, fragments } => {
            join::run_join_in_place(&sheet, &fragments)
        }
    }
}
