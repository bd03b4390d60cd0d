//! Sheetrows - command-line tool for slicing and rejoining animation spritesheets

use std::process::ExitCode;

use sheetrows::cli;

fn main() -> ExitCode {
    cli::run()
}
