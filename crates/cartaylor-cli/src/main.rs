//! `cartaylor` - inspect a catalog and check vehicle configurations.
//!
//! Usage:
//!   cartaylor --catalog crates/cartaylor/data/vehicle-catalog.json categories
//!   cartaylor --catalog crates/cartaylor/data/vehicle-catalog.json variants Engine
//!   cartaylor --catalog crates/cartaylor/data/vehicle-catalog.json \
//!       check --select EG100 --select Transmission/TM5 --select XC --select IN --html
//!
//! Without `--catalog`, the catalog comes from `catalog_path` in
//! `--config` (or `./cartaylor.toml`).

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

mod commands;

use commands::Cli;

fn main() -> ExitCode {
    cartaylor::init_console();

    let cli = Cli::parse();
    let color = io::stdout().is_terminal();
    let mut stdout = io::stdout().lock();

    match commands::run(&cli, &mut stdout, color) {
        Ok(true) => ExitCode::SUCCESS,
        // Invalid or incomplete configuration.
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
