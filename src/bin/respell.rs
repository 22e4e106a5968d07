//! respell CLI binary.

use clap::Parser;
use respell::cli::{args::RespellArgs, commands::execute_command};
use std::process;

fn main() {
    let args = RespellArgs::parse();

    if let Err(e) = execute_command(args) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
