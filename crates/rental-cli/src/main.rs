//! `bike-rental` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use rental_cli::args::Args;

fn main() -> ExitCode {
    let args = Args::parse();

    match rental_cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bike-rental: {}", e);
            ExitCode::FAILURE
        }
    }
}
