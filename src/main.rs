//! CLI entry point for the random outfit generator

use clap::Parser;
use outfit_roulette::io::cli::{Cli, OutfitSession};
use std::process::ExitCode;

// The report is the program's output
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let session = OutfitSession::new(Cli::parse());
    let mut report = String::new();
    let result = session.run(&mut report);
    print!("{report}");

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
