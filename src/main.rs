// src/main.rs

mod cli;
mod commands;
mod error;
mod logging;
mod models;
mod tail;

use clap::Parser;
use cli::Cli;
use error::Result;
use models::{Outcome, TailPaths};
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(Outcome::Tailed { lines }) => {
            tracing::trace!(lines, "finished");
            ExitCode::SUCCESS
        }
        Ok(Outcome::Recorded { message }) => {
            tracing::trace!(%message, "finished with recorded error");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    let base_dir = match cli.base_dir {
        Some(dir) => dir,
        None => env::current_dir()?,
    };
    commands::handle_run(&TailPaths::resolve(&base_dir))
}
