// src/cli.rs

use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "logtail - Save the tail of the application log",
    long_about = "logtail copies the last 100 lines of storage/logs/laravel.log into last_error.log. If the log cannot be read or the copy cannot be written, the error message is written to last_error.log instead."
)]
pub struct Cli {
    /// Directory both files are resolved against. Defaults to the current directory.
    #[arg(short = 'C', long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Log progress to stderr (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
}
