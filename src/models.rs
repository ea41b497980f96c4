// src/models.rs

use std::path::{Path, PathBuf};

/// Log file the tail is taken from, relative to the base directory.
pub const SOURCE_LOG: &str = "storage/logs/laravel.log";

/// File that receives the tail (or the failure text).
pub const OUTPUT_FILE: &str = "last_error.log";

/// Number of trailing lines copied.
pub const TAIL_LINES: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TailPaths {
    pub source: PathBuf,
    pub output: PathBuf,
}

impl TailPaths {
    /// Resolves the fixed source and output names against `base`.
    pub fn resolve(base: &Path) -> Self {
        Self {
            source: base.join(SOURCE_LOG),
            output: base.join(OUTPUT_FILE),
        }
    }
}

/// What a run ended up writing to the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The tail was copied; `lines` is how many lines were written.
    Tailed { lines: usize },
    /// The primary path failed and `message` was written instead.
    Recorded { message: String },
}
