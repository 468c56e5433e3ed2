//! Command implementations.

pub mod catalog;
pub mod codec;
pub mod ingest;
pub mod outline;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{CliError, Result};

/// Read non-blank lines from `path`, or from stdin when no path is given.
///
/// Each line is returned with its one-based line number.
pub fn read_lines(path: Option<&Path>) -> Result<Vec<(usize, String)>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            Box::new(BufReader::new(File::open(path)?))
        }
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut lines = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            lines.push((i + 1, line));
        }
    }
    Ok(lines)
}
