//! Sort and subtree commands over lists of index paths.

use std::path::Path;

use serde_json::json;
use shipkeep_core::IndexPath;
use tracing::{error, info};

use crate::commands::read_lines;
use crate::error::{CliError, Result};
use crate::output::{format_json, format_table};
use crate::OutputFormat;

/// Parse every line as an [`IndexPath`], reporting each bad line.
fn read_paths(file: Option<&Path>) -> Result<Vec<IndexPath>> {
    let mut paths = Vec::new();
    let mut invalid = 0;
    for (line_no, line) in read_lines(file)? {
        match IndexPath::parse(&line) {
            Ok(path) => paths.push(path),
            Err(e) => {
                error!(line = line_no, input = line.trim(), "{e}");
                invalid += 1;
            }
        }
    }
    if invalid > 0 {
        return Err(CliError::InvalidLines { count: invalid });
    }
    Ok(paths)
}

fn print_paths(paths: &[IndexPath], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows = paths
                .iter()
                .map(|p| vec![p.to_string(), p.depth().to_string(), p.key().to_string()])
                .collect();
            println!("{}", format_table(["path", "depth", "key"], rows));
        }
        OutputFormat::Json => {
            let json: Vec<_> =
                paths.iter().map(|p| json!({ "path": p, "key": p.key() })).collect();
            println!("{}", format_json(&json)?);
        }
        OutputFormat::Plain => {
            for path in paths {
                println!("{path}");
            }
        }
    }
    Ok(())
}

/// Print paths in outline order. Duplicates are kept.
pub fn sort(file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let mut paths = read_paths(file)?;
    paths.sort();
    info!(count = paths.len(), "sorted index paths");
    print_paths(&paths, format)
}

/// Print `root` and the paths below it, in outline order.
pub fn subtree(root: &str, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let root = IndexPath::parse(root)?;
    let range = root.subtree_range();

    let mut paths: Vec<_> =
        read_paths(file)?.into_iter().filter(|p| range.contains(&p.key())).collect();
    paths.sort();
    info!(%root, count = paths.len(), "selected subtree");
    print_paths(&paths, format)
}
