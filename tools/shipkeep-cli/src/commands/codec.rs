//! Encode and decode commands.

use serde_json::json;
use shipkeep_core::{decode_index_path, encode_index_path, IndexPath};
use tracing::debug;

use crate::error::Result;
use crate::output::{format_hex, format_json, format_table};
use crate::OutputFormat;

/// Encode dotted paths into ordering keys.
///
/// With `strict`, paths containing a zero segment are rejected instead of
/// being encoded lossily.
pub fn encode(paths: &[String], strict: bool, format: OutputFormat) -> Result<()> {
    let mut rows = Vec::with_capacity(paths.len());
    for path in paths {
        let key = if strict { IndexPath::parse(path)?.key() } else { encode_index_path(path)? };
        debug!(path = path.as_str(), key, "encoded index path");
        rows.push((path.trim().to_string(), key));
    }

    match format {
        OutputFormat::Table => {
            let table_rows = rows
                .iter()
                .map(|(path, key)| vec![path.clone(), key.to_string(), format_hex(*key)])
                .collect();
            println!("{}", format_table(["path", "key", "hex"], table_rows));
        }
        OutputFormat::Json => {
            let json: Vec<_> =
                rows.iter().map(|(path, key)| json!({ "path": path, "key": key })).collect();
            println!("{}", format_json(&json)?);
        }
        OutputFormat::Plain => {
            for (_, key) in rows {
                println!("{key}");
            }
        }
    }
    Ok(())
}

/// Decode ordering keys back into dotted paths.
pub fn decode(keys: &[i64], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let rows = keys
                .iter()
                .map(|key| vec![key.to_string(), format_hex(*key), decode_index_path(*key)])
                .collect();
            println!("{}", format_table(["key", "hex", "path"], rows));
        }
        OutputFormat::Json => {
            let json: Vec<_> = keys
                .iter()
                .map(|key| json!({ "key": key, "path": decode_index_path(*key) }))
                .collect();
            println!("{}", format_json(&json)?);
        }
        OutputFormat::Plain => {
            for key in keys {
                println!("{}", decode_index_path(*key));
            }
        }
    }
    Ok(())
}
