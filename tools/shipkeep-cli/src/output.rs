//! Output formatting utilities.

use serde::Serialize;
use tabled::settings::Style;

use crate::error::Result;

/// Render rows as a rounded table with a row count footer.
pub fn format_table<H, R>(header: H, rows: Vec<R>) -> String
where
    H: IntoIterator,
    H::Item: Into<String>,
    R: IntoIterator,
    R::Item: Into<String>,
{
    if rows.is_empty() {
        return "(0 rows)".to_string();
    }

    let count = rows.len();
    let mut builder = tabled::builder::Builder::new();
    builder.push_record(header.into_iter().map(Into::into).collect::<Vec<String>>());
    for row in rows {
        builder.push_record(row.into_iter().map(Into::into).collect::<Vec<String>>());
    }

    let mut table = builder.build();
    table.with(Style::rounded());

    format!("{table}\n({count} rows)")
}

/// Render a value as pretty JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Render a key in the same fixed-width hex used in diagnostics.
pub fn format_hex(key: i64) -> String {
    format!("{key:#018x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(format_table(["a"], rows), "(0 rows)");
    }

    #[test]
    fn table_has_footer() {
        let out = format_table(["path", "key"], vec![vec!["1".to_string(), "2".to_string()]]);
        assert!(out.contains("path"));
        assert!(out.ends_with("(1 rows)"));
    }

    #[test]
    fn hex_is_padded() {
        assert_eq!(format_hex(1 << 54), "0x0040000000000000");
    }
}
