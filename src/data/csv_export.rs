// ============================================================
// Layer 4 — Spreadsheet CSV → JSON
// ============================================================
// The raw corpus arrives as spreadsheet CSV exports. Each row
// becomes one JSON object keyed by the header row; every value
// is kept as a string, exactly as the spreadsheet had it.
//
// Rows shorter than the header get null for the missing
// columns; surplus cells on long rows are dropped.

use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

use crate::data::error::{DatasetError, Result};
use crate::data::loader::write_json;

/// Read a CSV file into header-keyed JSON objects.
pub fn read_csv_rows(path: &Path) -> Result<Vec<Value>> {
    let csv_err = |source: csv::Error| DatasetError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(csv_err)?;
    let headers = reader.headers().map_err(csv_err)?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(csv_err)?;
        if record.len() > headers.len() {
            tracing::debug!(
                "'{}' line {:?}: {} cells for {} columns",
                path.display(),
                record.position().map(|p| p.line()),
                record.len(),
                headers.len(),
            );
        }
        let row: Map<String, Value> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let cell = record.get(i).map_or(Value::Null, |c| Value::String(c.to_string()));
                (h.to_string(), cell)
            })
            .collect();
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// Convert `csv_path` into a sibling `.json` file; returns the path
/// written and the number of rows.
pub fn convert_csv_file(csv_path: &Path) -> Result<(PathBuf, usize)> {
    let rows      = read_csv_rows(csv_path)?;
    let json_path = csv_path.with_extension("json");
    write_json(&json_path, &rows)?;
    Ok((json_path, rows.len()))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_array;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rows_keyed_by_header() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("VNLs1mpleQA_test (v2).csv");
        fs::write(
            &path,
            "URL,Heading,Content\nhttps://a,\"Hỏi, đáp?\",Trả lời\nhttps://b,H2,C2\n",
        )
        .unwrap();

        let (json_path, n) = convert_csv_file(&path).unwrap();
        assert_eq!(n, 2);
        assert_eq!(json_path, dir.path().join("VNLs1mpleQA_test (v2).json"));

        let items = load_array(&json_path).unwrap();
        assert_eq!(items[0], json!({"URL": "https://a", "Heading": "Hỏi, đáp?", "Content": "Trả lời"}));
        assert_eq!(items[1]["Content"], "C2");
    }

    #[test]
    fn test_short_rows_fill_with_null() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("short.csv");
        fs::write(&path, "URL,Heading,Content\nhttps://a,H\n").unwrap();

        let rows = read_csv_rows(&path).unwrap();
        assert_eq!(rows[0], json!({"URL": "https://a", "Heading": "H", "Content": null}));
    }

    #[test]
    fn test_missing_csv_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = read_csv_rows(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Csv { .. }));
    }
}
