// ============================================================
// Layer 4 — JSON Dataset Loader
// ============================================================
// Reads and writes the flat JSON files every stage works on.
//
// All stage files share one shape: a UTF-8 JSON array of
// objects. Items are kept as serde_json::Value so that stages
// which do not care about a key (combine, split) carry it
// through untouched, in its original key order.
//
// Output style: two-space indent, non-ASCII written as-is
// (Vietnamese text stays readable in the files).

use serde::Serialize;
use serde_json::Value;
use std::{fs, path::Path};

use crate::data::error::{DatasetError, Result};

/// Parse a file and return the items of its top-level array.
pub fn load_array(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))?;
    parse_array(path, &text)
}

fn parse_array(path: &Path, text: &str) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(text).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Array(items) => Ok(items),
        _ => Err(DatasetError::NotAnArray(path.to_path_buf())),
    }
}

/// Pretty-print `data` to `path`, replacing any previous content.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(data).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|e| DatasetError::io(path, e))
}

/// The file name of `path` for console output, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| path.display().to_string())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_array_round_trips_vietnamese_text() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("a.json");
        let data = json!([{"question": "Luật là gì?", "answer": "Là quy tắc."}]);

        write_json(&path, &data).unwrap();
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Luật là gì?"), "non-ASCII must not be escaped");
        assert!(raw.contains("\n  {"), "two-space indentation");

        let items = load_array(&path).unwrap();
        assert_eq!(Value::Array(items), data);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = load_array(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[test]
    fn test_malformed_json_reports_parser_message() {
        let dir  = TempDir::new().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "[{\"question\": ").unwrap();
        let err = load_array(&path).unwrap_err();
        assert!(matches!(err, DatasetError::Json { .. }));
        assert!(err.to_string().starts_with("Invalid JSON format"));
    }

    #[test]
    fn test_object_top_level_is_not_an_array() {
        let err = parse_array(Path::new("obj.json"), r#"{"question": "q"}"#).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray(_)));
    }

    #[test]
    fn test_key_order_is_preserved() {
        let items = parse_array(Path::new("x.json"), r#"[{"b": 1, "a": 2}]"#).unwrap();
        let keys: Vec<&String> = items[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["b", "a"]);
    }

    #[test]
    fn test_display_name_uses_file_name() {
        assert_eq!(display_name(Path::new("/tmp/data/x (v2).json")), "x (v2).json");
    }
}
