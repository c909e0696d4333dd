// ============================================================
// Layer 4 — Dataset Errors
// ============================================================
// Every way a single data file can fail. Use cases catch these
// per file and log them as warnings; only EmptyCorpus is meant
// to stop a run.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, DatasetError>;

#[derive(Error, Debug)]
pub enum DatasetError {
    /// Input file does not exist
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Reading or writing failed
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid JSON
    #[error("Invalid JSON format in '{}': {source}", .path.display())]
    Json {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Valid JSON, but the top level is not an array
    #[error("'{}' does not contain a list", .0.display())]
    NotAnArray(PathBuf),

    /// CSV export could not be read
    #[error("Invalid CSV in '{}': {source}", .path.display())]
    Csv {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Nothing to split
    #[error("No data to split.")]
    EmptyCorpus,
}

impl DatasetError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound(path)
        } else {
            DatasetError::Io { path, source }
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_not_found_io_error_maps_to_not_found() {
        let e = DatasetError::io("a.json", Error::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(e, DatasetError::NotFound(_)));
        assert_eq!(e.to_string(), "File not found: a.json");
    }

    #[test]
    fn test_other_io_error_keeps_source() {
        let e = DatasetError::io("a.json", Error::new(ErrorKind::PermissionDenied, "nope"));
        assert!(matches!(e, DatasetError::Io { .. }));
        assert!(e.to_string().contains("nope"));
    }
}
