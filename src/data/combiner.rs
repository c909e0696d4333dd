// ============================================================
// Layer 4 — Corpus Combiner
// ============================================================
// Concatenates several JSON array files into one corpus:
// file order first, then item order within each file.
//
// A file that cannot be read, does not parse, or is not an
// array is skipped and reported; it never aborts the merge.

use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::data::error::DatasetError;
use crate::data::loader::load_array;
use crate::domain::record::has_record_keys;

/// Items inspected per file by `check_combined`.
const VERIFY_SAMPLE: usize = 3;

/// The merged items plus a per-file account of what happened.
#[derive(Debug, Default)]
pub struct CombineOutcome {
    pub items:   Vec<Value>,
    /// (file, items contributed) in input order
    pub added:   Vec<(PathBuf, usize)>,
    /// Files left out, with the reason
    pub skipped: Vec<(PathBuf, DatasetError)>,
}

/// Keep only files whose name contains one of `markers`
/// (e.g. "train", "test"). Input order is preserved.
pub fn select_by_marker(paths: &[PathBuf], markers: &[String]) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|p| {
            let name = p.file_name().and_then(|n| n.to_str()).unwrap_or_default();
            markers.iter().any(|m| name.contains(m.as_str()))
        })
        .cloned()
        .collect()
}

/// Load and concatenate every file in `paths`.
pub fn combine_files(paths: &[PathBuf]) -> CombineOutcome {
    let mut outcome = CombineOutcome::default();

    for path in paths {
        match load_array(path) {
            Ok(items) => {
                tracing::info!("Added {} items from '{}'", items.len(), path.display());
                outcome.added.push((path.clone(), items.len()));
                outcome.items.extend(items);
            }
            Err(e) => {
                tracing::warn!("Skipping '{}': {}", path.display(), e);
                outcome.skipped.push((path.clone(), e));
            }
        }
    }

    outcome
}

// ─── Combined-file check ──────────────────────────────────────────────────────
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinedCheck {
    Valid(usize),
    EmptyList,
    NotAList,
    ItemNotObject(usize),
    MissingFields(usize),
    Unreadable(String),
}

impl fmt::Display for CombinedCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombinedCheck::Valid(n)         => write!(f, "Valid structure with {n} items"),
            CombinedCheck::EmptyList        => write!(f, "Empty list"),
            CombinedCheck::NotAList         => write!(f, "Data is not a list"),
            CombinedCheck::ItemNotObject(i) => write!(f, "Item {i} is not a dictionary"),
            CombinedCheck::MissingFields(i) => {
                write!(f, "Item {i} missing 'question' or 'answer' fields")
            }
            CombinedCheck::Unreadable(e)    => write!(f, "Error reading file: {e}"),
        }
    }
}

/// Check that the first items of a combined file are question/answer objects.
pub fn check_combined(path: &Path) -> CombinedCheck {
    let items = match load_array(path) {
        Ok(items) => items,
        Err(DatasetError::NotAnArray(_)) => return CombinedCheck::NotAList,
        Err(e) => return CombinedCheck::Unreadable(e.to_string()),
    };
    if items.is_empty() {
        return CombinedCheck::EmptyList;
    }
    for (i, item) in items.iter().take(VERIFY_SAMPLE).enumerate() {
        if !item.is_object() {
            return CombinedCheck::ItemNotObject(i);
        }
        if !has_record_keys(item) {
            return CombinedCheck::MissingFields(i);
        }
    }
    CombinedCheck::Valid(items.len())
}
