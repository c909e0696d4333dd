// ============================================================
// Layer 4 — Format Normalizer
// ============================================================
// Rewrites raw spreadsheet exports into the canonical schema:
//
//   {"URL": ..., "Heading": H, "Content": C}
//       → {"question": H, "answer": C}
//
// Keys are compared after trimming whitespace and removing
// byte order marks, because CSV exports often leave a BOM glued
// to the first header ("\u{FEFF}URL").
//
// Items without the raw keys pass through unchanged, so running
// the normalizer over an already-normalized file is a no-op.
//
// Why rewrite in place?
//   The later stages (combine, split, export) all glob for the
//   same VNLs1mpleQA_* names. Writing a second copy would leave
//   two files per partition matching the pattern, and the
//   combiner would merge raw and normalized items together.
//
// Why does the renamed key move to the end of the object?
//   serde_json is built with preserve_order, so Map behaves like
//   an insertion-ordered dict: removing a key and inserting the
//   new name appends it. The output reads URL-less, with
//   question before answer, because Heading precedes Content.
//
// Reference: serde_json::Map (preserve_order feature, IndexMap)

use serde_json::{Map, Value};
use std::fmt;
use std::path::Path;

use crate::data::error::{DatasetError, Result};
use crate::data::loader::{load_array, write_json};
use crate::domain::record::{ANSWER_KEY, QUESTION_KEY};

const URL_KEY: &str = "URL";
const HEADING_KEY: &str = "Heading";
const CONTENT_KEY: &str = "Content";

/// How many sample items `check_structure` inspects.
const STRUCTURE_SAMPLE: usize = 3;

/// Counts reported after normalizing one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Items in the file, objects or not
    pub total_items:     usize,
    /// Object items visited
    pub items_processed: usize,
    /// URL keys deleted
    pub url_removed:     usize,
    pub heading_renamed: usize,
    pub content_renamed: usize,
}

impl NormalizeReport {
    /// True when the pass changed nothing.
    pub fn is_noop(&self) -> bool {
        self.url_removed == 0 && self.heading_renamed == 0 && self.content_renamed == 0
    }
}

/// A key as it compares for matching: trimmed, BOM-free.
fn canonical_key(key: &str) -> String {
    key.trim().replace('\u{FEFF}', "")
}

fn find_key(obj: &Map<String, Value>, wanted: &str) -> Option<String> {
    obj.keys().find(|k| canonical_key(k) == wanted).cloned()
}

/// Move the value under `from` to `to`. The new key lands at the end of
/// the object unless `to` already existed.
fn rename_key(obj: &mut Map<String, Value>, from: &str, to: &str) -> bool {
    let Some(key) = find_key(obj, from) else {
        return false;
    };
    match obj.shift_remove(&key) {
        Some(value) => {
            obj.insert(to.to_string(), value);
            true
        }
        None => false,
    }
}

/// Normalize one object in place, updating `report`.
fn normalize_object(obj: &mut Map<String, Value>, report: &mut NormalizeReport) {
    let url_keys: Vec<String> = obj
        .keys()
        .filter(|k| canonical_key(k) == URL_KEY)
        .cloned()
        .collect();
    for key in url_keys {
        obj.shift_remove(&key);
        report.url_removed += 1;
    }

    if rename_key(obj, HEADING_KEY, QUESTION_KEY) {
        report.heading_renamed += 1;
    }
    if rename_key(obj, CONTENT_KEY, ANSWER_KEY) {
        report.content_renamed += 1;
    }
    report.items_processed += 1;
}

/// Normalize every object item; non-object items are left alone.
pub fn normalize_items(items: &mut [Value]) -> NormalizeReport {
    let mut report = NormalizeReport {
        total_items: items.len(),
        ..NormalizeReport::default()
    };
    for item in items.iter_mut() {
        if let Value::Object(obj) = item {
            normalize_object(obj, &mut report);
        }
    }
    report
}

/// Load `path`, normalize it and overwrite it in place.
pub fn normalize_file(path: &Path) -> Result<NormalizeReport> {
    let mut items = load_array(path)?;
    let report    = normalize_items(&mut items);
    write_json(path, &items)?;
    Ok(report)
}

// ─── Structure check ──────────────────────────────────────────────────────────
/// Outcome of sniffing a raw file before normalizing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureCheck {
    Confirmed,
    EmptyList,
    NotAList,
    ItemNotObject(usize),
    MissingRawFields,
    Unreadable(String),
}

impl StructureCheck {
    pub fn is_valid(&self) -> bool {
        matches!(self, StructureCheck::Confirmed | StructureCheck::EmptyList)
    }
}

impl fmt::Display for StructureCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureCheck::Confirmed        => write!(f, "Simple JSON structure confirmed"),
            StructureCheck::EmptyList        => write!(f, "Empty list"),
            StructureCheck::NotAList         => write!(f, "Data is not a list"),
            StructureCheck::ItemNotObject(i) => write!(f, "Item {i} is not a dictionary"),
            StructureCheck::MissingRawFields => {
                write!(f, "Items don't have expected 'Heading' and 'Content' fields")
            }
            StructureCheck::Unreadable(e)    => write!(f, "Error reading file: {e}"),
        }
    }
}

/// Check whether `path` looks like a raw export: one of the first few
/// items must carry both `Heading` and `Content`.
pub fn check_structure(path: &Path) -> StructureCheck {
    let items = match load_array(path) {
        Ok(items) => items,
        Err(DatasetError::NotAnArray(_)) => return StructureCheck::NotAList,
        Err(e) => return StructureCheck::Unreadable(e.to_string()),
    };
    if items.is_empty() {
        return StructureCheck::EmptyList;
    }
    for (i, item) in items.iter().take(STRUCTURE_SAMPLE).enumerate() {
        let Some(obj) = item.as_object() else {
            return StructureCheck::ItemNotObject(i);
        };
        if find_key(obj, HEADING_KEY).is_some() && find_key(obj, CONTENT_KEY).is_some() {
            return StructureCheck::Confirmed;
        }
    }
    StructureCheck::MissingRawFields
}
