// ============================================================
// Layer 4 — Alpaca Export
// ============================================================
// Converts normalized question/answer items into the Alpaca
// instruction format used by the external fine-tuning framework:
//
//   {"instruction": question, "input": "", "output": answer,
//    "system": <system prompt>, "history": []}
//
// Items that are not complete Records are dropped with a warning.

use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::data::error::Result;
use crate::data::loader::{load_array, write_json};
use crate::domain::record::{AlpacaRecord, Record};

/// Convert items, skipping anything without string `question` and `answer`.
pub fn to_alpaca(items: &[Value], system_prompt: &str) -> Vec<AlpacaRecord> {
    items
        .iter()
        .filter_map(|item| match Record::from_value(item) {
            Some(record) => Some(AlpacaRecord::from_record(&record, system_prompt)),
            None => {
                tracing::warn!("Skipping item without 'question' or 'answer' field: {item}");
                None
            }
        })
        .collect()
}

/// `<output_dir>/<stem>_alpaca.json` for an input file.
pub fn alpaca_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset");
    output_dir.join(format!("{stem}_alpaca.json"))
}

/// Convert one file; returns the converted records (already written).
pub fn export_file(
    input:         &Path,
    output_dir:    &Path,
    system_prompt: &str,
) -> Result<(PathBuf, Vec<AlpacaRecord>)> {
    let items   = load_array(input)?;
    let records = to_alpaca(&items, system_prompt);
    let output  = alpaca_output_path(input, output_dir);
    write_json(&output, &records)?;
    Ok((output, records))
}
