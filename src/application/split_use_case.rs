// ============================================================
// Layer 2 — Split Use Case
// ============================================================
// Re-splits the simple dataset into exact 80/10/10 partitions:
//
//   Step 1: load train, val, test files (missing → empty)
//   Step 2: concatenate them in that order
//   Step 3: split contiguously, no shuffle
//   Step 4: overwrite the same three files with the new slices
//
// An empty concatenation stops the command with an error.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;

use crate::application::{rule, SPLIT_TEST_FILE, SPLIT_TRAIN_FILE, SPLIT_VAL_FILE};
use crate::data::loader::{display_name, load_array, write_json};
use crate::data::splitter::{split_80_10_10, SplitSizes};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    pub data_dir:   PathBuf,
    pub train_file: String,
    pub val_file:   String,
    pub test_file:  String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            data_dir:   PathBuf::from("."),
            train_file: SPLIT_TRAIN_FILE.to_string(),
            val_file:   SPLIT_VAL_FILE.to_string(),
            test_file:  SPLIT_TEST_FILE.to_string(),
        }
    }
}

impl SplitConfig {
    /// Train, val, test paths in split order.
    pub fn paths(&self) -> [PathBuf; 3] {
        [
            self.data_dir.join(&self.train_file),
            self.data_dir.join(&self.val_file),
            self.data_dir.join(&self.test_file),
        ]
    }
}

pub struct SplitUseCase {
    config: SplitConfig,
}

impl SplitUseCase {
    pub fn new(config: SplitConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<SplitSizes> {
        let paths = self.config.paths();

        let mut combined: Vec<Value> = Vec::new();
        for path in &paths {
            match load_array(path) {
                Ok(items) => combined.extend(items),
                Err(e) => tracing::warn!("{}", e),
            }
        }

        println!("Dataset Splitter (80-10-10, no shuffle, overwrite)");
        println!("{}", rule('='));
        println!("Total items: {}", combined.len());

        let n_total = combined.len();
        let split   = split_80_10_10(combined)?;

        for ((label, part), path) in split.parts().into_iter().zip(&paths) {
            write_json(path, part)?;
            println!("{:<6}: {} items written to {}", title_case(label), part.len(), display_name(path));
        }

        println!("{}", rule('-'));
        for (label, part) in split.parts() {
            println!(
                "{:<5}: {} ({:.2}%)",
                title_case(label),
                part.len(),
                part.len() as f64 / n_total as f64 * 100.0
            );
        }
        println!("\n80-10-10 split complete. Files overwritten.");

        Ok(SplitSizes {
            train: split.train.len(),
            val:   split.val.len(),
            test:  split.test.len(),
        })
    }
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
