// ============================================================
// Layer 2 — Convert Use Case
// ============================================================
// Turns every *.csv spreadsheet export in a directory into a
// sibling .json array. A CSV that fails to parse is reported
// and skipped.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::csv_export::convert_csv_file;
use crate::data::loader::display_name;
use crate::infra::file_select::find_with_extension;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub dir: PathBuf,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { dir: PathBuf::from(".") }
    }
}

/// Per-run totals, handy for tests and the closing line.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub converted: usize,
    pub failed:    usize,
}

pub struct ConvertUseCase {
    config: ConvertConfig,
}

impl ConvertUseCase {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<ConvertSummary> {
        let csv_files   = find_with_extension(&self.config.dir, "csv")?;
        let mut summary = ConvertSummary::default();

        if csv_files.is_empty() {
            println!("No CSV files found in '{}'", self.config.dir.display());
            return Ok(summary);
        }

        for csv_path in &csv_files {
            match convert_csv_file(csv_path) {
                Ok((json_path, rows)) => {
                    println!(
                        "Converted {} to {} ({} rows)",
                        display_name(csv_path),
                        display_name(&json_path),
                        rows
                    );
                    summary.converted += 1;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    summary.failed += 1;
                }
            }
        }

        Ok(summary)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_converts_each_csv_in_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.csv"), "URL,Heading,Content\nu,h,c\n").unwrap();
        fs::write(dir.path().join("b.csv"), "URL,Heading,Content\n").unwrap();
        fs::write(dir.path().join("c.txt"), "ignored").unwrap();

        let summary = ConvertUseCase::new(ConvertConfig { dir: dir.path().to_path_buf() })
            .execute()
            .unwrap();

        assert_eq!(summary, ConvertSummary { converted: 2, failed: 0 });
        assert!(dir.path().join("a.json").exists());
        assert!(dir.path().join("b.json").exists());
        assert!(!dir.path().join("c.json").exists());
    }
}
