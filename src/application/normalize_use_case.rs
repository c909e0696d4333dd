// ============================================================
// Layer 2 — Normalize Use Case
// ============================================================
// Step 1: find raw export files in the data directory
// Step 2: report whether each looks like a raw export
// Step 3: rewrite each file in place with question/answer keys
//
// Files that fail to load are reported and left untouched.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::{rule, SIMPLE_PATTERN};
use crate::data::loader::display_name;
use crate::data::normalizer::{check_structure, normalize_file, NormalizeReport};
use crate::infra::file_select::find_matching;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeConfig {
    pub data_dir: PathBuf,
    pub pattern:  String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            pattern:  SIMPLE_PATTERN.to_string(),
        }
    }
}

pub struct NormalizeUseCase {
    config: NormalizeConfig,
}

impl NormalizeUseCase {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    /// Returns the report of every file that was rewritten.
    pub fn execute(&self) -> Result<Vec<(PathBuf, NormalizeReport)>> {
        let cfg = &self.config;

        println!("Simple JSON Files Processing Tool");
        println!("{}", rule('='));
        println!("This tool will process files in: {}", cfg.data_dir.display());
        println!("1. Delete the 'URL' field");
        println!("2. Rename 'Heading' to 'question'");
        println!("3. Rename 'Content' to 'answer'");
        println!("{}", rule('='));

        let files = find_matching(&cfg.data_dir, std::slice::from_ref(&cfg.pattern))?;
        if files.is_empty() {
            println!(
                "No simple JSON files ({}) found in directory: {}",
                cfg.pattern,
                cfg.data_dir.display()
            );
            return Ok(Vec::new());
        }

        println!("Verifying file structures...");
        for path in &files {
            let check = check_structure(path);
            println!("  {}: {}", display_name(path), check);
            if !check.is_valid() {
                tracing::warn!("'{}' does not look like a raw export", display_name(path));
            }
        }

        println!("\nFound {} file(s) to process:", files.len());
        let mut reports = Vec::with_capacity(files.len());
        for path in &files {
            println!("\nProcessing: {}", display_name(path));
            match normalize_file(path) {
                Ok(report) => {
                    print_report(&report);
                    reports.push((path.clone(), report));
                }
                Err(e) => tracing::warn!("  Error: {}", e),
            }
        }

        println!("\nFile processing completed!");
        Ok(reports)
    }
}

fn print_report(r: &NormalizeReport) {
    println!("  Successfully processed {} items", r.items_processed);
    println!("  Deleted 'URL' from {} items", r.url_removed);
    println!("  Renamed 'Heading' to 'question' in {} items", r.heading_renamed);
    println!("  Renamed 'Content' to 'answer' in {} items", r.content_renamed);
    println!("  Total items in file: {}", r.total_items);
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
    fn test_only_matching_files_are_rewritten() {
        let dir = TempDir::new().unwrap();
        let raw = r#"[{"URL": "u", "Heading": "H", "Content": "C"}]"#;
        fs::write(dir.path().join("VNLs1mpleQA_train (v2).json"), raw).unwrap();
        fs::write(dir.path().join("VNLs1mpleQA_broken.json"), "[").unwrap();
        fs::write(dir.path().join("other.json"), raw).unwrap();

        let use_case = NormalizeUseCase::new(NormalizeConfig {
            data_dir: dir.path().to_path_buf(),
            ..NormalizeConfig::default()
        });
        let reports = use_case.execute().unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].1.heading_renamed, 1);
        assert_eq!(
            load_array(&dir.path().join("VNLs1mpleQA_train (v2).json")).unwrap(),
            vec![json!({"question": "H", "answer": "C"})]
        );
        // untouched
        assert_eq!(fs::read_to_string(dir.path().join("other.json")).unwrap(), raw);
        assert_eq!(fs::read_to_string(dir.path().join("VNLs1mpleQA_broken.json")).unwrap(), "[");

        // second run changes nothing
        let again = use_case.execute().unwrap();
        assert!(again.iter().all(|(_, r)| r.is_noop()));
    }
}
