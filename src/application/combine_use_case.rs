// ============================================================
// Layer 2 — Combine Use Case
// ============================================================
// Step 1: find simple and complex dataset files
// Step 2: keep the ones marked as train or test partitions
// Step 3: concatenate them and overwrite the combined file
// Step 4: sanity-check every combined file in the directory,
//         including the output even under a custom name

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::{rule, COMBINED_OUTPUT, COMBINED_PATTERN, COMPLEX_PATTERN, SIMPLE_PATTERN};
use crate::data::combiner::{check_combined, combine_files, select_by_marker, CombinedCheck};
use crate::data::loader::{display_name, write_json};
use crate::infra::file_select::find_matching;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombineConfig {
    pub data_dir: PathBuf,
    /// Input file patterns, combined in this order
    pub patterns: Vec<String>,
    /// A file is combined when its name contains one of these
    pub markers:  Vec<String>,
    /// Output file name inside `data_dir`
    pub output:   String,
}

impl Default for CombineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            patterns: vec![SIMPLE_PATTERN.to_string(), COMPLEX_PATTERN.to_string()],
            markers:  vec!["train".to_string(), "test".to_string()],
            output:   COMBINED_OUTPUT.to_string(),
        }
    }
}

pub struct CombineUseCase {
    config: CombineConfig,
}

impl CombineUseCase {
    pub fn new(config: CombineConfig) -> Self {
        Self { config }
    }

    /// Returns the number of combined items (0 when nothing was written).
    pub fn execute(&self) -> Result<usize> {
        let cfg = &self.config;

        println!("JSON Files Combination Tool");
        println!("{}", rule('='));

        let all_files = find_matching(&cfg.data_dir, &cfg.patterns)?;
        if all_files.is_empty() {
            println!("No JSON files found in '{}'.", cfg.data_dir.display());
            return Ok(0);
        }
        println!("Found {} JSON file(s):", all_files.len());
        for file in &all_files {
            println!("  - {}", display_name(file));
        }

        let selected = select_by_marker(&all_files, &cfg.markers);
        println!("\nFiles to combine ({}): {}", cfg.markers.join(", "), selected.len());
        for file in &selected {
            println!("  - {}", display_name(file));
        }

        let outcome = combine_files(&selected);
        let total   = outcome.items.len();

        if total > 0 {
            let output = cfg.data_dir.join(&cfg.output);
            write_json(&output, &outcome.items)?;
            println!("  Combined data saved to: {}", display_name(&output));
            println!("  Total items: {}", total);
        } else {
            tracing::warn!("No items found in the selected files");
            println!("  Nothing to combine; '{}' left as it was.", cfg.output);
        }
        if !outcome.skipped.is_empty() {
            println!("  Skipped {} file(s)", outcome.skipped.len());
        }

        println!("\n{}", rule('='));
        println!("Combination process completed!");

        self.verify()?;
        Ok(total)
    }

    /// Check every `VNLcombined_*` file plus the configured output,
    /// which may be named outside that pattern.
    fn verify(&self) -> Result<Vec<(PathBuf, CombinedCheck)>> {
        let cfg       = &self.config;
        let mut files = find_matching(&cfg.data_dir, &[COMBINED_PATTERN.to_string()])?;
        let output    = cfg.data_dir.join(&cfg.output);
        if output.is_file() && !files.contains(&output) {
            files.push(output);
        }

        if files.is_empty() {
            println!("No combined files found to verify.");
            return Ok(Vec::new());
        }
        println!("\nVerifying combined files structure...");
        let checks: Vec<(PathBuf, CombinedCheck)> = files
            .into_iter()
            .map(|path| {
                let check = check_combined(&path);
                println!("  {}: {}", display_name(&path), check);
                (path, check)
            })
            .collect();
        Ok(checks)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_array;
    use serde_json::{json, Value};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, items: &[Value]) {
        fs::write(dir.join(name), serde_json::to_string(items).unwrap()).unwrap();
    }

    fn qa(q: &str) -> Value {
        json!({"question": q, "answer": "a"})
    }

    #[test]
    fn test_combines_train_and_test_partitions_only() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "VNLs1mpleQA_train (v2).json", &[qa("s1"), qa("s2")]);
        write(dir.path(), "VNLs1mpleQA_val (v2).json", &[qa("val")]);
        write(dir.path(), "VNLs1mpleQA_test (v2).json", &[qa("s3")]);
        write(dir.path(), "VNLc0mpl3xQA_train.json", &[qa("c1")]);

        let cfg = CombineConfig { data_dir: dir.path().to_path_buf(), ..CombineConfig::default() };
        let n   = CombineUseCase::new(cfg).execute().unwrap();
        assert_eq!(n, 4);

        let out = load_array(&dir.path().join(COMBINED_OUTPUT)).unwrap();
        // simple files first (sorted: test before train), then complex
        let questions: Vec<&str> = out.iter().map(|v| v["question"].as_str().unwrap()).collect();
        assert_eq!(questions, ["s3", "s1", "s2", "c1"]);
    }

    #[test]
    fn test_previous_output_is_overwritten() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), COMBINED_OUTPUT, &[qa("stale"), qa("stale")]);
        write(dir.path(), "VNLs1mpleQA_train.json", &[qa("fresh")]);

        let cfg = CombineConfig { data_dir: dir.path().to_path_buf(), ..CombineConfig::default() };
        CombineUseCase::new(cfg).execute().unwrap();

        assert_eq!(load_array(&dir.path().join(COMBINED_OUTPUT)).unwrap(), vec![qa("fresh")]);
    }

    #[test]
    fn test_nothing_written_when_empty() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "VNLs1mpleQA_val.json", &[qa("val")]);

        let cfg = CombineConfig { data_dir: dir.path().to_path_buf(), ..CombineConfig::default() };
        assert_eq!(CombineUseCase::new(cfg).execute().unwrap(), 0);
        assert!(!dir.path().join(COMBINED_OUTPUT).exists());
    }

    #[test]
    fn test_custom_output_name_is_verified() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "VNLs1mpleQA_train.json", &[qa("s1"), qa("s2")]);

        let cfg = CombineConfig {
            data_dir: dir.path().to_path_buf(),
            output:   "merged.json".to_string(),
            ..CombineConfig::default()
        };
        let use_case = CombineUseCase::new(cfg);
        assert_eq!(use_case.execute().unwrap(), 2);

        let checks = use_case.verify().unwrap();
        assert_eq!(checks, vec![(dir.path().join("merged.json"), CombinedCheck::Valid(2))]);
    }

    #[test]
    fn test_default_output_is_verified_once() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "VNLs1mpleQA_test.json", &[qa("s1")]);

        let cfg = CombineConfig { data_dir: dir.path().to_path_buf(), ..CombineConfig::default() };
        let use_case = CombineUseCase::new(cfg);
        use_case.execute().unwrap();

        let checks = use_case.verify().unwrap();
        assert_eq!(checks, vec![(dir.path().join(COMBINED_OUTPUT), CombinedCheck::Valid(1))]);
    }
}
