// ============================================================
// Layer 6 — Dataset File Selection
// ============================================================
// Finds dataset files by glob pattern (e.g. "VNLs1mpleQA_*.json")
// inside a data directory. Results come back pattern by
// pattern, each pattern's matches in sorted order, with
// duplicates removed.

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};

/// All regular files in `dir` matching any of `patterns`.
pub fn find_matching(dir: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let base = Pattern::escape(&dir.to_string_lossy());
    let mut found: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let full = format!("{base}/{pattern}");
        let mut matches: Vec<PathBuf> = glob::glob(&full)
            .with_context(|| format!("Invalid file pattern '{pattern}'"))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!("Cannot read '{}': {}", e.path().display(), e);
                    None
                }
            })
            .filter(|p| p.is_file())
            .collect();
        matches.sort();

        for path in matches {
            if !found.contains(&path) {
                found.push(path);
            }
        }
    }

    Ok(found)
}

/// All files in `dir` with the given extension, sorted.
pub fn find_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    find_matching(dir, &[format!("*.{extension}")])
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "[]").unwrap();
    }

    #[test]
    fn test_pattern_order_then_sorted() {
        let dir = TempDir::new().unwrap();
        for name in [
            "VNLc0mpl3xQA_train.json",
            "VNLs1mpleQA_val (v2).json",
            "VNLs1mpleQA_train (v2).json",
            "notes.txt",
        ] {
            touch(dir.path(), name);
        }

        let patterns = vec!["VNLs1mpleQA_*.json".to_string(), "VNLc0mpl3xQA_*.json".to_string()];
        let names: Vec<String> = find_matching(dir.path(), &patterns)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(
            names,
            ["VNLs1mpleQA_train (v2).json", "VNLs1mpleQA_val (v2).json", "VNLc0mpl3xQA_train.json"]
        );
    }

    #[test]
    fn test_overlapping_patterns_do_not_duplicate() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.json");
        let patterns = vec!["*.json".to_string(), "a.*".to_string()];
        assert_eq!(find_matching(dir.path(), &patterns).unwrap().len(), 1);
    }

    #[test]
    fn test_directory_with_glob_characters() {
        let root = TempDir::new().unwrap();
        let dir  = root.path().join("data [v2]");
        fs::create_dir(&dir).unwrap();
        touch(&dir, "x.csv");
        assert_eq!(find_with_extension(&dir, "csv").unwrap(), vec![dir.join("x.csv")]);
    }
}
