// ============================================================
// Layer 2 — Alpaca Export Use Case
// ============================================================
// Writes an Alpaca-format copy of every simple dataset file
// into the output directory (created if needed), for training
// with an external instruction-tuning framework.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::application::{rule, ALPACA_OUTPUT_DIR, SIMPLE_PATTERN};
use crate::data::alpaca::export_file;
use crate::data::loader::display_name;
use crate::domain::prompt::ALPACA_SYSTEM_PROMPT;
use crate::infra::file_select::find_matching;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub data_dir:      PathBuf,
    pub pattern:       String,
    pub output_dir:    PathBuf,
    pub system_prompt: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            data_dir:      PathBuf::from("."),
            pattern:       SIMPLE_PATTERN.to_string(),
            output_dir:    PathBuf::from(ALPACA_OUTPUT_DIR),
            system_prompt: ALPACA_SYSTEM_PROMPT.to_string(),
        }
    }
}

pub struct ExportUseCase {
    config: ExportConfig,
}

impl ExportUseCase {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    /// Returns the output files written, with their item counts.
    pub fn execute(&self) -> Result<Vec<(PathBuf, usize)>> {
        let cfg = &self.config;

        println!("Alpaca Format Converter");
        println!("{}", rule('='));

        let files = find_matching(&cfg.data_dir, std::slice::from_ref(&cfg.pattern))?;
        if files.is_empty() {
            println!("No JSON files ({}) found in '{}'.", cfg.pattern, cfg.data_dir.display());
            return Ok(Vec::new());
        }
        println!("Found {} JSON file(s):", files.len());
        for file in &files {
            println!("  - {}", display_name(file));
        }

        std::fs::create_dir_all(&cfg.output_dir)
            .with_context(|| format!("Cannot create '{}'", cfg.output_dir.display()))?;

        let mut written = Vec::new();
        for path in &files {
            println!("\nProcessing: {}", display_name(path));
            match export_file(path, &cfg.output_dir, &cfg.system_prompt) {
                Ok((output, records)) => {
                    println!("  Converted {} items", records.len());
                    println!("  Output saved to: {}", output.display());
                    if let Some(first) = records.first() {
                        println!("  Sample converted item:");
                        println!("{}", serde_json::to_string_pretty(first)?);
                    }
                    written.push((output, records.len()));
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }

        println!("\nConversion completed!");
        Ok(written)
    }
}
