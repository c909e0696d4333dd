// ============================================================
// Layer 2 — Profile Use Case
// ============================================================
// Token-length statistics for the SFT training and validation
// files, used to choose the trainer's max_length.
//
//   Step 1: load the checkpoint tokenizer (fatal if missing)
//   Step 2: for train, then val: load records, tokenize,
//           print Question / Answer / Combined statistics
//   Step 3: print max_length recommendations
//
// A missing or unreadable dataset file is reported and the
// next one is analysed.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::application::{rule, DEFAULT_MODEL_PATH, DEFAULT_TRAIN_FILE, DEFAULT_VAL_FILE};
use crate::data::loader::load_array;
use crate::domain::length_stats::{LengthStats, MaxLengthRecommendation};
use crate::domain::prompt::PromptFormat;
use crate::domain::record::Record;
use crate::domain::traits::TokenCounter;
use crate::infra::tokenizer_store::TokenizerStore;
use crate::ml::profiler::{LengthProfile, LengthProfiler};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub model_path:      PathBuf,
    pub train_file:      PathBuf,
    pub val_file:        PathBuf,
    /// Fraction of examples the recommended max_length must cover
    pub target_coverage: f64,
    /// `plain` or `sft`
    pub prompt_format:   String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            model_path:      PathBuf::from(DEFAULT_MODEL_PATH),
            train_file:      PathBuf::from(DEFAULT_TRAIN_FILE),
            val_file:        PathBuf::from(DEFAULT_VAL_FILE),
            target_coverage: 0.95,
            prompt_format:   PromptFormat::Plain.to_string(),
        }
    }
}

/// What one dataset's analysis produced.
#[derive(Debug, Clone)]
pub struct DatasetProfile {
    pub label:          &'static str,
    pub profile:        LengthProfile,
    pub recommendation: Option<MaxLengthRecommendation>,
}

pub struct ProfileUseCase {
    config: ProfileConfig,
}

impl ProfileUseCase {
    pub fn new(config: ProfileConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<Vec<DatasetProfile>> {
        println!("Loading tokenizer...");
        let tokenizer = TokenizerStore::new(&self.config.model_path).load()?;
        println!("Tokenizer loaded from: {}", self.config.model_path.display());
        println!("Vocab size: {}", tokenizer.get_vocab_size(false));

        self.run(&tokenizer)
    }

    /// Analyse train and val with any token counter.
    pub fn run<T: TokenCounter + ?Sized>(&self, counter: &T) -> Result<Vec<DatasetProfile>> {
        let cfg    = &self.config;
        let format = cfg
            .prompt_format
            .parse::<PromptFormat>()
            .map_err(|e| anyhow::anyhow!(e))?;
        anyhow::ensure!(
            cfg.target_coverage > 0.0 && cfg.target_coverage <= 1.0,
            "target coverage must be in (0, 1], got {}",
            cfg.target_coverage
        );

        let profiler    = LengthProfiler::new(counter, format);
        let mut results = Vec::new();

        let datasets = [
            ("TRAINING", "Training", &cfg.train_file),
            ("VALIDATION", "Validation", &cfg.val_file),
        ];
        for (label, name, path) in datasets {
            if !path.exists() {
                println!("{name} file not found: {}", path.display());
                continue;
            }
            if let Some(result) = self.analyse(label, path, &profiler)? {
                results.push(result);
            }
        }

        print_advice();
        Ok(results)
    }

    fn analyse<T: TokenCounter + ?Sized>(
        &self,
        label:    &'static str,
        path:     &Path,
        profiler: &LengthProfiler<'_, T>,
    ) -> Result<Option<DatasetProfile>> {
        println!("Analyzing {}...", path.display());
        let items = match load_array(path) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!("{}", e);
                return Ok(None);
            }
        };
        println!("Total samples: {}", items.len());

        let records: Vec<Record> = items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| {
                let record = Record::from_value(item);
                if record.is_none() {
                    tracing::warn!("Skipping item {} without 'question' or 'answer'", i);
                }
                record
            })
            .collect();

        let profile = profiler.profile(&records)?;

        println!("\n{}", rule('='));
        println!("{} DATA STATISTICS", label);
        println!("{}", rule('='));
        print_stats("Question", profile.question_stats().as_ref());
        print_stats("Answer", profile.answer_stats().as_ref());
        print_stats("Combined (SFT format)", profile.combined_stats().as_ref());

        let recommendation = profile.recommendation(self.config.target_coverage);
        if let Some(rec) = &recommendation {
            print_recommendation(rec);
        }

        Ok(Some(DatasetProfile { label, profile, recommendation }))
    }
}

fn print_stats(name: &str, stats: Option<&LengthStats>) {
    let Some(s) = stats else {
        println!("\n{name} Token Statistics: no samples");
        return;
    };
    println!("\n{name} Token Statistics:");
    println!("  Count: {}", s.count);
    println!("  Mean: {:.2}", s.mean);
    println!("  Median: {:.2}", s.median);
    println!("  Std: {:.2}", s.std);
    println!("  Min: {}", s.min);
    println!("  Max: {}", s.max);
    println!("  Percentiles:");
    for (p, v) in s.percentiles.labelled() {
        println!("    {p}: {v:.2}");
    }
}

fn print_recommendation(rec: &MaxLengthRecommendation) {
    println!("\nMax Length Recommendations:");
    println!("  For {:.1}% coverage: {}", rec.target_coverage * 100.0, rec.recommended);
    println!("  For 99% coverage: {}", rec.at_99);
    println!("  For 90% coverage: {}", rec.at_90);
    match rec.power_of_two {
        Some(p) => println!("  Recommended (power of 2): {p}"),
        None => println!("  Recommended (power of 2): n/a"),
    }
}

fn print_advice() {
    println!("\n{}", rule('='));
    println!("SFT TRAINING RECOMMENDATIONS");
    println!("{}", rule('='));
    println!("1. Use the 'Combined' statistics for max_length as it represents the full SFT format");
    println!("2. Consider using a power of 2 for max_length for computational efficiency");
    println!("3. You may want to truncate very long sequences or split them into multiple examples");
    println!("4. Monitor training loss to ensure the chosen max_length is appropriate");
}
