// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// One subcommand per pipeline stage. Every flag defaults to the
// file names the dataset has always used, so running a command
// with no flags from the data directory does the usual thing.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::{
    combine_use_case::CombineConfig, convert_use_case::ConvertConfig,
    export_use_case::ExportConfig, normalize_use_case::NormalizeConfig,
    profile_use_case::ProfileConfig, split_use_case::SplitConfig, ALPACA_OUTPUT_DIR,
    COMBINED_OUTPUT, COMPLEX_PATTERN, DEFAULT_MODEL_PATH, DEFAULT_TRAIN_FILE, DEFAULT_VAL_FILE,
    SIMPLE_PATTERN, SPLIT_TEST_FILE, SPLIT_TRAIN_FILE, SPLIT_VAL_FILE,
};
use crate::domain::prompt::{PromptFormat, ALPACA_SYSTEM_PROMPT};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every CSV export in a directory to a JSON array
    CsvToJson(CsvToJsonArgs),

    /// Rename URL/Heading/Content to question/answer, in place
    Normalize(NormalizeArgs),

    /// Concatenate train/test partition files into one corpus
    Combine(CombineArgs),

    /// Re-split the simple dataset files 80/10/10 without shuffling
    Split(SplitArgs),

    /// Token-length statistics and max_length recommendation
    Profile(ProfileArgs),

    /// Write Alpaca-format copies for the external trainer
    ExportAlpaca(ExportAlpacaArgs),
}

#[derive(Args, Debug)]
pub struct CsvToJsonArgs {
    /// Directory holding the .csv exports
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

impl From<CsvToJsonArgs> for ConvertConfig {
    fn from(a: CsvToJsonArgs) -> Self {
        ConvertConfig { dir: a.dir }
    }
}

#[derive(Args, Debug)]
pub struct NormalizeArgs {
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Glob pattern of raw files to rewrite
    #[arg(long, default_value = SIMPLE_PATTERN)]
    pub pattern: String,
}

impl From<NormalizeArgs> for NormalizeConfig {
    fn from(a: NormalizeArgs) -> Self {
        NormalizeConfig { data_dir: a.data_dir, pattern: a.pattern }
    }
}

#[derive(Args, Debug)]
pub struct CombineArgs {
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    /// Input glob patterns, combined in the order given
    #[arg(long = "pattern", value_delimiter = ',', default_values_t = [SIMPLE_PATTERN.to_string(), COMPLEX_PATTERN.to_string()])]
    pub patterns: Vec<String>,

    /// Substrings that mark a file as a partition to combine
    #[arg(long = "marker", value_delimiter = ',', default_values_t = ["train".to_string(), "test".to_string()])]
    pub markers: Vec<String>,

    /// Output file name inside the data directory
    #[arg(long, default_value = COMBINED_OUTPUT)]
    pub output: String,
}

impl From<CombineArgs> for CombineConfig {
    fn from(a: CombineArgs) -> Self {
        CombineConfig {
            data_dir: a.data_dir,
            patterns: a.patterns,
            markers:  a.markers,
            output:   a.output,
        }
    }
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = SPLIT_TRAIN_FILE)]
    pub train: String,

    #[arg(long, default_value = SPLIT_VAL_FILE)]
    pub val: String,

    #[arg(long, default_value = SPLIT_TEST_FILE)]
    pub test: String,
}

impl From<SplitArgs> for SplitConfig {
    fn from(a: SplitArgs) -> Self {
        SplitConfig {
            data_dir:   a.data_dir,
            train_file: a.train,
            val_file:   a.val,
            test_file:  a.test,
        }
    }
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Checkpoint directory (or tokenizer.json) to tokenize with
    #[arg(long = "model_path", default_value = DEFAULT_MODEL_PATH)]
    pub model_path: PathBuf,

    /// Training JSON file
    #[arg(long = "train_file", default_value = DEFAULT_TRAIN_FILE)]
    pub train_file: PathBuf,

    /// Validation JSON file
    #[arg(long = "val_file", default_value = DEFAULT_VAL_FILE)]
    pub val_file: PathBuf,

    /// Fraction of examples the recommended max_length should cover
    #[arg(long, default_value_t = 0.95)]
    pub target_coverage: f64,

    /// Which prompt rendering to measure: plain or sft
    #[arg(long, default_value_t = PromptFormat::Plain)]
    pub prompt_format: PromptFormat,
}

impl From<ProfileArgs> for ProfileConfig {
    fn from(a: ProfileArgs) -> Self {
        ProfileConfig {
            model_path:      a.model_path,
            train_file:      a.train_file,
            val_file:        a.val_file,
            target_coverage: a.target_coverage,
            prompt_format:   a.prompt_format.to_string(),
        }
    }
}

#[derive(Args, Debug)]
pub struct ExportAlpacaArgs {
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = SIMPLE_PATTERN)]
    pub pattern: String,

    #[arg(long, default_value = ALPACA_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Override the system prompt attached to every item
    #[arg(long)]
    pub system_prompt: Option<String>,
}

impl From<ExportAlpacaArgs> for ExportConfig {
    fn from(a: ExportAlpacaArgs) -> Self {
        ExportConfig {
            data_dir:      a.data_dir,
            pattern:       a.pattern,
            output_dir:    a.output_dir,
            system_prompt: a.system_prompt.unwrap_or_else(|| ALPACA_SYSTEM_PROMPT.to_string()),
        }
    }
}
