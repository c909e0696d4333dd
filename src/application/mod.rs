// ============================================================
// Layer 2 — Application Layer
// ============================================================
// One use case per CLI command. Each owns a *Config struct
// (serializable, with defaults matching the pipeline's file
// names) and orchestrates the data / ml / infra layers.
//
// Use cases catch per-file failures and report them; only a
// problem that makes the whole command meaningless (no data to
// split, no tokenizer) comes back as an error.

/// CSV exports → JSON arrays
pub mod convert_use_case;

/// Raw keys → question/answer, in place
pub mod normalize_use_case;

/// train/test partition files → one combined corpus
pub mod combine_use_case;

/// 80/10/10 re-split of the simple dataset files
pub mod split_use_case;

/// Token-length statistics and max_length recommendation
pub mod profile_use_case;

/// Alpaca-format export for the external trainer
pub mod export_use_case;

/// Raw exports of the simple Q&A dataset
pub const SIMPLE_PATTERN: &str = "VNLs1mpleQA_*.json";

/// Raw exports of the complex Q&A dataset
pub const COMPLEX_PATTERN: &str = "VNLc0mpl3xQA_*.json";

/// Files produced by the combiner
pub const COMBINED_PATTERN: &str = "VNLcombined_*.json";

pub const COMBINED_OUTPUT: &str = "VNLcombined_train.json";

pub const SPLIT_TRAIN_FILE: &str = "VNLs1mpleQA_train (v2).json";
pub const SPLIT_VAL_FILE: &str = "VNLs1mpleQA_val (v2).json";
pub const SPLIT_TEST_FILE: &str = "VNLs1mpleQA_test (v2).json";

pub const DEFAULT_MODEL_PATH: &str = "checkpoint-116000";
pub const DEFAULT_TRAIN_FILE: &str = "data/VNLcombined_train.json";
pub const DEFAULT_VAL_FILE: &str = "data/VNLcombined_val.json";

pub const ALPACA_OUTPUT_DIR: &str = "alpaca";

/// Horizontal rule used by every console report
pub(crate) fn rule(c: char) -> String {
    c.to_string().repeat(50)
}
