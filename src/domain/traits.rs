// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The tokenizer and the language model are external
// collaborators. The rest of the crate only sees them through
// these traits:
//
//   TokenCounter      — implemented for tokenizers::Tokenizer
//                       in infra/tokenizer_store.rs
//   TextGenerator     — implemented by whatever model runtime
//                       hosts the fine-tuned checkpoint
//   QuestionAnswerer  — implemented by ml::inferencer::Inferencer
//
// Tests substitute whitespace counters and canned generators.

use anyhow::Result;

// ─── TokenCounter ─────────────────────────────────────────────────────────────
/// Anything that can turn text into a token sequence and report its length.
pub trait TokenCounter {
    /// Number of token ids `text` encodes to. With `add_special_tokens`
    /// the tokenizer's framing tokens (BOS/EOS etc.) are included.
    fn count_tokens(&self, text: &str, add_special_tokens: bool) -> Result<usize>;
}

// ─── TextGenerator ────────────────────────────────────────────────────────────
/// Sampling settings passed to the model runtime with every prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    pub max_new_tokens:     usize,
    pub do_sample:          bool,
    pub temperature:        f64,
    pub top_p:              f64,
    pub repetition_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens:     1024,
            do_sample:          true,
            temperature:        0.6,
            top_p:              0.9,
            repetition_penalty: 1.2,
        }
    }
}

/// A loaded causal language model plus its tokenizer.
pub trait TextGenerator {
    /// Generate a continuation for `prompt` and return the decoded text
    /// with special tokens skipped. Runtimes may echo the prompt back.
    fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String>;
}

// ─── QuestionAnswerer ─────────────────────────────────────────────────────────
/// Any component that can answer a legal question in natural language.
pub trait QuestionAnswerer {
    fn answer(&self, question: &str) -> Result<String>;
}
