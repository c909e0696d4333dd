// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the tokenizer that ships with a fine-tuning checkpoint.
//
// A Hugging Face checkpoint directory contains tokenizer.json;
// the store accepts either that directory or the JSON file
// itself.

use anyhow::Result;
use std::path::PathBuf;
use tokenizers::Tokenizer;

use crate::domain::traits::TokenCounter;

const TOKENIZER_FILE: &str = "tokenizer.json";

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where the tokenizer JSON is expected to be.
    pub fn tokenizer_path(&self) -> PathBuf {
        if self.path.is_file() {
            self.path.clone()
        } else {
            self.path.join(TOKENIZER_FILE)
        }
    }

    /// Load the tokenizer from disk.
    ///
    /// Checkpoints often save the truncation and padding used during
    /// training. Both are cleared so every encode reports the text's
    /// full length rather than the saved max_length.
    pub fn load(&self) -> Result<Tokenizer> {
        let path = self.tokenizer_path();
        let mut tokenizer = Tokenizer::from_file(&path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;
        tokenizer
            .with_truncation(None)
            .map_err(|e| anyhow::anyhow!("Cannot disable truncation: {e}"))?;
        tokenizer.with_padding(None);
        tracing::debug!("Tokenizer loaded from '{}'", path.display());
        Ok(tokenizer)
    }
}

impl TokenCounter for Tokenizer {
    fn count_tokens(&self, text: &str, add_special_tokens: bool) -> Result<usize> {
        let encoding = self
            .encode(text, add_special_tokens)
            .map_err(|e| anyhow::anyhow!("Tokenise: {e}"))?;
        Ok(encoding.get_ids().len())
    }
}
