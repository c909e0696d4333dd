// ============================================================
// Layer 3 — Record Domain Type
// ============================================================
// A Record is a single question/answer training example:
//
//   { "question": "...", "answer": "..." }
//
// Raw spreadsheet exports carry the same content under
// different keys ("URL", "Heading", "Content"); the data layer
// rewrites those into this shape. Anything downstream of the
// normalizer (profiling, Alpaca export) works on Records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key holding the question text in a normalized item
pub const QUESTION_KEY: &str = "question";

/// Key holding the answer text in a normalized item
pub const ANSWER_KEY: &str = "answer";

/// A normalized question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub question: String,
    pub answer:   String,
}

impl Record {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer:   answer.into(),
        }
    }

    /// Read a Record out of an arbitrary JSON item.
    ///
    /// Returns `None` unless the item is an object whose `question`
    /// and `answer` are both present and strings. Extra keys are ignored.
    pub fn from_value(item: &Value) -> Option<Self> {
        let obj      = item.as_object()?;
        let question = obj.get(QUESTION_KEY)?.as_str()?;
        let answer   = obj.get(ANSWER_KEY)?.as_str()?;
        Some(Self::new(question, answer))
    }
}

/// True when the item is an object holding both Record keys,
/// whatever their value types.
pub fn has_record_keys(item: &Value) -> bool {
    item.as_object()
        .map(|obj| obj.contains_key(QUESTION_KEY) && obj.contains_key(ANSWER_KEY))
        .unwrap_or(false)
}

// ─── AlpacaRecord ─────────────────────────────────────────────────────────────
/// One example in the Alpaca instruction format consumed by the
/// external training framework.
///
/// `input` and `history` are always empty for single-turn legal Q&A.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlpacaRecord {
    pub instruction: String,
    pub input:       String,
    pub output:      String,
    pub system:      String,
    pub history:     Vec<(String, String)>,
}

impl AlpacaRecord {
    pub fn from_record(record: &Record, system_prompt: &str) -> Self {
        Self {
            instruction: record.question.clone(),
            input:       String::new(),
            output:      record.answer.clone(),
            system:      system_prompt.to_string(),
            history:     Vec::new(),
        }
    }
}
