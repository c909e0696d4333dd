// ============================================================
// Layer 5 — Length Profiler
// ============================================================
// Measures how long each training example is in tokens so the
// trainer's max_length can be chosen from the data instead of
// guessed.
//
// Three lengths per record:
//   question  — question text alone, no framing tokens
//   answer    — answer text alone, no framing tokens
//   combined  — the rendered prompt (question + answer) with
//               whatever framing tokens the tokenizer adds
//
// The profiler only reads; it never touches the dataset files.

use anyhow::Result;

use crate::domain::length_stats::{LengthStats, MaxLengthRecommendation};
use crate::domain::prompt::PromptFormat;
use crate::domain::record::Record;
use crate::domain::traits::TokenCounter;

/// Log a progress line every this many samples.
const PROGRESS_EVERY: usize = 1000;

/// Token counts for every record of one dataset, in record order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LengthProfile {
    pub question_lengths: Vec<usize>,
    pub answer_lengths:   Vec<usize>,
    pub combined_lengths: Vec<usize>,
}

impl LengthProfile {
    pub fn total_samples(&self) -> usize {
        self.combined_lengths.len()
    }

    pub fn question_stats(&self) -> Option<LengthStats> {
        LengthStats::compute(&self.question_lengths)
    }

    pub fn answer_stats(&self) -> Option<LengthStats> {
        LengthStats::compute(&self.answer_lengths)
    }

    pub fn combined_stats(&self) -> Option<LengthStats> {
        LengthStats::compute(&self.combined_lengths)
    }

    pub fn recommendation(&self, target_coverage: f64) -> Option<MaxLengthRecommendation> {
        MaxLengthRecommendation::from_lengths(&self.combined_lengths, target_coverage)
    }
}

pub struct LengthProfiler<'a, T: TokenCounter + ?Sized> {
    counter: &'a T,
    format:  PromptFormat,
}

impl<'a, T: TokenCounter + ?Sized> LengthProfiler<'a, T> {
    pub fn new(counter: &'a T, format: PromptFormat) -> Self {
        Self { counter, format }
    }

    pub fn profile(&self, records: &[Record]) -> Result<LengthProfile> {
        let total   = records.len();
        let mut out = LengthProfile {
            question_lengths: Vec::with_capacity(total),
            answer_lengths:   Vec::with_capacity(total),
            combined_lengths: Vec::with_capacity(total),
        };

        for (i, record) in records.iter().enumerate() {
            if i % PROGRESS_EVERY == 0 {
                tracing::info!("Processing sample {}/{}", i, total);
            }

            let combined = self.format.render(record);
            out.question_lengths.push(self.counter.count_tokens(&record.question, false)?);
            out.answer_lengths.push(self.counter.count_tokens(&record.answer, false)?);
            out.combined_lengths.push(self.counter.count_tokens(&combined, true)?);
        }

        Ok(out)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    /// One token per whitespace-separated word, plus BOS/EOS on request.
    struct WordCounter;

    impl TokenCounter for WordCounter {
        fn count_tokens(&self, text: &str, add_special_tokens: bool) -> Result<usize> {
            let framing = if add_special_tokens { 2 } else { 0 };
            Ok(text.split_whitespace().count() + framing)
        }
    }

    struct FailingCounter;

    impl TokenCounter for FailingCounter {
        fn count_tokens(&self, _text: &str, _add_special_tokens: bool) -> Result<usize> {
            anyhow::bail!("tokenizer exploded")
        }
    }

    fn words(n: usize) -> String {
        vec!["từ"; n].join(" ")
    }

    #[test]
    fn test_three_lengths_per_record() {
        let records = vec![Record::new("a b", "c d e")];
        let profile = LengthProfiler::new(&WordCounter, PromptFormat::Plain)
            .profile(&records)
            .unwrap();

        assert_eq!(profile.question_lengths, vec![2]);
        assert_eq!(profile.answer_lengths, vec![3]);
        // "Question:" a b "Answer:" c d e + 2 framing
        assert_eq!(profile.combined_lengths, vec![9]);
        assert_eq!(profile.total_samples(), 1);
    }

    #[test]
    fn test_sft_format_measures_longer_prompt() {
        let records = vec![Record::new("a", "b")];
        let plain = LengthProfiler::new(&WordCounter, PromptFormat::Plain).profile(&records).unwrap();
        let sft   = LengthProfiler::new(&WordCounter, PromptFormat::Sft).profile(&records).unwrap();
        assert!(sft.combined_lengths[0] > plain.combined_lengths[0]);
        assert_eq!(sft.question_lengths, plain.question_lengths);
    }

    #[test]
    fn test_known_distribution_recommends_950() {
        // combined = 2 (labels) + 1 (question) + answer words + 2 (framing) = 10 * i
        let records: Vec<Record> = (1..=100)
            .map(|i| Record::new("hỏi", words(10 * i - 5)))
            .collect();
        let profile = LengthProfiler::new(&WordCounter, PromptFormat::Plain)
            .profile(&records)
            .unwrap();
        assert_eq!(profile.combined_lengths, (1..=100).map(|i| 10 * i).collect::<Vec<_>>());

        let stats = profile.combined_stats().unwrap();
        assert!((stats.percentiles.p95 - 950.5).abs() < 1e-9);

        let rec = profile.recommendation(0.95).unwrap();
        assert_eq!(rec.recommended, 950);
        assert_eq!(rec.power_of_two, Some(512));
    }

    #[test]
    fn test_empty_corpus_has_no_stats() {
        let profile = LengthProfiler::new(&WordCounter, PromptFormat::Plain).profile(&[]).unwrap();
        assert!(profile.combined_stats().is_none());
        assert!(profile.recommendation(0.95).is_none());
    }

    #[test]
    fn test_tokenizer_failure_propagates() {
        let records = vec![Record::new("q", "a")];
        let err = LengthProfiler::new(&FailingCounter, PromptFormat::Plain)
            .profile(&records)
            .unwrap_err();
        assert!(err.to_string().contains("exploded"));
    }
}
