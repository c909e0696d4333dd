// ============================================================
// Layer 5 — Inferencer
// ============================================================
// The single request/response operation behind the chat UI:
//
//   {"question": "..."}  →  {"answer": "..."}
//
// The loaded model is a TextGenerator handle owned by the
// Inferencer for the life of the process and passed in once at
// construction. Each request:
//   1. wraps the question in the inference prompt
//   2. generates with the sampling settings
//   3. strips the prompt if the runtime echoed it back
//   4. cuts at the first stop marker and trims
//
// No TextGenerator ships in this crate: the runtime that loads
// the fine-tuned weights and the HTTP endpoint in front of it
// live outside it and bind here through the trait.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::domain::prompt::{inference_prompt, STOP_MARKERS};
use crate::domain::traits::{GenerationParams, QuestionAnswerer, TextGenerator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

pub struct Inferencer<G: TextGenerator> {
    generator: G,
    params:    GenerationParams,
}

impl<G: TextGenerator> Inferencer<G> {
    pub fn new(generator: G) -> Self {
        Self::with_params(generator, GenerationParams::default())
    }

    pub fn with_params(generator: G, params: GenerationParams) -> Self {
        Self { generator, params }
    }

    pub fn params(&self) -> &GenerationParams {
        &self.params
    }

    pub fn handle(&self, request: &ChatRequest) -> Result<ChatResponse> {
        let answer = self.answer(&request.question)?;
        tracing::info!("[QUESTION] {}\n[ANSWER] {}\n{}", request.question, answer, "=".repeat(40));
        Ok(ChatResponse { answer })
    }
}

impl<G: TextGenerator> QuestionAnswerer for Inferencer<G> {
    fn answer(&self, question: &str) -> Result<String> {
        let prompt    = inference_prompt(question);
        let generated = self.generator.generate(&prompt, &self.params)?;
        Ok(extract_answer(&prompt, &generated))
    }
}

/// Pull the answer out of raw generated text.
pub fn extract_answer(prompt: &str, generated: &str) -> String {
    let mut answer = match generated.split_once(prompt) {
        Some((_, after)) => after.trim(),
        None => generated,
    };
    for marker in STOP_MARKERS {
        if let Some((before, _)) = answer.split_once(marker) {
            answer = before;
        }
    }
    answer.trim().to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Echoes the prompt followed by a fixed continuation, recording
    /// what it was asked.
    struct EchoGenerator {
        continuation: String,
        seen:         RefCell<Vec<(String, GenerationParams)>>,
    }

    impl EchoGenerator {
        fn new(continuation: &str) -> Self {
            Self { continuation: continuation.to_string(), seen: RefCell::new(Vec::new()) }
        }
    }

    impl TextGenerator for EchoGenerator {
        fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String> {
            self.seen.borrow_mut().push((prompt.to_string(), params.clone()));
            Ok(format!("{prompt}{}", self.continuation))
        }
    }

    struct BareGenerator(&'static str);

    impl TextGenerator for BareGenerator {
        fn generate(&self, _prompt: &str, _params: &GenerationParams) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_echoed_prompt_is_stripped() {
        let inf  = Inferencer::new(EchoGenerator::new("  Theo Điều 429 BLDS, thời hiệu là 03 năm.  "));
        let resp = inf.handle(&ChatRequest { question: "Thời hiệu?".into() }).unwrap();
        assert_eq!(resp.answer, "Theo Điều 429 BLDS, thời hiệu là 03 năm.");
    }

    #[test]
    fn test_generator_receives_prompt_and_default_params() {
        let generator = EchoGenerator::new("ok");
        let inf = Inferencer::new(generator);
        inf.answer("Câu hỏi").unwrap();

        let seen = inf.generator.seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, inference_prompt("Câu hỏi"));
        assert_eq!(seen[0].1.max_new_tokens, 1024);
        assert_eq!(seen[0].1.temperature, 0.6);
    }

    #[test]
    fn test_cuts_at_stop_markers() {
        let inf = Inferencer::new(BareGenerator("Trả lời.<|im_end|>\n<|im_start|>user rác"));
        assert_eq!(inf.answer("q").unwrap(), "Trả lời.");

        let inf = Inferencer::new(BareGenerator(" A <|endoftext|> B"));
        assert_eq!(inf.answer("q").unwrap(), "A");
    }

    #[test]
    fn test_answer_without_echo_is_kept_whole() {
        assert_eq!(extract_answer("prompt", "  just the answer \n"), "just the answer");
    }

    #[test]
    fn test_chat_wire_shapes() {
        let req: ChatRequest = serde_json::from_str(r#"{"question": "Hỏi?"}"#).unwrap();
        assert_eq!(req.question, "Hỏi?");
        let body = serde_json::to_value(ChatResponse { answer: "Đáp".into() }).unwrap();
        assert_eq!(body, serde_json::json!({"answer": "Đáp"}));
    }
}
