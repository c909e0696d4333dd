// ============================================================
// Layer 3 — Prompt Formats
// ============================================================
// The same Record is rendered into text in three places:
//
//   plain     — "Question: ...\nAnswer: ..." used to size the
//               training sequence budget
//   sft       — the tagged prompt the fine-tuning run was fed
//   inference — the instruction prompt sent to the served model
//
// Keeping them together makes it obvious when the profiler is
// measuring a different string than the trainer actually sees.

use std::fmt;
use std::str::FromStr;

use crate::domain::record::Record;

/// System prompt attached to every Alpaca export item.
pub const ALPACA_SYSTEM_PROMPT: &str = "Bạn là một trợ lý AI chuyên về pháp luật Việt Nam. \
Hãy trả lời các câu hỏi pháp lý một cách chính xác, đầy đủ và dễ hiểu dựa trên các quy định \
pháp luật hiện hành.";

const SFT_INSTRUCT: &str = "Bạn là một trợ lí tư vấn các vấn đề liên quan đến pháp luật. \
Hãy trả lời như một luật sư chuyên nghiệp.";

const SFT_FORMAT: &str = "Định dạng: Hỏi - Đáp";

/// Stop markers the chat checkpoint may emit past the end of an answer.
pub const STOP_MARKERS: [&str; 2] = ["<|im_end|>", "<|endoftext|>"];

/// Which rendering the length profiler measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptFormat {
    /// `Question: {question}\nAnswer: {answer}`
    #[default]
    Plain,
    /// The tagged prompt used for supervised fine-tuning
    Sft,
}

impl PromptFormat {
    pub fn render(&self, record: &Record) -> String {
        match self {
            PromptFormat::Plain => plain_prompt(record),
            PromptFormat::Sft   => sft_prompt(record),
        }
    }
}

impl fmt::Display for PromptFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptFormat::Plain => f.write_str("plain"),
            PromptFormat::Sft   => f.write_str("sft"),
        }
    }
}

impl FromStr for PromptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" => Ok(PromptFormat::Plain),
            "sft"   => Ok(PromptFormat::Sft),
            other   => Err(format!("unknown prompt format '{other}' (expected plain or sft)")),
        }
    }
}

/// The combined text the length profiler tokenizes.
pub fn plain_prompt(record: &Record) -> String {
    format!("Question: {}\nAnswer: {}", record.question, record.answer)
}

/// The formatting function handed to the SFT trainer.
pub fn sft_prompt(record: &Record) -> String {
    format!(
        "<Instruct>{SFT_INSTRUCT}</Instruct>\n\
         <Format>{SFT_FORMAT}</Format>\n\
         <Question>{}</Question>\n\
         <Answer>{}</Answer>",
        record.question, record.answer,
    )
}

/// Prompt sent to the fine-tuned checkpoint at answer time.
/// The trailing `Response"` line matches what the checkpoint was served with.
pub fn inference_prompt(question: &str) -> String {
    format!(
        " {SFT_INSTRUCT} \n\n### Instruction:\n{question}\n\n### Response\"\n"
    )
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prompt_layout() {
        let r = Record::new("Q?", "A.");
        assert_eq!(plain_prompt(&r), "Question: Q?\nAnswer: A.");
    }

    #[test]
    fn test_sft_prompt_layout() {
        let r = Record::new("Q?", "A.");
        let p = sft_prompt(&r);
        assert!(p.starts_with("<Instruct>Bạn là một trợ lí"));
        assert!(p.contains("</Instruct>\n<Format>Định dạng: Hỏi - Đáp</Format>\n"));
        assert!(p.ends_with("<Question>Q?</Question>\n<Answer>A.</Answer>"));
    }

    #[test]
    fn test_inference_prompt_embeds_question() {
        let p = inference_prompt("Thời hiệu khởi kiện là bao lâu?");
        assert!(p.starts_with(" Bạn là"));
        assert!(p.contains("### Instruction:\nThời hiệu khởi kiện là bao lâu?\n\n### Response"));
        assert!(p.ends_with("\"\n"));
    }

    #[test]
    fn test_prompt_format_parse_and_display() {
        assert_eq!("plain".parse::<PromptFormat>(), Ok(PromptFormat::Plain));
        assert_eq!(" SFT ".parse::<PromptFormat>(), Ok(PromptFormat::Sft));
        assert!("alpaca".parse::<PromptFormat>().is_err());
        assert_eq!(PromptFormat::Sft.to_string(), "sft");
    }

    #[test]
    fn test_render_dispatches_on_format() {
        let r = Record::new("q", "a");
        assert_eq!(PromptFormat::Plain.render(&r), plain_prompt(&r));
        assert_eq!(PromptFormat::Sft.render(&r), sft_prompt(&r));
    }
}
