use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_NUM_QUESTIONS: usize = 5;
pub const DEFAULT_CHUNK_SIZE: usize = 1_500;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_OUTPUT_PATH: &str = "qa_pairs.json";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// The document written at the end of a run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaCollection {
    pub qa_pairs: Vec<QaPair>,
}

impl QaCollection {
    pub fn extend(&mut self, pairs: Vec<QaPair>) {
        self.qa_pairs.extend(pairs);
    }

    pub fn len(&self) -> usize {
        self.qa_pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.qa_pairs.is_empty()
    }
}

/// Where the text of a run comes from, chosen from the identifier's suffix or scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Pdf(PathBuf),
    Docx(PathBuf),
    Url(String),
}

#[derive(Debug, Clone)]
pub struct GenerationOptions {
    pub num_questions: usize,
    pub chunk_size: usize,
    pub model: String,
    pub max_tokens_per_question: u32,
    pub temperature: f32,
    pub output_path: PathBuf,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            num_questions: DEFAULT_NUM_QUESTIONS,
            chunk_size: DEFAULT_CHUNK_SIZE,
            model: DEFAULT_MODEL.to_string(),
            max_tokens_per_question: 150,
            temperature: 0.7,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written {
        path: PathBuf,
        chunk_count: usize,
        pair_count: usize,
    },
    NoText,
    Unsupported(String),
}
