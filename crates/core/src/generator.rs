use crate::error::GenerationError;
use crate::llm::{CompletionModel, CompletionRequest, SYSTEM_PROMPT};
use crate::models::{GenerationOptions, QaPair};
use crate::parser::parse_qa_response;
use tracing::{debug, info, warn};

pub fn build_prompt(chunk: &str, num_questions: usize) -> String {
    format!(
        "Given the following text, generate {num_questions} questions and their corresponding answers:\n\n{chunk}"
    )
}

pub struct QaGenerator<M> {
    model: M,
    model_name: String,
    max_tokens_per_question: u32,
    temperature: f32,
}

impl<M> QaGenerator<M> {
    pub fn model(&self) -> &M {
        &self.model
    }
}

impl<M> QaGenerator<M>
where
    M: CompletionModel + Send + Sync,
{
    pub fn new(model: M, options: &GenerationOptions) -> Self {
        Self {
            model,
            model_name: options.model.clone(),
            max_tokens_per_question: options.max_tokens_per_question,
            temperature: options.temperature,
        }
    }

    pub fn request_for(&self, chunk: &str, num_questions: usize) -> CompletionRequest {
        let questions = u32::try_from(num_questions).unwrap_or(u32::MAX);
        CompletionRequest {
            model: self.model_name.clone(),
            system_prompt: SYSTEM_PROMPT.to_string(),
            prompt: build_prompt(chunk, num_questions),
            max_tokens: self.max_tokens_per_question.saturating_mul(questions),
            temperature: self.temperature,
        }
    }

    /// Generates pairs for one chunk. Model failures are logged and yield no pairs.
    pub async fn generate(&self, chunk: &str, num_questions: usize) -> Vec<QaPair> {
        match self.try_generate(chunk, num_questions).await {
            Ok(pairs) => pairs,
            Err(error) => {
                warn!(%error, "question generation failed, skipping chunk");
                Vec::new()
            }
        }
    }

    pub async fn try_generate(
        &self,
        chunk: &str,
        num_questions: usize,
    ) -> Result<Vec<QaPair>, GenerationError> {
        if chunk.trim().is_empty() {
            info!("chunk text is empty, nothing to generate");
            return Ok(Vec::new());
        }

        let request = self.request_for(chunk, num_questions);
        let reply = self.model.complete(&request).await?;
        debug!(reply = %reply, "raw model reply");

        let reply = reply.trim();
        if reply.is_empty() {
            info!("no questions and answers were generated");
            return Ok(Vec::new());
        }

        Ok(parse_qa_response(reply))
    }
}
