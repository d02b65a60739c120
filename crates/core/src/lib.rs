pub mod chunking;
pub mod error;
pub mod extractor;
pub mod generator;
pub mod llm;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod source;

pub use chunking::{chunk_text, split_into_chunks, ChunkingConfig};
pub use error::{ExtractError, GenerationError, PipelineError};
pub use extractor::{DocumentExtractor, DocxExtractor, LopdfExtractor, PageText};
pub use generator::{build_prompt, QaGenerator};
pub use llm::{
    CompletionModel, CompletionRequest, ModelEndpointConfig, OpenAiChatModel, DEFAULT_BASE_URL,
};
pub use models::{
    GenerationOptions, QaCollection, QaPair, RunOutcome, SourceKind, DEFAULT_CHUNK_SIZE,
    DEFAULT_MODEL, DEFAULT_NUM_QUESTIONS, DEFAULT_OUTPUT_PATH,
};
pub use parser::parse_qa_response;
pub use pipeline::{write_collection, QaPipeline};
pub use source::{classify_source, SourceResolver, TextSource};
