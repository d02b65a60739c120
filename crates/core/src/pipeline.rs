use crate::chunking::{chunk_text, ChunkingConfig};
use crate::error::PipelineError;
use crate::generator::QaGenerator;
use crate::llm::CompletionModel;
use crate::models::{GenerationOptions, QaCollection, RunOutcome};
use crate::source::TextSource;
use std::path::Path;
use tracing::{debug, info, warn};

/// Drives one run: resolve text, chunk it, generate pairs per chunk, write the file.
///
/// Chunks are processed one at a time in document order.
pub struct QaPipeline<S, M> {
    source: S,
    generator: QaGenerator<M>,
    options: GenerationOptions,
}

impl<S, M> QaPipeline<S, M>
where
    S: TextSource + Send + Sync,
    M: CompletionModel + Send + Sync,
{
    pub fn new(source: S, model: M, options: GenerationOptions) -> Self {
        let generator = QaGenerator::new(model, &options);
        Self {
            source,
            generator,
            options,
        }
    }

    pub async fn run(&self, identifier: &str) -> Result<RunOutcome, PipelineError> {
        let text = match self.source.resolve_text(identifier).await {
            Ok(text) => text,
            Err(error) if error.is_unsupported() => {
                warn!(source = identifier, "unsupported input source");
                return Ok(RunOutcome::Unsupported(identifier.to_string()));
            }
            Err(error) => {
                warn!(source = identifier, %error, "text extraction failed");
                String::new()
            }
        };

        if text.trim().is_empty() {
            warn!(source = identifier, "no text extracted");
            return Ok(RunOutcome::NoText);
        }

        let chunks = chunk_text(&text, ChunkingConfig::from(&self.options));
        info!(
            source = identifier,
            chars = text.chars().count(),
            chunk_count = chunks.len(),
            "text split into chunks"
        );

        let collection = self.collect_pairs(&chunks).await;
        if collection.is_empty() {
            warn!(source = identifier, "no q&a pairs were generated");
        }
        write_collection(&self.options.output_path, &collection).await?;

        info!(
            path = %self.options.output_path.display(),
            pair_count = collection.len(),
            "q&a pairs written"
        );

        Ok(RunOutcome::Written {
            path: self.options.output_path.clone(),
            chunk_count: chunks.len(),
            pair_count: collection.len(),
        })
    }

    pub async fn collect_pairs(&self, chunks: &[String]) -> QaCollection {
        let mut collection = QaCollection::default();

        for (index, chunk) in chunks.iter().enumerate() {
            info!(chunk = index + 1, total = chunks.len(), "generating Q&A for chunk");
            let pairs = self
                .generator
                .generate(chunk, self.options.num_questions)
                .await;
            debug!(chunk = index + 1, pair_count = pairs.len(), "chunk done");
            collection.extend(pairs);
        }

        collection
    }
}

/// Overwrites `path` with the pretty-printed collection.
pub async fn write_collection(path: &Path, collection: &QaCollection) -> Result<(), PipelineError> {
    let json = serde_json::to_string_pretty(collection)?;
    debug!(collection = %json, "final q&a pairs");
    tokio::fs::write(path, json).await?;
    Ok(())
}
