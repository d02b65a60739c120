use chrono::Utc;
use clap::Parser;
use qagen_core::{
    GenerationOptions, ModelEndpointConfig, OpenAiChatModel, QaPipeline, RunOutcome,
    SourceResolver, DEFAULT_BASE_URL, DEFAULT_CHUNK_SIZE, DEFAULT_MODEL, DEFAULT_NUM_QUESTIONS,
    DEFAULT_OUTPUT_PATH,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "qagen", version)]
struct Cli {
    /// PDF or DOCX path, or an http(s) URL.
    source: String,

    /// Questions requested per chunk.
    #[arg(long, default_value_t = DEFAULT_NUM_QUESTIONS)]
    num_questions: usize,

    /// Maximum characters per chunk.
    #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Output JSON file, overwritten on every run.
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Chat model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Sampling temperature
    #[arg(long, default_value_t = 0.7)]
    temperature: f32,

    /// OpenAI-compatible API base URL
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API key for the model service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_version = env!("CARGO_PKG_VERSION");

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    info!(
        version = app_version,
        started_at = %Utc::now().to_rfc3339(),
        "qagen boot"
    );

    let options = GenerationOptions {
        num_questions: cli.num_questions,
        chunk_size: cli.chunk_size,
        model: cli.model,
        temperature: cli.temperature,
        output_path: cli.output,
        ..GenerationOptions::default()
    };

    let model = OpenAiChatModel::new(ModelEndpointConfig::new(cli.base_url, cli.api_key));
    let pipeline = QaPipeline::new(SourceResolver::default(), model, options);

    match pipeline.run(&cli.source).await? {
        RunOutcome::Written {
            path,
            chunk_count,
            pair_count,
        } => {
            println!(
                "{pair_count} q&a pairs from {chunk_count} chunks written to {} at {}",
                path.display(),
                Utc::now().to_rfc3339()
            );
        }
        RunOutcome::NoText => {
            println!("No text extracted. Please check your input source.");
        }
        RunOutcome::Unsupported(source) => {
            println!("Unsupported input source {source}. Please provide a PDF, DOCX, or a URL.");
        }
    }

    Ok(())
}
