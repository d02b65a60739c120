use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("pdf parse error: {0}")]
    PdfParse(String),

    #[error("docx parse error: {0}")]
    DocxParse(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} returned {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("url parse error: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("unsupported input source: {0}")]
    Unsupported(String),
}

impl ExtractError {
    /// Unsupported sources abort the run; every other failure is recovered as empty text.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported(_))
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("model service returned {status}: {details}")]
    Service { status: u16, details: String },

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("model response contained no choices")]
    EmptyChoices,

    #[error("model client misconfigured: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialize error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T, E = ExtractError> = std::result::Result<T, E>;
