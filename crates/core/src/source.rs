use crate::error::{ExtractError, Result};
use crate::extractor::{DocumentExtractor, DocxExtractor, LopdfExtractor};
use crate::models::SourceKind;
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use tracing::debug;
use url::Url;

/// Picks an extraction strategy from the identifier alone.
///
/// File suffixes are checked before URL schemes, so `https://host/file.pdf`
/// is treated as a local PDF path.
pub fn classify_source(identifier: &str) -> Result<SourceKind> {
    let lowered = identifier.to_lowercase();

    if lowered.ends_with(".pdf") {
        Ok(SourceKind::Pdf(PathBuf::from(identifier)))
    } else if lowered.ends_with(".docx") {
        Ok(SourceKind::Docx(PathBuf::from(identifier)))
    } else if identifier.starts_with("http://") || identifier.starts_with("https://") {
        Ok(SourceKind::Url(identifier.to_string()))
    } else {
        Err(ExtractError::Unsupported(identifier.to_string()))
    }
}

#[async_trait]
pub trait TextSource {
    async fn resolve_text(&self, identifier: &str) -> Result<String, ExtractError>;
}

pub struct SourceResolver {
    client: Client,
    pdf: LopdfExtractor,
    docx: DocxExtractor,
}

impl Default for SourceResolver {
    fn default() -> Self {
        Self::new(Client::new())
    }
}

impl SourceResolver {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            pdf: LopdfExtractor,
            docx: DocxExtractor,
        }
    }

    pub async fn fetch_text(&self, url: &str) -> Result<String, ExtractError> {
        let parsed = Url::parse(url)?;
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TextSource for SourceResolver {
    async fn resolve_text(&self, identifier: &str) -> Result<String, ExtractError> {
        let kind = classify_source(identifier)?;
        debug!(source = identifier, kind = ?kind, "resolving source text");

        match kind {
            SourceKind::Pdf(path) => {
                tokio::task::block_in_place(|| self.pdf.extract_text(&path))
            }
            SourceKind::Docx(path) => {
                tokio::task::block_in_place(|| self.docx.extract_text(&path))
            }
            SourceKind::Url(url) => self.fetch_text(&url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn suffixes_are_case_insensitive() {
        assert_eq!(
            classify_source("Manual.PDF").ok(),
            Some(SourceKind::Pdf(PathBuf::from("Manual.PDF")))
        );
        assert_eq!(
            classify_source("notes.DocX").ok(),
            Some(SourceKind::Docx(PathBuf::from("notes.DocX")))
        );
    }

    #[test]
    fn http_and_https_are_urls() {
        assert_eq!(
            classify_source("https://example.com/api/text").ok(),
            Some(SourceKind::Url("https://example.com/api/text".to_string()))
        );
        assert_eq!(
            classify_source("http://localhost:8080").ok(),
            Some(SourceKind::Url("http://localhost:8080".to_string()))
        );
    }

    #[test]
    fn suffix_wins_over_scheme() {
        assert_eq!(
            classify_source("https://example.com/paper.pdf").ok(),
            Some(SourceKind::Pdf(PathBuf::from("https://example.com/paper.pdf")))
        );
    }

    #[test]
    fn plain_text_files_are_unsupported() {
        let result = classify_source("notes.txt");
        assert!(matches!(result, Err(ref error) if error.is_unsupported()));

        let result = classify_source("ftp://example.com/notes");
        assert!(matches!(result, Err(ExtractError::Unsupported(_))));
    }

    #[tokio::test]
    async fn url_body_is_returned_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/doc"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Raw body\nline two"))
            .mount(&server)
            .await;

        let resolver = SourceResolver::default();
        let text = resolver
            .resolve_text(&format!("{}/doc", server.uri()))
            .await
            .expect("fetch should succeed");

        assert_eq!(text, "Raw body\nline two");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let resolver = SourceResolver::default();
        let result = resolver
            .resolve_text(&format!("{}/missing", server.uri()))
            .await;

        assert!(matches!(
            result,
            Err(ExtractError::HttpStatus { status: 404, .. })
        ));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn missing_pdf_fails_to_parse() {
        let resolver = SourceResolver::default();
        let result = resolver.resolve_text("/no/such/file.pdf").await;
        assert!(matches!(result, Err(ExtractError::PdfParse(_))));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn docx_source_resolves_to_paragraph_text() -> Result<(), Box<dyn std::error::Error>> {
        use docx_rs::{Docx, Paragraph, Run};

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("Notes.DOCX");
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Gears mesh.")))
            .build()
            .pack(std::fs::File::create(&path)?)?;

        let resolver = SourceResolver::default();
        let text = resolver.resolve_text(&path.to_string_lossy()).await?;
        assert_eq!(text, "Gears mesh.");
        Ok(())
    }
}
