use crate::error::ExtractError;
use docx_rs::{read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PageText {
    pub number: u32,
    pub text: String,
}

pub trait DocumentExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    pub fn extract_pages(&self, path: &Path) -> Result<Vec<PageText>, ExtractError> {
        let document =
            Document::load(path).map_err(|error| ExtractError::PdfParse(error.to_string()))?;

        let mut pages = Vec::new();
        for (page_no, _page_id) in document.get_pages() {
            let text = document
                .extract_text(&[page_no])
                .map_err(|error| ExtractError::PdfParse(error.to_string()))?;

            pages.push(PageText {
                number: page_no,
                text,
            });
        }

        Ok(pages)
    }
}

impl DocumentExtractor for LopdfExtractor {
    /// Concatenates every page in page order, without separators.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let pages = self.extract_pages(path)?;
        let mut text = String::new();
        for page in pages {
            debug!(page = page.number, chars = page.text.len(), "pdf page extracted");
            text.push_str(&page.text);
        }
        Ok(text)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DocxExtractor;

impl DocumentExtractor for DocxExtractor {
    /// Joins top-level paragraphs with `\n`. Empty paragraphs are kept as blank lines.
    fn extract_text(&self, path: &Path) -> Result<String, ExtractError> {
        let bytes = std::fs::read(path)?;
        let docx =
            read_docx(&bytes).map_err(|error| ExtractError::DocxParse(format!("{error:?}")))?;

        let paragraphs = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(paragraph) => Some(paragraph_text(paragraph)),
                _ => None,
            })
            .collect::<Vec<_>>();

        Ok(paragraphs.join("\n"))
    }
}

fn paragraph_text(paragraph: &Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                if let RunChild::Text(run_text) = run_child {
                    text.push_str(&run_text.text);
                }
            }
        }
    }
    text
}
