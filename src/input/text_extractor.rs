//! Text extraction from resume file formats

use crate::error::{Result, ResumeCheckerError};
use docx_rs::{DocumentChild, ParagraphChild, RunChild};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    /// Extracts the text layer of every page in page order, as one
    /// newline-separated string; page separators collapse to single
    /// spaces once the text is normalized. Scanned (image-only) PDFs
    /// yield empty text, not an error.
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeCheckerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeCheckerError::DocumentParse(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct DocxExtractor;

impl TextExtractor for DocxExtractor {
    /// Extracts paragraph text in paragraph order, joined by single
    /// spaces. Tables, headers and footers are ignored.
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeCheckerError::Io)?;

        let docx = docx_rs::read_docx(&bytes).map_err(|e| {
            ResumeCheckerError::DocumentParse(format!(
                "Failed to read DOCX '{}': {}",
                path.display(),
                e
            ))
        })?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(Self::paragraph_text(p)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join(" "))
    }
}

impl DocxExtractor {
    fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
        let mut text = String::new();
        for child in &paragraph.children {
            if let ParagraphChild::Run(run) = child {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        text.push_str(&t.text);
                    }
                }
            }
        }
        text
    }
}
