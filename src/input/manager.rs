//! Input manager for routing files to the right extractor

use crate::error::{Result, ResumeCheckerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Outcome of a text extraction attempt.
///
/// Unsupported extensions are a named outcome rather than an error: the
/// evaluation pipeline scores an empty text for them, but callers can
/// still tell "no text found" apart from "wrong format".
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
    Text(String),
    Unsupported,
}

impl Extraction {
    /// Collapse to plain text, with unsupported formats degrading to an
    /// empty string.
    pub fn into_text(self) -> String {
        match self {
            Extraction::Text(text) => text,
            Extraction::Unsupported => String::new(),
        }
    }

    /// Strict form of [`into_text`](Self::into_text) for callers that
    /// treat an unsupported format as an error instead of empty text.
    pub fn require_text(self) -> Result<String> {
        match self {
            Extraction::Text(text) => Ok(text),
            Extraction::Unsupported => Err(ResumeCheckerError::UnsupportedFormat(
                "expected a .pdf or .docx file".to_string(),
            )),
        }
    }
}

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    /// Extract raw text from a resume file. Corrupt files propagate a
    /// `DocumentParse` error; unrecognized extensions return
    /// `Extraction::Unsupported` without touching the file.
    pub async fn extract_text(&mut self, path: &Path) -> Result<Extraction> {
        let file_type = FileType::from_path(path);

        if file_type == FileType::Unknown {
            warn!("Unsupported file format: {}", path.display());
            return Ok(Extraction::Unsupported);
        }

        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(Extraction::Text(cached_text.clone()));
            }
        }

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Docx => {
                info!("Extracting text from DOCX: {}", path.display());
                DocxExtractor.extract(path).await?
            }
            FileType::Unknown => unreachable!(),
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(Extraction::Text(text))
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
