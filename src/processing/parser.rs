//! Resume parsing: coarse sections and skill extraction

use crate::error::Result;
use crate::input::InputManager;
use crate::processing::text_processor::clean_text;
use regex::Regex;
use serde::Serialize;
use std::path::Path;

/// Structured view of a resume. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedResume {
    pub education: String,
    /// Vocabulary skills found in the text, in vocabulary order.
    pub skills: Vec<String>,
    pub experience: String,
    pub projects: String,
    /// Normalized full text, the input for scoring.
    pub full_text: String,
}

pub struct ResumeParser {
    vocabulary: Vec<String>,
    education_re: Regex,
    experience_re: Regex,
    projects_re: Regex,
}

impl ResumeParser {
    pub fn new(vocabulary: Vec<String>) -> Self {
        let education_re = Regex::new(r"(education|bachelor|master|degree|university|college).*")
            .expect("Invalid education regex");
        let experience_re = Regex::new(r"(experience|worked|intern|project|developed).*")
            .expect("Invalid experience regex");
        let projects_re =
            Regex::new(r"(project|built|developed|created).*").expect("Invalid projects regex");

        Self {
            vocabulary,
            education_re,
            experience_re,
            projects_re,
        }
    }

    /// Extract, normalize, and parse a resume file. Unsupported formats
    /// degrade to an empty text, which parses to an empty resume.
    pub async fn parse(&self, input: &mut InputManager, path: &Path) -> Result<ParsedResume> {
        let raw = input.extract_text(path).await?.into_text();
        Ok(self.parse_text(&clean_text(&raw)))
    }

    /// Parse already-normalized text into sections and skills.
    pub fn parse_text(&self, text: &str) -> ParsedResume {
        let skills = self
            .vocabulary
            .iter()
            .filter(|s| text.contains(s.as_str()))
            .cloned()
            .collect();

        ParsedResume {
            education: Self::collect_section(&self.education_re, text),
            skills,
            experience: Self::collect_section(&self.experience_re, text),
            projects: Self::collect_section(&self.projects_re, text),
            full_text: text.to_string(),
        }
    }

    /// Every maximal run from a trigger-word occurrence to the end of its
    /// segment, joined with single spaces. Trigger sets overlap across
    /// sections on purpose; no deduplication.
    fn collect_section(re: &Regex, text: &str) -> String {
        re.find_iter(text)
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
