//! Weighted resume scoring: keyword overlap + semantic similarity

use crate::error::Result;
use crate::processing::embeddings::{cosine_similarity, EmbeddingProvider};
use crate::processing::text_processor::word_set;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Coarse classification of match quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    High,
    Medium,
    Low,
}

impl Verdict {
    /// Tier boundaries are inclusive on the lower bound.
    pub fn from_score(score: f32) -> Self {
        if score >= 75.0 {
            Verdict::High
        } else if score >= 50.0 {
            Verdict::Medium
        } else {
            Verdict::Low
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::High => "Great match!",
            Verdict::Medium => "Partial match.",
            Verdict::Low => "Low alignment.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::High => "High",
            Verdict::Medium => "Medium",
            Verdict::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "High" => Some(Verdict::High),
            "Medium" => Some(Verdict::Medium),
            "Low" => Some(Verdict::Low),
            _ => None,
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring one resume against one job description.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Weighted score, approximately 0-100. Not clamped: with default
    /// weights a near-perfect match can exceed 100 by floating-point
    /// rounding in the cosine similarity.
    pub score: f32,
    pub verdict: Verdict,
    /// Vocabulary skills present in the job description but absent from
    /// the resume, in vocabulary order.
    pub missing_skills: Vec<String>,
    pub feedback: String,
}

pub struct Scorer {
    provider: Arc<dyn EmbeddingProvider>,
    vocabulary: Vec<String>,
    weight_keywords: f32,
    weight_semantics: f32,
}

impl Scorer {
    /// Weights are taken as given; they need not sum to 1 and are never
    /// normalized.
    pub fn new(
        provider: Arc<dyn EmbeddingProvider>,
        vocabulary: Vec<String>,
        weight_keywords: f32,
        weight_semantics: f32,
    ) -> Self {
        Self {
            provider,
            vocabulary,
            weight_keywords,
            weight_semantics,
        }
    }

    /// Score a resume against a job description. Both texts must already
    /// be normalized (lower-cased, whitespace-collapsed). A precomputed
    /// job-description embedding can be supplied to avoid re-encoding.
    pub fn evaluate(
        &self,
        resume_text: &str,
        jd_text: &str,
        jd_emb: Option<&[f32]>,
    ) -> Result<Evaluation> {
        let keyword_score = keyword_score(resume_text, jd_text);

        let resume_emb = self.provider.encode(resume_text)?;
        let semantic_score = match jd_emb {
            Some(emb) => cosine_similarity(&resume_emb, emb)?,
            None => cosine_similarity(&resume_emb, &self.provider.encode(jd_text)?)?,
        };

        let score =
            (keyword_score * self.weight_keywords + semantic_score * self.weight_semantics) * 100.0;

        let missing_skills = self.missing_skills(resume_text, jd_text);
        let verdict = Verdict::from_score(score);
        let feedback = build_feedback(score, verdict, &missing_skills);

        Ok(Evaluation {
            score,
            verdict,
            missing_skills,
            feedback,
        })
    }

    /// Vocabulary skills the job description asks for that the resume
    /// does not mention. Substring matching on both sides.
    pub fn missing_skills(&self, resume_text: &str, jd_text: &str) -> Vec<String> {
        self.vocabulary
            .iter()
            .filter(|s| jd_text.contains(s.as_str()) && !resume_text.contains(s.as_str()))
            .cloned()
            .collect()
    }
}

/// Ratio of shared words to distinct job-description words. Whitespace
/// word split; punctuation stays attached to its word.
pub fn keyword_score(resume_text: &str, jd_text: &str) -> f32 {
    let resume_words = word_set(resume_text);
    let jd_words = word_set(jd_text);

    let overlap = resume_words.intersection(&jd_words).count();
    overlap as f32 / jd_words.len().max(1) as f32
}

/// Deterministic feedback template. Lists at most the first 10 missing
/// skills in vocabulary order.
fn build_feedback(score: f32, verdict: Verdict, missing_skills: &[String]) -> String {
    let mut feedback = format!("Score: {:.1}. {}", score, verdict.message());
    if !missing_skills.is_empty() {
        let listed: Vec<&str> = missing_skills.iter().take(10).map(|s| s.as_str()).collect();
        feedback.push_str(&format!(" Missing: {}.", listed.join(", ")));
    }
    feedback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_skills;
    use std::collections::HashMap;

    /// Deterministic provider for tests: fixed vectors per text, with a
    /// constant fallback so unknown texts compare as identical.
    struct MockProvider {
        responses: HashMap<String, Vec<f32>>,
        fallback: Vec<f32>,
    }

    impl MockProvider {
        fn constant() -> Self {
            Self {
                responses: HashMap::new(),
                fallback: vec![1.0, 0.0, 0.0, 0.0],
            }
        }

        fn with_response(mut self, text: &str, embedding: Vec<f32>) -> Self {
            self.responses.insert(text.to_string(), embedding);
            self
        }
    }

    impl EmbeddingProvider for MockProvider {
        fn encode(&self, text: &str) -> crate::error::Result<Vec<f32>> {
            Ok(self
                .responses
                .get(text)
                .cloned()
                .unwrap_or_else(|| self.fallback.clone()))
        }

        fn dimension(&self) -> usize {
            self.fallback.len()
        }

        fn model_id(&self) -> &str {
            "mock"
        }
    }

    fn scorer() -> Scorer {
        Scorer::new(
            Arc::new(MockProvider::constant()),
            default_skills(),
            0.5,
            0.5,
        )
    }

    #[test]
    fn test_keyword_score_is_one_for_superset_resume() {
        let score = keyword_score("python docker rust extra words", "python docker rust");
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_keyword_score_is_zero_without_overlap() {
        let score = keyword_score("alpha beta", "gamma delta epsilon");
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_keyword_score_handles_empty_job_description() {
        // max(|jd_words|, 1) guards the division
        assert_eq!(keyword_score("anything", ""), 0.0);
    }

    #[test]
    fn test_keyword_score_treats_punctuated_words_as_distinct() {
        // "python," does not match "python"
        assert_eq!(keyword_score("python,", "python"), 0.0);
    }

    #[test]
    fn test_verdict_boundaries() {
        assert_eq!(Verdict::from_score(75.0), Verdict::High);
        assert_eq!(Verdict::from_score(74.999), Verdict::Medium);
        assert_eq!(Verdict::from_score(50.0), Verdict::Medium);
        assert_eq!(Verdict::from_score(49.999), Verdict::Low);
    }

    #[test]
    fn test_missing_skills_empty_when_texts_match() {
        let s = scorer();
        let text = "looking for python and docker skills";
        assert!(s.missing_skills(text, text).is_empty());
    }

    #[test]
    fn test_missing_skills_for_empty_resume() {
        let s = scorer();
        let jd = "needs python, docker and aws experience";
        let missing = s.missing_skills("", jd);
        assert_eq!(missing, vec!["python", "docker", "aws"]);
    }

    #[test]
    fn test_end_to_end_python_docker_scenario() {
        let s = scorer();
        let jd = "looking for python and docker skills";
        let resume = "experienced in python development";

        let evaluation = s.evaluate(resume, jd, None).unwrap();

        // keyword: {"python"} out of 6 distinct jd words; semantic: 1.0
        // from the constant mock. (1/6 * 0.5 + 1.0 * 0.5) * 100
        let expected = (1.0 / 6.0 * 0.5 + 0.5) * 100.0;
        assert!((evaluation.score - expected).abs() < 1e-4);
        assert_eq!(evaluation.verdict, Verdict::Medium);
        assert_eq!(evaluation.missing_skills, vec!["docker"]);
        assert_eq!(evaluation.feedback.matches("Missing: docker.").count(), 1);
    }

    #[test]
    fn test_supplied_jd_embedding_is_reused() {
        let provider = MockProvider::constant()
            .with_response("resume text", vec![1.0, 0.0])
            .with_response("jd text", vec![0.0, 1.0]);
        let s = Scorer::new(Arc::new(provider), vec![], 0.0, 1.0);

        // Without the supplied embedding the texts are orthogonal
        let fresh = s.evaluate("resume text", "jd text", None).unwrap();
        assert_eq!(fresh.score, 0.0);

        // Supplying the resume's own vector forces similarity 1.0
        let reused = s
            .evaluate("resume text", "jd text", Some(&[1.0, 0.0]))
            .unwrap();
        assert_eq!(reused.score, 100.0);
    }

    #[test]
    fn test_weights_are_not_normalized() {
        let s = Scorer::new(Arc::new(MockProvider::constant()), vec![], 1.0, 1.0);
        let evaluation = s.evaluate("same text", "same text", None).unwrap();

        // keyword 1.0 and semantic 1.0 with weights summing to 2
        assert!((evaluation.score - 200.0).abs() < 1e-4);
    }

    #[test]
    fn test_feedback_truncates_to_first_ten_missing_skills() {
        let vocabulary: Vec<String> = (0..15).map(|i| format!("skill{:02}", i)).collect();
        let jd = vocabulary.join(" ");
        let s = Scorer::new(Arc::new(MockProvider::constant()), vocabulary.clone(), 0.5, 0.5);

        let evaluation = s.evaluate("", &jd, None).unwrap();

        assert_eq!(evaluation.missing_skills.len(), 15);
        let missing_part = evaluation.feedback.split(" Missing: ").nth(1).unwrap();
        let listed: Vec<&str> = missing_part.trim_end_matches('.').split(", ").collect();
        assert_eq!(listed.len(), 10);
        assert_eq!(listed[0], "skill00");
        assert_eq!(listed[9], "skill09");
        assert!(!evaluation.feedback.contains("skill10"));
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let s = scorer();
        let jd = "python docker kubernetes role";
        let resume = "python developer";

        let first = s.evaluate(resume, jd, None).unwrap();
        let second = s.evaluate(resume, jd, None).unwrap();

        assert_eq!(first.score, second.score);
        assert_eq!(first.verdict, second.verdict);
        assert_eq!(first.missing_skills, second.missing_skills);
        assert_eq!(first.feedback, second.feedback);
    }
}
