//! Embedding provider abstraction and Model2Vec implementation

use crate::error::{Result, ResumeCheckerError};
use model2vec_rs::model::StaticModel;
use std::time::Instant;

/// Text-to-vector capability injected into the scorer.
///
/// Implementations must be deterministic for a fixed model version:
/// repeated calls with identical text return identical vectors.
pub trait EmbeddingProvider: Send + Sync {
    fn encode(&self, text: &str) -> Result<Vec<f32>>;
    fn dimension(&self) -> usize;
    fn model_id(&self) -> &str;
}

/// Model2Vec static-embedding provider.
pub struct Model2VecProvider {
    model: StaticModel,
    dimension: usize,
    model_id: String,
}

impl Model2VecProvider {
    /// Load a model by HuggingFace repo id or local path.
    pub fn load(model_id: &str) -> Result<Self> {
        let start_time = Instant::now();
        log::info!("Loading Model2Vec embedding model: {}", model_id);

        let model = StaticModel::from_pretrained(
            model_id, None, // token
            None, // normalize
            None, // subfolder
        )
        .map_err(|e| ResumeCheckerError::Embedding(format!("Failed to load model: {}", e)))?;

        let dimension = model.encode_single("dimension probe").len();
        log::info!(
            "Model loaded in {:.2?} (dimension {})",
            start_time.elapsed(),
            dimension
        );

        Ok(Self {
            model,
            dimension,
            model_id: model_id.to_string(),
        })
    }
}

impl EmbeddingProvider for Model2VecProvider {
    fn encode(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.model.encode_single(text))
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Cosine similarity between two embeddings. Zero vectors compare as 0.0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeCheckerError::Scoring(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
