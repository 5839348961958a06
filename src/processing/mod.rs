//! Text normalization, resume parsing, embeddings, and scoring

pub mod embeddings;
pub mod parser;
pub mod scorer;
pub mod text_processor;

pub use embeddings::{cosine_similarity, EmbeddingProvider, Model2VecProvider};
pub use parser::{ParsedResume, ResumeParser};
pub use scorer::{Evaluation, Scorer, Verdict};
