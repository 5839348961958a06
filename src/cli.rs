//! CLI interface for the resume checker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-checker")]
#[command(about = "Score a resume against a job description")]
#[command(
    long_about = "Scores resume/job-description compatibility by combining keyword overlap with semantic embedding similarity, and keeps a history of past evaluations"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a resume against a job description
    Evaluate {
        /// Path to resume file (PDF or DOCX)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to a plain-text job description file
        #[arg(short, long, conflicts_with = "job_text")]
        job: Option<PathBuf>,

        /// Job description passed inline
        #[arg(long)]
        job_text: Option<String>,

        /// Override the keyword-overlap weight
        #[arg(long)]
        weight_keywords: Option<f32>,

        /// Override the semantic-similarity weight
        #[arg(long)]
        weight_semantics: Option<f32>,
    },

    /// Show past evaluations, most recent first
    History,

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
