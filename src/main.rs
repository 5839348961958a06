//! Resume checker: keyword + semantic resume/job-description scoring

mod cli;
mod config;
mod error;
mod input;
mod processing;
mod store;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use colored::Colorize;
use config::Config;
use error::{ResumeCheckerError, Result};
use input::InputManager;
use log::{error, info};
use processing::{EmbeddingProvider, Model2VecProvider, ResumeParser, Scorer, Verdict};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use store::{EvaluationStore, JobDescription};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Evaluate {
            resume,
            job,
            job_text,
            weight_keywords,
            weight_semantics,
        } => {
            let jd_raw = read_job_description(job, job_text).await?;
            evaluate(&config, &resume, &jd_raw, weight_keywords, weight_semantics).await
        }
        Commands::History => history(&config),
        Commands::Config { action } => match action {
            Some(ConfigAction::Reset) => {
                let config = Config::default();
                config.save()?;
                println!("Configuration reset to defaults");
                Ok(())
            }
            _ => {
                let content = toml::to_string_pretty(&config).map_err(|e| {
                    ResumeCheckerError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", content);
                Ok(())
            }
        },
    }
}

async fn read_job_description(job: Option<PathBuf>, job_text: Option<String>) -> Result<String> {
    match (job, job_text) {
        (Some(path), _) => Ok(tokio::fs::read_to_string(&path).await?),
        (None, Some(text)) => Ok(text),
        (None, None) => Err(ResumeCheckerError::InvalidInput(
            "Provide a job description with --job or --job-text".to_string(),
        )),
    }
}

async fn evaluate(
    config: &Config,
    resume_path: &Path,
    jd_raw: &str,
    weight_keywords: Option<f32>,
    weight_semantics: Option<f32>,
) -> Result<()> {
    info!("Starting resume evaluation");

    let resume_name = resume_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| resume_path.to_string_lossy().to_string());

    println!("📄 Resume: {}", resume_path.display());

    // Parse the resume: extract, normalize, sections + skills
    let parser = ResumeParser::new(config.skills.clone());
    let mut input_manager = InputManager::new();
    let parsed = parser.parse(&mut input_manager, resume_path).await?;

    if parsed.full_text.is_empty() {
        println!(
            "{}",
            "⚠️  No text extracted from resume; scoring an empty document".yellow()
        );
    }

    let jd_text = processing::text_processor::clean_text(jd_raw);
    if jd_text.is_empty() {
        return Err(ResumeCheckerError::InvalidInput(
            "Job description is empty".to_string(),
        ));
    }

    // Encode the job description once; the scorer reuses the vector
    let provider: Arc<dyn EmbeddingProvider> =
        Arc::new(Model2VecProvider::load(&config.models.embedding_model)?);
    let jd_emb = provider.encode(&jd_text)?;

    let scorer = Scorer::new(
        provider.clone(),
        config.skills.clone(),
        weight_keywords.unwrap_or(config.scoring.weight_keywords),
        weight_semantics.unwrap_or(config.scoring.weight_semantics),
    );
    let evaluation = scorer.evaluate(&parsed.full_text, &jd_text, Some(&jd_emb))?;

    // Persist job description and evaluation in one transaction
    let store = EvaluationStore::open(&config.storage.database_path);
    store.init()?;
    let jd_record = JobDescription {
        jd_text,
        embedding: jd_emb,
        model_id: provider.model_id().to_string(),
    };
    let (jd_id, eval_id) = store.record(&jd_record, &resume_name, &evaluation)?;
    info!("Stored job description #{} and evaluation #{}", jd_id, eval_id);

    let matched = parsed
        .skills
        .iter()
        .filter(|s| !evaluation.missing_skills.contains(s))
        .count();

    println!("\n✅ Results");
    println!("  Resume:   {}", resume_name.bold());
    println!("  Score:    {:.2}", evaluation.score);
    println!("  Verdict:  {}", colored_verdict(evaluation.verdict));
    println!(
        "  Skills:   {} matched, {} missing",
        matched,
        evaluation.missing_skills.len()
    );
    if !evaluation.missing_skills.is_empty() {
        println!("  Missing:  {}", evaluation.missing_skills.join(", "));
    }
    println!("  Feedback: {}", evaluation.feedback);

    Ok(())
}

fn history(config: &Config) -> Result<()> {
    let store = EvaluationStore::open(&config.storage.database_path);
    store.init()?;

    let rows = store.list_evaluations()?;
    if rows.is_empty() {
        println!("No evaluations yet.");
        return Ok(());
    }

    println!("📂 Previous evaluations\n");
    for row in rows {
        println!(
            "{} → Score: {:.2} | Verdict: {}",
            row.resume_name.bold(),
            row.score,
            colored_verdict(row.verdict)
        );
        println!("   {}", row.feedback.dimmed());
    }
    Ok(())
}

fn colored_verdict(verdict: Verdict) -> colored::ColoredString {
    match verdict {
        Verdict::High => verdict.as_str().green(),
        Verdict::Medium => verdict.as_str().yellow(),
        Verdict::Low => verdict.as_str().red(),
    }
}
