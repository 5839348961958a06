//! SQLite-backed evaluation store
//!
//! Append-only persistence for job descriptions and evaluation results.
//! Connections are short-lived and scoped to each operation; concurrent
//! writers from multiple processes are not coordinated beyond what
//! SQLite provides.

use crate::error::Result;
use crate::processing::scorer::{Evaluation, Verdict};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

/// A job description together with its embedding, ready to persist.
#[derive(Debug, Clone)]
pub struct JobDescription {
    pub jd_text: String,
    pub embedding: Vec<f32>,
    pub model_id: String,
}

/// One row of the evaluation history, most useful fields only.
#[derive(Debug, Clone)]
pub struct StoredEvaluation {
    pub id: i64,
    pub resume_name: String,
    pub score: f64,
    pub verdict: Verdict,
    pub feedback: String,
}

pub struct EvaluationStore {
    path: PathBuf,
}

impl EvaluationStore {
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create the schema if it does not exist yet. Idempotent.
    pub fn init(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = self.connect()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS job_description (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 jd_text TEXT NOT NULL,
                 jd_emb BLOB NOT NULL,
                 emb_dim INTEGER NOT NULL,
                 emb_model TEXT NOT NULL
             );
             CREATE TABLE IF NOT EXISTS evaluations (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 resume_name TEXT NOT NULL,
                 score REAL NOT NULL,
                 verdict TEXT NOT NULL,
                 missing_skills TEXT NOT NULL,
                 feedback TEXT NOT NULL
             );",
        )?;
        Ok(())
    }

    fn connect(&self) -> Result<Connection> {
        Ok(Connection::open(&self.path)?)
    }

    /// Persist a job description on its own. Returns the new row id.
    pub fn insert_job_description(&self, jd: &JobDescription) -> Result<i64> {
        let conn = self.connect()?;
        Self::insert_jd_with(&conn, jd)
    }

    /// Persist an evaluation on its own. Returns the new row id.
    pub fn insert_evaluation(&self, resume_name: &str, evaluation: &Evaluation) -> Result<i64> {
        let conn = self.connect()?;
        Self::insert_evaluation_with(&conn, resume_name, evaluation)
    }

    /// Persist a job description and its evaluation atomically: a failure
    /// on either insert leaves neither row behind.
    pub fn record(
        &self,
        jd: &JobDescription,
        resume_name: &str,
        evaluation: &Evaluation,
    ) -> Result<(i64, i64)> {
        let mut conn = self.connect()?;
        let tx = conn.transaction()?;

        let jd_id = Self::insert_jd_with(&tx, jd)?;
        let eval_id = Self::insert_evaluation_with(&tx, resume_name, evaluation)?;

        tx.commit()?;
        Ok((jd_id, eval_id))
    }

    /// All evaluations, most recent first. No filtering, no pagination.
    pub fn list_evaluations(&self) -> Result<Vec<StoredEvaluation>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, resume_name, score, verdict, feedback
             FROM evaluations ORDER BY id DESC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(StoredEvaluation {
                id: row.get(0)?,
                resume_name: row.get(1)?,
                score: row.get(2)?,
                verdict: Verdict::from_str(&row.get::<_, String>(3)?).unwrap_or(Verdict::Low),
                feedback: row.get(4)?,
            })
        })?;

        let mut evaluations = Vec::new();
        for row in rows {
            evaluations.push(row?);
        }
        Ok(evaluations)
    }

    /// Missing-skill list of a stored evaluation, deserialized.
    pub fn missing_skills_for(&self, evaluation_id: i64) -> Result<Option<Vec<String>>> {
        let conn = self.connect()?;
        let serialized: Option<String> = conn
            .query_row(
                "SELECT missing_skills FROM evaluations WHERE id = ?1",
                params![evaluation_id],
                |row| row.get(0),
            )
            .optional()?;

        match serialized {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn insert_jd_with(conn: &Connection, jd: &JobDescription) -> Result<i64> {
        conn.execute(
            "INSERT INTO job_description (jd_text, jd_emb, emb_dim, emb_model)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                jd.jd_text,
                embedding_to_bytes(&jd.embedding),
                jd.embedding.len() as i64,
                jd.model_id,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn insert_evaluation_with(
        conn: &Connection,
        resume_name: &str,
        evaluation: &Evaluation,
    ) -> Result<i64> {
        conn.execute(
            "INSERT INTO evaluations (resume_name, score, verdict, missing_skills, feedback)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                resume_name,
                evaluation.score as f64,
                evaluation.verdict.as_str(),
                serde_json::to_string(&evaluation.missing_skills)?,
                evaluation.feedback,
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }
}

/// Little-endian f32 serialization of an embedding.
pub fn embedding_to_bytes(embedding: &[f32]) -> Vec<u8> {
    embedding.iter().flat_map(|x| x.to_le_bytes()).collect()
}

/// Inverse of [`embedding_to_bytes`]. The stored `emb_dim` column lets
/// consumers sanity-check the result against the producing model.
pub fn embedding_from_bytes(bytes: &[u8]) -> Result<Vec<f32>> {
    if bytes.len() % 4 != 0 {
        return Err(crate::error::ResumeCheckerError::Storage(format!(
            "Embedding blob length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect())
}
