//! Documents produced from a finalized project: the plain-text scope
//! summary, the one-page brief, the interview guide, and the structured
//! question exports.

mod brief;
mod guide;
mod questions;
mod summary;

pub use brief::render_project_brief;
pub use guide::{render_interview_guide, INTERVIEW_TIPS};
pub use questions::{questions_csv, QuestionExport, QuestionRow};
pub use summary::render_text_summary;

use super::plan::InterviewPlan;
use super::project::ProjectRecord;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to write export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid project JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode questions CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("questions CSV was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Writes every export for `record` into `dir`, returning the written paths
/// in a stable order: scope summary, brief, guide, questions JSON, questions CSV.
pub fn write_exports(
    dir: &Path,
    record: &ProjectRecord,
    plan: &InterviewPlan,
    generated_on: NaiveDate,
) -> Result<Vec<PathBuf>, ExportError> {
    fs::create_dir_all(dir)?;
    let safe_name = record.file_safe_subject();

    let documents = [
        (
            format!("legacy_scope_{safe_name}.txt"),
            render_text_summary(record),
        ),
        (
            format!("project_brief_{safe_name}.txt"),
            render_project_brief(record, generated_on),
        ),
        (
            format!("interview_guide_{safe_name}.txt"),
            render_interview_guide(record, plan, generated_on),
        ),
        (
            format!("interview_questions_{safe_name}.json"),
            QuestionExport::from_plan(record, plan).to_json_pretty()?,
        ),
        (
            format!("interview_questions_{safe_name}.csv"),
            questions_csv(plan)?,
        ),
    ];

    let mut written = Vec::with_capacity(documents.len());
    for (name, contents) in documents {
        let path = dir.join(name);
        fs::write(&path, contents)?;
        written.push(path);
    }

    info!(
        dir = %dir.display(),
        files = written.len(),
        project_id = %record.project_id,
        "exports written"
    );
    Ok(written)
}
