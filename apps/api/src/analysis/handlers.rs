//! Axum route handlers for the Analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use ats_core::{keywords_from_reference, AnalysisReport, Document, FrequencyTable, KeywordSet};

use crate::errors::AppError;
use crate::extract::{extract_text, UploadedFile};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub report: AnalysisReport,
}

#[derive(Debug, Serialize)]
pub struct BulkAnalysisResponse {
    /// One report per uploaded resume, in upload order. Each resume is scored
    /// independently; no cross-candidate ranking is applied.
    pub reports: Vec<AnalysisReport>,
}

#[derive(Debug, Serialize)]
pub struct SkillsResponse {
    /// Vocabulary terms found in the resume.
    pub skills: KeywordSet,
    pub frequencies: FrequencyTable,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/score
///
/// Scores pasted resume text against a job description: match percentage,
/// matched keywords, and the per-keyword frequency table.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<AnalysisResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let document = Document::new("resume", request.resume_text);
    let report = state
        .analyzer
        .analyze_against_reference(&document, &request.job_description);

    info!(score = report.score, "Scored pasted resume text");
    Ok(Json(AnalysisResponse { report }))
}

/// POST /api/v1/analysis/score/upload
///
/// Multipart variant: one `resume` file (.txt or .pdf) plus a
/// `job_description` text field.
pub async fn handle_score_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let job_description = require_job_description(upload.job_description)?;
    let file = require_single_resume(upload.files)?;

    let text = extract_text(&file)?;
    let document = Document::new(file.name, text);
    let report = state
        .analyzer
        .analyze_against_reference(&document, &job_description);

    info!(label = %report.label, score = report.score, "Scored uploaded resume");
    Ok(Json(AnalysisResponse { report }))
}

/// POST /api/v1/analysis/bulk
///
/// Multipart: up to `max_bulk_resumes` `resume` files plus a `job_description`
/// field. The keyword set is built once from the job description; each resume
/// is then analyzed independently against it.
pub async fn handle_bulk(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<BulkAnalysisResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let job_description = require_job_description(upload.job_description)?;

    if upload.files.is_empty() {
        return Err(AppError::Validation(
            "Upload at least one resume file".to_string(),
        ));
    }
    let max = state.config.max_bulk_resumes;
    if upload.files.len() > max {
        return Err(AppError::Validation(format!(
            "Too many resume files: {} uploaded, at most {max} accepted",
            upload.files.len()
        )));
    }

    let keywords = keywords_from_reference(&job_description, state.analyzer.policy());

    let mut reports = Vec::with_capacity(upload.files.len());
    for file in upload.files {
        let text = extract_text(&file)?;
        let document = Document::new(file.name, text);
        let report = state.analyzer.analyze(&document, &keywords);
        info!(label = %report.label, score = report.score, "Scored resume in bulk analysis");
        reports.push(report);
    }

    Ok(Json(BulkAnalysisResponse { reports }))
}

/// POST /api/v1/analysis/skills
///
/// Multipart: one `resume` file. Extracts skills against the fixed ATS
/// vocabulary instead of a job description.
pub async fn handle_skills(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<SkillsResponse>, AppError> {
    let upload = read_upload(multipart).await?;
    let file = require_single_resume(upload.files)?;

    let text = extract_text(&file)?;
    let document = Document::new(file.name, text);
    let report = state
        .analyzer
        .analyze(&document, state.config.vocabulary.terms());

    info!(
        label = %report.label,
        skills = report.matched_keywords.len(),
        "Extracted skills from resume"
    );
    Ok(Json(SkillsResponse {
        skills: report.matched_keywords,
        frequencies: report.frequencies,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart plumbing
// ────────────────────────────────────────────────────────────────────────────

struct AnalysisUpload {
    files: Vec<UploadedFile>,
    job_description: Option<String>,
}

/// Drains a multipart body into resume files and an optional job description.
/// Unknown fields are skipped.
async fn read_upload(mut multipart: Multipart) -> Result<AnalysisUpload, AppError> {
    let mut files = Vec::new();
    let mut job_description = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "resume" => {
                let file_name = field.file_name().unwrap_or("resume").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;
                files.push(UploadedFile {
                    name: file_name,
                    content_type,
                    data,
                });
            }
            "job_description" => job_description = Some(field.text().await?),
            other => debug!("Ignoring unexpected multipart field '{other}'"),
        }
    }

    Ok(AnalysisUpload {
        files,
        job_description,
    })
}

fn require_job_description(job_description: Option<String>) -> Result<String, AppError> {
    match job_description {
        Some(jd) if !jd.trim().is_empty() => Ok(jd),
        _ => Err(AppError::Validation(
            "job_description field is required".to_string(),
        )),
    }
}

fn require_single_resume(mut files: Vec<UploadedFile>) -> Result<UploadedFile, AppError> {
    match files.len() {
        1 => Ok(files.remove(0)),
        0 => Err(AppError::Validation(
            "A resume file is required".to_string(),
        )),
        n => Err(AppError::Validation(format!(
            "Expected exactly one resume file, got {n}"
        ))),
    }
}
