//! Axum route handlers for the generation API: cover letters, resume
//! building/optimization, match scoring, and the plain-text download.

use std::collections::HashMap;

use axum::{
    extract::{Multipart, State},
    http::header,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::extract_resume_text;
use crate::generation::prompts::{
    LETTER_PROMPT_TEMPLATE, MATCH_SCORE_PROMPT_TEMPLATE, MATCH_SCORE_SYSTEM,
    OPTIMIZE_PROMPT_TEMPLATE, RESUME_BUILD_PROMPT_TEMPLATE,
};
use crate::generation::render::{clean_output, to_plain_text};
use crate::llm_client::prompts::CAREER_WRITER_SYSTEM;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LetterRequest {
    pub title: String,
    pub company: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct LetterResponse {
    pub letter: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildResumeRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub experience: String,
    pub skills: String,
    pub job_goal: String,
}

#[derive(Debug, Serialize)]
pub struct BuildResumeResponse {
    pub resume: String,
}

/// The structured verdict the match-score prompt asks the model for.
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchReport {
    pub score: u8,
    pub explanation: String,
}

#[derive(Debug, Serialize)]
pub struct MatchScoreResponse {
    pub match_result: MatchReport,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    #[serde(default)]
    pub text: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/generate/letter
pub async fn handle_generate_letter(
    State(state): State<AppState>,
    Json(request): Json<LetterRequest>,
) -> Result<Json<LetterResponse>, AppError> {
    if request.title.trim().is_empty() || request.company.trim().is_empty() {
        return Err(AppError::Validation(
            "title and company cannot be empty".to_string(),
        ));
    }

    let prompt = LETTER_PROMPT_TEMPLATE
        .replace("{job_title}", &request.title)
        .replace("{company}", &request.company)
        .replace("{location}", &request.location);

    let text = state
        .llm
        .complete(CAREER_WRITER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Letter generation failed: {e}")))?;

    Ok(Json(LetterResponse {
        letter: clean_output(&text),
    }))
}

/// POST /api/v1/generate/resume
///
/// Builds a full resume from the user's raw details (the resume builder form).
pub async fn handle_generate_resume(
    State(state): State<AppState>,
    Json(request): Json<BuildResumeRequest>,
) -> Result<Json<BuildResumeResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let prompt = RESUME_BUILD_PROMPT_TEMPLATE
        .replace("{name}", &request.name)
        .replace("{email}", &request.email)
        .replace("{phone}", &request.phone)
        .replace("{job_goal}", &request.job_goal)
        .replace("{experience}", &request.experience)
        .replace("{skills}", &request.skills);

    let text = state
        .llm
        .complete(CAREER_WRITER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume generation failed: {e}")))?;

    Ok(Json(BuildResumeResponse {
        resume: clean_output(&text),
    }))
}

/// POST /api/v1/optimize
///
/// Multipart form: `resume` file plus `title`, `company`, `location` fields.
/// Rewrites the uploaded resume for the given job.
pub async fn handle_optimize_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<LetterResponse>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let resume_text = form.resume_text()?;

    let prompt = OPTIMIZE_PROMPT_TEMPLATE
        .replace("{job_title}", form.field("title")?)
        .replace("{company}", form.field("company")?)
        .replace("{location}", form.field("location")?)
        .replace("{resume_text}", &resume_text);

    let text = state
        .llm
        .complete(CAREER_WRITER_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Resume optimization failed: {e}")))?;

    Ok(Json(LetterResponse {
        letter: clean_output(&text),
    }))
}

/// POST /api/v1/match-score
///
/// Multipart form: `resume` file plus `title`, `company`, `location`,
/// `description` fields. Returns a structured 0-100 verdict.
pub async fn handle_match_score(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<MatchScoreResponse>, AppError> {
    let form = UploadForm::read(multipart).await?;
    let resume_text = form.resume_text()?;

    let description = form.field("description")?;
    if description.trim().is_empty() {
        return Err(AppError::Validation(
            "description cannot be empty".to_string(),
        ));
    }

    let prompt = MATCH_SCORE_PROMPT_TEMPLATE
        .replace("{job_title}", form.field("title")?)
        .replace("{company}", form.field("company")?)
        .replace("{location}", form.field("location")?)
        .replace("{job_description}", description)
        .replace("{resume_text}", &resume_text);

    let match_result: MatchReport = state
        .llm
        .complete_json(MATCH_SCORE_SYSTEM, &prompt)
        .await
        .map_err(|e| AppError::Llm(format!("Match scoring failed: {e}")))?;

    Ok(Json(MatchScoreResponse { match_result }))
}

/// POST /api/v1/download
///
/// Folds the rendered HTML markers back to plain text and returns it as a
/// `job_letter.txt` attachment.
pub async fn handle_download(Json(request): Json<DownloadRequest>) -> impl IntoResponse {
    let body = to_plain_text(&request.text);
    (
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"job_letter.txt\"",
            ),
        ],
        body,
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Multipart plumbing
// ────────────────────────────────────────────────────────────────────────────

/// A parsed upload form: one `resume` file plus plain text fields.
struct UploadForm {
    filename: Option<String>,
    data: Vec<u8>,
    fields: HashMap<String, String>,
}

impl UploadForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = UploadForm {
            filename: None,
            data: Vec::new(),
            fields: HashMap::new(),
        };

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            let name = field.name().map(String::from);
            match name.as_deref() {
                Some("resume") => {
                    form.filename = field.file_name().map(String::from);
                    form.data = field
                        .bytes()
                        .await
                        .map_err(|e| AppError::Validation(format!("Invalid resume upload: {e}")))?
                        .to_vec();
                }
                Some(name) => {
                    let value = field.text().await.map_err(|e| {
                        AppError::Validation(format!("Invalid form field '{name}': {e}"))
                    })?;
                    form.fields.insert(name.to_string(), value);
                }
                None => {}
            }
        }

        Ok(form)
    }

    fn field(&self, name: &str) -> Result<&str, AppError> {
        self.fields
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| AppError::Validation(format!("Missing form field '{name}'")))
    }

    /// Extracts text from the uploaded resume, rejecting empty uploads.
    fn resume_text(&self) -> Result<String, AppError> {
        let filename = self
            .filename
            .as_deref()
            .ok_or_else(|| AppError::Validation("Please upload a resume file".to_string()))?;

        let text = extract_resume_text(filename, &self.data)?;
        if text.trim().is_empty() {
            return Err(AppError::Validation(
                "Could not read the resume file".to_string(),
            ));
        }
        Ok(text)
    }
}
