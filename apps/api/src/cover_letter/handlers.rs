//! Axum route handlers for cover letters.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::profile::CvProfile;
use crate::cover_letter::writer::{CoverLetter, LetterRequest};
use crate::cover_letter::{CandidateInfo, LetterStyle};
use crate::errors::AppError;
use crate::render::render_cover_letter_html;
use crate::segmenter::segment_with_config;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct CoverLetterRequest {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, alias = "jobDescription")]
    pub job_description: Option<String>,
    /// Style name; unknown or missing names write a professional letter.
    #[serde(default)]
    pub template: Option<String>,
    #[serde(default, alias = "userInfo")]
    pub user_info: Option<CandidateInfo>,
    /// CV text to take the candidate from when `user_info` is absent.
    #[serde(default, alias = "cvText")]
    pub cv_text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RegenerateRequest {
    #[serde(default)]
    pub content: String,
    #[serde(flatten)]
    pub letter: CoverLetterRequest,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub letter_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub company: String,
    pub role: String,
    pub template: LetterStyle,
    pub content: String,
    pub html: String,
    pub writer: String,
}

/// Validated form of a letter request.
struct LetterInput {
    company: String,
    role: String,
    job_description: Option<String>,
    style: LetterStyle,
    candidate: CandidateInfo,
}

impl LetterInput {
    fn from_request(state: &AppState, request: CoverLetterRequest) -> Result<Self, AppError> {
        let company = required(&request.company, "company")?;
        let role = required(&request.role, "role")?;
        let style = request
            .template
            .as_deref()
            .map(LetterStyle::from_name)
            .unwrap_or_default();

        let candidate = match (request.user_info, request.cv_text) {
            (Some(candidate), _) => candidate,
            (None, Some(text)) if !text.trim().is_empty() => {
                let segmented = segment_with_config(&text, &state.segmenter);
                CandidateInfo::from(&CvProfile::from_segmented(&text, &segmented))
            }
            _ => {
                return Err(AppError::Validation(
                    "Either 'user_info' or 'cv_text' is required".to_string(),
                ))
            }
        };

        Ok(Self {
            company,
            role,
            job_description: request.job_description,
            style,
            candidate,
        })
    }

    fn letter_request(&self) -> LetterRequest<'_> {
        LetterRequest {
            candidate: &self.candidate,
            company: &self.company,
            role: &self.role,
            job_description: self.job_description.as_deref(),
            style: self.style,
        }
    }

    fn respond(self, letter: CoverLetter) -> CoverLetterResponse {
        let html = render_cover_letter_html(&letter.content, self.style, &self.candidate.name);
        CoverLetterResponse {
            letter_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            company: self.company,
            role: self.role,
            template: self.style,
            content: letter.content,
            html,
            writer: letter.writer,
        }
    }
}

fn required(value: &str, name: &str) -> Result<String, AppError> {
    match value.trim() {
        "" => Err(AppError::Validation(format!("'{name}' is required"))),
        value => Ok(value.to_string()),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cover-letter
///
/// Writes a cover letter for the role and returns it as text and as HTML.
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let input = LetterInput::from_request(&state, request)?;
    let letter = state.letters.write(&input.letter_request()).await?;

    info!(
        company = %input.company,
        role = %input.role,
        style = input.style.as_str(),
        writer = %letter.writer,
        "Cover letter generated"
    );

    Ok(Json(input.respond(letter)))
}

/// POST /api/v1/cover-letter/regenerate
///
/// Writes a new version of the letter in `content` for the same role.
pub async fn handle_regenerate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<RegenerateRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    // The candidate only flavours a rewrite, so it may be omitted here.
    let mut letter_request = request.letter;
    let has_cv = letter_request
        .cv_text
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty());
    if letter_request.user_info.is_none() && !has_cv {
        letter_request.user_info = Some(CandidateInfo::default());
    }

    let input = LetterInput::from_request(&state, letter_request)?;
    let letter = state
        .letters
        .rewrite(&request.content, &input.letter_request())
        .await?;

    info!(
        company = %input.company,
        role = %input.role,
        writer = %letter.writer,
        "Cover letter regenerated"
    );

    Ok(Json(input.respond(letter)))
}
