//! Axum route handlers for the CV API.

use std::collections::HashMap;

use axum::{
    body::Bytes,
    extract::{Multipart, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::analysis::analyzer::AnalysisRequest;
use crate::analysis::insights::{derive_insights, AnalysisSummary, InsightContext};
use crate::analysis::match_score::MatchScore;
use crate::analysis::profile::CvProfile;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::roles::RoleRequirements;
use crate::segmenter::{segment_with_config, SegmentedResume};
use crate::state::AppState;

/// Multipart field carrying the CV file.
const CV_FIELD: &str = "cv";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SegmentRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub segmented: SegmentedResume,
    pub profile: CvProfile,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub filename: String,
    pub company: String,
    pub company_name: Option<String>,
    pub role: String,
    pub original_text: String,
    pub segmented: SegmentedResume,
    pub profile: CvProfile,
    pub role_requirements: RoleRequirements,
    pub analysis: AnalysisSummary,
    pub improved_cv: Option<String>,
    pub match_score: MatchScore,
}

/// An uploaded file plus the plain-text form fields that came with it.
struct CvForm {
    file: Option<(String, Bytes)>,
    fields: HashMap<String, String>,
}

impl CvForm {
    async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = CvForm {
            file: None,
            fields: HashMap::new(),
        };
        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            if name == CV_FIELD {
                let filename = field.file_name().unwrap_or_default().to_string();
                form.file = Some((filename, field.bytes().await?));
            } else {
                let value = field.text().await?;
                form.fields.insert(name, value);
            }
        }
        Ok(form)
    }

    /// A trimmed, non-empty text field.
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn required_field(&self, name: &str) -> Result<&str, AppError> {
        self.field(name)
            .ok_or_else(|| AppError::Validation(format!("'{name}' is required")))
    }

    /// Extracts the uploaded CV's text off the async runtime.
    async fn extract(&mut self) -> Result<(String, String), AppError> {
        let (filename, bytes) = self
            .file
            .take()
            .ok_or_else(|| AppError::Validation("No CV file uploaded".to_string()))?;
        if bytes.is_empty() {
            return Err(AppError::Validation(format!("Uploaded file '{filename}' is empty")));
        }

        let name = filename.clone();
        let text = tokio::task::spawn_blocking(move || extract_text(&bytes, &name))
            .await
            .map_err(anyhow::Error::from)??;

        if text.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "No text could be extracted from '{filename}'"
            )));
        }
        Ok((filename, text))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/segment
///
/// Segments raw CV text into name, contact line and typed sections.
pub async fn handle_segment(
    State(state): State<AppState>,
    Json(request): Json<SegmentRequest>,
) -> Result<Json<SegmentedResume>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }
    Ok(Json(segment_with_config(&request.text, &state.segmenter)))
}

/// POST /api/v1/cv/upload
///
/// Extracts text from an uploaded PDF, DOCX or TXT file and returns both the
/// section view and the field-level profile.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut form = CvForm::read(multipart).await?;
    let (filename, text) = form.extract().await?;

    let segmented = segment_with_config(&text, &state.segmenter);
    let profile = CvProfile::from_segmented(&text, &segmented);
    info!(
        filename = %filename,
        sections = segmented.sections.len(),
        "CV uploaded"
    );

    Ok(Json(UploadResponse {
        filename,
        segmented,
        profile,
    }))
}

/// POST /api/v1/cv/analyze
///
/// Analyzes an uploaded CV against a role. Requirements come from the
/// `role_requirements` JSON field when present, otherwise from the catalog.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let mut form = CvForm::read(multipart).await?;
    let company = form.required_field("company")?.to_string();
    let role = form.required_field("role")?.to_string();
    let company_name = form.field("company_name").map(str::to_string);
    let requirements = resolve_requirements(&state, &form, &company, &role)?;

    let (filename, text) = form.extract().await?;
    let segmented = segment_with_config(&text, &state.segmenter);
    let profile = CvProfile::from_segmented(&text, &segmented);

    let analysis = state
        .analyzer
        .analyze(&AnalysisRequest {
            cv_text: &text,
            profile: &profile,
            company: &company,
            role: &role,
            requirements: &requirements,
        })
        .await?;

    let derived = derive_insights(&InsightContext {
        profile: &profile,
        matching: &analysis.matching_skills,
        missing: &analysis.missing_skills,
        score: analysis.score,
        role: &role,
        company: company_name.as_deref().unwrap_or(&company),
    });
    let match_score = MatchScore::compute(&analysis.matching_skills, &analysis.missing_skills);
    let improved_cv = analysis.improved_cv.clone();
    let summary = AnalysisSummary::merge(analysis, derived);

    info!(
        company = %company,
        role = %role,
        analyzer = %summary.analyzer,
        score = match_score.score,
        "CV analyzed"
    );

    Ok(Json(AnalysisResponse {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        filename,
        company,
        company_name,
        role,
        original_text: text,
        segmented,
        profile,
        role_requirements: requirements,
        analysis: summary,
        improved_cv,
        match_score,
    }))
}

fn resolve_requirements(
    state: &AppState,
    form: &CvForm,
    company: &str,
    role: &str,
) -> Result<RoleRequirements, AppError> {
    if let Some(json) = form.field("role_requirements") {
        return serde_json::from_str(json)
            .map_err(|e| AppError::Validation(format!("Invalid role_requirements JSON: {e}")));
    }
    state
        .roles
        .requirements(company, role)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No requirements for {role} at {company}")))
}
