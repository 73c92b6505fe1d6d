use axum::{extract::State, response::Html, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::render::{render_cv_html, Template, TemplateData};
use crate::segmenter::segment_with_config;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RenderCvRequest {
    pub cv_content: String,
    /// Template name; unknown or missing names render as classic.
    #[serde(default)]
    pub template: Option<String>,
}

/// POST /api/v1/render/cv
///
/// Segments the CV text and returns it as a complete HTML document.
pub async fn handle_render_cv(
    State(state): State<AppState>,
    Json(request): Json<RenderCvRequest>,
) -> Result<Html<String>, AppError> {
    if request.cv_content.trim().is_empty() {
        return Err(AppError::Validation("cv_content cannot be empty".to_string()));
    }

    let template = request
        .template
        .as_deref()
        .map(Template::from_name)
        .unwrap_or_default();
    let segmented = segment_with_config(&request.cv_content, &state.segmenter);
    let data = TemplateData::from_segmented(&segmented);
    debug!(template = template.as_str(), sections = segmented.sections.len(), "Rendering CV");

    Ok(Html(render_cv_html(&data, template)))
}
