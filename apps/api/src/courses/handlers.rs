use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::courses::recommender::CourseRequest;
use crate::courses::Course;
use crate::errors::AppError;
use crate::state::AppState;

const NO_GAPS_MESSAGE: &str = "No skill gaps found! Your CV matches the role perfectly.";

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default, alias = "missingSkills")]
    pub missing_skills: Vec<String>,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub message: String,
    pub recommendations: Vec<Course>,
    pub recommender: Option<String>,
}

/// POST /api/v1/courses/recommend
///
/// Learning resources for the skills a CV is missing. No model call is made
/// when nothing is missing.
pub async fn handle_recommend_courses(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, AppError> {
    let missing: Vec<String> = request
        .missing_skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        return Ok(Json(RecommendResponse {
            message: NO_GAPS_MESSAGE.to_string(),
            recommendations: Vec::new(),
            recommender: None,
        }));
    }

    let recommendations = state
        .courses
        .recommend(&CourseRequest {
            missing_skills: &missing,
            company: request.company.trim(),
            role: request.role.trim(),
        })
        .await?;

    info!(
        skills = missing.len(),
        courses = recommendations.courses.len(),
        recommender = %recommendations.recommender,
        "Course recommendations generated"
    );

    Ok(Json(RecommendResponse {
        message: format!("Found {} resources!", recommendations.courses.len()),
        recommendations: recommendations.courses,
        recommender: Some(recommendations.recommender),
    }))
}
