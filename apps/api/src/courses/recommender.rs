//! Course recommenders, swappable behind `Arc<dyn CourseRecommender>`.

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::courses::prompts::{COURSES_PROMPT_TEMPLATE, COURSES_SYSTEM};
use crate::courses::{fallback_courses, select_mix, Course, Difficulty};
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{LlmClient, LlmError};

const DEFAULT_RATING: f32 = 4.5;

pub struct CourseRequest<'a> {
    pub missing_skills: &'a [String],
    pub company: &'a str,
    pub role: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub courses: Vec<Course>,
    pub recommender: String, // "static" | "llm"
}

#[async_trait]
pub trait CourseRecommender: Send + Sync {
    async fn recommend(&self, request: &CourseRequest<'_>) -> Result<Recommendations, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// StaticRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct StaticRecommender;

#[async_trait]
impl CourseRecommender for StaticRecommender {
    async fn recommend(&self, request: &CourseRequest<'_>) -> Result<Recommendations, AppError> {
        Ok(Recommendations {
            courses: fallback_courses(request.missing_skills),
            recommender: "static".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmRecommender
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmRecommender(pub LlmClient);

#[async_trait]
impl CourseRecommender for LlmRecommender {
    async fn recommend(&self, request: &CourseRequest<'_>) -> Result<Recommendations, AppError> {
        let skills = request.missing_skills.join(", ");
        let prompt = fill_template(
            COURSES_PROMPT_TEMPLATE,
            &[
                ("company", request.company),
                ("role", request.role),
                ("missing_skills", &skills),
            ],
        );
        let payload: Vec<LlmCourse> = self.0.call_json(&prompt, COURSES_SYSTEM).await?;
        Ok(courses_from_payload(payload)?)
    }
}

/// One element of the model's answer. Types are loose: `isPaid` and `rating`
/// arrive as strings as often as not.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LlmCourse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    platform: String,
    #[serde(default)]
    url: String,
    #[serde(default, alias = "skill_gap")]
    skill_gap: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    difficulty: Option<String>,
    #[serde(default, alias = "is_paid")]
    is_paid: Option<Value>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    rating: Option<Value>,
    #[serde(default)]
    description: String,
    #[serde(default, alias = "channel_name")]
    channel_name: Option<String>,
}

impl From<LlmCourse> for Course {
    fn from(raw: LlmCourse) -> Self {
        let is_paid = match &raw.is_paid {
            Some(Value::Bool(paid)) => *paid,
            Some(Value::String(paid)) => paid.trim().eq_ignore_ascii_case("true"),
            _ => false,
        };
        let rating = match &raw.rating {
            Some(Value::Number(n)) => n.as_f64().map(|r| r as f32),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        }
        .unwrap_or(DEFAULT_RATING);
        let price = raw
            .price
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| if is_paid { String::new() } else { "Free".to_string() });

        Course {
            title: raw.title.trim().to_string(),
            platform: raw.platform,
            url: raw.url,
            skill_gap: raw.skill_gap,
            duration: raw.duration,
            difficulty: Difficulty::normalize(raw.difficulty.as_deref()),
            is_paid,
            price,
            rating,
            description: raw.description,
            channel_name: raw.channel_name.filter(|c| !c.trim().is_empty()),
        }
    }
}

fn courses_from_payload(payload: Vec<LlmCourse>) -> Result<Recommendations, LlmError> {
    let courses: Vec<Course> = payload
        .into_iter()
        .map(Course::from)
        .filter(|c| !c.title.is_empty())
        .collect();
    if courses.is_empty() {
        return Err(LlmError::EmptyContent);
    }
    Ok(Recommendations {
        courses: select_mix(courses),
        recommender: "llm".to_string(),
    })
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackRecommender
// ────────────────────────────────────────────────────────────────────────────

/// Runs `primary`; on any error logs a warning and answers with `StaticRecommender`.
pub struct FallbackRecommender {
    primary: Arc<dyn CourseRecommender>,
}

impl FallbackRecommender {
    pub fn new(primary: Arc<dyn CourseRecommender>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl CourseRecommender for FallbackRecommender {
    async fn recommend(&self, request: &CourseRequest<'_>) -> Result<Recommendations, AppError> {
        match self.primary.recommend(request).await {
            Ok(recommendations) => Ok(recommendations),
            Err(e) => {
                warn!(error = %e, "AI course recommendation failed, using static resources");
                StaticRecommender.recommend(request).await
            }
        }
    }
}
