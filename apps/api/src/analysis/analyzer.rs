//! CV Analyzer: pluggable, trait-based analysis of a CV against a role.
//!
//! Backends:
//! - `BasicAnalyzer`: keyword skill matching, deterministic, no network.
//! - `LlmAnalyzer`: asks the model for strengths, gaps and an improved CV.
//! - `FallbackAnalyzer`: runs a primary backend and drops to `BasicAnalyzer`
//!   when it fails.
//!
//! `AppState` holds an `Arc<dyn CvAnalyzer>` chosen at startup from config.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::matching::match_skills;
use crate::analysis::profile::CvProfile;
use crate::analysis::prompts::{ANALYSIS_PROMPT_TEMPLATE, ANALYSIS_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, LINK_PRESERVATION_INSTRUCTION};
use crate::llm_client::LlmClient;
use crate::roles::RoleRequirements;

/// Everything an analyzer may look at.
pub struct AnalysisRequest<'a> {
    pub cv_text: &'a str,
    pub profile: &'a CvProfile,
    pub company: &'a str,
    pub role: &'a str,
    pub requirements: &'a RoleRequirements,
}

/// Analyzer output, shared by all backends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvAnalysis {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// 0 – 100
    pub score: u32,
    pub improved_cv: Option<String>,
    pub changes_made: Vec<String>,
    pub recommendations: Vec<String>,
    pub analyzer: String, // "basic" | "llm"
}

/// Implement this to swap analysis backends without touching the handlers.
#[async_trait]
pub trait CvAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<CvAnalysis, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// BasicAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct BasicAnalyzer;

#[async_trait]
impl CvAnalyzer for BasicAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<CvAnalysis, AppError> {
        Ok(basic_analysis(
            &request.profile.skills,
            &request.requirements.skills,
        ))
    }
}

pub fn basic_analysis(cv_skills: &[String], required: &[String]) -> CvAnalysis {
    let matched = match_skills(cv_skills, required);

    let mut recommendations = Vec::new();
    if !matched.missing.is_empty() {
        recommendations.push(format!(
            "Consider adding these missing skills: {}",
            matched.missing.join(", ")
        ));
    }
    recommendations.push("Highlight relevant experience that demonstrates required skills".to_string());

    CvAnalysis {
        strengths: vec!["CV processed successfully".to_string()],
        weaknesses: if matched.missing.is_empty() {
            Vec::new()
        } else {
            vec!["Missing some required skills".to_string()]
        },
        score: matched.score,
        matching_skills: matched.matching,
        missing_skills: matched.missing,
        improved_cv: None,
        changes_made: vec!["Basic analysis completed".to_string()],
        recommendations,
        analyzer: "basic".to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAnalyzer
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl CvAnalyzer for LlmAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<CvAnalysis, AppError> {
        let prompt = build_analysis_prompt(request);
        let payload: LlmAnalysisPayload = self.0.call_json(&prompt, ANALYSIS_SYSTEM).await?;
        Ok(payload.into())
    }
}

fn build_analysis_prompt(request: &AnalysisRequest<'_>) -> String {
    let requirements = request.requirements;
    let skills = requirements.skills.join(", ");
    let years = requirements.experience_years.to_string();
    // CV text goes in last so placeholders inside it are never substituted.
    fill_template(
        ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("company", request.company),
            ("role", request.role),
            ("skills", &skills),
            ("experience_years", &years),
            ("job_description", &requirements.job_description),
            ("link_instruction", LINK_PRESERVATION_INSTRUCTION),
            ("cv_text", request.cv_text),
        ],
    )
}

/// The JSON shape the model is asked to return. Every field is optional so a
/// partial answer still yields an analysis; camelCase aliases are accepted.
#[derive(Debug, Default, Deserialize)]
struct LlmAnalysisPayload {
    #[serde(default)]
    analysis: LlmAnalysisBody,
    #[serde(default, alias = "improvedCV", alias = "improvedCv")]
    improved_cv: Option<String>,
    #[serde(default, alias = "changesMade")]
    changes_made: Vec<String>,
    #[serde(default)]
    recommendations: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct LlmAnalysisBody {
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default, alias = "skillsMatch")]
    skills_match: Vec<String>,
    #[serde(default, alias = "missingSkills")]
    missing_skills: Vec<String>,
    #[serde(default, alias = "overallScore")]
    overall_score: Option<ScoreValue>,
}

/// Models answer with either `85` or `"85"` (sometimes `"85%"`).
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScoreValue {
    Number(f64),
    Text(String),
}

impl ScoreValue {
    fn percent(&self) -> u32 {
        let value = match self {
            ScoreValue::Number(n) => *n,
            ScoreValue::Text(t) => t.trim().trim_end_matches('%').trim().parse().unwrap_or(0.0),
        };
        value.round().clamp(0.0, 100.0) as u32
    }
}

impl From<LlmAnalysisPayload> for CvAnalysis {
    fn from(payload: LlmAnalysisPayload) -> Self {
        let body = payload.analysis;
        CvAnalysis {
            strengths: body.strengths,
            weaknesses: body.weaknesses,
            matching_skills: body.skills_match,
            missing_skills: body.missing_skills,
            score: body.overall_score.map(|s| s.percent()).unwrap_or(0),
            improved_cv: payload.improved_cv.filter(|cv| !cv.trim().is_empty()),
            changes_made: payload.changes_made,
            recommendations: payload.recommendations,
            analyzer: "llm".to_string(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackAnalyzer
// ────────────────────────────────────────────────────────────────────────────

/// Runs `primary`; on any error logs a warning and answers with `BasicAnalyzer`.
pub struct FallbackAnalyzer {
    primary: Arc<dyn CvAnalyzer>,
}

impl FallbackAnalyzer {
    pub fn new(primary: Arc<dyn CvAnalyzer>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl CvAnalyzer for FallbackAnalyzer {
    async fn analyze(&self, request: &AnalysisRequest<'_>) -> Result<CvAnalysis, AppError> {
        match self.primary.analyze(request).await {
            Ok(analysis) => Ok(analysis),
            Err(e) => {
                warn!(error = %e, "AI analysis failed, using basic analysis");
                BasicAnalyzer.analyze(request).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn requirements() -> RoleRequirements {
        RoleRequirements {
            skills: strings(&["Python", "SQL", "Tableau"]),
            experience_years: 1,
            job_description: "Analyze data.".to_string(),
        }
    }

    struct FailingAnalyzer;

    #[async_trait]
    impl CvAnalyzer for FailingAnalyzer {
        async fn analyze(&self, _request: &AnalysisRequest<'_>) -> Result<CvAnalysis, AppError> {
            Err(AppError::Llm("model unavailable".to_string()))
        }
    }

    #[test]
    fn test_basic_analysis_fields() {
        let analysis = basic_analysis(&strings(&["python", "Excel"]), &requirements().skills);
        assert_eq!(analysis.matching_skills, vec!["Python"]);
        assert_eq!(analysis.missing_skills, vec!["SQL", "Tableau"]);
        assert_eq!(analysis.score, 33);
        assert_eq!(analysis.weaknesses, vec!["Missing some required skills"]);
        assert_eq!(
            analysis.recommendations[0],
            "Consider adding these missing skills: SQL, Tableau"
        );
        assert_eq!(analysis.changes_made, vec!["Basic analysis completed"]);
        assert_eq!(analysis.improved_cv, None);
        assert_eq!(analysis.analyzer, "basic");
    }

    #[test]
    fn test_basic_analysis_all_matched() {
        let analysis = basic_analysis(&strings(&["Python", "SQL", "Tableau"]), &requirements().skills);
        assert_eq!(analysis.score, 100);
        assert!(analysis.weaknesses.is_empty());
        assert_eq!(analysis.recommendations.len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_uses_basic_on_error() {
        let profile = CvProfile {
            skills: strings(&["Python"]),
            ..CvProfile::default()
        };
        let requirements = requirements();
        let request = AnalysisRequest {
            cv_text: "Python",
            profile: &profile,
            company: "google",
            role: "Data Analyst",
            requirements: &requirements,
        };
        let analyzer = FallbackAnalyzer::new(Arc::new(FailingAnalyzer));
        let analysis = analyzer.analyze(&request).await.unwrap();
        assert_eq!(analysis.analyzer, "basic");
        assert_eq!(analysis.matching_skills, vec!["Python"]);
    }

    #[tokio::test]
    async fn test_fallback_passes_through_success() {
        let profile = CvProfile::default();
        let requirements = requirements();
        let request = AnalysisRequest {
            cv_text: "",
            profile: &profile,
            company: "google",
            role: "Data Analyst",
            requirements: &requirements,
        };
        let analyzer = FallbackAnalyzer::new(Arc::new(BasicAnalyzer));
        let analysis = analyzer.analyze(&request).await.unwrap();
        assert_eq!(analysis.missing_skills.len(), 3);
    }

    #[test]
    fn test_llm_payload_snake_and_camel_case() {
        let snake = r#"{"analysis":{"strengths":["Clear"],"skills_match":["Python"],"missing_skills":["SQL"],"overall_score":82},
                        "improved_cv":"New CV","changes_made":["Rewrote summary"],"recommendations":["Learn SQL"]}"#;
        let analysis: CvAnalysis = serde_json::from_str::<LlmAnalysisPayload>(snake).unwrap().into();
        assert_eq!(analysis.score, 82);
        assert_eq!(analysis.matching_skills, vec!["Python"]);
        assert_eq!(analysis.improved_cv.as_deref(), Some("New CV"));
        assert_eq!(analysis.analyzer, "llm");

        let camel = r#"{"analysis":{"skillsMatch":["Python"],"missingSkills":[],"overallScore":"75%"},"improvedCV":"  "}"#;
        let analysis: CvAnalysis = serde_json::from_str::<LlmAnalysisPayload>(camel).unwrap().into();
        assert_eq!(analysis.score, 75);
        assert_eq!(analysis.matching_skills, vec!["Python"]);
        assert_eq!(analysis.improved_cv, None);
    }

    #[test]
    fn test_score_clamped() {
        assert_eq!(ScoreValue::Number(140.0).percent(), 100);
        assert_eq!(ScoreValue::Text("n/a".into()).percent(), 0);
    }

    #[test]
    fn test_prompt_contains_role_and_cv() {
        let profile = CvProfile::default();
        let requirements = requirements();
        let request = AnalysisRequest {
            cv_text: "Built {role} dashboards",
            profile: &profile,
            company: "google",
            role: "Data Analyst",
            requirements: &requirements,
        };
        let prompt = build_analysis_prompt(&request);
        assert!(prompt.contains("Job: google - Data Analyst"));
        assert!(prompt.contains("Required skills: Python, SQL, Tableau"));
        assert!(prompt.contains("Built {role} dashboards"));
        assert!(!prompt.contains("{link_instruction}"));
    }
}
