//! Rule-based strengths, weaknesses and suggestions derived from the CV
//! profile and the skill match. Used whenever an analyzer leaves a list empty.

use serde::Serialize;

use crate::analysis::analyzer::CvAnalysis;
use crate::analysis::profile::CvProfile;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Inputs for the insight rules.
pub struct InsightContext<'a> {
    pub profile: &'a CvProfile,
    pub matching: &'a [String],
    pub missing: &'a [String],
    pub score: u32,
    pub role: &'a str,
    /// Display name of the company, or its id when no name was given.
    pub company: &'a str,
}

pub fn derive_insights(ctx: &InsightContext<'_>) -> Insights {
    Insights {
        strengths: strengths(ctx),
        weaknesses: weaknesses(ctx),
        suggestions: suggestions(ctx),
    }
}

fn strengths(ctx: &InsightContext<'_>) -> Vec<String> {
    let profile = ctx.profile;
    let mut out = Vec::new();
    if !ctx.matching.is_empty() {
        out.push(format!(
            "Possesses {} out of {} required skills",
            ctx.matching.len(),
            ctx.matching.len() + ctx.missing.len()
        ));
    }
    if !profile.experience.is_empty() {
        out.push(format!(
            "Has {} relevant work experience entries",
            profile.experience.len()
        ));
    }
    if !profile.education.is_empty() {
        out.push("Educational background in relevant field".to_string());
    }
    if profile.skills.len() > 5 {
        out.push(format!(
            "Strong technical skill set with {} skills listed",
            profile.skills.len()
        ));
    }
    if ctx.score >= 60 {
        out.push(format!("Good alignment with {} role requirements", ctx.role));
    }
    out
}

fn weaknesses(ctx: &InsightContext<'_>) -> Vec<String> {
    let mut out = Vec::new();
    if !ctx.missing.is_empty() {
        let ellipsis = if ctx.missing.len() > 3 { "..." } else { "" };
        out.push(format!(
            "Missing {} key skills: {}{ellipsis}",
            ctx.missing.len(),
            first_three(ctx.missing)
        ));
    }
    if ctx.score < 50 {
        out.push("Skills match score is below 50% - significant upskilling needed".to_string());
    }
    if ctx.profile.certifications.is_empty() {
        out.push("No professional certifications mentioned".to_string());
    }
    if ctx.profile.experience.len() < 2 {
        out.push("Limited work experience demonstrated".to_string());
    }
    out
}

fn suggestions(ctx: &InsightContext<'_>) -> Vec<String> {
    let mut out = Vec::new();
    if !ctx.missing.is_empty() {
        out.push(format!("Consider learning: {}", first_three(ctx.missing)));
        out.push("Take online courses to develop missing skills".to_string());
    }
    out.push(format!(
        "Tailor your CV specifically for {} by highlighting relevant projects",
        ctx.company
    ));
    out.push(r#"Add quantifiable achievements (e.g., "Improved performance by 30%")"#.to_string());
    if ctx.score < 70 {
        out.push("Gain practical experience through projects or internships".to_string());
    }
    out
}

/// Analyzer output merged with derived insights. An analyzer's non-empty
/// list always wins over the derived one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisSummary {
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    pub changes_made: Vec<String>,
    pub analyzer: String,
}

impl AnalysisSummary {
    pub fn merge(analysis: CvAnalysis, derived: Insights) -> Self {
        Self {
            matching_skills: analysis.matching_skills,
            missing_skills: analysis.missing_skills,
            score: analysis.score,
            strengths: non_empty_or(analysis.strengths, derived.strengths),
            weaknesses: non_empty_or(analysis.weaknesses, derived.weaknesses),
            suggestions: non_empty_or(analysis.recommendations, derived.suggestions),
            changes_made: analysis.changes_made,
            analyzer: analysis.analyzer,
        }
    }
}

fn non_empty_or(primary: Vec<String>, fallback: Vec<String>) -> Vec<String> {
    if primary.is_empty() {
        fallback
    } else {
        primary
    }
}

fn first_three(skills: &[String]) -> String {
    skills
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
