//! Cover letter writers, swappable behind `Arc<dyn CoverLetterWriter>`.
//!
//! - `TemplateWriter`: fixed letter filled from the candidate, no network.
//! - `LlmWriter`: asks the model for a letter in the requested style.
//! - `FallbackWriter`: runs a primary writer and drops to `TemplateWriter` on error.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cover_letter::prompts::{LETTER_PROMPT_TEMPLATE, LETTER_SYSTEM, REWRITE_PROMPT_TEMPLATE};
use crate::cover_letter::{CandidateInfo, LetterStyle};
use crate::errors::AppError;
use crate::llm_client::prompts::fill_template;
use crate::llm_client::{LlmClient, LlmError};

const SKILLS_IN_LETTER: usize = 3;

pub struct LetterRequest<'a> {
    pub candidate: &'a CandidateInfo,
    pub company: &'a str,
    pub role: &'a str,
    pub job_description: Option<&'a str>,
    pub style: LetterStyle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverLetter {
    pub content: String,
    pub writer: String, // "template" | "llm"
}

#[async_trait]
pub trait CoverLetterWriter: Send + Sync {
    async fn write(&self, request: &LetterRequest<'_>) -> Result<CoverLetter, AppError>;

    /// A new version of `original` for the same role.
    async fn rewrite(
        &self,
        original: &str,
        request: &LetterRequest<'_>,
    ) -> Result<CoverLetter, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// TemplateWriter
// ────────────────────────────────────────────────────────────────────────────

pub struct TemplateWriter;

#[async_trait]
impl CoverLetterWriter for TemplateWriter {
    async fn write(&self, request: &LetterRequest<'_>) -> Result<CoverLetter, AppError> {
        Ok(CoverLetter {
            content: template_letter(request),
            writer: "template".to_string(),
        })
    }

    /// Without a model there is nothing to vary; the original comes back as is.
    async fn rewrite(
        &self,
        original: &str,
        _request: &LetterRequest<'_>,
    ) -> Result<CoverLetter, AppError> {
        Ok(CoverLetter {
            content: original.to_string(),
            writer: "template".to_string(),
        })
    }
}

pub fn template_letter(request: &LetterRequest<'_>) -> String {
    let candidate = request.candidate;
    let company = request.company;
    let role = request.role;

    let experience = match candidate.experience.trim() {
        "" => "relevant fields",
        experience => experience,
    };
    let top_skills: Vec<&str> = candidate
        .skills
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .take(SKILLS_IN_LETTER)
        .collect();
    let skills = if top_skills.is_empty() {
        "a strong command of the skills this role calls for".to_string()
    } else {
        format!("a strong command of skills such as {}", top_skills.join(", "))
    };
    let name = match candidate.name.trim() {
        "" => "[Your Name]",
        name => name,
    };

    format!(
        "[Date]\n\n\
         Hiring Manager\n{company}\n[City, State]\n\n\
         Dear Hiring Manager,\n\n\
         I am writing to express my keen interest in the {role} position at {company}. \
         With a background that includes experience in {experience} and {skills}, I am \
         confident that I possess the qualifications necessary to contribute significantly \
         to your team.\n\n\
         My experience has prepared me to tackle the challenges of this role and deliver \
         results. I am particularly drawn to {company} because of its reputation for \
         innovation and its impactful work in the industry. I am eager to bring my abilities \
         to your organization and help you achieve your goals.\n\n\
         Thank you for your time and consideration. I have attached my resume for your review \
         and look forward to the possibility of discussing my application further in an \
         interview.\n\n\
         Sincerely,\n{name}"
    )
}

// ────────────────────────────────────────────────────────────────────────────
// LlmWriter
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmWriter(pub LlmClient);

#[async_trait]
impl CoverLetterWriter for LlmWriter {
    async fn write(&self, request: &LetterRequest<'_>) -> Result<CoverLetter, AppError> {
        let prompt = build_letter_prompt(request);
        let payload: LetterPayload = self.0.call_json(&prompt, LETTER_SYSTEM).await?;
        Ok(payload.into_letter()?)
    }

    async fn rewrite(
        &self,
        original: &str,
        request: &LetterRequest<'_>,
    ) -> Result<CoverLetter, AppError> {
        let prompt = fill_template(
            REWRITE_PROMPT_TEMPLATE,
            &[
                ("company", request.company),
                ("role", request.role),
                ("original", original),
            ],
        );
        let payload: LetterPayload = self.0.call_json(&prompt, LETTER_SYSTEM).await?;
        Ok(payload.into_letter()?)
    }
}

fn build_letter_prompt(request: &LetterRequest<'_>) -> String {
    let candidate = request.candidate;
    let skills = if candidate.skills.is_empty() {
        "General skills".to_string()
    } else {
        candidate.skills.join(", ")
    };
    let experience = match candidate.experience.trim() {
        "" => "Entry-level professional",
        experience => experience,
    };
    let job_requirements = request
        .job_description
        .map(str::trim)
        .filter(|jd| !jd.is_empty())
        .map(|jd| format!("- Job requirements: {jd}"))
        .unwrap_or_default();

    fill_template(
        LETTER_PROMPT_TEMPLATE,
        &[
            ("company", request.company),
            ("role", request.role),
            ("skills", &skills),
            ("experience", experience),
            ("style_guide", request.style.guide()),
            ("job_requirements", &job_requirements),
            ("email", &candidate.email),
            ("phone", &candidate.phone),
            ("name", &candidate.name),
        ],
    )
}

#[derive(Debug, Default, Deserialize)]
struct LetterPayload {
    #[serde(default, alias = "coverLetter", alias = "content")]
    cover_letter: String,
}

impl LetterPayload {
    fn into_letter(self) -> Result<CoverLetter, LlmError> {
        let content = self.cover_letter.trim();
        if content.is_empty() {
            return Err(LlmError::EmptyContent);
        }
        Ok(CoverLetter {
            content: content.to_string(),
            writer: "llm".to_string(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackWriter
// ────────────────────────────────────────────────────────────────────────────

/// Runs `primary`; on any error logs a warning and answers with `TemplateWriter`.
pub struct FallbackWriter {
    primary: Arc<dyn CoverLetterWriter>,
}

impl FallbackWriter {
    pub fn new(primary: Arc<dyn CoverLetterWriter>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl CoverLetterWriter for FallbackWriter {
    async fn write(&self, request: &LetterRequest<'_>) -> Result<CoverLetter, AppError> {
        match self.primary.write(request).await {
            Ok(letter) => Ok(letter),
            Err(e) => {
                warn!(error = %e, "AI cover letter failed, using template letter");
                TemplateWriter.write(request).await
            }
        }
    }

    async fn rewrite(
        &self,
        original: &str,
        request: &LetterRequest<'_>,
    ) -> Result<CoverLetter, AppError> {
        match self.primary.rewrite(original, request).await {
            Ok(letter) => Ok(letter),
            Err(e) => {
                warn!(error = %e, "AI cover letter rewrite failed, keeping original");
                TemplateWriter.rewrite(original, request).await
            }
        }
    }
}
