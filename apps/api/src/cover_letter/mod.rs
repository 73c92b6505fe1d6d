//! Cover letters for a target role, written by the model or from a fixed template.

pub mod handlers;
mod prompts;
pub mod writer;

use serde::{Deserialize, Serialize};

use crate::analysis::profile::CvProfile;

/// Tone of the letter. Unknown names fall back to `Professional`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStyle {
    #[default]
    Professional,
    Creative,
    Technical,
}

impl LetterStyle {
    pub const ALL: [LetterStyle; 3] = [
        LetterStyle::Professional,
        LetterStyle::Creative,
        LetterStyle::Technical,
    ];

    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|s| s.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterStyle::Professional => "professional",
            LetterStyle::Creative => "creative",
            LetterStyle::Technical => "technical",
        }
    }

    /// Writing instructions handed to the model.
    pub fn guide(&self) -> &'static str {
        match self {
            LetterStyle::Professional => {
                "Write in a formal, professional tone that is confident and respectful. \
                 Focus on qualifications, achievements and value proposition."
            }
            LetterStyle::Creative => {
                "Write in a creative, engaging tone that shows personality while staying \
                 professional. Use vivid language and open with a memorable line."
            }
            LetterStyle::Technical => {
                "Write in a precise, technical tone focused on technical skills, methodologies \
                 and achievements. Use industry terminology and stress problem solving."
            }
        }
    }
}

/// What the letter says about the candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free text, e.g. the most recent position.
    #[serde(default)]
    pub experience: String,
}

impl From<&CvProfile> for CandidateInfo {
    fn from(profile: &CvProfile) -> Self {
        Self {
            name: profile.name.clone().unwrap_or_default(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            skills: profile.skills.clone(),
            experience: profile
                .experience
                .first()
                .and_then(|entry| entry.position.clone())
                .unwrap_or_default(),
        }
    }
}
