use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::segmenter::config::SegmenterConfig;
use crate::segmenter::normalize::is_fully_bold;

static ALL_CAPS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z\s-]+$").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s*[A-Za-z]").unwrap());

/// Semantic category of a section; renderers choose layout from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Summary,
    Skills,
    Education,
    Experience,
    Projects,
    Certifications,
    Highlights,
    Declaration,
    Contact,
    Other,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Summary => "summary",
            SectionType::Skills => "skills",
            SectionType::Education => "education",
            SectionType::Experience => "experience",
            SectionType::Projects => "projects",
            SectionType::Certifications => "certifications",
            SectionType::Highlights => "highlights",
            SectionType::Declaration => "declaration",
            SectionType::Contact => "contact",
            SectionType::Other => "other",
        }
    }
}

/// Ordered classification table. The first row with a matching needle wins, so
/// "project experience" is a project section and "work experience" is experience.
pub const CLASSIFICATION_RULES: &[(SectionType, &[&str])] = &[
    (SectionType::Summary, &["objective", "summary", "profile"]),
    (SectionType::Skills, &["skill", "competenc", "technolog"]),
    (
        SectionType::Education,
        &["education", "qualification", "academic background"],
    ),
    (SectionType::Projects, &["project"]),
    (SectionType::Experience, &["experience", "employment", "work"]),
    (
        SectionType::Certifications,
        &["certification", "achievement", "award"],
    ),
    (SectionType::Highlights, &["strength", "highlight"]),
    (SectionType::Declaration, &["declaration"]),
    (SectionType::Contact, &["contact", "linkedin", "@"]),
];

/// Maps a header's text to its section type.
pub fn classify(title: &str) -> SectionType {
    let title = title.to_lowercase();
    CLASSIFICATION_RULES
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| title.contains(n)))
        .map(|(section_type, _)| *section_type)
        .unwrap_or(SectionType::Other)
}

/// Decides whether a normalized line opens a new section.
pub fn is_header(line: &str, config: &SegmenterConfig) -> bool {
    // Contact-shaped lines never open a section.
    if line.contains('@') || line.contains('|') {
        return false;
    }

    let keyword = config.header_re().is_match(line) && !line.ends_with(':');
    let len = line.chars().count();
    let all_caps = ALL_CAPS_RE.is_match(line) && len > 3 && len < 50;

    keyword || all_caps || is_fully_bold(line) || NUMBERED_RE.is_match(line)
}
