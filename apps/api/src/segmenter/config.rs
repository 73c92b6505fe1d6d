//! Tunables for the segmenter: the noise table and the header vocabulary.
//!
//! Both lists can be replaced or extended by the caller without touching the
//! algorithm. `SegmenterConfig::default()` reproduces the built-in behaviour.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// A named pattern whose matches are deleted from raw CV text before it is split into lines.
#[derive(Debug, Clone)]
pub struct NoisePattern {
    pub name: String,
    pub regex: Regex,
}

impl NoisePattern {
    /// Compiles `pattern` case-insensitively. `.` never crosses a line break unless the
    /// pattern opts in with `(?s)`.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            regex,
        })
    }
}

/// Controls how a built-in list is overridden.
#[derive(Debug, Clone, Default)]
pub enum ListOverride<T> {
    #[default]
    Default,
    /// Replace the defaults entirely.
    Replace(Vec<T>),
    /// Keep the defaults and append these.
    Extend(Vec<T>),
}

impl<T: Clone> ListOverride<T> {
    pub fn resolve(&self, defaults: &[T]) -> Vec<T> {
        match self {
            ListOverride::Default => defaults.to_vec(),
            ListOverride::Replace(v) => v.clone(),
            ListOverride::Extend(v) => {
                let mut out = defaults.to_vec();
                out.extend(v.iter().cloned());
                out
            }
        }
    }
}

/// Fragment patterns stop at the end of their line and leave the line break in place,
/// so the emptied line is dropped later instead of being glued to its neighbour.
static DEFAULT_NOISE: Lazy<Vec<NoisePattern>> = Lazy::new(|| {
    [
        ("optimized-banner", r"AI-OPTIMIZED CV FOR[^\n]*"),
        ("analysis-summary-block", r"(?s)===\s*ANALYSIS SUMMARY\s*===.*$"),
        ("overall-score", r"Overall Score:[^\n]*"),
        ("bold-analysis", r"\*\*Analysis:.*?\*\*"),
        ("analysis", r"Analysis:[^\n]*"),
        ("ai-enhancement", r"AI Enhancement:[^\n]*"),
        ("improvements-made", r"Improvements made:[^\n]*"),
    ]
    .into_iter()
    .map(|(name, pattern)| NoisePattern::new(name, pattern).unwrap())
    .collect()
});

pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &[
    "objective",
    "summary",
    "education",
    "technical skills",
    "skills",
    "experience",
    "projects",
    "certifications",
    "achievements",
    "strengths",
    "highlights",
    "declaration",
    "professional summary",
    "work experience",
    "qualifications",
    "core skills",
    "soft skills",
    "languages",
    "frontend",
    "backend",
    "tools",
    "frameworks",
    "concepts",
    "internships",
];

/// Resolved segmenter configuration. Cheap to share behind an `Arc`.
#[derive(Debug, Clone)]
pub struct SegmenterConfig {
    noise_patterns: Vec<NoisePattern>,
    header_keywords: Vec<String>,
    header_re: Regex,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self::from_overrides(ListOverride::Default, ListOverride::Default)
    }
}

impl SegmenterConfig {
    pub fn from_overrides(
        noise: ListOverride<NoisePattern>,
        keywords: ListOverride<String>,
    ) -> Self {
        let default_keywords: Vec<String> = DEFAULT_HEADER_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .collect();
        let header_keywords = keywords.resolve(&default_keywords);
        Self {
            noise_patterns: noise.resolve(&DEFAULT_NOISE),
            header_re: keyword_prefix_regex(&header_keywords),
            header_keywords,
        }
    }

    pub fn noise_patterns(&self) -> &[NoisePattern] {
        &self.noise_patterns
    }

    pub fn header_keywords(&self) -> &[String] {
        &self.header_keywords
    }

    /// Case-insensitive "line starts with a known section keyword" matcher.
    pub(crate) fn header_re(&self) -> &Regex {
        &self.header_re
    }
}

fn keyword_prefix_regex(keywords: &[String]) -> Regex {
    if keywords.is_empty() {
        // Matches nothing.
        return Regex::new(r"\b\B").unwrap();
    }
    let alternation = keywords
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    RegexBuilder::new(&format!("^(?:{alternation})"))
        .case_insensitive(true)
        .build()
        .unwrap()
}
