//! Name and contact-line heuristics. Each runs its own scan over the lines; neither
//! consults the other, so both may pick the same line.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

static NAME_SHAPE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z\s]+$").unwrap());

static NAME_EXCLUDED_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"^(?:objective|summary|education|skills|experience|projects|certification)")
        .case_insensitive(true)
        .build()
        .unwrap()
});

static MARKDOWN_LINK_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*\]\(.*\)").unwrap());

const CONTACT_MARKERS: &[&str] = &["@", "http", "linkedin.com", "github.com", "(", "|"];

/// Name and contact line found in a CV. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactInfo {
    pub name: Option<String>,
    pub contact: Option<String>,
}

impl ContactInfo {
    pub fn from_lines(lines: &[String]) -> Self {
        Self {
            name: find_name(lines).map(str::to_string),
            contact: find_contact(lines).map(str::to_string),
        }
    }

    /// True when `line` is the detected name or contact line.
    pub fn is_identity_line(&self, line: &str) -> bool {
        self.name.as_deref() == Some(line) || self.contact.as_deref() == Some(line)
    }
}

/// First line shaped like a person's name.
pub fn find_name(lines: &[String]) -> Option<&str> {
    lines.iter().map(|l| l.trim()).find(|line| looks_like_name(line))
}

/// First line carrying an e-mail, URL, phone bracket, markdown link or pipe separator.
pub fn find_contact(lines: &[String]) -> Option<&str> {
    lines
        .iter()
        .map(String::as_str)
        .find(|line| looks_like_contact(line))
}

fn looks_like_name(line: &str) -> bool {
    let len = line.chars().count();
    len > 5
        && len < 50
        && NAME_SHAPE_RE.is_match(line)
        && !line.contains('@')
        && !line.contains("http")
        && !line.contains('|')
        && !NAME_EXCLUDED_RE.is_match(line)
}

fn looks_like_contact(line: &str) -> bool {
    CONTACT_MARKERS.iter().any(|m| line.contains(m)) || MARKDOWN_LINK_RE.is_match(line)
}
