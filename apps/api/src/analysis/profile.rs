//! Field-level view of a CV (skills list, experience entries, e-mail, phone)
//! built on top of the segmenter's sections.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::segmenter::normalize::strip_bold;
use crate::segmenter::{SectionType, SegmentedResume};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?[\d \-()]{8,15}").unwrap());
static YEAR_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(?(?:19|20)\d{2}\)?\s*-\s*\(?(?:19|20)\d{2}\)?$").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());
static SKILL_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,•·\-|]").unwrap());

const BULLET_PREFIXES: &[char] = &['•', '◦', '▪', '-', '*'];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub position: Option<String>,
    pub company: Option<String>,
    pub duration: Option<String>,
    pub highlights: Vec<String>,
}

impl ExperienceEntry {
    fn is_empty(&self) -> bool {
        self.position.is_none() && self.company.is_none() && self.duration.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CvProfile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<String>,
    pub certifications: Vec<String>,
}

impl CvProfile {
    pub fn from_segmented(raw_text: &str, segmented: &SegmentedResume) -> Self {
        Self {
            name: segmented.name.clone(),
            email: EMAIL_RE.find(raw_text).map(|m| m.as_str().to_string()),
            phone: find_phone(raw_text),
            summary: segmented
                .content_of(SectionType::Summary)
                .map(strip_bold)
                .collect::<Vec<_>>()
                .join(" "),
            skills: split_skills(segmented.content_of(SectionType::Skills)),
            experience: group_experience(segmented.content_of(SectionType::Experience)),
            education: segmented
                .content_of(SectionType::Education)
                .map(strip_bold)
                .collect(),
            certifications: segmented
                .content_of(SectionType::Certifications)
                .map(strip_bold)
                .collect(),
        }
    }
}

fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find_iter(text)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            (7..=15).contains(&digits) && !YEAR_RANGE_RE.is_match(candidate)
        })
        .map(str::to_string)
}

/// Splits skill lines on separators, dropping `Label:` prefixes and
/// case-insensitive duplicates (first spelling wins).
pub fn split_skills<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for line in lines {
        let line = strip_bold(line);
        let body = match line.split_once(':') {
            Some((label, rest)) if label.chars().count() < 30 => rest,
            _ => line.as_str(),
        };
        for piece in SKILL_SPLIT_RE.split(body) {
            let piece = piece.trim();
            if !piece.is_empty() && seen.insert(piece.to_lowercase()) {
                skills.push(piece.to_string());
            }
        }
    }

    skills
}

/// Groups experience lines into entries. Year-bearing lines are durations,
/// bullet lines are highlights, anything else fills position then company.
pub fn group_experience<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();
    let mut current = ExperienceEntry::default();

    for line in lines {
        let line = strip_bold(line);
        let line = line.trim();

        if line.starts_with(BULLET_PREFIXES) {
            let text = line.trim_start_matches(BULLET_PREFIXES).trim();
            if !text.is_empty() {
                current.highlights.push(text.to_string());
            }
        } else if YEAR_RE.is_match(line) {
            if current.duration.is_some() {
                entries.push(std::mem::take(&mut current));
            }
            current.duration = Some(line.to_string());
        } else if current.position.is_none() {
            current.position = Some(line.to_string());
        } else if current.company.is_none() {
            current.company = Some(line.to_string());
        } else {
            entries.push(std::mem::take(&mut current));
            current.position = Some(line.to_string());
        }
    }

    if !current.is_empty() {
        entries.push(current);
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;

    const CV: &str = "Jane Doe\njane.doe@example.com | +1 555 010 2030\n\
        SUMMARY\nSystems engineer.\nLoves **Rust**.\n\
        TECHNICAL SKILLS\nProgramming: Rust, Go, python\n• Docker | Kubernetes\n\
        EXPERIENCE\nSenior Engineer\nAcme Corp\n2021 - 2024\n• Cut p99 latency by 40%\n\
        Engineer\nBeta Inc\n2018 - 2021\n\
        EDUCATION\nBSc Computer Science\nCERTIFICATIONS\nCKA";

    #[test]
    fn test_profile_from_cv() {
        let profile = CvProfile::from_segmented(CV, &segment(CV));
        assert_eq!(profile.name.as_deref(), Some("Jane Doe"));
        assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
        assert_eq!(profile.phone.as_deref(), Some("+1 555 010 2030"));
        assert_eq!(profile.summary, "Systems engineer. Loves Rust.");
        assert_eq!(
            profile.skills,
            vec!["Rust", "Go", "python", "Docker", "Kubernetes"]
        );
        assert_eq!(profile.education, vec!["BSc Computer Science"]);
        assert_eq!(profile.certifications, vec!["CKA"]);
        assert_eq!(profile.experience.len(), 2);
    }

    #[test]
    fn test_experience_grouping_duration_after_company() {
        let lines = [
            "Senior Engineer",
            "Acme Corp",
            "2021 - 2024",
            "• Cut p99 latency by 40%",
            "Engineer",
            "Beta Inc",
            "2018 - 2021",
        ];
        let entries = group_experience(lines.into_iter());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].position.as_deref(), Some("Senior Engineer"));
        assert_eq!(entries[0].company.as_deref(), Some("Acme Corp"));
        assert_eq!(entries[0].duration.as_deref(), Some("2021 - 2024"));
        assert_eq!(entries[0].highlights, vec!["Cut p99 latency by 40%"]);
        assert_eq!(entries[1].position.as_deref(), Some("Engineer"));
        assert_eq!(entries[1].duration.as_deref(), Some("2018 - 2021"));
    }

    #[test]
    fn test_experience_grouping_duration_first() {
        let lines = ["2020 - 2022", "Engineer", "Acme", "2019", "Intern", "Beta"];
        let entries = group_experience(lines.into_iter());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].duration.as_deref(), Some("2020 - 2022"));
        assert_eq!(entries[0].company.as_deref(), Some("Acme"));
        assert_eq!(entries[1].duration.as_deref(), Some("2019"));
        assert_eq!(entries[1].position.as_deref(), Some("Intern"));
    }

    #[test]
    fn test_skills_dedup_case_insensitive() {
        let skills = split_skills(["Rust, rust, RUST", "Go · go"].into_iter());
        assert_eq!(skills, vec!["Rust", "Go"]);
    }

    #[test]
    fn test_phone_ignores_year_ranges() {
        assert_eq!(find_phone("Worked 2019 - 2021 at Acme"), None);
        assert_eq!(
            find_phone("2019 - 2021\nCall 555-123-4567").as_deref(),
            Some("555-123-4567")
        );
    }

    #[test]
    fn test_phone_candidate_capped_at_fifteen_chars() {
        // A longer run is cut at fifteen characters instead of being rejected whole.
        assert_eq!(
            find_phone("Tel: +44 20 7946 0958 0000 1111").as_deref(),
            Some("+44 20 7946 0958")
        );
    }

    #[test]
    fn test_empty_cv_profile() {
        let profile = CvProfile::from_segmented("", &segment(""));
        assert_eq!(profile, CvProfile::default());
    }
}
