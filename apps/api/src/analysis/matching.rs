//! Keyword skill matching between a CV's skills and a role's required skills.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Required skills found in the CV, in required order.
    pub matching: Vec<String>,
    /// Required skills not found in the CV, in required order.
    pub missing: Vec<String>,
    /// round(matched / required × 100); 0 when nothing is required.
    pub score: u32,
}

/// A required skill matches when some CV skill contains it, or it contains
/// some CV skill, ignoring case.
pub fn match_skills(cv_skills: &[String], required: &[String]) -> SkillMatch {
    let cv_lower: Vec<String> = cv_skills
        .iter()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    let (matching, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|skill| {
            let skill = skill.to_lowercase();
            cv_lower
                .iter()
                .any(|cv| cv.contains(&skill) || skill.contains(cv.as_str()))
        });

    SkillMatch {
        score: percentage(matching.len(), required.len()),
        matching,
        missing,
    }
}

/// round(part / total × 100), 0 for an empty total.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((part as f64 / total as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_substring_match_both_directions() {
        let cv = strings(&["React.js", "AWS"]);
        let required = strings(&["React", "AWS SageMaker", "Docker"]);
        let result = match_skills(&cv, &required);
        assert_eq!(result.matching, vec!["React", "AWS SageMaker"]);
        assert_eq!(result.missing, vec!["Docker"]);
        assert_eq!(result.score, 67);
    }

    #[test]
    fn test_case_insensitive() {
        let result = match_skills(&strings(&["PYTHON"]), &strings(&["python"]));
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_nothing_required_scores_zero() {
        let result = match_skills(&strings(&["Rust"]), &[]);
        assert_eq!(result, SkillMatch::default());
    }

    #[test]
    fn test_blank_cv_skill_matches_nothing() {
        let result = match_skills(&strings(&["  "]), &strings(&["Go"]));
        assert_eq!(result.missing, vec!["Go"]);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_percentage_rounds() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 2), 50);
    }
}
