//! Learning resources for the skills a CV is missing.

pub mod handlers;
mod prompts;
pub mod recommender;

use reqwest::Url;
use serde::{Deserialize, Serialize};

pub const MAX_FREE: usize = 3;
pub const MAX_PAID: usize = 2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Maps free-form model output ("Beginner to Intermediate", "advanced") to a
    /// level. The first level named wins; anything else is `Beginner`.
    pub fn normalize(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Difficulty::Beginner;
        };
        let lower = raw.to_lowercase();
        if lower.contains("beginner") {
            Difficulty::Beginner
        } else if lower.contains("intermediate") {
            Difficulty::Intermediate
        } else if lower.contains("advanced") {
            Difficulty::Advanced
        } else {
            Difficulty::Beginner
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub skill_gap: String,
    pub duration: String,
    pub difficulty: Difficulty,
    pub is_paid: bool,
    pub price: String,
    pub rating: f32,
    pub description: String,
    pub channel_name: Option<String>,
}

/// Keeps at most `MAX_FREE` free and `MAX_PAID` paid courses, free first, each
/// group in its original order.
pub fn select_mix(courses: Vec<Course>) -> Vec<Course> {
    let (free, paid): (Vec<Course>, Vec<Course>) = courses.into_iter().partition(|c| !c.is_paid);
    free.into_iter()
        .take(MAX_FREE)
        .chain(paid.into_iter().take(MAX_PAID))
        .collect()
}

/// Five fixed resources built from the first three missing skills.
pub fn fallback_courses(missing_skills: &[String]) -> Vec<Course> {
    let skill = |i: usize, default: &str| -> String {
        missing_skills
            .get(i)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(default)
            .to_string()
    };
    let first = skill(0, "Programming");
    let second = skill(1, "Development");
    let third = skill(2, "Tech");

    vec![
        Course {
            title: format!("{first} - Complete Tutorial"),
            platform: "YouTube".to_string(),
            url: search_url(
                "https://www.youtube.com/results",
                "search_query",
                &format!("{first} full course"),
            ),
            skill_gap: first.clone(),
            duration: "10+ hours".to_string(),
            difficulty: Difficulty::Beginner,
            is_paid: false,
            price: "Free".to_string(),
            rating: 4.5,
            description: format!("Comprehensive video tutorial series covering {first}."),
            channel_name: Some("freeCodeCamp.org".to_string()),
        },
        Course {
            title: format!("Learn {second}"),
            platform: "freeCodeCamp".to_string(),
            url: "https://www.freecodecamp.org/learn".to_string(),
            skill_gap: second.clone(),
            duration: "Self-paced".to_string(),
            difficulty: Difficulty::Beginner,
            is_paid: false,
            price: "Free".to_string(),
            rating: 4.8,
            description: "Interactive coding challenges with certification.".to_string(),
            channel_name: None,
        },
        Course {
            title: format!("{third} Resources"),
            platform: "Telegram".to_string(),
            url: "https://t.me/programming_resources".to_string(),
            skill_gap: third,
            duration: "Ongoing".to_string(),
            difficulty: Difficulty::Intermediate,
            is_paid: false,
            price: "Free".to_string(),
            rating: 4.3,
            description: "Community sharing tutorials and resources.".to_string(),
            channel_name: Some("Tech Learning Hub".to_string()),
        },
        Course {
            title: format!("{first} Bootcamp"),
            platform: "Udemy".to_string(),
            url: search_url("https://www.udemy.com/courses/search/", "q", &first),
            skill_gap: first,
            duration: "40 hours".to_string(),
            difficulty: Difficulty::Intermediate,
            is_paid: true,
            price: "$49.99".to_string(),
            rating: 4.6,
            description: "Complete bootcamp with certificate.".to_string(),
            channel_name: None,
        },
        Course {
            title: format!("Professional {second}"),
            platform: "Coursera".to_string(),
            url: "https://www.coursera.org/".to_string(),
            skill_gap: second,
            duration: "6 weeks".to_string(),
            difficulty: Difficulty::Advanced,
            is_paid: true,
            price: "$79".to_string(),
            rating: 4.7,
            description: "University-backed professional course.".to_string(),
            channel_name: None,
        },
    ]
}

/// `base?key=query` with the query form-encoded.
fn search_url(base: &str, key: &str, query: &str) -> String {
    Url::parse_with_params(base, &[(key, query)])
        .map(|url| url.to_string())
        .unwrap_or_else(|_| base.to_string())
}
