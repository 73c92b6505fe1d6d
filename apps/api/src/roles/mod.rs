//! Role catalog: required skills per (company, role).
//!
//! Ships with a small built-in table; a JSON file can replace it at startup.

pub mod handlers;

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read role catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid role catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequirements {
    #[serde(default)]
    pub skills: Vec<String>,
    /// Minimum years of experience.
    #[serde(default, alias = "experience")]
    pub experience_years: u32,
    #[serde(default, alias = "jobDescription")]
    pub job_description: String,
}

/// One catalog row as stored in the JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleEntry {
    pub company: String,
    pub role: String,
    #[serde(flatten)]
    pub requirements: RoleRequirements,
}

#[derive(Debug, Clone)]
pub struct RoleCatalog {
    entries: Vec<RoleEntry>,
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new(default_entries())
    }
}

impl RoleCatalog {
    pub fn new(entries: Vec<RoleEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Requirements for a company id and role title, both matched case-insensitively.
    pub fn requirements(&self, company: &str, role: &str) -> Option<&RoleRequirements> {
        self.entries
            .iter()
            .find(|e| e.company.eq_ignore_ascii_case(company) && e.role.eq_ignore_ascii_case(role))
            .map(|e| &e.requirements)
    }

    /// Company id → role titles, in catalog order per company.
    pub fn companies(&self) -> BTreeMap<String, Vec<String>> {
        let mut out: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for entry in &self.entries {
            out.entry(entry.company.clone())
                .or_default()
                .push(entry.role.clone());
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn entry(
    company: &str,
    role: &str,
    skills: &[&str],
    experience_years: u32,
    job_description: &str,
) -> RoleEntry {
    RoleEntry {
        company: company.to_string(),
        role: role.to_string(),
        requirements: RoleRequirements {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience_years,
            job_description: job_description.to_string(),
        },
    }
}

fn default_entries() -> Vec<RoleEntry> {
    vec![
        entry(
            "google",
            "Software Engineer",
            &["JavaScript", "React", "Node.js", "Cloud Computing", "Algorithms", "System Design"],
            2,
            "Build scalable web applications, collaborate with cross-functional teams, write clean and maintainable code, participate in code reviews, and contribute to architectural decisions.",
        ),
        entry(
            "google",
            "Data Analyst",
            &["Python", "SQL", "Data Visualization", "Statistics", "Machine Learning", "Tableau"],
            1,
            "Analyze large datasets to derive business insights, create data visualizations, build predictive models, and present findings to stakeholders.",
        ),
        entry(
            "google",
            "Product Manager",
            &["Product Strategy", "Agile", "Scrum", "User Research", "Analytics", "Roadmap Planning"],
            3,
            "Define product vision and strategy, work with engineering and design teams, conduct market research, and manage product roadmaps.",
        ),
        entry(
            "amazon",
            "Software Developer",
            &["Java", "AWS", "Microservices", "Docker", "Kubernetes", "System Design"],
            2,
            "Develop and maintain cloud-native applications, design distributed systems, optimize performance, and ensure scalability.",
        ),
        entry(
            "amazon",
            "Data Scientist",
            &["Python", "Machine Learning", "Deep Learning", "AWS SageMaker", "Statistics", "Big Data"],
            3,
            "Build machine learning models, analyze complex datasets, develop algorithms, and deploy ML solutions at scale.",
        ),
        entry(
            "amazon",
            "Operations Manager",
            &["Operations Management", "Process Improvement", "Leadership", "Analytics", "Six Sigma"],
            4,
            "Oversee daily operations, optimize processes, manage teams, analyze operational metrics, and drive continuous improvement.",
        ),
        entry(
            "microsoft",
            "Product Manager",
            &["Product Management", "Azure", "Agile", "Strategic Planning", "Customer Research"],
            3,
            "Drive product strategy for cloud services, collaborate with engineering teams, analyze market trends, and manage product lifecycle.",
        ),
        entry(
            "microsoft",
            "Cloud Engineer",
            &["Azure", "PowerShell", "ARM Templates", "DevOps", "Networking", "Security"],
            2,
            "Design and implement cloud infrastructure, automate deployments, ensure security compliance, and optimize cloud costs.",
        ),
        entry(
            "microsoft",
            "Business Analyst",
            &["Business Analysis", "Requirements Gathering", "Process Mapping", "SQL", "Power BI"],
            2,
            "Analyze business requirements, document processes, create functional specifications, and work with stakeholders to deliver solutions.",
        ),
    ]
}
