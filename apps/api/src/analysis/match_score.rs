use serde::Serialize;

use crate::analysis::matching::percentage;

/// Headline match score shown next to an analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchScore {
    pub score: u32,
    pub level: &'static str,
    pub color: &'static str,
    pub total_required: usize,
    pub matched: usize,
    pub missing: usize,
}

impl MatchScore {
    pub fn compute(matching: &[String], missing: &[String]) -> Self {
        let total = matching.len() + missing.len();
        let score = percentage(matching.len(), total);
        let (level, color) = match score {
            75.. => ("Excellent Match", "#2e7d32"),
            50..=74 => ("Good Match", "#f57c00"),
            _ => ("Needs Improvement", "#d32f2f"),
        };
        Self {
            score,
            level,
            color,
            total_required: total,
            matched: matching.len(),
            missing: missing.len(),
        }
    }
}
