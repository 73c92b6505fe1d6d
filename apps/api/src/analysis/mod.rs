//! CV analysis against a target role: field-level profile, skill matching,
//! pluggable analyzers (keyword or LLM) and derived insights.

pub mod analyzer;
pub mod handlers;
pub mod insights;
pub mod match_score;
pub mod matching;
pub mod profile;
mod prompts;
