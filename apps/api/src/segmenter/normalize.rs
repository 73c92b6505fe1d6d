use once_cell::sync::Lazy;
use regex::Regex;

use crate::segmenter::config::NoisePattern;

/// Inline bold marker produced for `**text**` runs.
pub const BOLD_OPEN: &str = "<b>";
pub const BOLD_CLOSE: &str = "</b>";
pub const BULLET: &str = "• ";

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static BOLD_BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\* \*\*").unwrap());
static STAR_BULLET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\s+").unwrap());

/// Turns raw CV text into trimmed, non-empty lines in document order.
///
/// Noise patterns run over the whole text first (one of the defaults swallows
/// everything up to the end of input), then each line gets its emphasis and
/// bullet markup rewritten. Lines that still mention `Analysis` are dropped.
pub fn normalize_lines(raw: &str, noise: &[NoisePattern]) -> Vec<String> {
    let cleaned = noise.iter().fold(raw.to_string(), |text, pattern| {
        pattern.regex.replace_all(&text, "").into_owned()
    });

    cleaned
        .lines()
        .map(normalize_line)
        .filter(|line| !line.is_empty() && !line.contains("Analysis"))
        .collect()
}

fn normalize_line(line: &str) -> String {
    let line = line.trim();
    let line = BOLD_RE.replace_all(line, "<b>$1</b>");
    let line = BOLD_BULLET_RE.replace_all(&line, BULLET);
    let line = STAR_BULLET_RE.replace(&line, BULLET);
    line.trim().to_string()
}

/// Removes every bold marker from `text`.
pub fn strip_bold(text: &str) -> String {
    text.replace(BOLD_OPEN, "").replace(BOLD_CLOSE, "")
}

/// True when the whole line is a single bold run.
pub fn is_fully_bold(line: &str) -> bool {
    line.starts_with(BOLD_OPEN) && line.ends_with(BOLD_CLOSE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::config::SegmenterConfig;

    fn normalize(raw: &str) -> Vec<String> {
        normalize_lines(raw, SegmenterConfig::default().noise_patterns())
    }

    #[test]
    fn test_empty_input_yields_no_lines() {
        assert!(normalize("").is_empty());
        assert!(normalize("   \n\n\t\n").is_empty());
    }

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let lines = normalize("  Jane Doe  \n\n   \nSKILLS\r\n Rust ");
        assert_eq!(lines, vec!["Jane Doe", "SKILLS", "Rust"]);
    }

    #[test]
    fn test_banner_and_score_lines_removed() {
        let raw = "AI-OPTIMIZED CV FOR Acme - Engineer\nJane Doe\noverall score: 82\nSKILLS\nRust";
        assert_eq!(normalize(raw), vec!["Jane Doe", "SKILLS", "Rust"]);
    }

    #[test]
    fn test_analysis_summary_block_removed_to_end() {
        let raw = "SKILLS\nRust\n=== ANALYSIS SUMMARY ===\nScore 90\nMore notes";
        assert_eq!(normalize(raw), vec!["SKILLS", "Rust"]);
    }

    #[test]
    fn test_fragment_removal_keeps_following_line() {
        let raw = "Built things AI Enhancement: reworded\nNext line";
        assert_eq!(normalize(raw), vec!["Built things", "Next line"]);
    }

    #[test]
    fn test_improvements_made_removed() {
        let raw = "Improvements made: added keywords\nEDUCATION\nBSc";
        assert_eq!(normalize(raw), vec!["EDUCATION", "BSc"]);
    }

    #[test]
    fn test_lines_mentioning_analysis_dropped() {
        let raw = "Data Analysis with pandas\nSQL";
        assert_eq!(normalize(raw), vec!["SQL"]);
    }

    #[test]
    fn test_lowercase_analysis_kept() {
        let raw = "data analysis with pandas";
        assert_eq!(normalize(raw), vec!["data analysis with pandas"]);
    }

    #[test]
    fn test_bold_converted_to_marker() {
        let lines = normalize("**ACHIEVEMENTS**\nWon **first** prize");
        assert_eq!(lines, vec!["<b>ACHIEVEMENTS</b>", "Won <b>first</b> prize"]);
    }

    #[test]
    fn test_bold_does_not_span_lines() {
        assert_eq!(normalize("**Senior\nEngineer**"), vec!["**Senior", "Engineer**"]);
    }

    #[test]
    fn test_star_bullets_normalized() {
        let lines = normalize("* Shipped v2\n   *   Led team\n*no space");
        assert_eq!(lines, vec!["• Shipped v2", "• Led team", "*no space"]);
    }

    #[test]
    fn test_star_before_bold_becomes_bullet() {
        let lines = normalize("* **Rust**: systems");
        assert_eq!(lines, vec!["• <b>Rust</b>: systems"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let raw = "AI-OPTIMIZED CV FOR X\n**Jane Doe**\n* item one\n  * **bold** item\n\
                   Overall Score: 7\nSUMMARY\nText with **emphasis** here\n***odd**\n* * nested";
        let once = normalize(raw);
        let twice = normalize(&once.join("\n"));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_custom_noise_table_is_used() {
        let noise = vec![NoisePattern::new("footer", r"Generated by[^\n]*").unwrap()];
        let lines = normalize_lines("Jane\nGenerated by ResumeBot\nOverall Score: 5", &noise);
        assert_eq!(lines, vec!["Jane", "Overall Score: 5"]);
    }

    #[test]
    fn test_strip_bold_and_is_fully_bold() {
        assert!(is_fully_bold("<b>SKILLS</b>"));
        assert!(!is_fully_bold("<b>SKILLS</b> and more"));
        assert_eq!(strip_bold("<b>SKILLS</b>"), "SKILLS");
    }
}
