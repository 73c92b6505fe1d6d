//! Inline markup for rendered CVs: links, e-mail addresses and bullet lines.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// One alternation so every link is produced in a single pass and generated
/// anchors are never scanned again.
static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"\[(?P<text>[^\]]+)\]\((?P<url>https?://[^)\s]+)\)",
        r#"|(?P<bare>https?://[^\s<)"']+)"#,
        r#"|(?P<www>\bwww\.[^\s<)"']+)"#,
        r"|(?P<email>[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,})",
    ))
    .unwrap()
});
static SUBSECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s]+:").unwrap());
static NUMBERED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.").unwrap());

const BULLET_MARKERS: &[char] = &['•', '◦', '▪', '-'];
const SUBSECTION_MAX_CHARS: usize = 50;

fn anchor(href: &str, text: &str) -> String {
    format!(r#"<a href="{href}" target="_blank">{text}</a>"#)
}

/// Converts markdown links, bare URLs, `www.` hosts and e-mail addresses to
/// anchors, then newlines to `<br>`.
pub fn markdown_to_html(text: &str) -> String {
    let linked = LINK_RE.replace_all(text, |caps: &Captures| {
        if let (Some(label), Some(url)) = (caps.name("text"), caps.name("url")) {
            anchor(url.as_str(), label.as_str())
        } else if let Some(url) = caps.name("bare") {
            anchor(url.as_str(), url.as_str())
        } else if let Some(host) = caps.name("www") {
            anchor(&format!("http://{}", host.as_str()), host.as_str())
        } else if let Some(email) = caps.name("email") {
            anchor(&format!("mailto:{}", email.as_str()), email.as_str())
        } else {
            caps[0].to_string()
        }
    });
    linked.replace('\n', "<br>")
}

fn has_bullet(line: &str) -> bool {
    let trimmed = line.trim();
    line.contains(BULLET_MARKERS) || line.starts_with('*') || NUMBERED_RE.is_match(trimmed)
}

/// Renders content lines as `<div>`s. Short `Label:` lines become subsection
/// headers, lines without a bullet marker get `• `.
pub fn format_content_lines<S: AsRef<str>>(lines: &[S]) -> String {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let linked = markdown_to_html(line);
            if SUBSECTION_RE.is_match(line.trim()) && line.chars().count() < SUBSECTION_MAX_CHARS {
                format!(r#"<div class="subsection-header">{linked}</div>"#)
            } else if has_bullet(line) {
                format!(r#"<div class="content-line">{linked}</div>"#)
            } else {
                format!(r#"<div class="content-line">• {linked}</div>"#)
            }
        })
        .collect()
}
