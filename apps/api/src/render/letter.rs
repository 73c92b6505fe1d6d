//! Printable HTML for cover letters.

use std::fmt::Write;

use crate::cover_letter::LetterStyle;
use crate::render::markdown::markdown_to_html;

const LETTER_BASE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
body { background: white; padding: 40px 50px; font-size: 11pt; line-height: 1.6; }
.letter p { margin-bottom: 14px; }
a { color: #0000EE; text-decoration: underline; }
";

fn style_css(style: LetterStyle) -> &'static str {
    match style {
        LetterStyle::Professional => {
            "body { font-family: 'Georgia', 'Times New Roman', serif; color: #1a1a1a; }\n"
        }
        LetterStyle::Creative => {
            "body { font-family: 'Segoe UI', 'Arial', sans-serif; color: #2d3748; }\n\
             .letter { border-left: 4px solid #764ba2; padding-left: 20px; }\n"
        }
        LetterStyle::Technical => {
            "body { font-family: 'Consolas', 'Courier New', monospace; font-size: 10pt; color: #1e1e1e; }\n"
        }
    }
}

/// Renders `content` as a complete HTML document, one `<p>` per paragraph.
pub fn render_cover_letter_html(content: &str, style: LetterStyle, name: &str) -> String {
    let title = match name.trim() {
        "" => "Cover Letter".to_string(),
        name => format!("Cover Letter - {name}"),
    };
    let mut html = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{title}</title>\n\
         <style>\n{LETTER_BASE_CSS}{css}</style>\n</head>\n<body>\n\
         <div class=\"letter {class}\">\n",
        css = style_css(style),
        class = style.as_str(),
    );
    for paragraph in paragraphs(content) {
        let _ = writeln!(html, "<p>{}</p>", markdown_to_html(&paragraph));
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Blank-line separated blocks, each with its lines trimmed.
fn paragraphs(content: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines().map(str::trim) {
        if line.is_empty() {
            if !current.is_empty() {
                out.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        out.push(current.join("\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const LETTER: &str = "[Date]\n\nHiring Manager\nAcme\n\n\n  Dear Hiring Manager,  \n\n\
                          Reach me at jane@example.com.\n\nSincerely,\nJane Doe\n";

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let blocks = paragraphs(LETTER);
        assert_eq!(blocks.len(), 5);
        assert_eq!(blocks[1], "Hiring Manager\nAcme");
        assert_eq!(blocks[2], "Dear Hiring Manager,");
    }

    #[test]
    fn test_letter_document() {
        let html = render_cover_letter_html(LETTER, LetterStyle::Professional, "Jane Doe");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Cover Letter - Jane Doe</title>"));
        assert!(html.contains("<p>Hiring Manager<br>Acme</p>"));
        assert!(html.contains("mailto:jane@example.com"));
        assert_eq!(html.matches("<p>").count(), 5);
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn test_style_selects_stylesheet() {
        let technical = render_cover_letter_html(LETTER, LetterStyle::Technical, "");
        assert!(technical.contains("Consolas"));
        assert!(technical.contains("class=\"letter technical\""));
        assert!(technical.contains("<title>Cover Letter</title>"));

        let creative = render_cover_letter_html(LETTER, LetterStyle::Creative, "Jane Doe");
        assert!(creative.contains("#764ba2"));
        assert!(!creative.contains("Consolas"));
    }
}
