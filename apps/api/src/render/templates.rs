//! HTML CV templates. Each template is a stylesheet plus an ordered list of
//! titled slots; empty slots are omitted from the document.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::render::data::TemplateData;
use crate::render::markdown::{format_content_lines, markdown_to_html};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Classic,
    Modern,
    Creative,
    Minimal,
    Technical,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::Classic,
        Template::Modern,
        Template::Creative,
        Template::Minimal,
        Template::Technical,
    ];

    /// Case-insensitive lookup; unknown names fall back to `Classic`.
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(name.trim()))
            .unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Template::Classic => "classic",
            Template::Modern => "modern",
            Template::Creative => "creative",
            Template::Minimal => "minimal",
            Template::Technical => "technical",
        }
    }

    fn theme(&self) -> &'static Theme {
        match self {
            Template::Classic => &CLASSIC,
            Template::Modern => &MODERN,
            Template::Creative => &CREATIVE,
            Template::Minimal => &MINIMAL,
            Template::Technical => &TECHNICAL,
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Slot {
    Summary,
    Skills,
    Experience,
    Education,
    Projects,
    Certifications,
    Highlights,
    CertificationsAndHighlights,
}

struct Theme {
    css: &'static str,
    sections: &'static [(&'static str, Slot)],
}

const BASE_CSS: &str = "\
* { margin: 0; padding: 0; box-sizing: border-box; }
.section { page-break-inside: avoid; }
.content-line { margin-bottom: 4px; padding-left: 15px; text-indent: -15px; }
.subsection-header { font-weight: 600; margin-top: 6px; margin-bottom: 3px; padding-left: 0; text-indent: 0; }
a { color: #0000EE; text-decoration: underline; }
";

static CLASSIC: Theme = Theme {
    css: "\
body { font-family: 'Arial', sans-serif; font-size: 10pt; line-height: 1.4; color: #1a1a1a; background: white; padding: 20px; }
.header { text-align: center; margin-bottom: 15px; border-bottom: 2px solid #2c3e50; padding-bottom: 10px; }
.name { font-size: 20pt; font-weight: bold; color: #2c3e50; text-transform: uppercase; letter-spacing: 1px; margin-bottom: 5px; }
.contact { font-size: 9pt; color: #555; line-height: 1.3; }
.contact a { color: #0000EE; }
.section { margin-bottom: 12px; }
.section-title { font-size: 12pt; font-weight: bold; color: #2c3e50; text-transform: uppercase; letter-spacing: 0.5px; border-bottom: 1.5px solid #34495e; padding-bottom: 3px; margin-bottom: 8px; }
.content { font-size: 10pt; color: #333; line-height: 1.5; text-align: justify; }
.content-item { margin-bottom: 8px; }
.subsection-header { color: #2c3e50; }
",
    sections: &[
        ("Professional Summary", Slot::Summary),
        ("Technical Skills", Slot::Skills),
        ("Professional Experience", Slot::Experience),
        ("Education", Slot::Education),
        ("Projects", Slot::Projects),
        ("Certifications & Achievements", Slot::Certifications),
        ("Additional Information", Slot::Highlights),
    ],
};

static MODERN: Theme = Theme {
    css: "\
body { font-family: 'Segoe UI', 'Calibri', 'Arial', sans-serif; font-size: 10pt; line-height: 1.45; color: #2d3748; background: white; padding: 20px; }
.header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 15px 20px; margin: -20px -20px 15px -20px; }
.name { font-size: 22pt; font-weight: 600; margin-bottom: 5px; }
.contact { font-size: 9pt; opacity: 0.95; }
.contact a { color: #FFFFFF; }
.section { margin-bottom: 14px; }
.section-title { font-size: 13pt; font-weight: 600; color: #667eea; margin-bottom: 8px; padding-bottom: 4px; border-bottom: 2px solid #667eea; }
.content { font-size: 10pt; color: #4a5568; line-height: 1.5; }
.content-item { margin-bottom: 8px; }
.subsection-header { color: #667eea; }
",
    sections: &[
        ("Professional Summary", Slot::Summary),
        ("Core Competencies", Slot::Skills),
        ("Experience", Slot::Experience),
        ("Education", Slot::Education),
        ("Key Projects", Slot::Projects),
        ("Certifications", Slot::Certifications),
        ("Additional", Slot::Highlights),
    ],
};

static CREATIVE: Theme = Theme {
    css: "\
body { font-family: 'Trebuchet MS', 'Segoe UI', sans-serif; font-size: 10pt; line-height: 1.45; color: #2c2c2c; background: white; padding: 20px; }
.header { background: linear-gradient(135deg, #f093fb 0%, #f5576c 100%); color: white; padding: 18px 20px; margin: -20px -20px 18px -20px; border-radius: 0 0 15px 15px; }
.name { font-size: 24pt; font-weight: 700; margin-bottom: 6px; text-shadow: 1px 1px 2px rgba(0,0,0,0.1); }
.contact { font-size: 9.5pt; opacity: 0.95; }
.contact a { color: #FFFFFF; }
.section { margin-bottom: 15px; }
.section-title { font-size: 13pt; font-weight: 700; color: #f5576c; margin-bottom: 8px; padding-bottom: 4px; border-bottom: 2px solid #f093fb; position: relative; }
.section-title::before { content: ''; position: absolute; bottom: -2px; left: 0; width: 40px; height: 2px; background: #f5576c; }
.content { font-size: 10pt; color: #444; line-height: 1.6; }
.content-item { margin-bottom: 10px; padding-left: 5px; }
.subsection-header { color: #f5576c; }
",
    sections: &[
        ("About Me", Slot::Summary),
        ("Skills & Expertise", Slot::Skills),
        ("Experience", Slot::Experience),
        ("Notable Projects", Slot::Projects),
        ("Education", Slot::Education),
        ("Certifications", Slot::Certifications),
        ("More About Me", Slot::Highlights),
    ],
};

static MINIMAL: Theme = Theme {
    css: "\
body { font-family: 'Georgia', 'Times New Roman', serif; font-size: 10pt; line-height: 1.6; color: #2c2c2c; background: white; padding: 25px 30px; }
.header { text-align: center; margin-bottom: 20px; padding-bottom: 15px; border-bottom: 1px solid #ccc; }
.name { font-size: 24pt; font-weight: normal; color: #1a1a1a; margin-bottom: 8px; }
.contact { font-size: 9pt; color: #666; font-family: 'Arial', sans-serif; }
.contact a { color: #0000EE; }
.section { margin-bottom: 15px; }
.section-title { font-size: 11pt; font-weight: bold; color: #1a1a1a; text-transform: uppercase; letter-spacing: 2px; margin-bottom: 10px; }
.content { font-size: 10pt; color: #444; line-height: 1.6; text-align: justify; }
.content-item { margin-bottom: 10px; }
.subsection-header { color: #1a1a1a; }
",
    sections: &[
        ("Profile", Slot::Summary),
        ("Experience", Slot::Experience),
        ("Education", Slot::Education),
        ("Skills", Slot::Skills),
        ("Projects", Slot::Projects),
        ("Additional", Slot::CertificationsAndHighlights),
    ],
};

static TECHNICAL: Theme = Theme {
    css: "\
body { font-family: 'Consolas', 'Courier New', monospace; font-size: 9.5pt; line-height: 1.5; color: #1a1a1a; background: white; padding: 18px; }
.header { background: #2d2d2d; color: #00ff00; padding: 12px 15px; margin: -18px -18px 15px -18px; font-family: 'Courier New', monospace; }
.name { font-size: 18pt; font-weight: bold; margin-bottom: 4px; letter-spacing: 1px; }
.contact { font-size: 8.5pt; color: #00cc00; }
.contact a { color: #33ccff; }
.section { margin-bottom: 12px; }
.section-title { font-size: 11pt; font-weight: bold; color: #0066cc; margin-bottom: 6px; padding: 4px 8px; background: #f0f0f0; border-left: 4px solid #0066cc; font-family: 'Arial', sans-serif; }
.content { font-size: 9.5pt; color: #333; line-height: 1.5; font-family: 'Arial', sans-serif; }
.content-item { margin-bottom: 8px; padding-left: 5px; }
.subsection-header { color: #0066cc; }
",
    sections: &[
        ("// PROFILE", Slot::Summary),
        ("// TECHNICAL STACK", Slot::Skills),
        ("// WORK EXPERIENCE", Slot::Experience),
        ("// PROJECTS", Slot::Projects),
        ("// EDUCATION", Slot::Education),
        ("// CERTIFICATIONS", Slot::Certifications),
        ("// ADDITIONAL INFO", Slot::Highlights),
    ],
};

/// Renders a complete HTML document for `data` in the given template.
pub fn render_cv_html(data: &TemplateData, template: Template) -> String {
    let theme = template.theme();
    let mut html = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n<title>{name}</title>\n\
         <style>\n{BASE_CSS}{css}</style>\n</head>\n<body>\n\
         <div class=\"header\">\n<div class=\"name\">{name}</div>\n\
         <div class=\"contact\">{contact}</div>\n</div>\n",
        name = data.name,
        css = theme.css,
        contact = markdown_to_html(&data.contact),
    );

    for (title, slot) in theme.sections {
        if let Some(body) = render_slot(data, *slot) {
            let _ = write!(
                html,
                "<div class=\"section\">\n<div class=\"section-title\">{title}</div>\n{body}\n</div>\n"
            );
        }
    }

    html.push_str("</body>\n</html>\n");
    html
}

fn render_slot(data: &TemplateData, slot: Slot) -> Option<String> {
    match slot {
        Slot::Summary => (!data.summary.is_empty()).then(|| {
            format!(
                "<div class=\"content\">{}</div>",
                markdown_to_html(&data.summary)
            )
        }),
        Slot::Skills => (!data.skills.is_empty()).then(|| {
            format!(
                "<div class=\"content\">{}</div>",
                format_content_lines(&data.skills)
            )
        }),
        Slot::Experience => items(&data.experience),
        Slot::Education => items(&data.education),
        Slot::Projects => items(&data.projects),
        Slot::Certifications => items(&data.certifications),
        Slot::Highlights => items(&data.highlights),
        Slot::CertificationsAndHighlights => {
            let combined: Vec<String> = data
                .certifications
                .iter()
                .chain(&data.highlights)
                .cloned()
                .collect();
            items(&combined)
        }
    }
}

/// One `content-item` block per entry.
fn items(entries: &[String]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }
    Some(
        entries
            .iter()
            .map(|entry| {
                format!(
                    "<div class=\"content-item\">{}</div>",
                    format_content_lines(std::slice::from_ref(entry))
                )
            })
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
