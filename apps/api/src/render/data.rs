use serde::Serialize;

use crate::segmenter::{SectionType, SegmentedResume};

const DEFAULT_NAME: &str = "Your Name";
const SUMMARY_JOINER: &str = " \n ";

/// Segmented CV regrouped into the fixed slots every template lays out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TemplateData {
    pub name: String,
    pub contact: String,
    pub summary: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub certifications: Vec<String>,
    /// Highlights, declarations and unclassified sections (each of the latter
    /// preceded by a `"{title}:"` line).
    pub highlights: Vec<String>,
}

impl TemplateData {
    pub fn from_segmented(resume: &SegmentedResume) -> Self {
        let mut data = TemplateData {
            name: resume
                .name
                .clone()
                .unwrap_or_else(|| DEFAULT_NAME.to_string()),
            contact: resume.contact.clone().unwrap_or_default(),
            summary: resume
                .content_of(SectionType::Summary)
                .collect::<Vec<_>>()
                .join(SUMMARY_JOINER),
            ..TemplateData::default()
        };

        for section in &resume.sections {
            let content = section.content.iter().cloned();
            match section.section_type {
                SectionType::Summary | SectionType::Contact => {}
                SectionType::Skills => data.skills.extend(content),
                SectionType::Experience => data.experience.extend(content),
                SectionType::Education => data.education.extend(content),
                SectionType::Projects => data.projects.extend(content),
                SectionType::Certifications => data.certifications.extend(content),
                SectionType::Highlights | SectionType::Declaration => {
                    data.highlights.extend(content)
                }
                SectionType::Other => {
                    data.highlights.push(format!("{}:", section.title));
                    data.highlights.extend(content);
                }
            }
        }

        data
    }
}
