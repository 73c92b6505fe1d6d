//! Resume Section Segmenter: turns free CV text into a name, a contact line and
//! an ordered list of typed sections.
//!
//! Pipeline: normalize lines → scan for name/contact → classify each line as
//! header or content → fold into sections. Every step is pure and total: the
//! worst input produces no sections and no name/contact, never an error.

pub mod accumulate;
pub mod config;
pub mod headers;
pub mod identity;
pub mod normalize;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use accumulate::Accumulator;
pub use config::{ListOverride, NoisePattern, SegmenterConfig};
pub use headers::{classify, is_header, SectionType};
pub use identity::ContactInfo;
pub use normalize::normalize_lines;

/// A titled, typed block of CV content. `content` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: Vec<String>,
    #[serde(rename = "type")]
    pub section_type: SectionType,
}

/// Full segmenter output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentedResume {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub sections: Vec<Section>,
}

impl SegmentedResume {
    /// Sections of the given type, in document order.
    pub fn sections_of(&self, section_type: SectionType) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(move |s| s.section_type == section_type)
    }

    /// All content lines of the given type, flattened in document order.
    pub fn content_of(&self, section_type: SectionType) -> impl Iterator<Item = &str> {
        self.sections_of(section_type)
            .flat_map(|s| s.content.iter().map(String::as_str))
    }
}

/// Segments `raw_text` with the built-in noise table and header vocabulary.
pub fn segment(raw_text: &str) -> SegmentedResume {
    segment_with_config(raw_text, &SegmenterConfig::default())
}

pub fn segment_with_config(raw_text: &str, config: &SegmenterConfig) -> SegmentedResume {
    let lines = normalize_lines(raw_text, config.noise_patterns());
    let identity = ContactInfo::from_lines(&lines);

    // Lines equal to the detected name or contact are skipped wherever they occur.
    let sections = lines
        .iter()
        .fold(Accumulator::default(), |acc, line| {
            if identity.is_identity_line(line) {
                acc
            } else if is_header(line, config) {
                acc.open(line)
            } else {
                acc.push(line)
            }
        })
        .finish();

    debug!(
        sections = ?sections.iter().map(|s| s.title.as_str()).collect::<Vec<_>>(),
        contact = ?identity.contact,
        "Segmented CV"
    );

    SegmentedResume {
        name: identity.name,
        contact: identity.contact,
        sections,
    }
}
