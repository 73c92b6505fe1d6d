use crate::segmenter::headers::classify;
use crate::segmenter::normalize::strip_bold;
use crate::segmenter::Section;

/// Fold state for grouping lines under headers.
///
/// Every transition consumes and returns the state, so a whole document is
/// `lines.fold(Accumulator::default(), ...)` followed by [`Accumulator::finish`].
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Accumulator {
    header: Option<String>,
    buffer: Vec<String>,
    emitted: Vec<Section>,
}

impl Accumulator {
    /// True once a header has been seen.
    pub fn in_section(&self) -> bool {
        self.header.is_some()
    }

    /// Closes the open section (if it has content) and starts a new one titled `header`.
    pub fn open(mut self, header: &str) -> Self {
        self.flush();
        self.header = Some(header.to_string());
        self
    }

    /// Adds a content line to the open section. Without an open section the line is dropped.
    pub fn push(mut self, line: &str) -> Self {
        if self.header.is_some() && !line.trim().is_empty() {
            self.buffer.push(line.to_string());
        }
        self
    }

    /// Closes the last section and returns everything emitted, in document order.
    pub fn finish(mut self) -> Vec<Section> {
        self.flush();
        self.emitted
    }

    fn flush(&mut self) {
        let content: Vec<String> = std::mem::take(&mut self.buffer)
            .into_iter()
            .filter(|c| !c.trim().is_empty())
            .collect();
        let Some(header) = self.header.take() else {
            return;
        };
        if content.is_empty() {
            return;
        }
        let title = strip_bold(&header);
        self.emitted.push(Section {
            section_type: classify(&title),
            title,
            content,
        });
    }
}
