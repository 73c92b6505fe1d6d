//! Printable HTML rendering of a segmented CV in one of several templates,
//! and of cover letters.

pub mod data;
pub mod handlers;
pub mod letter;
pub mod markdown;
pub mod templates;

pub use data::TemplateData;
pub use letter::render_cover_letter_html;
pub use templates::{render_cv_html, Template};
