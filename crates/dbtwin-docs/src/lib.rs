//! Markdown structure documentation for a schema snapshot.

mod render;

pub use render::{render_markdown, DocsOptions, SampleRows, SampleSet};
