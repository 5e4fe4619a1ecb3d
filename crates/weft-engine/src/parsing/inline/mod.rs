//! # Inline Parsing
//!
//! Span-level markup within one line: emphasis, links, inline code, entity
//! escapes and scrap references. Block recognizers call in once per line.
//!
//! ## Modules
//!
//! - **`flags`**: `SpanFlags` gating entity escaping and Markdown
//! - **`writer`**: pending-text watermark that emits `Text` runs
//! - **`parser`**: ordered recognizer dispatch, `read_spans`, `read_line_spans`
//! - **`kinds`**: one recognizer per construct

pub mod flags;
pub mod kinds;
pub mod parser;
mod writer;


pub use flags::SpanFlags;
pub use parser::{SpanRecognizer, read_line_spans, read_spans};
