//! # Parsing
//!
//! Turns a file's text into a document tree while registering the scraps it
//! defines and references.
//!
//! ## Modules
//!
//! - **`lines`**: physical line segmentation and narrowed line views
//! - **`reader`**: byte reader with one-step pushback and lookbehind
//! - **`blocks`**: block recognizers over line ranges
//! - **`inline`**: span recognizers over one line's text
//! - **`metadata`**: the `key: value` metadata file format
//!
//! ## Data Flow
//!
//! ```text
//! text -> split_lines -> parse_blocks -> Vec<Element>
//!                          |-> read_spans (per line)
//!                          |-> ScrapRegistry, ReferenceLinks
//! ```

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod metadata;
pub mod reader;

use crate::diagnostics::Diagnostic;
use crate::document::{Document, FileId, ReferenceLinks, SourceFile, Span};
use crate::scraps::ScrapRegistry;

/// Everything a recognizer may read or update while parsing one file.
pub struct ParseContext<'a> {
    pub file: FileId,
    pub source: &'a SourceFile,
    pub registry: &'a mut ScrapRegistry,
    pub links: &'a mut ReferenceLinks,
    pub diagnostics: &'a mut Vec<Diagnostic>,
}

impl<'a> ParseContext<'a> {
    pub fn text(&self) -> &'a str {
        self.source.text.as_str()
    }

    pub fn slice(&self, span: Span) -> &'a str {
        span.slice(self.text())
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}: {}", self.source.path.display(), diagnostic.message);
        self.diagnostics.push(diagnostic);
    }
}

/// Parses a whole document, registering its scraps in `registry`.
pub fn parse_document(
    file: FileId,
    source: &SourceFile,
    registry: &mut ScrapRegistry,
    diagnostics: &mut Vec<Diagnostic>,
) -> Document {
    let mut links = ReferenceLinks::new();
    let views = lines::views(&source.lines);
    let elements = {
        let mut ctx = ParseContext {
            file,
            source,
            registry,
            links: &mut links,
            diagnostics,
        };
        blocks::parse_blocks(&mut ctx, &views)
    };
    log::debug!(
        "parsed {}: {} lines, {} top-level elements, {} reference links",
        source.path.display(),
        source.lines.len(),
        elements.len(),
        links.len()
    );
    Document {
        file,
        elements,
        links,
    }
}
