//! # Document Model
//!
//! The output of parsing one input: source text, its lines, the element
//! forest and the file's reference link table.
//!
//! ## Modules
//!
//! - **`span`**: `Span` byte ranges and `SourceLoc` line/column pairs
//! - **`element`**: `Element` tree nodes and the closed `ElementKind` set
//! - **`links`**: per-file `ReferenceLinks`

pub mod element;
pub mod links;
pub mod span;

use std::path::{Path, PathBuf};

pub use element::{Attribute, Element, ElementKind};
pub use links::{ReferenceLink, ReferenceLinkId, ReferenceLinks};
pub use span::{SourceLoc, Span};

use crate::parsing::lines::{Line, split_lines};

/// Handle to a loaded source file; indexes the project's source list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub(crate) usize);

impl FileId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// One loaded file: its path, owned text and physical lines.
///
/// Every span in the elements, registry and reference links derived from
/// this file points into `text`.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
    pub lines: Vec<Line>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let text = text.into();
        let lines = split_lines(&text);
        Self {
            path: path.into(),
            text,
            lines,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The path as written into `#line` directives, with `/` separators.
    pub fn directive_path(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    pub fn slice(&self, span: Span) -> &str {
        span.slice(&self.text)
    }

    /// Location of a byte offset on a known line, 1-based. The column
    /// counts characters, so indentation after non-ASCII text lines up.
    pub fn loc(&self, line_index: usize, pos: usize) -> SourceLoc {
        let line_start = self.lines[line_index].start;
        let col = match self.text.get(line_start..pos) {
            Some(prefix) => prefix.chars().count(),
            None => pos.saturating_sub(line_start),
        };
        SourceLoc::new(line_index + 1, col + 1)
    }
}

/// The parsed form of one input document.
#[derive(Debug)]
pub struct Document {
    pub file: FileId,
    pub elements: Vec<Element>,
    pub links: ReferenceLinks,
}
