//! # weft
//!
//! Literate programming over Markdown. Documents are parsed into element
//! trees while the code blocks that open with a `<<name>>=` header are
//! collected as named scraps. Tangling stitches scraps back into source
//! files with `#line` provenance; weaving renders the documents as HTML.
//!
//! ```text
//! text -> parsing -> Document + ScrapRegistry -> tangle -> io::write_if_changed
//!                                              \-> weave  -> io::write_if_changed
//! ```

pub mod diagnostics;
pub mod document;
pub mod error;
pub mod io;
pub mod parsing;
pub mod project;
pub mod scraps;
pub mod snapshot;
pub mod tangle;
pub mod weave;

pub use diagnostics::{Diagnostic, Severity};
pub use document::{Document, Element, ElementKind, FileId, SourceFile, SourceLoc, Span};
pub use error::{TangleError, WeftError};
pub use io::{WriteOutcome, write_if_changed};
pub use parsing::parse_document;
pub use project::{OutputSummary, Project};
pub use scraps::{ScrapKind, ScrapRegistry};
pub use tangle::{Tangled, tangle};
