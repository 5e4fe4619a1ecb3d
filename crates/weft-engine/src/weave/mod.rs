//! # Weave
//!
//! Renders a parsed document as a standalone HTML page: title and
//! stylesheets from the metadata file, then the element tree with scrap
//! definitions and references drawn as `⟨name⟩≡` and `⟨name⟩`.

pub mod html;

use std::fmt::{self, Write};
use std::path::{Path, PathBuf};

use html_escape::{encode_single_quoted_attribute, encode_text};

pub use html::HtmlWriter;

use crate::document::{Document, Element, ElementKind, SourceFile};
use crate::parsing::metadata::MetaData;
use crate::scraps::ScrapRegistry;

pub const TITLE_KEY: &str = "title";
pub const CSS_KEY: &str = "css";
pub const EXTENSION: &str = "html";

/// The loaded metadata file and the source its spans point into.
#[derive(Clone, Copy)]
pub struct MetaSource<'p> {
    pub source: &'p SourceFile,
    pub data: &'p MetaData,
}

/// Writes the HTML page for `doc`.
pub fn weave<W: Write>(
    out: &mut W,
    sources: &[SourceFile],
    registry: &ScrapRegistry,
    doc: &Document,
    meta: Option<MetaSource<'_>>,
) -> fmt::Result {
    let source = &sources[doc.file.index()];
    out.write_str(
        "<!DOCTYPE html>\n<html>\n<head>\n    <meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\" />\n",
    )?;
    writeln!(out, "<title>{}</title>", encode_text(&title(source, &doc.elements, meta)))?;
    if let Some(meta) = meta {
        for href in meta.data.values(meta.source, CSS_KEY) {
            writeln!(
                out,
                "<link rel='stylesheet' type='text/css' href='{}'>",
                encode_single_quoted_attribute(href)
            )?;
        }
    }
    out.write_str("</head>\n<body>\n")?;

    let writer = HtmlWriter {
        sources,
        registry,
        links: &doc.links,
    };
    writer.elements(out, doc.file, &doc.elements)?;
    out.write_str("</body>\n</html>\n")
}

/// The metadata title, else the text of the first highest-ranked
/// top-level heading, else nothing.
pub fn title(source: &SourceFile, elements: &[Element], meta: Option<MetaSource<'_>>) -> String {
    if let Some(title) = meta.and_then(|m| m.data.first(m.source, TITLE_KEY)) {
        return title.to_string();
    }
    let best = elements
        .iter()
        .filter_map(|e| match e.kind {
            ElementKind::Heading { level } => Some((level, e)),
            _ => None,
        })
        .fold(None, |best: Option<(u8, &Element)>, (level, e)| match best {
            Some((best_level, _)) if best_level <= level => best,
            _ => Some((level, e)),
        });

    let mut text = String::new();
    if let Some((_, heading)) = best {
        html::plain_text(source, &heading.children, &mut text);
    }
    text
}

/// `doc_dir/<name>.html`, or beside the input when no directory is given.
pub fn html_path(input: &Path, doc_dir: Option<&Path>) -> PathBuf {
    let html = input.with_extension(EXTENSION);
    match (doc_dir, html.file_name()) {
        (Some(dir), Some(name)) => dir.join(name),
        _ => html,
    }
}
