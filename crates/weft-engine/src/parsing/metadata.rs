//! The shared metadata file: `key: value` lines, with indented lines
//! continuing the previous key.
//!
//! ```text
//! title: Literate Widgets
//! css: base.css
//!      print.css
//! ```

use crate::diagnostics::Diagnostic;
use crate::document::{FileId, SourceFile, Span};
use crate::parsing::blocks::LineCursor;
use crate::parsing::lines::{self, LineView};
use crate::parsing::reader::Reader;

pub const KEY_END: u8 = b':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaEntry {
    pub key: Span,
    /// One trimmed value per line; empty ones are dropped.
    pub values: Vec<Span>,
}

#[derive(Debug, Clone, Default)]
pub struct MetaData {
    pub entries: Vec<MetaEntry>,
}

impl MetaData {
    /// Every value of every entry whose key matches, ignoring ASCII case.
    pub fn values<'s>(&'s self, source: &'s SourceFile, key: &'s str) -> impl Iterator<Item = &'s str> + 's {
        self.entries
            .iter()
            .filter(move |e| source.slice(e.key).eq_ignore_ascii_case(key))
            .flat_map(|e| e.values.iter())
            .map(move |&v| source.slice(v))
    }

    pub fn first<'s>(&'s self, source: &'s SourceFile, key: &'s str) -> Option<&'s str> {
        self.values(source, key).next()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads every entry. A line that neither starts an entry nor continues one
/// is reported and skipped.
pub fn parse_metadata(file: FileId, source: &SourceFile, diagnostics: &mut Vec<Diagnostic>) -> MetaData {
    let text = source.text.as_str();
    let views = lines::views(&source.lines);
    let mut cur = LineCursor::new(&views);
    let mut entries = Vec::new();

    loop {
        cur.skip_blank(text);
        let Some(line) = cur.get_line() else {
            break;
        };
        match parse_key_line(text, line) {
            Some((key, value)) => {
                let mut values: Vec<Span> = Some(value).into_iter().collect();
                while let Some(next) = cur.peek_line()
                    && next.bytes(text).first().is_some_and(u8::is_ascii_whitespace)
                {
                    values.push(next.span.trimmed(text));
                    cur.get_line();
                }
                values.retain(|v| !v.is_empty());
                entries.push(MetaEntry { key, values });
            }
            None => {
                let diagnostic = Diagnostic::warning("bad metadata line").at(file, line.span);
                log::warn!("{}:{}: bad metadata line", source.path.display(), line.index + 1);
                diagnostics.push(diagnostic);
            }
        }
    }

    log::debug!("read {} metadata entries from {}", entries.len(), source.path.display());
    MetaData { entries }
}

fn parse_key_line(text: &str, line: LineView) -> Option<(Span, Span)> {
    let mut r = Reader::new(text, line.span);
    if r.peek().is_none_or(|b| b.is_ascii_whitespace()) {
        return None;
    }
    let start = r.pos();
    let colon = r.find_matching(KEY_END, 1)?;
    let key = Span::new(start, colon).trimmed(text);
    if key.is_empty() {
        return None;
    }
    let value = Span::new(r.pos(), line.span.end).trimmed(text);
    Some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn read(text: &str) -> (SourceFile, MetaData, Vec<Diagnostic>) {
        let source = SourceFile::new("meta.txt", text);
        let mut diagnostics = Vec::new();
        let meta = parse_metadata(FileId(0), &source, &mut diagnostics);
        (source, meta, diagnostics)
    }

    #[test]
    fn keys_values_and_continuations() {
        let (source, meta, diagnostics) = read("Title: Literate Widgets\n\ncss: base.css\n     print.css\n");
        assert!(diagnostics.is_empty());
        assert_eq!(meta.len(), 2);
        assert_eq!(meta.first(&source, "title"), Some("Literate Widgets"));
        assert_eq!(meta.values(&source, "CSS").collect::<Vec<_>>(), vec!["base.css", "print.css"]);
    }

    #[test]
    fn bad_line_is_reported_and_skipped() {
        let (source, meta, diagnostics) = read("no colon here\ntitle: Kept\n");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "bad metadata line");
        assert_eq!(diagnostics[0].span, Some(Span::new(0, 13)));
        assert_eq!(meta.first(&source, "title"), Some("Kept"));
    }

    #[test]
    fn leading_whitespace_without_an_entry_is_bad() {
        let (_, meta, diagnostics) = read("  orphan: value\n");
        assert!(meta.is_empty());
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn empty_value_keeps_the_key() {
        let (source, meta, _) = read("css:\n  a.css\n");
        assert_eq!(meta.values(&source, "css").collect::<Vec<_>>(), vec!["a.css"]);
    }
}
