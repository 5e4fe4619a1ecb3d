use std::sync::OnceLock;

use regex::Regex;

use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::inline::{SpanFlags, read_spans};
use crate::parsing::lines::LineView;

static ALIGNMENT: OnceLock<Regex> = OnceLock::new();

/// Matches `| :--- | ---: |` style alignment rows.
fn alignment_regex() -> &'static Regex {
    ALIGNMENT.get_or_init(|| {
        Regex::new(r"^\s*\|?\s*:?-+:?\s*(?:\|\s*:?-+:?\s*)*\|?\s*$")
            .expect("Invalid alignment regex")
    })
}

/// A pipe table: header row, alignment row, then one or more body rows.
pub struct Table;

impl Table {
    pub const PIPE: u8 = b'|';
    pub const ESCAPE: u8 = b'\\';

    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let header = cur.get_line()?;
        if !Self::has_pipe(text, header) {
            return None;
        }

        let alignment = cur.get_line()?;
        let align_text = alignment.text(text);
        if !align_text.contains('|') || !alignment_regex().is_match(align_text) {
            return None;
        }

        let mut body = Vec::new();
        while let Some(line) = cur.peek_line()
            && Self::has_pipe(text, line)
        {
            body.push(line);
            cur.get_line();
        }
        if body.is_empty() {
            return None;
        }

        let mut rows = vec![Self::row(ctx, header, ElementKind::TableHeader)];
        rows.extend(body.into_iter().map(|line| Self::row(ctx, line, ElementKind::TableCell)));
        Some(Element::with_children(ElementKind::Table, rows))
    }

    fn row(ctx: &mut ParseContext<'_>, line: LineView, cell_kind: ElementKind) -> Element {
        let text = ctx.text();
        let cells = Self::cells(text, line)
            .into_iter()
            .map(|span| {
                let children = read_spans(ctx, line.index, span.trimmed(text), SpanFlags::DEFAULT);
                Element::with_children(cell_kind, children)
            })
            .collect();
        Element::with_children(ElementKind::TableRow, cells)
    }

    fn has_pipe(text: &str, line: LineView) -> bool {
        Self::pipes(text, line).next().is_some()
    }

    /// Absolute offsets of unescaped pipes.
    fn pipes<'t>(text: &'t str, line: LineView) -> impl Iterator<Item = usize> + 't {
        let bytes = line.bytes(text);
        let base = line.span.start;
        let mut escaped = false;
        bytes.iter().enumerate().filter_map(move |(i, &b)| {
            let hit = b == Self::PIPE && !escaped;
            escaped = b == Self::ESCAPE && !escaped;
            hit.then_some(base + i)
        })
    }

    /// Cell spans between unescaped pipes. A pipe that opens or closes the
    /// row is decoration and does not produce an empty cell.
    pub fn cells(text: &str, line: LineView) -> Vec<Span> {
        let trimmed = line.span.trimmed(text);
        let pipes: Vec<usize> = Self::pipes(text, line.narrow(trimmed)).collect();

        let mut cells = Vec::with_capacity(pipes.len() + 1);
        let mut from = trimmed.start;
        for &pipe in &pipes {
            cells.push(Span::new(from, pipe));
            from = pipe + 1;
        }
        cells.push(Span::new(from, trimmed.end));

        let leading = pipes.first() == Some(&trimmed.start);
        let trailing = pipes.len() > usize::from(leading) && pipes.last() == Some(&(trimmed.end - 1));
        if trailing {
            cells.pop();
        }
        if leading {
            cells.remove(0);
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lines::{split_lines, views};
    use rstest::rstest;

    fn cell_texts(text: &str) -> Vec<&str> {
        let line = views(&split_lines(text))[0];
        Table::cells(text, line).into_iter().map(|s| s.slice(text)).collect()
    }

    #[rstest]
    #[case("|A|B|", vec!["A", "B"])]
    #[case("A | B", vec!["A ", " B"])]
    #[case("  | one | two |  ", vec![" one ", " two "])]
    #[case(r"a \| b | c", vec![r"a \| b ", " c"])]
    #[case("||", vec![""])]
    fn splits_on_unescaped_pipes(#[case] text: &str, #[case] expected: Vec<&str>) {
        assert_eq!(cell_texts(text), expected);
    }

    #[rstest]
    #[case("|-|-|", true)]
    #[case("| :--- | ---: |", true)]
    #[case(":-:|:-:", true)]
    #[case("---", true)]
    #[case("| x | - |", false)]
    fn alignment_rows(#[case] text: &str, #[case] matches: bool) {
        assert_eq!(alignment_regex().is_match(text), matches);
    }
}
