use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::blocks::{LineCursor, parse_blocks};
use crate::parsing::lines::LineView;

use super::code::IndentedCode;

type MarkerCheck = fn(&str, LineView) -> Option<LineView>;

/// Ordered (`1.`) and unordered (`*`, `+`, `-`) lists.
pub struct List;

impl List {
    pub const BULLETS: &'static [u8; 3] = b"*+-";
    pub const ORDINAL_END: u8 = b'.';
    pub const MAX_MARKER_INDENT: usize = 3;
    pub const CONTINUATION_INDENT: usize = 4;

    pub fn ordered(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, ElementKind::OrderedList, Self::ordered_marker)
    }

    pub fn unordered(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, ElementKind::UnorderedList, Self::bullet_marker)
    }

    /// The item text after up to three spaces, a bullet and whitespace.
    pub fn bullet_marker(text: &str, line: LineView) -> Option<LineView> {
        let bytes = line.bytes(text);
        let indent = Self::marker_indent(bytes);
        if !bytes.get(indent).is_some_and(|b| Self::BULLETS.contains(b)) {
            return None;
        }
        Self::after_marker(text, line.skip(indent + 1))
    }

    /// The item text after up to three spaces, digits, `.` and whitespace.
    pub fn ordered_marker(text: &str, line: LineView) -> Option<LineView> {
        let bytes = line.bytes(text);
        let indent = Self::marker_indent(bytes);
        let digits = bytes[indent..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits == 0 || bytes.get(indent + digits) != Some(&Self::ORDINAL_END) {
            return None;
        }
        Self::after_marker(text, line.skip(indent + digits + 1))
    }

    /// Strips four spaces, or fewer spaces followed by a tab.
    pub fn continuation(text: &str, line: LineView) -> Option<LineView> {
        let bytes = line.bytes(text);
        for i in 0..Self::CONTINUATION_INDENT {
            match bytes.get(i) {
                Some(b'\t') => return Some(line.skip(i + 1)),
                Some(b' ') => {}
                _ => return None,
            }
        }
        Some(line.skip(Self::CONTINUATION_INDENT))
    }

    fn marker_indent(bytes: &[u8]) -> usize {
        bytes
            .iter()
            .take(Self::MAX_MARKER_INDENT)
            .take_while(|&&b| b == b' ')
            .count()
    }

    /// A marker must be followed by whitespace or the end of the line, so
    /// `*emphasis*` and `1.5` at the start of a line stay paragraphs.
    fn after_marker(text: &str, rest: LineView) -> Option<LineView> {
        let bytes = rest.bytes(text);
        let n = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
        (n > 0 || bytes.is_empty()).then(|| rest.skip(n))
    }

    fn parse(
        ctx: &mut ParseContext<'_>,
        cur: &mut LineCursor<'_>,
        kind: ElementKind,
        marker: MarkerCheck,
    ) -> Option<Element> {
        let mut items = vec![Self::parse_item(ctx, cur, marker)?];
        loop {
            let mut attempt = cur.clone();
            match Self::parse_item(ctx, &mut attempt, marker) {
                Some(item) => {
                    items.push(item);
                    *cur = attempt;
                }
                None => break,
            }
        }
        Some(Element::with_children(kind, items))
    }

    /// One item: the marker line, its continuation lines, and any further
    /// paragraphs indented like code after blank lines.
    fn parse_item(
        ctx: &mut ParseContext<'_>,
        cur: &mut LineCursor<'_>,
        marker: MarkerCheck,
    ) -> Option<Element> {
        let text = ctx.text();
        let start = cur.position();
        let first = cur.get_line()?;
        let mut collected = vec![marker(text, first)?];
        let mut keep = 1;

        loop {
            let mut line = cur.get_line();
            while let Some(l) = line
                && !l.is_blank(text)
                && marker(text, l).is_none()
            {
                collected.push(Self::continuation(text, l).unwrap_or(l));
                keep = collected.len();
                line = cur.get_line();
            }

            while let Some(l) = line
                && l.is_blank(text)
            {
                collected.push(l);
                line = cur.get_line();
            }

            match line.and_then(|l| IndentedCode::strip(text, l)) {
                Some(stripped) => {
                    collected.push(stripped);
                    keep = collected.len();
                }
                None => break,
            }
        }

        collected.truncate(keep);
        cur.seek(start + keep);
        let children = parse_blocks(ctx, &collected);
        Some(Element::with_children(ElementKind::ListItem, children))
    }
}
