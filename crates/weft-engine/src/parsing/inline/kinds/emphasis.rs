use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::inline::{SpanFlags, read_spans};
use crate::parsing::reader::Reader;

/// `*em*`, `**strong**`, `_em_` and `__strong__`.
pub struct Emphasis;

impl Emphasis {
    pub const ASTERISK: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const MAX_RUN: usize = 2;

    pub fn asterisk(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        Self::parse(ctx, r, line, flags, Self::ASTERISK)
    }

    /// Underscores only mark whole words: the opening run must follow
    /// whitespace or the start of the file, and the closing run must not be
    /// followed by a letter.
    pub fn underscore(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        Self::parse(ctx, r, line, flags, Self::UNDERSCORE)
    }

    fn parse(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        flags: SpanFlags,
        c: u8,
    ) -> Option<Element> {
        if !flags.markdown() {
            return None;
        }
        let word_bound = c == Self::UNDERSCORE;
        if word_bound && r.preceding().is_some_and(|p| !p.is_ascii_whitespace()) {
            return None;
        }

        let count = r.eat_run(c, Self::MAX_RUN);
        if count == 0 || r.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            return None;
        }

        let start = r.pos();
        let end = r.find_matching(c, count)?;
        if word_bound && r.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
            return None;
        }

        let inner = read_spans(ctx, line, Span::new(start, end), flags);
        let kind = if count == 2 {
            ElementKind::Strong
        } else {
            ElementKind::Emphasis
        };
        Some(Element::with_children(kind, inner))
    }
}
