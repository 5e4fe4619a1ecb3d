use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::inline::{SpanFlags, read_spans};
use crate::parsing::reader::Reader;

/// Inline code delimited by one or two backticks.
///
/// Content is read with [`SpanFlags::CODE`], so Markdown is off inside but
/// scrap references still register.
pub struct CodeSpan;

impl CodeSpan {
    pub const TICK: u8 = b'`';
    pub const MAX_RUN: usize = 2;

    pub fn try_parse(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        if !flags.markdown() {
            return None;
        }
        let count = r.eat_run(Self::TICK, Self::MAX_RUN);
        if count == 0 {
            return None;
        }
        r.eat(b" ");

        let start = r.pos();
        let mut end = r.find_matching(Self::TICK, count)?;
        if end > start && r.text().as_bytes()[end - 1] == b' ' {
            end -= 1;
        }

        let inner = read_spans(ctx, line, Span::new(start, end), SpanFlags::CODE);
        Some(Element::with_children(ElementKind::InlineCode, inner))
    }
}
