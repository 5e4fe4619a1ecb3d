use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::inline::{SpanFlags, read_line_spans};

/// The fallback block: every line up to the next blank line.
pub struct Paragraph;

impl Paragraph {
    /// Fails only on an empty range, so block parsing always advances.
    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let first = cur.position();
        cur.get_line()?;
        let mut last = first;

        loop {
            let line = cur.get_line();
            match line {
                Some(l) if !l.is_blank(text) => last = cur.position() - 1,
                _ => {
                    cur.unget_line(line);
                    break;
                }
            }
        }

        let lines = cur.snip(first, last);
        let children = read_line_spans(ctx, lines, SpanFlags::DEFAULT);
        Some(Element::with_children(ElementKind::Paragraph, children))
    }
}
