use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::inline::{SpanFlags, read_spans};

/// `# Heading` through `###### Heading`.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Levels past six clamp to six. Surrounding spaces and a closing run of
    /// `#` are trimmed from the content.
    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let line = cur.get_line()?;
        let level = line.bytes(text).iter().take_while(|&&b| b == Self::MARKER).count();
        if level == 0 {
            return None;
        }

        let content = line.skip(level).span.trimmed(text);
        let bytes = text.as_bytes();
        let mut end = content.end;
        while end > content.start && bytes[end - 1] == Self::MARKER {
            end -= 1;
        }
        let content = Span::new(content.start, end).trimmed(text);

        let level = level.min(Self::MAX_LEVEL) as u8;
        let children = read_spans(ctx, line.index, content, SpanFlags::DEFAULT);
        Some(Element::with_children(ElementKind::Heading { level }, children))
    }
}

/// A text line underlined by a line of only `=` or only `-`.
pub struct SetextHeading;

impl SetextHeading {
    pub const LEVEL_ONE: u8 = b'=';
    pub const LEVEL_TWO: u8 = b'-';

    pub fn level_one(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, Self::LEVEL_ONE, 1)
    }

    pub fn level_two(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, Self::LEVEL_TWO, 2)
    }

    fn parse(
        ctx: &mut ParseContext<'_>,
        cur: &mut LineCursor<'_>,
        c: u8,
        level: u8,
    ) -> Option<Element> {
        let text = ctx.text();
        let first = cur.get_line()?;
        let underline = cur.get_line()?;
        let bytes = underline.bytes(text);
        if bytes.is_empty() || bytes.iter().any(|&b| b != c) {
            return None;
        }

        let children = read_spans(ctx, first.index, first.span, SpanFlags::DEFAULT);
        Some(Element::with_children(ElementKind::Heading { level }, children))
    }
}
