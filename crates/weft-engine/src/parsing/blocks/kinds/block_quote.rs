use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::blocks::{LineCursor, parse_blocks};
use crate::parsing::lines::LineView;

/// Lines prefixed with `>`, parsed again as blocks once the marker is gone.
pub struct BlockQuote;

impl BlockQuote {
    pub const MARKER: u8 = b'>';

    /// Strips `>` and one following space.
    pub fn strip(text: &str, line: LineView) -> Option<LineView> {
        let bytes = line.bytes(text);
        if bytes.first() != Some(&Self::MARKER) {
            return None;
        }
        let n = if bytes.get(1) == Some(&b' ') { 2 } else { 1 };
        Some(line.skip(n))
    }

    /// A paragraph inside the quote may continue on lines without a marker.
    /// After blank lines the quote goes on only if the next line has one.
    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let start = cur.position();
        let mut collected: Vec<LineView> = Vec::new();
        let mut keep = 0;

        let mut line = cur.get_line();
        while let Some(l) = line {
            if Self::strip(text, l).is_none() {
                break;
            }

            while let Some(l) = line
                && !l.is_blank(text)
            {
                collected.push(Self::strip(text, l).unwrap_or(l));
                keep = collected.len();
                line = cur.get_line();
            }

            while let Some(l) = line
                && l.is_blank(text)
            {
                collected.push(l);
                line = cur.get_line();
            }
        }

        if keep == 0 {
            return None;
        }
        collected.truncate(keep);
        cur.seek(start + keep);

        let children = parse_blocks(ctx, &collected);
        Some(Element::with_children(ElementKind::BlockQuote, children))
    }
}
