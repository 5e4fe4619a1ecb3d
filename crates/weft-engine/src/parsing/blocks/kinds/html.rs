use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::inline::{SpanFlags, read_line_spans};
use crate::parsing::lines::LineView;

/// Raw HTML starting with a tag at the beginning of a line.
pub struct HtmlBlock;

impl HtmlBlock {
    pub const OPEN: u8 = b'<';
    pub const CLOSE: &'static [u8; 2] = b"</";
    pub const SELF_CLOSE: &'static str = "/>";

    fn opens(text: &str, line: LineView) -> bool {
        let bytes = line.bytes(text);
        bytes.first() == Some(&Self::OPEN) && bytes.get(1).is_some_and(u8::is_ascii_alphabetic)
    }

    fn closes(text: &str, line: LineView) -> bool {
        let bytes = line.bytes(text);
        bytes.starts_with(Self::CLOSE) && bytes.get(2).is_some_and(u8::is_ascii_alphabetic)
    }

    /// An opening line that already closes itself (`<br/>`, `<b>x</b>`)
    /// stands alone; otherwise the block runs through the first line that
    /// starts with a closing tag, or to the end of the range.
    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let first = cur.position();
        let open = cur.get_line()?;
        if !Self::opens(text, open) {
            return None;
        }

        let open_text = open.text(text).trim_end();
        let mut last = first;
        if !(open_text.contains("</") || open_text.ends_with(Self::SELF_CLOSE)) {
            while let Some(line) = cur.get_line() {
                last = cur.position() - 1;
                if Self::closes(text, line) {
                    break;
                }
            }
        }

        let lines = cur.snip(first, last);
        let children = read_line_spans(ctx, lines, SpanFlags::HTML);
        Some(Element::with_children(ElementKind::HtmlBlock, children))
    }
}
