use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::inline::{SpanFlags, read_spans};
use crate::parsing::reader::Reader;

/// `[text](url)` and `[text][id]`.
pub struct Link;

impl Link {
    pub const OPEN: &'static [u8; 1] = b"[";
    pub const CLOSE: u8 = b']';
    pub const TARGET_OPEN: u8 = b'(';
    pub const TARGET_CLOSE: u8 = b')';
    pub const HREF: &'static str = "href";

    /// An empty `[id]` reuses the link text as the id.
    pub fn try_parse(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        if !flags.markdown() || !r.eat(Self::OPEN) {
            return None;
        }
        let text_start = r.pos();
        let text = Span::new(text_start, r.find_matching(Self::CLOSE, 1)?);

        match r.get()? {
            Self::TARGET_OPEN => {
                let target_start = r.pos();
                let target = Span::new(target_start, r.find_matching(Self::TARGET_CLOSE, 1)?);
                let inner = read_spans(ctx, line, text, flags);
                Some(Element::with_children(ElementKind::Link, inner).with_attr(Self::HREF, target))
            }
            b'[' => {
                let id_start = r.pos();
                let mut id = Span::new(id_start, r.find_matching(Self::CLOSE, 1)?);
                if id.is_empty() {
                    id = text;
                }
                let source = ctx.text();
                let link = ctx.links.find_or_create(id, source);
                let inner = read_spans(ctx, line, text, flags);
                Some(Element::with_children(ElementKind::ReferenceLink { link }, inner))
            }
            _ => None,
        }
    }
}
