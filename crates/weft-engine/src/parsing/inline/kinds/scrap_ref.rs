use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::inline::SpanFlags;
use crate::parsing::reader::Reader;

/// `<<id>>`, a use of a scrap inside prose or code.
pub struct ScrapRef;

impl ScrapRef {
    pub const OPEN: &'static [u8; 2] = b"<<";
    pub const CLOSE: &'static [u8; 2] = b">>";

    /// Registers the referenced name in the current file and returns the
    /// reference element. Whitespace right after `<<` rejects the match so
    /// `a << b >> c` stays shift operators.
    pub fn try_parse(
        ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        line: usize,
        _flags: SpanFlags,
    ) -> Option<Element> {
        if !r.eat(Self::OPEN) {
            return None;
        }
        let id_start = r.pos();
        let close = r.find(Self::CLOSE)?;
        let id = Span::new(id_start, id_start + close);
        r.bump_n(close + Self::CLOSE.len());

        let id_text = ctx.slice(id);
        if id_text.starts_with(|c: char| c.is_ascii_whitespace()) || id_text.is_empty() {
            return None;
        }

        let file = ctx.file;
        let group = ctx.registry.find_or_create(id_text.trim_end(), file);
        let resume_at = ctx.source.loc(line, r.pos());
        let mut element = Element::new(ElementKind::ScrapRef { group, resume_at });
        element.text = Some(id);
        Some(element)
    }
}
