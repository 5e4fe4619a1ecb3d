use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::inline::SpanFlags;
use crate::parsing::reader::Reader;

/// Characters that must be escaped in HTML output.
pub struct Entity;

impl Entity {
    fn parse(r: &mut Reader<'_>, flags: SpanFlags, c: u8, kind: ElementKind) -> Option<Element> {
        if !flags.escape_entities || r.get()? != c {
            return None;
        }
        Some(Element::new(kind))
    }

    pub fn less_than(
        _ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        _line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        Self::parse(r, flags, b'<', ElementKind::LessThan)
    }

    pub fn greater_than(
        _ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        _line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        Self::parse(r, flags, b'>', ElementKind::GreaterThan)
    }

    pub fn ampersand(
        _ctx: &mut ParseContext<'_>,
        r: &mut Reader<'_>,
        _line: usize,
        flags: SpanFlags,
    ) -> Option<Element> {
        Self::parse(r, flags, b'&', ElementKind::Ampersand)
    }
}
