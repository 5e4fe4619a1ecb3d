use crate::document::Span;
use crate::parsing::reader::Reader;
use crate::scraps::ScrapKind;

/// The `kind:` part of a scrap header, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindMarker {
    Unset,
    Known(ScrapKind),
    /// A `word:` prefix that names no kind.
    Unrecognized(Span),
}

/// A parsed `<<[kind:]id[|display name]>>=` header line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapIntro {
    pub kind: KindMarker,
    pub id: Span,
    pub name: Option<Span>,
}

impl ScrapIntro {
    pub const COMMENT: &'static [u8; 2] = b"//";
    pub const OPEN: &'static [u8; 2] = b"<<";
    pub const CLOSE: &'static [u8; 2] = b">>";
    pub const KIND_END: u8 = b':';
    pub const NAME_SEP: u8 = b'|';
    pub const CONTINUE: &'static [u8; 1] = b"+";
    pub const DEFINE: &'static [u8; 1] = b"=";

    /// Parses a whole line as a scrap header. The header may follow a `//`
    /// comment marker and may only be followed by whitespace.
    pub fn parse(text: &str, line: Span) -> Option<ScrapIntro> {
        let mut r = Reader::new(text, line);
        if r.eat(Self::COMMENT) {
            r.skip_whitespace();
        }
        if !r.eat(Self::OPEN) {
            return None;
        }

        let kind = Self::parse_kind(&mut r);

        let id_start = r.pos();
        while !r.eof() && r.peek() != Some(Self::NAME_SEP) && !r.starts_with(Self::CLOSE) {
            r.get();
        }
        let id = r.span_from(id_start).trimmed(text);

        let mut name = None;
        if r.eat(&[Self::NAME_SEP]) {
            let name_start = r.pos();
            while !r.eof() && !r.starts_with(Self::CLOSE) {
                r.get();
            }
            name = Some(r.span_from(name_start).trimmed(text));
        }

        if !r.eat(Self::CLOSE) {
            return None;
        }
        r.eat(Self::CONTINUE);
        if !r.eat(Self::DEFINE) {
            return None;
        }
        r.skip_whitespace();
        if !r.eof() || id.is_empty() {
            return None;
        }

        Some(ScrapIntro { kind, id, name })
    }

    fn parse_kind(r: &mut Reader<'_>) -> KindMarker {
        let saved = r.clone();
        let start = r.pos();
        loop {
            match r.get() {
                Some(Self::KIND_END) => {
                    let marker = Span::new(start, r.pos() - 1);
                    return match ScrapKind::from_marker(marker.slice(r.text())) {
                        Some(kind) => KindMarker::Known(kind),
                        None => KindMarker::Unrecognized(marker),
                    };
                }
                Some(c) if c.is_ascii_alphabetic() => {}
                _ => {
                    *r = saved;
                    return KindMarker::Unset;
                }
            }
        }
    }
}
