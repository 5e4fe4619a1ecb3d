use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::reader::Reader;

/// `[id]: url "title"`, with the title optionally on the following line.
pub struct LinkDefinition;

impl LinkDefinition {
    pub const MAX_INDENT: usize = 3;
    pub const OPEN: u8 = b'[';
    pub const CLOSE: &'static [u8; 2] = b"]:";
    pub const URL_OPEN: u8 = b'<';
    pub const URL_CLOSE: u8 = b'>';

    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let line = cur.get_line()?;
        let mut r = Reader::new(text, line.span);

        let indent = r.eat_run(b' ', Self::MAX_INDENT + 1);
        if indent > Self::MAX_INDENT || !r.eat(&[Self::OPEN]) {
            return None;
        }
        let id_start = r.pos();
        while let Some(c) = r.peek() {
            if c == b']' {
                break;
            }
            r.bump_n(1);
        }
        let id = r.span_from(id_start);
        if id.is_empty() || !r.eat(Self::CLOSE) {
            return None;
        }

        r.skip_whitespace();
        let angled = r.eat(&[Self::URL_OPEN]);
        let url_start = r.pos();
        while let Some(c) = r.peek() {
            if c.is_ascii_whitespace() || (angled && c == Self::URL_CLOSE) {
                break;
            }
            r.bump_n(1);
        }
        let url = r.span_from(url_start);
        if url.is_empty() {
            return None;
        }
        if angled && !r.eat(&[Self::URL_CLOSE]) {
            return None;
        }

        r.skip_whitespace();
        let mut title = Self::title(&mut r);
        if title.is_none() && r.eof() {
            let next = cur.get_line();
            title = next.and_then(|next| {
                let mut r = Reader::new(text, next.span);
                r.skip_whitespace();
                Self::title(&mut r)
            });
            if title.is_none() {
                cur.unget_line(next);
            }
        }

        ctx.links.define(id, text, url, title);
        Some(Element::new(ElementKind::LinkDefinition))
    }

    /// A title in `"…"`, `'…'` or `(…)` that ends its line.
    fn title(r: &mut Reader<'_>) -> Option<Span> {
        let close = match r.peek()? {
            b'"' => b'"',
            b'\'' => b'\'',
            b'(' => b')',
            _ => return None,
        };
        let rest = r.remaining();
        let inner = rest.get(1..)?;
        let end = inner.iter().rposition(|&b| b == close)?;
        if !inner[end + 1..].iter().all(u8::is_ascii_whitespace) {
            return None;
        }
        let start = r.pos() + 1;
        r.bump_n(rest.len());
        Some(Span::new(start, start + end))
    }
}
