use crate::document::{Element, ElementKind, Span};
use crate::parsing::ParseContext;
use crate::parsing::lines::LineView;
use crate::parsing::reader::Reader;

use super::flags::SpanFlags;
use super::kinds::{CodeSpan, Emphasis, Entity, Link, ScrapRef};
use super::writer::SpanWriter;

/// A span recognizer. Runs on a private copy of the reader; the caller
/// only adopts the copy's position when it returns an element.
pub type SpanRecognizer =
    fn(&mut ParseContext<'_>, &mut Reader<'_>, usize, SpanFlags) -> Option<Element>;

/// Tried in order at every position; the first match wins.
const RECOGNIZERS: &[SpanRecognizer] = &[
    ScrapRef::try_parse,
    Link::try_parse,
    Entity::less_than,
    Entity::greater_than,
    Entity::ampersand,
    Emphasis::underscore,
    Emphasis::asterisk,
    CodeSpan::try_parse,
];

/// Parses the span-level content of `span`, which lies on line `line`.
pub fn read_spans(
    ctx: &mut ParseContext<'_>,
    line: usize,
    span: Span,
    flags: SpanFlags,
) -> Vec<Element> {
    let mut writer = SpanWriter::new();
    read_into(ctx, line, span, flags, &mut writer);
    writer.finish()
}

/// Parses each line in turn, following every line with a `NewLine`.
pub fn read_line_spans(
    ctx: &mut ParseContext<'_>,
    lines: &[LineView],
    flags: SpanFlags,
) -> Vec<Element> {
    let mut writer = SpanWriter::new();
    for view in lines {
        read_into(ctx, view.index, view.span, flags, &mut writer);
        writer.push(Element::new(ElementKind::NewLine));
    }
    writer.finish()
}

fn read_into(
    ctx: &mut ParseContext<'_>,
    line: usize,
    span: Span,
    flags: SpanFlags,
    writer: &mut SpanWriter,
) {
    let mut r = Reader::new(ctx.text(), span);
    writer.begin(r.pos());

    while !r.eof() {
        if let Some(element) = try_recognizers(ctx, &mut r, line, flags) {
            writer.push(element);
            writer.begin(r.pos());
            continue;
        }

        let c = r.get();
        if c == Some(b'\\') && flags.markdown() {
            // drop the backslash and shield the next byte from recognizers
            writer.flush();
            writer.begin(r.pos());
            r.get();
        }
        writer.extend(r.pos());
    }
    writer.flush();
}

fn try_recognizers(
    ctx: &mut ParseContext<'_>,
    r: &mut Reader<'_>,
    line: usize,
    flags: SpanFlags,
) -> Option<Element> {
    for recognize in RECOGNIZERS {
        let mut attempt = r.clone();
        if let Some(element) = recognize(ctx, &mut attempt, line, flags) {
            *r = attempt;
            return Some(element);
        }
    }
    None
}
