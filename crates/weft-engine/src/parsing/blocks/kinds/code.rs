use crate::diagnostics::Diagnostic;
use crate::document::{Element, ElementKind, SourceLoc, Span};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;
use crate::parsing::inline::{SpanFlags, read_line_spans, read_spans};
use crate::parsing::lines::LineView;
use crate::scraps::{DisplayName, ScrapKind};

use super::scrap_intro::{KindMarker, ScrapIntro};

/// Code indented by a tab or four spaces.
pub struct IndentedCode;

impl IndentedCode {
    pub const TAB: u8 = b'\t';
    pub const SPACES: &'static [u8; 4] = b"    ";

    /// The line with its code indentation stripped, if it has one.
    pub fn strip(text: &str, line: LineView) -> Option<LineView> {
        let bytes = line.bytes(text);
        if bytes.first() == Some(&Self::TAB) {
            Some(line.skip(1))
        } else if bytes.starts_with(Self::SPACES) {
            Some(line.skip(Self::SPACES.len()))
        } else {
            None
        }
    }

    /// Blank lines between indented lines stay in the block. A line that
    /// is a scrap header ends the block so the next scrap can start right
    /// there.
    pub fn try_parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        let text = ctx.text();
        let start = cur.position();
        let mut collected: Vec<LineView> = Vec::new();
        let mut keep = 0;

        while let Some(l) = cur.get_line() {
            if l.is_blank(text) {
                collected.push(Self::strip(text, l).unwrap_or(l.skip(l.span.len())));
                continue;
            }
            let Some(stripped) = Self::strip(text, l) else {
                break;
            };
            if !collected.is_empty() && ScrapIntro::parse(text, stripped.span).is_some() {
                break;
            }
            collected.push(stripped);
            keep = collected.len();
        }

        if keep == 0 {
            return None;
        }
        collected.truncate(keep);
        cur.seek(start + keep);
        Some(code_block_body(ctx, &collected, None))
    }
}

/// A block fenced by three or more backticks or tildes.
pub struct Fence;

impl Fence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_RUN: usize = 3;

    pub fn backtick(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, Self::BACKTICK)
    }

    pub fn tilde(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, Self::TILDE)
    }

    fn is_fence(text: &str, line: LineView, c: u8) -> bool {
        let bytes = line.bytes(text);
        bytes.len() >= Self::MIN_RUN && bytes[..Self::MIN_RUN].iter().all(|&b| b == c)
    }

    /// An unterminated fence runs to the end of the range. Anything after
    /// the closing run is ignored.
    fn parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>, c: u8) -> Option<Element> {
        let text = ctx.text();
        let open = cur.get_line()?;
        if !Self::is_fence(text, open, c) {
            return None;
        }
        let run = open.bytes(text).iter().take_while(|&&b| b == c).count();
        let lang = open.skip(run).span.trimmed(text);

        let first = cur.position();
        let mut last = None;
        while let Some(line) = cur.get_line() {
            if Self::is_fence(text, line, c) {
                break;
            }
            last = Some(cur.position() - 1);
        }

        let after = cur.position();
        let body: &[LineView] = match last {
            Some(last) => cur.snip(first, last),
            None => &[],
        };
        cur.seek(after);
        Some(code_block_body(ctx, body, Some(lang)))
    }
}

/// Builds the `CodeBlock` for a code range. When the first line is a scrap
/// header the block is registered as a scrap and a `ScrapDef` stands in
/// its place in the document.
pub(crate) fn code_block_body(
    ctx: &mut ParseContext<'_>,
    lines: &[LineView],
    lang: Option<Span>,
) -> Element {
    let header = lines
        .first()
        .and_then(|first| ScrapIntro::parse(ctx.text(), first.span).map(|intro| (*first, intro)));
    let body_lines = if header.is_some() { &lines[1..] } else { lines };

    let children = read_line_spans(ctx, body_lines, SpanFlags::CODE);
    let mut code = Element::with_children(ElementKind::CodeBlock, children);
    if let Some(lang) = lang.filter(|l| !l.is_empty()) {
        code = code.with_attr("class", lang);
    }

    match header {
        Some((intro_line, intro)) => define_scrap(ctx, intro_line, intro, body_lines.first(), code),
        None => code,
    }
}

fn define_scrap(
    ctx: &mut ParseContext<'_>,
    intro_line: LineView,
    intro: ScrapIntro,
    first_body_line: Option<&LineView>,
    code: Element,
) -> Element {
    let kind = match intro.kind {
        KindMarker::Unset => ScrapKind::Unknown,
        KindMarker::Known(kind) => kind,
        KindMarker::Unrecognized(marker) => {
            let report = Diagnostic::warning(format!("unknown scrap kind `{}`", ctx.slice(marker)))
                .at(ctx.file, marker)
                .with_note("expected `file`, `global` or `local`");
            ctx.report(report);
            ScrapKind::Unknown
        }
    };

    let id = ctx.slice(intro.id);
    let file = ctx.file;
    let file_group = ctx.registry.find_or_create(id, file);
    let group = ctx.registry.file_group(file_group).name_group;
    if let Err(conflict) = ctx.registry.declare_kind(group, kind) {
        let note = format!("keeping `{}`", conflict.existing.marker());
        let report = Diagnostic::warning(conflict.to_string())
            .at(ctx.file, intro.id)
            .with_note(note);
        ctx.report(report);
    }

    if let Some(name) = intro.name.filter(|n| !n.is_empty())
        && ctx.registry.name_group(group).display_name.is_none()
    {
        let elements = read_spans(ctx, intro_line.index, name, SpanFlags::DEFAULT);
        ctx.registry
            .offer_display_name(group, DisplayName { file, elements });
    }

    let loc = match first_body_line {
        Some(line) => ctx.source.loc(line.index, line.span.start),
        None => SourceLoc::new(intro_line.index + 2, 1),
    };
    let scrap = ctx.registry.add_scrap(file_group, loc, code);
    Element::new(ElementKind::ScrapDef { scrap })
}
