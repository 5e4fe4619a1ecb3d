use crate::document::Span;

/// One physical line of a source file, terminator excluded.
///
/// `start` doubles as the column origin: columns reported for anything on
/// this line are measured from it, however much of the line a block
/// recognizer has stripped away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub start: usize,
    pub end: usize,
}

impl Line {
    pub fn span(self) -> Span {
        Span::new(self.start, self.end)
    }
}

/// A possibly narrowed view of one physical line.
///
/// Recognizers never mutate [`Line`]s; stripping a `>` or list marker
/// produces a new view with a later `span.start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineView {
    /// Index into the file's line list.
    pub index: usize,
    pub span: Span,
}

impl LineView {
    pub fn text(self, text: &str) -> &str {
        self.span.slice(text)
    }

    pub fn bytes(self, text: &str) -> &[u8] {
        self.text(text).as_bytes()
    }

    /// Only whitespace, or nothing at all.
    pub fn is_blank(self, text: &str) -> bool {
        self.bytes(text).iter().all(u8::is_ascii_whitespace)
    }

    /// The same line with its first `n` bytes consumed.
    #[must_use]
    pub fn skip(self, n: usize) -> LineView {
        let start = (self.span.start + n).min(self.span.end);
        LineView {
            index: self.index,
            span: Span::new(start, self.span.end),
        }
    }

    /// The same line cut down to `span`, which must lie inside it.
    #[must_use]
    pub fn narrow(self, span: Span) -> LineView {
        LineView {
            index: self.index,
            span,
        }
    }
}

/// Splits `text` into physical lines.
///
/// `\n`, `\r`, `\r\n` and `\n\r` each end one line. A terminator at the very
/// end does not open an extra empty line, but empty input still yields one.
pub fn split_lines(text: &str) -> Vec<Line> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c != b'\n' && c != b'\r' {
            i += 1;
            continue;
        }
        lines.push(Line { start, end: i });
        i += 1;
        if let Some(&d) = bytes.get(i)
            && (d == b'\n' || d == b'\r')
            && d != c
        {
            i += 1;
        }
        start = i;
    }

    if start < bytes.len() || lines.is_empty() {
        lines.push(Line {
            start,
            end: bytes.len(),
        });
    }
    lines
}

/// Full-width views of every line, the starting range for block parsing.
pub fn views(lines: &[Line]) -> Vec<LineView> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| LineView {
            index,
            span: line.span(),
        })
        .collect()
}
