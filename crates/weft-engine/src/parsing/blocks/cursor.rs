use crate::parsing::lines::LineView;

/// A cursor over a range of line views, with one-step pushback.
///
/// Cloning is cheap; recognizers run against a clone and the dispatcher
/// adopts it only on success.
#[derive(Debug, Clone)]
pub struct LineCursor<'l> {
    lines: &'l [LineView],
    pos: usize,
}

impl<'l> LineCursor<'l> {
    pub fn new(lines: &'l [LineView]) -> Self {
        Self { lines, pos: 0 }
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Position of the next line to be read.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn get_line(&mut self) -> Option<LineView> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }

    pub fn peek_line(&self) -> Option<LineView> {
        self.lines.get(self.pos).copied()
    }

    /// Pushes back the line most recently returned by `get_line`. Pushing
    /// back the end of the range is a no-op.
    pub fn unget_line(&mut self, line: Option<LineView>) {
        if line.is_some() && self.pos > 0 {
            self.pos -= 1;
        }
    }

    /// Consumes the inclusive range `[first, last]` of positions and returns
    /// it; the cursor continues after `last`.
    pub fn snip(&mut self, first: usize, last: usize) -> &'l [LineView] {
        self.pos = last + 1;
        &self.lines[first..=last]
    }

    /// Moves the cursor to `pos`, used once a recognizer has decided how many
    /// of the lines it read belong to it.
    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.lines.len());
    }

    pub fn skip_blank(&mut self, text: &str) {
        while self.peek_line().is_some_and(|l| l.is_blank(text)) {
            self.pos += 1;
        }
    }
}
