use crate::document::{Element, Span};

/// Collects span elements, holding back a pending run of plain text.
///
/// The pending run is `[start, end)`; it becomes a `Text` element when an
/// inline construct interrupts it or the input ends.
#[derive(Debug, Default)]
pub(crate) struct SpanWriter {
    out: Vec<Element>,
    start: usize,
    end: usize,
}

impl SpanWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, pos: usize) {
        self.start = pos;
        self.end = pos;
    }

    pub fn extend(&mut self, pos: usize) {
        self.end = pos;
    }

    pub fn flush(&mut self) {
        if self.end > self.start {
            self.out.push(Element::text(Span::new(self.start, self.end)));
        }
        self.begin(self.end);
    }

    /// Flushes pending text, then appends `element`.
    pub fn push(&mut self, element: Element) {
        self.flush();
        self.out.push(element);
    }

    pub fn finish(mut self) -> Vec<Element> {
        self.flush();
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ElementKind;

    #[test]
    fn pending_text_flushes_before_pushed_element() {
        let mut w = SpanWriter::new();
        w.begin(0);
        w.extend(3);
        w.push(Element::new(ElementKind::NewLine));
        w.begin(4);
        w.extend(6);
        let out = w.finish();

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].text, Some(Span::new(0, 3)));
        assert_eq!(out[1].kind, ElementKind::NewLine);
        assert_eq!(out[2].text, Some(Span::new(4, 6)));
    }

    #[test]
    fn empty_runs_are_dropped() {
        let mut w = SpanWriter::new();
        w.begin(5);
        w.flush();
        assert!(w.finish().is_empty());
    }
}
