use crate::document::Span;

/// A byte reader over one span of a file's text.
///
/// Positions are absolute offsets into the file, so spans taken from a reader
/// can be stored in elements directly. End of input is `None`, which no byte
/// can be confused with.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    text: &'a str,
    start: usize,
    end: usize,
    i: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of `span` within `text`.
    pub fn new(text: &'a str, span: Span) -> Self {
        Self {
            text,
            start: span.start,
            end: span.end,
            i: span.start,
        }
    }

    /// Returns the current absolute byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if every byte of the span has been read.
    pub fn eof(&self) -> bool {
        self.i >= self.end
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.byte_at(self.i)
    }

    /// Reads one byte.
    pub fn get(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }

    /// Pushes back the value most recently returned by [`Reader::get`].
    ///
    /// Ungetting end of input is a no-op, mirroring `get` which does not
    /// advance at the end.
    pub fn unget(&mut self, value: Option<u8>) {
        if value.is_some() && self.i > self.start {
            self.i -= 1;
        }
    }

    /// The byte just before the cursor in the file, even when that lies
    /// before the span start. `None` at the very start of the file.
    pub fn preceding(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|at| self.text.as_bytes().get(at).copied())
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.remaining().starts_with(pat)
    }

    /// Advances by `n` bytes, stopping at the end of the span.
    pub fn bump_n(&mut self, n: usize) {
        self.i = (self.i + n).min(self.end);
    }

    /// Consumes `pat` if the input starts with it.
    pub fn eat(&mut self, pat: &[u8]) -> bool {
        if self.starts_with(pat) {
            self.bump_n(pat.len());
            true
        } else {
            false
        }
    }

    /// Counts and consumes up to `max` repetitions of `c`.
    pub fn eat_run(&mut self, c: u8, max: usize) -> usize {
        let mut n = 0;
        while n < max && self.peek() == Some(c) {
            self.i += 1;
            n += 1;
        }
        n
    }

    pub fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.i += 1;
        }
    }

    /// Scans forward for `count` consecutive `c` bytes, stepping over
    /// backslash escapes.
    ///
    /// On success returns the offset where the run begins and leaves the
    /// cursor just after it. On failure the cursor is not moved.
    pub fn find_matching(&mut self, c: u8, count: usize) -> Option<usize> {
        let mut j = self.i;
        while j < self.end {
            if self.run_at(j, c, count) {
                self.i = j + count;
                return Some(j);
            }
            j += if self.byte_at(j) == Some(b'\\') { 2 } else { 1 };
        }
        None
    }

    /// Span from `from` to the current position.
    pub fn span_from(&self, from: usize) -> Span {
        Span::new(from, self.i)
    }

    /// The unread bytes of the span. The cursor may sit inside a multi-byte
    /// character, so this is never sliced as `str`.
    pub fn remaining(&self) -> &'a [u8] {
        self.text.as_bytes().get(self.i..self.end).unwrap_or_default()
    }

    /// Offset from the cursor to the first occurrence of `pat`, without
    /// moving.
    pub fn find(&self, pat: &[u8]) -> Option<usize> {
        if pat.is_empty() {
            return Some(0);
        }
        self.remaining().windows(pat.len()).position(|w| w == pat)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    fn run_at(&self, at: usize, c: u8, count: usize) -> bool {
        at + count <= self.end && (at..at + count).all(|k| self.byte_at(k) == Some(c))
    }

    fn byte_at(&self, at: usize) -> Option<u8> {
        if at < self.end {
            self.text.as_bytes().get(at).copied()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reader(text: &str) -> Reader<'_> {
        Reader::new(text, Span::new(0, text.len()))
    }

    #[test]
    fn reader_basics() {
        let text = "xxhello";
        let mut r = Reader::new(text, Span::new(2, 7));
        assert_eq!(r.pos(), 2);
        assert!(!r.eof());
        assert_eq!(r.peek(), Some(b'h'));
        assert_eq!(r.get(), Some(b'h'));
        assert_eq!(r.pos(), 3);
    }

    #[test]
    fn reads_stop_at_span_end() {
        let text = "abcdef";
        let mut r = Reader::new(text, Span::new(0, 2));
        assert_eq!(r.get(), Some(b'a'));
        assert_eq!(r.get(), Some(b'b'));
        assert_eq!(r.get(), None);
        assert!(r.eof());
        assert!(!r.starts_with(b"c"));
    }

    #[test]
    fn unget_restores_one_byte() {
        let mut r = reader("ab");
        let c = r.get();
        r.unget(c);
        assert_eq!(r.peek(), Some(b'a'));
    }

    #[test]
    fn unget_end_of_input_is_noop() {
        let mut r = reader("a");
        r.get();
        let end = r.get();
        r.unget(end);
        assert!(r.eof());
    }

    #[test]
    fn preceding_looks_outside_the_span() {
        let text = "ab cd";
        let mut r = Reader::new(text, Span::new(3, 5));
        assert_eq!(r.preceding(), Some(b' '));
        r.get();
        assert_eq!(r.preceding(), Some(b'c'));
        assert_eq!(reader(text).preceding(), None);
    }

    #[test]
    fn find_matching_skips_escapes() {
        let mut r = reader(r"a\*b*c");
        assert_eq!(r.find_matching(b'*', 1), Some(4));
        assert_eq!(r.pos(), 5);
    }

    #[test]
    fn find_matching_needs_full_run() {
        let mut r = reader("a*b**c");
        assert_eq!(r.find_matching(b'*', 2), Some(3));
        assert_eq!(r.remaining(), b"c");
    }

    #[test]
    fn pattern_checks_inside_multibyte_characters() {
        // Given a cursor sitting on the second byte of 'é'
        let text = "é>>x";
        let mut r = reader(text);
        r.get();

        // Then byte-level lookups work without slicing the str
        assert!(!r.starts_with(b"<<"));
        assert!(!r.eat(b">>"));
        assert_eq!(r.find(b">>"), Some(1));
        assert_eq!(r.remaining(), &text.as_bytes()[1..]);
    }

    #[test]
    fn failed_find_leaves_cursor() {
        let mut r = reader("abc");
        r.get();
        assert_eq!(r.find_matching(b'`', 1), None);
        assert_eq!(r.pos(), 1);
    }

    #[test]
    fn eat_run_is_bounded() {
        let mut r = reader("````x");
        assert_eq!(r.eat_run(b'`', 2), 2);
        assert_eq!(r.eat_run(b'`', 9), 2);
        assert_eq!(r.peek(), Some(b'x'));
    }
}
