/// Switches that change what the span parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanFlags {
    /// Turn `<`, `>` and `&` into entity markers.
    pub escape_entities: bool,
    /// Suppress Markdown: no emphasis, links, inline code or backslash
    /// escapes. Scrap references stay active.
    pub raw: bool,
}

impl SpanFlags {
    /// Prose: paragraphs, headings, table cells, display names.
    pub const DEFAULT: Self = Self {
        escape_entities: true,
        raw: false,
    };
    /// Code blocks and inline code.
    pub const CODE: Self = Self {
        escape_entities: true,
        raw: true,
    };
    /// Raw HTML blocks, passed through untouched.
    pub const HTML: Self = Self {
        escape_entities: false,
        raw: true,
    };

    pub fn markdown(self) -> bool {
        !self.raw
    }
}
