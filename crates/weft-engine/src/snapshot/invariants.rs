use crate::document::{Element, SourceFile, Span};

/// Validates parser output invariants.
///
/// Asserts that:
/// - All text and attribute spans are within the file and on char boundaries
/// - `Text` elements carry a non-empty span
/// - Leaf kinds have no children
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(source: &SourceFile, elements: &[Element]) {
    for element in elements {
        element.walk(&mut |e| check_element(source, e));
    }
}

fn check_element(source: &SourceFile, e: &Element) {
    if let Some(span) = e.text {
        check_span(source, span, e.kind.name());
    }
    for attr in &e.attrs {
        check_span(source, attr.value, attr.name);
    }
    if e.kind == crate::document::ElementKind::Text {
        assert!(
            e.text.is_some_and(|s| !s.is_empty()),
            "text element without content: {:?}",
            e.text
        );
    }
    assert!(
        !e.kind.is_leaf() || e.children.is_empty(),
        "leaf {} has {} children",
        e.kind.name(),
        e.children.len()
    );
}

fn check_span(source: &SourceFile, span: Span, what: &str) {
    let n = source.text.len();
    assert!(
        span.start <= span.end && span.end <= n,
        "{what} span out of bounds: {span:?} (text len: {n})"
    );
    assert!(
        source.text.is_char_boundary(span.start) && source.text.is_char_boundary(span.end),
        "{what} span splits a character: {span:?}"
    );
}
