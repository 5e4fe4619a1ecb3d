use crate::document::{Element, ElementKind};
use crate::parsing::ParseContext;
use crate::parsing::blocks::LineCursor;

/// A horizontal rule: three or more of one rule character, with any
/// whitespace between.
pub struct Rule;

impl Rule {
    pub const MIN_COUNT: usize = 3;

    pub fn hyphen(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, b'-')
    }

    pub fn asterisk(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, b'*')
    }

    pub fn underscore(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>) -> Option<Element> {
        Self::parse(ctx, cur, b'_')
    }

    fn parse(ctx: &mut ParseContext<'_>, cur: &mut LineCursor<'_>, c: u8) -> Option<Element> {
        let line = cur.get_line()?;
        let mut count = 0;
        for &b in line.bytes(ctx.text()) {
            if b == c {
                count += 1;
            } else if !b.is_ascii_whitespace() {
                return None;
            }
        }
        (count >= Self::MIN_COUNT).then(|| Element::new(ElementKind::HorizontalRule))
    }
}
