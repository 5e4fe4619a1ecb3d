//! # Block Parsing
//!
//! Ordered, backtracking dispatch over line ranges. Quotes and list items
//! call back into [`parse_blocks`] for their content.

mod cursor;
pub mod kinds;

#[cfg(test)]
mod tests;

pub use cursor::LineCursor;

use crate::document::Element;
use crate::parsing::ParseContext;
use crate::parsing::lines::LineView;

use kinds::{
    AtxHeading, BlockQuote, Fence, HtmlBlock, IndentedCode, LinkDefinition, List, Paragraph, Rule,
    SetextHeading, Table,
};

/// A block recognizer. Runs against a cloned cursor; the dispatcher adopts
/// the clone only when an element comes back.
pub type BlockRecognizer = fn(&mut ParseContext<'_>, &mut LineCursor<'_>) -> Option<Element>;

/// Tried in order; the first match wins. `Paragraph` accepts any non-empty
/// range.
const RECOGNIZERS: &[BlockRecognizer] = &[
    LinkDefinition::try_parse,
    Table::try_parse,
    HtmlBlock::try_parse,
    BlockQuote::try_parse,
    IndentedCode::try_parse,
    Fence::backtick,
    Fence::tilde,
    AtxHeading::try_parse,
    Rule::hyphen,
    Rule::asterisk,
    Rule::underscore,
    List::ordered,
    List::unordered,
    SetextHeading::level_one,
    SetextHeading::level_two,
    Paragraph::try_parse,
];

/// Parses `lines` into a sequence of block elements.
pub fn parse_blocks(ctx: &mut ParseContext<'_>, lines: &[LineView]) -> Vec<Element> {
    let text = ctx.text();
    let mut cur = LineCursor::new(lines);
    let mut elements = Vec::new();

    loop {
        cur.skip_blank(text);
        if cur.at_end() {
            break;
        }
        match try_recognizers(ctx, &cur) {
            Some((element, next)) => {
                elements.push(element);
                cur = next;
            }
            None => {
                cur.get_line();
            }
        }
    }
    elements
}

fn try_recognizers<'l>(
    ctx: &mut ParseContext<'_>,
    cur: &LineCursor<'l>,
) -> Option<(Element, LineCursor<'l>)> {
    RECOGNIZERS.iter().find_map(|recognize| {
        let mut attempt = cur.clone();
        let element = recognize(ctx, &mut attempt)?;
        Some((element, attempt))
    })
}
