//! # Block Kinds
//!
//! One type per block construct. Each recognizer reads from a cloned
//! [`LineCursor`](super::LineCursor) and returns `None` to let the next one
//! try.
//!
//! ## Types
//!
//! - **`LinkDefinition`**: `[id]: url "title"`
//! - **`Table`**: pipe tables with an alignment row
//! - **`HtmlBlock`**: raw HTML from an opening tag to a closing one
//! - **`BlockQuote`**: `>` lines, parsed again as blocks
//! - **`IndentedCode`** and **`Fence`**: code blocks, and the scraps they define
//! - **`AtxHeading`** and **`SetextHeading`**
//! - **`Rule`**: horizontal rules
//! - **`List`**: ordered and unordered lists
//! - **`Paragraph`**: the fallback
//! - **`ScrapIntro`**: the `<<kind:id|name>>=` header on a code block

pub mod block_quote;
pub mod code;
pub mod heading;
pub mod html;
pub mod link_def;
pub mod list;
pub mod paragraph;
pub mod rule;
pub mod scrap_intro;
pub mod table;

pub use block_quote::BlockQuote;
pub use code::{Fence, IndentedCode};
pub use heading::{AtxHeading, SetextHeading};
pub use html::HtmlBlock;
pub use link_def::LinkDefinition;
pub use list::List;
pub use paragraph::Paragraph;
pub use rule::Rule;
pub use scrap_intro::{KindMarker, ScrapIntro};
pub use table::Table;
