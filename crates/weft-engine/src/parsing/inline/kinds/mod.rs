//! # Inline Kinds
//!
//! One type per span construct, owning its delimiters and its recognizer.
//!
//! ## Types
//!
//! - **`ScrapRef`**: `<<id>>`, active even in raw code
//! - **`Link`**: `[text](url)` and `[text][id]`
//! - **`Entity`**: `<`, `>` and `&` markers
//! - **`Emphasis`**: `*`, `**`, `_` and `__` runs
//! - **`CodeSpan`**: backtick runs

pub mod code_span;
pub mod emphasis;
pub mod entity;
pub mod link;
pub mod scrap_ref;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use entity::Entity;
pub use link::Link;
pub use scrap_ref::ScrapRef;
