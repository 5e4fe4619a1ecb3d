//! # Scrap Registry
//!
//! Named code fragments found while parsing, grouped first by id across the
//! whole run ([`ScrapNameGroup`]) and then by defining file
//! ([`ScrapFileGroup`]). Groups and scraps live in arenas and refer to each
//! other through copyable handles.

pub mod kind;
pub mod registry;

pub use kind::ScrapKind;
pub use registry::{
    DisplayName, FileGroupId, KindConflict, NameGroupId, Scrap, ScrapFileGroup, ScrapId,
    ScrapNameGroup, ScrapRegistry,
};
