//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via outline assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders an element forest as an indented, stable text
//!   outline, resolving scrap handles through the registry
//! - **`invariants`**: Runtime checks for parser correctness (spans in
//!   bounds and on char boundaries, leaf kinds childless, text non-empty)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
