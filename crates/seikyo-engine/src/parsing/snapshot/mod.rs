//! # Snapshot Testing Support
//!
//! Utilities for testing the engine via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts rendered blocks to a stable `Snap` that prints
//!   as one line per composed source line, for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for engine correctness (every line tiles
//!   its source, no empty or adjacent text nodes, no empty blocks)

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
