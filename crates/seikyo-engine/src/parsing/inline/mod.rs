//! # Inline Composition
//!
//! Turns one line of block content into display-ready inline nodes: ruby
//! notation `{base|reading}` plus a glossary overlay.
//!
//! ## Architecture
//!
//! Composition is separate from block segmentation and runs per line of a
//! block. It has two layers:
//! - The scanner finds ruby notation with a fresh cursor per call
//! - The compositor overlays glossary terms, longest match first, across
//!   adjacent ruby tokens and the plain text right after them
//!
//! ## Modules
//!
//! - **`types`**: `InlineNode`, `AnnotationChild`, `RubyToken`
//! - **`kinds`**: notation types with owned delimiters (`Ruby`)
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`scanner`**: `scan()` producing ruby tokens with raw-content spans
//! - **`fold`**: katakana to hiragana folding used for all term comparisons
//! - **`glossary`**: `GlossaryIndex`, the per-call term lookup
//! - **`compose`**: `compose()` and the glossary-only `walk()`
//!
//! ## Matching
//!
//! Terms are compared in folded form only; nodes always carry the source
//! text. Malformed notation and unmatched terms degrade to plain text or bare
//! ruby; composition never fails.

pub mod compose;
pub mod cursor;
pub mod fold;
pub mod glossary;
pub mod kinds;
pub mod scanner;
pub mod types;

pub use compose::{compose, walk};
pub use glossary::{GlossaryError, GlossaryIndex, IndexedTerm};
pub use scanner::{scan, strip_notation};
pub use types::{AnnotationChild, InlineNode, RubyToken, display_text};
