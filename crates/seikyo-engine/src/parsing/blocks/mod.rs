//! # Block Segmentation
//!
//! Two-phase segmentation of a chapter body into citation headers, citations
//! and commentary.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is classified into a
//!    `LineClass` carrying its raw and trimmed text and an optional marker
//!    (citation header, continuation, termination, commentary opening).
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` buffers raw lines and
//!    flushes them into `TextBlock`s whenever a marker line changes state.
//!
//! ## Modules
//!
//! - **`types`**: `TextBlock`, `BlockKind`
//! - **`kinds`**: marker types owning their trigger text (`CitationHeader`,
//!   `Termination`, `CommentaryOpening`)
//! - **`classify`**: `ScriptureLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockBuilder` state machine for block construction
//!
//! ## Key Invariants
//!
//! - Blocks come out in document order and are never empty
//! - Only marker lines start a new block; blank lines are block content

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineMarker, ScriptureLineClassifier};
pub use types::{BlockKind, TextBlock};
