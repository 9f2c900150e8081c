//! # Block Kinds
//!
//! Line markers that own their trigger text. The classifier asks these types
//! whether a trimmed line opens or closes a block; it never hardcodes `言`,
//! `已上` or an opening glyph itself.

pub mod citation_header;
pub mod commentary;
pub mod termination;

pub use citation_header::CitationHeader;
pub use commentary::CommentaryOpening;
pub use termination::Termination;
