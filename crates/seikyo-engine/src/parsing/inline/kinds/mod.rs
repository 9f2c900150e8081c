//! # Inline Kinds
//!
//! Inline notation types that own their delimiters. The scanner calls these
//! constants; it never hardcodes `{`, `|` or `}`.

pub mod ruby;

pub use ruby::Ruby;
