pub mod convert;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;
pub mod search;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::*;
pub use parsing::blocks::{BlockKind, TextBlock};
pub use parsing::inline::{AnnotationChild, GlossaryError, GlossaryIndex, InlineNode, compose, scan, walk};
pub use parsing::{RenderedBlock, render_chapter, segment};
pub use render::RenderOptions;
pub use search::{SearchHit, search, search_scriptures};
