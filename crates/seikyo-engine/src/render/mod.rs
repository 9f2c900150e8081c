//! Output formats for rendered chapters.
//!
//! Both renderers consume [`RenderedBlock`](crate::parsing::RenderedBlock)s
//! and never re-parse content.

pub mod html;
pub mod plain;

/// Display toggles shared by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Show ruby readings next to their base text.
    pub show_readings: bool,
    /// Mark glossary terms.
    pub show_glossary: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            show_readings: true,
            show_glossary: true,
        }
    }
}
