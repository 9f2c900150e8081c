pub mod glossary;
pub mod scripture;

pub use glossary::GlossaryEntry;
pub use scripture::{Chapter, Scripture, ScriptureInfo};
