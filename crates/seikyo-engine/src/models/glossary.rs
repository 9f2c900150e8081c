use serde::{Deserialize, Serialize};

/// A glossary entry supplied per chapter: a term, its reading and a short gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    pub term: String,
    pub reading: String,
    pub meaning: String,
}

impl GlossaryEntry {
    pub fn new(
        term: impl Into<String>,
        reading: impl Into<String>,
        meaning: impl Into<String>,
    ) -> Self {
        Self {
            term: term.into(),
            reading: reading.into(),
            meaning: meaning.into(),
        }
    }
}
