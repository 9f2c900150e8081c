use serde::{Deserialize, Serialize};

use super::GlossaryEntry;

/// One chapter of a work: its raw body and the glossary for that body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub glossary: Vec<GlossaryEntry>,
}

impl Chapter {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            glossary: vec![],
        }
    }
}

/// A complete work as stored on disk, one JSON record per file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scripture {
    pub id: String,
    pub title: String,
    /// Attribution of the text edition.
    pub source: String,
    pub chapters: Vec<Chapter>,
}

impl Scripture {
    pub fn chapter(&self, id: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn chapter_index(&self, id: &str) -> Option<usize> {
        self.chapters.iter().position(|c| c.id == id)
    }

    /// Previous and next chapters of `id`, in reading order.
    pub fn neighbors(&self, id: &str) -> (Option<&Chapter>, Option<&Chapter>) {
        let Some(i) = self.chapter_index(id) else {
            return (None, None);
        };
        let prev = i.checked_sub(1).and_then(|p| self.chapters.get(p));
        (prev, self.chapters.get(i + 1))
    }

    pub fn info(&self, category: &str) -> ScriptureInfo {
        ScriptureInfo {
            id: self.id.clone(),
            title: self.title.clone(),
            category: category.to_string(),
            chapter_count: self.chapters.len(),
        }
    }
}

/// Listing summary of a stored work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptureInfo {
    pub id: String,
    pub title: String,
    pub category: String,
    pub chapter_count: usize,
}
