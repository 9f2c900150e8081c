use std::collections::{HashMap, HashSet};

use crate::models::GlossaryEntry;

use super::fold::{fold, folded_prefix_len};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GlossaryError {
    #[error("glossary entry ({reading}: {meaning}) has an empty term")]
    EmptyTerm { reading: String, meaning: String },
}

/// A glossary entry paired with its folded term.
#[derive(Debug, Clone, Copy)]
pub struct IndexedTerm<'g> {
    pub folded: &'g str,
    pub entry: &'g GlossaryEntry,
}

/// Read-only lookup structure over one chapter's glossary.
///
/// Terms are ordered longest first (by char count), so a linear scan that
/// stops at the first hit always finds the longest match. Terms are unique
/// by folded form: when two entries fold to the same key, the longer
/// original term wins, then the earlier entry.
#[derive(Debug, Default)]
pub struct GlossaryIndex<'g> {
    folded: Vec<String>,
    entries: Vec<&'g GlossaryEntry>,
    exact: HashMap<&'g str, usize>,
    by_folded: HashMap<String, usize>,
    rejected: Vec<GlossaryError>,
}

impl<'g> GlossaryIndex<'g> {
    /// An index with no terms; composing against it only resolves ruby notation.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds the index, skipping entries with an empty term.
    ///
    /// Skipped entries are logged and kept in [`GlossaryIndex::rejected`].
    pub fn build(entries: &'g [GlossaryEntry]) -> Self {
        let mut index = Self::default();

        let mut ordered: Vec<&'g GlossaryEntry> = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.term.is_empty() {
                let err = GlossaryError::EmptyTerm {
                    reading: entry.reading.clone(),
                    meaning: entry.meaning.clone(),
                };
                log::warn!("Skipping glossary entry: {err}");
                index.rejected.push(err);
            } else {
                ordered.push(entry);
            }
        }
        // Stable: equal lengths keep input order.
        ordered.sort_by_key(|e| std::cmp::Reverse(e.term.chars().count()));

        let mut seen = HashSet::new();
        for entry in ordered {
            let key = fold(&entry.term);
            if !seen.insert(key.clone()) {
                log::debug!("Glossary term {:?} shadowed by an earlier entry", entry.term);
                continue;
            }
            let slot = index.entries.len();
            index.exact.entry(entry.term.as_str()).or_insert(slot);
            index.by_folded.insert(key.clone(), slot);
            index.folded.push(key);
            index.entries.push(entry);
        }

        index
    }

    /// Strict variant of [`GlossaryIndex::build`]: fails on the first empty term.
    pub fn try_build(entries: &'g [GlossaryEntry]) -> Result<Self, GlossaryError> {
        let index = Self::build(entries);
        if let Some(err) = index.rejected.first() {
            return Err(err.clone());
        }
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries dropped at build time.
    pub fn rejected(&self) -> &[GlossaryError] {
        &self.rejected
    }

    /// Looks up an entry by its exact, unfolded term.
    pub fn get(&self, term: &str) -> Option<&'g GlossaryEntry> {
        self.exact.get(term).map(|&i| self.entries[i])
    }

    /// Looks up an entry by the folded form of `term`.
    pub fn get_folded(&self, term: &str) -> Option<&'g GlossaryEntry> {
        self.by_folded.get(&fold(term)).map(|&i| self.entries[i])
    }

    /// All terms, longest first.
    pub fn terms(&self) -> impl Iterator<Item = IndexedTerm<'_>> {
        self.folded
            .iter()
            .zip(&self.entries)
            .map(|(folded, &entry)| IndexedTerm {
                folded: folded.as_str(),
                entry,
            })
    }

    /// Terms whose folded form starts with `folded_prefix`, longest first.
    pub fn candidates_starting_with<'s>(
        &'s self,
        folded_prefix: &'s str,
    ) -> impl Iterator<Item = IndexedTerm<'s>> {
        self.terms()
            .filter(move |t| t.folded.starts_with(folded_prefix))
    }

    /// The longest term matching at the start of `raw` after folding.
    ///
    /// Returns the term and the byte length of the matched prefix of `raw`.
    pub fn longest_match_at(&self, raw: &str) -> Option<(IndexedTerm<'_>, usize)> {
        self.terms()
            .find_map(|t| folded_prefix_len(raw, t.folded).map(|len| (t, len)))
    }
}
