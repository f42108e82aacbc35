//! # Content Catalog
//!
//! The catalog is the immutable, ordered table of [`Entry`] values the whole
//! application reads from, paired with the [`Taxonomy`] that names its
//! categories.
//!
//! Validation happens once, in [`Catalog::new`]: duplicate ids, empty ids,
//! categories outside the taxonomy and malformed category keys are rejected
//! there, so the filtering path never has to second-guess its input.
//!
//! The built-in content lives in `data.rs` and is built lazily, once per
//! process, by [`builtin`].

use crate::error::{CatalogError, Result};
use crate::model::{language_segment, Entry, Language, Taxonomy, CATEGORY_SEPARATOR};
use once_cell::sync::Lazy;
use std::collections::HashSet;

mod data;

static BUILTIN: Lazy<std::result::Result<Catalog, CatalogError>> =
    Lazy::new(|| Catalog::new(data::entries(), Taxonomy::builtin()));

/// Returns the process-wide built-in catalog.
pub fn builtin() -> Result<&'static Catalog> {
    BUILTIN.as_ref().map_err(|e| e.clone().into())
}

#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<Entry>,
    taxonomy: Taxonomy,
}

impl Catalog {
    pub fn new(entries: Vec<Entry>, taxonomy: Taxonomy) -> std::result::Result<Self, CatalogError> {
        for category in taxonomy.categories() {
            match category.key.split_once(CATEGORY_SEPARATOR) {
                Some((lang, sub)) if !lang.is_empty() && !sub.is_empty() => {}
                _ => return Err(CatalogError::MalformedCategory(category.key.clone())),
            }
        }

        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.id.is_empty() {
                return Err(CatalogError::EmptyId(entry.title.clone()));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(CatalogError::DuplicateId(entry.id.clone()));
            }
            if !taxonomy.contains(&entry.category) {
                return Err(CatalogError::UnknownCategory {
                    id: entry.id.clone(),
                    category: entry.category.clone(),
                });
            }
        }

        Ok(Self { entries, taxonomy })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Display label for a category, falling back to the raw key.
    pub fn label<'a>(&'a self, category: &'a str) -> &'a str {
        self.taxonomy.label(category).unwrap_or(category)
    }

    /// Entries surfaced through quick-access controls, in catalog order.
    pub fn shortcuts(&self, language: Language) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| e.is_shortcut() && e.language() == language.prefix())
            .collect()
    }

    /// Ids the grouped grid leaves out because a quick-access control owns them.
    pub fn shortcut_ids(&self) -> HashSet<&str> {
        self.entries
            .iter()
            .filter(|e| e.is_shortcut())
            .map(|e| e.id.as_str())
            .collect()
    }

    pub fn count_in_category(&self, category: &str) -> usize {
        self.entries.iter().filter(|e| e.category == category).count()
    }

    pub fn count_for_language(&self, language: Language) -> usize {
        self.entries
            .iter()
            .filter(|e| language_segment(&e.category) == language.prefix())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
