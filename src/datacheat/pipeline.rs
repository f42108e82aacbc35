//! # Filter-and-Group Pipeline
//!
//! Turns the flat catalog into what a client shows: entries of one language,
//! minus excluded ids, narrowed by a search text, partitioned by category.
//!
//! The pipeline is a pure function of its inputs. It never fails: a language
//! that matches no category, a search that matches nothing and an empty
//! catalog all produce an empty [`GroupedEntries`].
//!
//! Ordering is inherited from the input. Groups appear in the order their first
//! entry appears, and each group keeps its entries in input order. Nothing is
//! sorted.

use crate::model::Entry;
use serde::Serialize;
use std::collections::HashSet;

/// One category's surviving entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group<'a> {
    pub category: &'a str,
    pub entries: Vec<&'a Entry>,
}

/// Ordered mapping from category key to entries. Only categories with at least
/// one surviving entry are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GroupedEntries<'a> {
    groups: Vec<Group<'a>>,
}

impl<'a> GroupedEntries<'a> {
    pub fn get(&self, category: &str) -> Option<&[&'a Entry]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.entries.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    pub fn groups(&self) -> &[Group<'a>] {
        &self.groups
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Group<'a>> {
        self.groups.iter()
    }

    /// All entries in display order (group by group).
    pub fn entries(&self) -> impl Iterator<Item = &'a Entry> + '_ {
        self.groups.iter().flat_map(|g| g.entries.iter().copied())
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.entries().map(|e| e.id.as_str()).collect()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    fn push(&mut self, entry: &'a Entry) {
        match self
            .groups
            .iter_mut()
            .find(|g| g.category == entry.category)
        {
            Some(group) => group.entries.push(entry),
            None => self.groups.push(Group {
                category: &entry.category,
                entries: vec![entry],
            }),
        }
    }
}

impl<'a, 'g> IntoIterator for &'g GroupedEntries<'a> {
    type Item = &'g Group<'a>;
    type IntoIter = std::slice::Iter<'g, Group<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Case-insensitive match of `search` against an entry's title or content.
/// An empty search matches everything; code is never searched.
pub fn matches_search(entry: &Entry, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    entry.title.to_lowercase().contains(&needle) || entry.content.to_lowercase().contains(&needle)
}

/// Runs the four pipeline steps: language filter, exclusion, search, grouping.
pub fn filter_and_group<'a>(
    entries: &'a [Entry],
    language: &str,
    search: &str,
    exclude: &HashSet<&str>,
) -> GroupedEntries<'a> {
    let mut grouped = GroupedEntries::default();
    entries
        .iter()
        .filter(|e| e.language() == language)
        .filter(|e| !exclude.contains(e.id.as_str()))
        .filter(|e| matches_search(e, search))
        .for_each(|e| grouped.push(e));
    grouped
}
