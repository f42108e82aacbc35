//! # Presentation Shell
//!
//! The shell owns the mutable UI state of an interactive session and turns
//! user events into state changes. It holds four independent variables:
//!
//! - `loading`: `Pending` until the loading gate resolves, then `Ready` for good.
//! - `language`: changed only by an explicit language selection.
//! - `search`: replaced on every search event, no debouncing.
//! - `selected`: the entry shown in the detail overlay, if any.
//!
//! The overlay is dismissed by its close control or by its backdrop. An
//! activation inside the overlay content never reaches the backdrop, so it
//! leaves the selection alone.
//!
//! Rendering goes through [`Shell::view`], which re-runs the pipeline with the
//! latest language and search. The shell never filters or orders entries itself.

use crate::catalog::Catalog;
use crate::loading::LoadState;
use crate::model::{Entry, Language};
use crate::pipeline::{filter_and_group, GroupedEntries};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SelectLanguage(Language),
    Search(String),
    /// A card in the grouped grid was activated.
    ActivateCard(String),
    /// A quick-access control was activated.
    ActivateShortcut(String),
    /// The overlay's close control.
    Close,
    BackdropActivated,
    OverlayContentActivated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Unchanged,
    /// The event referred to something not on screen.
    Ignored,
}

/// What the current state renders to.
#[derive(Debug)]
pub enum ShellView<'c> {
    Loading,
    Ready(Screen<'c>),
}

#[derive(Debug)]
pub struct Screen<'c> {
    pub language: Language,
    pub search: String,
    pub groups: GroupedEntries<'c>,
    pub shortcuts: Vec<&'c Entry>,
    pub selected: Option<&'c Entry>,
}

impl<'c> Screen<'c> {
    /// The n-th card (1-based) in display order.
    pub fn card(&self, n: usize) -> Option<&'c Entry> {
        n.checked_sub(1).and_then(|i| self.groups.entries().nth(i))
    }

    /// The n-th quick-access entry (1-based).
    pub fn shortcut(&self, n: usize) -> Option<&'c Entry> {
        n.checked_sub(1).and_then(|i| self.shortcuts.get(i).copied())
    }
}

pub struct Shell<'c> {
    catalog: &'c Catalog,
    loading: LoadState,
    language: Language,
    search: String,
    selected: Option<&'c Entry>,
}

impl<'c> Shell<'c> {
    pub fn new(catalog: &'c Catalog, language: Language) -> Self {
        Self {
            catalog,
            loading: LoadState::Pending,
            language,
            search: String::new(),
            selected: None,
        }
    }

    pub fn loading(&self) -> LoadState {
        self.loading
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn selected(&self) -> Option<&'c Entry> {
        self.selected
    }

    /// One-way transition out of `Pending`.
    pub fn mark_ready(&mut self) {
        self.loading = LoadState::Ready;
    }

    pub fn handle(&mut self, event: Event) -> Outcome {
        match event {
            Event::SelectLanguage(language) => {
                let changed = language != self.language;
                self.language = language;
                changed_if(changed)
            }
            Event::Search(text) => {
                let changed = text != self.search;
                self.search = text;
                changed_if(changed)
            }
            Event::ActivateCard(id) => {
                let visible = self.groups().entries().find(|e| e.id == id);
                self.select(visible)
            }
            Event::ActivateShortcut(id) => {
                let shortcut = self
                    .catalog
                    .shortcuts(self.language)
                    .into_iter()
                    .find(|e| e.id == id);
                self.select(shortcut)
            }
            Event::Close | Event::BackdropActivated => {
                let changed = self.selected.is_some();
                self.selected = None;
                changed_if(changed)
            }
            Event::OverlayContentActivated => Outcome::Unchanged,
        }
    }

    pub fn view(&self) -> ShellView<'c> {
        if self.loading == LoadState::Pending {
            return ShellView::Loading;
        }
        ShellView::Ready(Screen {
            language: self.language,
            search: self.search.clone(),
            groups: self.groups(),
            shortcuts: self.catalog.shortcuts(self.language),
            selected: self.selected,
        })
    }

    fn groups(&self) -> GroupedEntries<'c> {
        filter_and_group(
            self.catalog.entries(),
            self.language.prefix(),
            &self.search,
            &self.catalog.shortcut_ids(),
        )
    }

    fn select(&mut self, entry: Option<&'c Entry>) -> Outcome {
        match entry {
            Some(entry) => {
                let changed = self.selected.map(|s| s.id != entry.id).unwrap_or(true);
                self.selected = Some(entry);
                changed_if(changed)
            }
            None => Outcome::Ignored,
        }
    }
}

fn changed_if(changed: bool) -> Outcome {
    if changed {
        Outcome::Changed
    } else {
        Outcome::Unchanged
    }
}
