use crate::catalog::Catalog;
use crate::config::DataCheatConfig;
use crate::model::{Entry, Language};
use crate::pipeline::GroupedEntries;
use serde::Serialize;

pub mod config;
pub mod languages;
pub mod list;
pub mod quick;
pub mod search;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One labelled group of cards, detached from the catalog it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardGroup {
    pub language: Language,
    pub category: String,
    pub label: String,
    pub entries: Vec<Entry>,
}

impl CardGroup {
    /// Converts pipeline output for `language` into owned, labelled groups.
    pub fn from_grouped(
        catalog: &Catalog,
        language: Language,
        grouped: &GroupedEntries<'_>,
    ) -> Vec<CardGroup> {
        grouped
            .iter()
            .map(|group| CardGroup {
                language,
                category: group.category.to_string(),
                label: catalog.label(group.category).to_string(),
                entries: group.entries.iter().map(|e| (*e).clone()).collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub key: String,
    pub label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageSummary {
    pub language: Language,
    pub label: String,
    pub count: usize,
    pub categories: Vec<CategorySummary>,
}

#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CardGroup>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<Entry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shortcuts: Vec<Entry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<DataCheatConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_groups(mut self, groups: Vec<CardGroup>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_shortcuts(mut self, shortcuts: Vec<Entry>) -> Self {
        self.shortcuts = shortcuts;
        self
    }

    pub fn with_languages(mut self, languages: Vec<LanguageSummary>) -> Self {
        self.languages = languages;
        self
    }

    pub fn with_config(mut self, config: DataCheatConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Total number of cards across all groups.
    pub fn card_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }
}
