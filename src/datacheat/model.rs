use crate::error::DataCheatError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Separator between the language segment and the subtag of a category key.
pub const CATEGORY_SEPARATOR: char = '-';

/// The three languages covered by the cheatsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Sql,
    PowerQuery,
    Dax,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::Sql, Language::PowerQuery, Language::Dax];

    /// The category prefix owned by this language (`sql` in `sql-basics`).
    pub fn prefix(&self) -> &'static str {
        match self {
            Language::Sql => "sql",
            Language::PowerQuery => "powerquery",
            Language::Dax => "dax",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::Sql => "SQL",
            Language::PowerQuery => "Power Query",
            Language::Dax => "DAX",
        }
    }

    /// Name of the syntax definition that highlights this language's snippets.
    pub fn syntax_name(&self) -> &'static str {
        match self {
            Language::Sql => "SQL",
            Language::PowerQuery => "Power Query M",
            Language::Dax => "DAX",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.prefix() == prefix)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

impl FromStr for Language {
    type Err = DataCheatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sql" => Ok(Language::Sql),
            "powerquery" | "power-query" | "power_query" | "pq" | "m" => Ok(Language::PowerQuery),
            "dax" => Ok(Language::Dax),
            _ => Err(DataCheatError::UnknownLanguage(s.to_string())),
        }
    }
}

/// Returns the language segment of a category key: everything before the
/// first separator (the whole key when there is none).
pub fn language_segment(category: &str) -> &str {
    category
        .split_once(CATEGORY_SEPARATOR)
        .map_or(category, |(lang, _)| lang)
}

/// One cheatsheet item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub category: String,
    /// Label of the quick-access control that surfaces this entry. Entries
    /// with a shortcut are kept out of the grouped grid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,
}

impl Entry {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            code: None,
            category: category.into(),
            shortcut: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_shortcut(mut self, label: impl Into<String>) -> Self {
        self.shortcut = Some(label.into());
        self
    }

    /// The language segment of this entry's category.
    pub fn language(&self) -> &str {
        language_segment(&self.category)
    }

    pub fn is_shortcut(&self) -> bool {
        self.shortcut.is_some()
    }
}

/// A category key together with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    pub key: String,
    pub label: String,
}

/// The closed, ordered set of categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Taxonomy {
    categories: Vec<CategoryDef>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, key: &str, label: &str) -> Self {
        self.categories.push(CategoryDef {
            key: key.to_string(),
            label: label.to_string(),
        });
        self
    }

    pub fn builtin() -> Self {
        Self::new()
            .add("sql-basics", "SQL Basics")
            .add("sql-advanced", "SQL Advanced")
            .add("sql-functions", "SQL Functions")
            .add("sql-optimization", "SQL Optimization")
            .add("powerquery-basics", "Power Query Basics")
            .add("powerquery-advanced", "Power Query Advanced")
            .add("powerquery-functions", "Power Query Functions")
            .add("dax-basics", "DAX Basics")
            .add("dax-advanced", "DAX Advanced")
            .add("dax-functions", "DAX Functions")
    }

    pub fn contains(&self, key: &str) -> bool {
        self.categories.iter().any(|c| c.key == key)
    }

    /// Display label for a key; `None` for keys outside the taxonomy.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.categories
            .iter()
            .find(|c| c.key == key)
            .map(|c| c.label.as_str())
    }

    pub fn categories(&self) -> &[CategoryDef] {
        &self.categories
    }

    pub fn for_language<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a CategoryDef> {
        self.categories
            .iter()
            .filter(move |c| language_segment(&c.key) == prefix)
    }
}
