//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for every datacheat operation, whichever client is driving.
//!
//! The facade dispatches to `commands/*.rs`, parses loosely-typed input (a
//! language name typed on a command line) into core types, and returns
//! `Result<CmdResult>`. It never prints and never formats.
//!
//! The interactive session does not go through here: it drives
//! [`crate::shell::Shell`] directly, which owns its own state. Both paths share
//! the same catalog and pipeline.

use crate::catalog::Catalog;
use crate::commands;
use crate::error::Result;
use crate::model::Language;
use std::path::{Path, PathBuf};

pub struct CheatApi<'c> {
    catalog: &'c Catalog,
    config_dir: PathBuf,
}

impl<'c> CheatApi<'c> {
    pub fn new(catalog: &'c Catalog, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            config_dir: config_dir.into(),
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn list(&self, language: Language, search: &str) -> Result<CmdResult> {
        commands::list::run(self.catalog, language, search)
    }

    pub fn search(&self, term: &str, language: Option<Language>) -> Result<CmdResult> {
        commands::search::run(self.catalog, term, language)
    }

    pub fn view<I: AsRef<str>>(&self, ids: &[I]) -> Result<CmdResult> {
        commands::view::run(self.catalog, ids)
    }

    pub fn shortcuts(&self, language: Language) -> Result<CmdResult> {
        commands::quick::list(self.catalog, language)
    }

    pub fn open_shortcut(&self, language: Language, id: &str) -> Result<CmdResult> {
        commands::quick::open(self.catalog, language, id)
    }

    pub fn languages(&self) -> Result<CmdResult> {
        commands::languages::run(self.catalog)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

/// Parses a user-typed language name, e.g. `"pq"` or `"DAX"`.
pub fn parse_language(input: &str) -> Result<Language> {
    input.parse()
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CardGroup, CmdMessage, CmdResult, LanguageSummary, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;
    use crate::error::DataCheatError;
    use tempfile::tempdir;

    #[test]
    fn list_and_search_dispatch() {
        let catalog = catalog();
        let api = CheatApi::new(&catalog, "/unused");

        assert_eq!(api.list(Language::Sql, "").unwrap().card_count(), 2);
        assert_eq!(api.search("rows", None).unwrap().card_count(), 1);
        assert_eq!(api.shortcuts(Language::Sql).unwrap().shortcuts.len(), 1);
        assert_eq!(api.languages().unwrap().languages.len(), 3);
    }

    #[test]
    fn view_and_open() {
        let catalog = catalog();
        let api = CheatApi::new(&catalog, "/unused");
        assert_eq!(api.view(&["b"]).unwrap().entries[0].title, "Joins");
        assert_eq!(
            api.open_shortcut(Language::Sql, "idx").unwrap().entries[0].id,
            "idx"
        );
        assert!(matches!(
            api.view(&["zzz"]),
            Err(DataCheatError::EntryNotFound(_))
        ));
    }

    #[test]
    fn config_uses_the_api_dir() {
        let dir = tempdir().unwrap();
        let catalog = catalog();
        let api = CheatApi::new(&catalog, dir.path());
        api.config(ConfigAction::Set("loading-delay-ms".into(), "0".into()))
            .unwrap();
        let shown = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(shown.config.map(|c| c.loading_delay_ms), Some(0));
    }

    #[test]
    fn parses_language_names() {
        assert_eq!(parse_language("pq").unwrap(), Language::PowerQuery);
        assert!(parse_language("klingon").is_err());
    }
}
