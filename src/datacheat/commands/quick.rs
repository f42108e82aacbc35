use crate::catalog::Catalog;
use crate::commands::CmdResult;
use crate::error::{DataCheatError, Result};
use crate::model::Language;

/// Quick-access entries for `language`.
pub fn list(catalog: &Catalog, language: Language) -> Result<CmdResult> {
    let shortcuts = catalog.shortcuts(language).into_iter().cloned().collect();
    Ok(CmdResult::default().with_shortcuts(shortcuts))
}

/// Opens one quick-access entry. Only entries surfaced for `language` count.
pub fn open(catalog: &Catalog, language: Language, id: &str) -> Result<CmdResult> {
    let entry = catalog
        .shortcuts(language)
        .into_iter()
        .find(|e| e.id == id)
        .ok_or_else(|| DataCheatError::EntryNotFound(id.to_string()))?;
    Ok(CmdResult::default().with_entries(vec![entry.clone()]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;

    #[test]
    fn lists_per_language() {
        let catalog = catalog();
        assert_eq!(list(&catalog, Language::Sql).unwrap().shortcuts.len(), 1);
        assert!(list(&catalog, Language::PowerQuery)
            .unwrap()
            .shortcuts
            .is_empty());
    }

    #[test]
    fn opens_a_shortcut() {
        let catalog = catalog();
        let result = open(&catalog, Language::Sql, "idx").unwrap();
        assert_eq!(result.entries[0].id, "idx");
    }

    #[test]
    fn regular_cards_are_not_shortcuts() {
        let catalog = catalog();
        assert!(open(&catalog, Language::Sql, "a").is_err());
        assert!(open(&catalog, Language::Dax, "idx").is_err());
    }
}
