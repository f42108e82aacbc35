use crate::catalog::Catalog;
use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::model::Language;

/// Searches one language, or every language in order when none is given.
pub fn run(catalog: &Catalog, term: &str, language: Option<Language>) -> Result<CmdResult> {
    if let Some(language) = language {
        return list::run(catalog, language, term);
    }

    let mut groups = Vec::new();
    for language in Language::ALL {
        groups.extend(list::run(catalog, language, term)?.groups);
    }
    Ok(CmdResult::default().with_groups(groups))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;

    #[test]
    fn searches_all_languages_in_order() {
        let catalog = catalog();
        let result = run(&catalog, "join", None).unwrap();
        let found: Vec<_> = result
            .groups
            .iter()
            .map(|g| (g.language, g.entries[0].id.as_str()))
            .collect();
        assert_eq!(found, vec![(Language::Sql, "b"), (Language::Dax, "d")]);
        assert!(result.shortcuts.is_empty());
    }

    #[test]
    fn scoped_search_behaves_like_list() {
        let catalog = catalog();
        let result = run(&catalog, "join", Some(Language::Dax)).unwrap();
        assert_eq!(result.card_count(), 1);
        assert_eq!(result.groups[0].category, "dax-basics");
    }

    #[test]
    fn never_matches_quick_access_entries() {
        let catalog = catalog();
        let result = run(&catalog, "quick reference", None).unwrap();
        assert!(result.groups.is_empty());
    }
}
