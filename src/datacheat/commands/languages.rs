use crate::catalog::Catalog;
use crate::commands::{CategorySummary, CmdResult, LanguageSummary};
use crate::error::Result;
use crate::model::Language;

/// Every language with its taxonomy categories and entry counts. Categories
/// without entries are still listed.
pub fn run(catalog: &Catalog) -> Result<CmdResult> {
    let languages = Language::ALL
        .into_iter()
        .map(|language| LanguageSummary {
            language,
            label: language.label().to_string(),
            count: catalog.count_for_language(language),
            categories: catalog
                .taxonomy()
                .for_language(language.prefix())
                .map(|def| CategorySummary {
                    key: def.key.clone(),
                    label: def.label.clone(),
                    count: catalog.count_in_category(&def.key),
                })
                .collect(),
        })
        .collect();
    Ok(CmdResult::default().with_languages(languages))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;

    #[test]
    fn summarises_each_language() {
        let catalog = catalog();
        let result = run(&catalog).unwrap();
        assert_eq!(result.languages.len(), 3);

        let sql = &result.languages[0];
        assert_eq!(sql.label, "SQL");
        assert_eq!(sql.count, 3);
        assert_eq!(sql.categories.len(), 4);
        assert_eq!(sql.categories[0].count, 2);
        assert_eq!(sql.categories[3].key, "sql-optimization");
        assert_eq!(sql.categories[3].count, 0);

        assert_eq!(result.languages[1].label, "Power Query");
        assert_eq!(result.languages[2].count, 1);
    }
}
