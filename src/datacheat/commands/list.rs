use crate::catalog::Catalog;
use crate::commands::{CardGroup, CmdResult};
use crate::error::Result;
use crate::model::Language;
use crate::pipeline::filter_and_group;

/// Grouped cards for one language, plus that language's quick-access entries.
pub fn run(catalog: &Catalog, language: Language, search: &str) -> Result<CmdResult> {
    let exclude = catalog.shortcut_ids();
    let grouped = filter_and_group(catalog.entries(), language.prefix(), search, &exclude);
    let shortcuts = catalog.shortcuts(language).into_iter().cloned().collect();

    Ok(CmdResult::default()
        .with_groups(CardGroup::from_grouped(catalog, language, &grouped))
        .with_shortcuts(shortcuts))
}
