use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{DataCheatError, Result};

/// Resolves ids to entries. Unknown ids become error messages as long as at
/// least one id resolves; otherwise the whole call fails.
pub fn run<I: AsRef<str>>(catalog: &Catalog, ids: &[I]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut missing = Vec::new();

    for id in ids {
        let id = id.as_ref();
        match catalog.get(id) {
            Some(entry) => result.entries.push(entry.clone()),
            None => missing.push(id.to_string()),
        }
    }

    if result.entries.is_empty() {
        return Err(DataCheatError::EntryNotFound(missing.join(", ")));
    }
    for id in missing {
        result.add_message(CmdMessage::error(format!("No entry with id '{}'", id)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::catalog;
    use crate::commands::MessageLevel;

    #[test]
    fn views_entries_in_requested_order() {
        let catalog = catalog();
        let result = run(&catalog, &["c", "a"]).unwrap();
        let ids: Vec<_> = result.entries.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn quick_access_entries_can_be_viewed() {
        let catalog = catalog();
        let result = run(&catalog, &["idx"]).unwrap();
        assert_eq!(result.entries[0].title, "Function Index");
    }

    #[test]
    fn partial_miss_reports_an_error_message() {
        let catalog = catalog();
        let result = run(&catalog, &["a", "nope"]).unwrap();
        assert_eq!(result.entries.len(), 1);
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("nope"));
    }

    #[test]
    fn total_miss_is_an_error() {
        let catalog = catalog();
        let err = run(&catalog, &["x", "y"]).unwrap_err();
        assert!(matches!(err, DataCheatError::EntryNotFound(ref ids) if ids == "x, y"));
    }
}
