//! # Configuration
//!
//! User preferences live in `config.json` inside the config directory (see
//! [`crate::init`] for how that directory is resolved). A missing file means
//! defaults. Keys use the same kebab-case spelling on disk and on the command
//! line.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `default-language` | `sql` | Language shown when none is given |
//! | `loading-delay-ms` | `600` | Pause before `browse` first renders (0 disables) |
//! | `preview-width` | `72` | Columns of content shown on each card |

use crate::error::{DataCheatError, Result};
use crate::loading::DEFAULT_DELAY_MS;
use crate::model::Language;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";

pub const DEFAULT_PREVIEW_WIDTH: usize = 72;
pub const MIN_PREVIEW_WIDTH: usize = 20;

/// Every settable key, in display order.
pub const KEYS: [&str; 3] = ["default-language", "loading-delay-ms", "preview-width"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct DataCheatConfig {
    #[serde(default = "default_language")]
    pub default_language: Language,

    #[serde(default = "default_delay")]
    pub loading_delay_ms: u64,

    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

fn default_language() -> Language {
    Language::Sql
}

fn default_delay() -> u64 {
    DEFAULT_DELAY_MS
}

fn default_preview_width() -> usize {
    DEFAULT_PREVIEW_WIDTH
}

impl Default for DataCheatConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            loading_delay_ms: default_delay(),
            preview_width: default_preview_width(),
        }
    }
}

impl DataCheatConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: DataCheatConfig = serde_json::from_str(&content)?;
        if config.preview_width < MIN_PREVIEW_WIDTH {
            return Err(DataCheatError::Config(format!(
                "preview-width must be at least {}",
                MIN_PREVIEW_WIDTH
            )));
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    /// Current value of `key` formatted for display; `None` for unknown keys.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-language" => Some(self.default_language.to_string()),
            "loading-delay-ms" => Some(self.loading_delay_ms.to_string()),
            "preview-width" => Some(self.preview_width.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "default-language" => {
                self.default_language = value.parse().map_err(|_| {
                    format!(
                        "Invalid language '{}' (expected sql, powerquery or dax)",
                        value
                    )
                })?;
            }
            "loading-delay-ms" => {
                self.loading_delay_ms = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid delay '{}' (expected milliseconds)", value))?;
            }
            "preview-width" => {
                let width: usize = value
                    .trim()
                    .parse()
                    .map_err(|_| format!("Invalid width '{}'", value))?;
                if width < MIN_PREVIEW_WIDTH {
                    return Err(format!(
                        "preview-width must be at least {}",
                        MIN_PREVIEW_WIDTH
                    ));
                }
                self.preview_width = width;
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for every setting.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = DataCheatConfig::default();
        assert_eq!(config.default_language, Language::Sql);
        assert_eq!(config.loading_delay_ms, 600);
        assert_eq!(config.preview_width, 72);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = DataCheatConfig::load(dir.path().join("nope")).unwrap();
        assert_eq!(config, DataCheatConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("datacheat");

        let mut config = DataCheatConfig::default();
        config.set("default-language", "dax").unwrap();
        config.set("loading-delay-ms", "0").unwrap();
        config.save(&nested).unwrap();

        let loaded = DataCheatConfig::load(&nested).unwrap();
        assert_eq!(loaded.default_language, Language::Dax);
        assert_eq!(loaded.loading_delay_ms, 0);
        assert_eq!(loaded.preview_width, DEFAULT_PREVIEW_WIDTH);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{ "default-language": "powerquery" }"#,
        )
        .unwrap();

        let config = DataCheatConfig::load(dir.path()).unwrap();
        assert_eq!(config.default_language, Language::PowerQuery);
        assert_eq!(config.loading_delay_ms, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{ not json").unwrap();
        assert!(matches!(
            DataCheatConfig::load(dir.path()),
            Err(DataCheatError::Serialization(_))
        ));
    }

    #[test]
    fn test_narrow_width_on_disk_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "preview-width": 3 }"#).unwrap();
        assert!(matches!(
            DataCheatConfig::load(dir.path()),
            Err(DataCheatError::Config(_))
        ));
    }

    #[test]
    fn test_set_rejects_unknown_key() {
        let mut config = DataCheatConfig::default();
        let err = config.set("colour", "blue").unwrap_err();
        assert!(err.contains("Unknown config key"));
        assert_eq!(config, DataCheatConfig::default());
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = DataCheatConfig::default();
        assert!(config.set("default-language", "cobol").is_err());
        assert!(config.set("loading-delay-ms", "soon").is_err());
        assert!(config.set("preview-width", "10").is_err());
        assert_eq!(config, DataCheatConfig::default());
    }

    #[test]
    fn test_get_formats_values() {
        let mut config = DataCheatConfig::default();
        config.set("default-language", "Power Query".replace(' ', "-").as_str()).unwrap();
        assert_eq!(config.get("default-language").as_deref(), Some("powerquery"));
        assert_eq!(config.get("preview-width").as_deref(), Some("72"));
        assert_eq!(config.get("nope"), None);
        assert_eq!(config.entries().len(), KEYS.len());
    }
}
