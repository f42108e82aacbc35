//! Start-up wiring: locate the config directory, load the config and build
//! the API over the built-in catalog.
//!
//! The config directory is `$DATACHEAT_CONFIG_DIR` when set (tests point it
//! at a temp dir), otherwise the platform config dir from `directories`.

use crate::api::CheatApi;
use crate::catalog;
use crate::config::DataCheatConfig;
use crate::error::{DataCheatError, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

pub const CONFIG_DIR_ENV: &str = "DATACHEAT_CONFIG_DIR";

pub struct DataCheatContext {
    pub api: CheatApi<'static>,
    pub config: DataCheatConfig,
    /// Set when the config file existed but could not be used.
    pub config_error: Option<DataCheatError>,
}

pub fn config_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "datacheat", "datacheat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| DataCheatError::Config("Could not determine config dir".to_string()))
}

/// Builds the context. A broken config file does not stop start-up; defaults
/// are used and the error is kept for the caller to report.
pub fn initialize() -> Result<DataCheatContext> {
    let dir = config_dir()?;
    let (config, config_error) = match DataCheatConfig::load(&dir) {
        Ok(config) => (config, None),
        Err(e) => (DataCheatConfig::default(), Some(e)),
    };
    let api = CheatApi::new(catalog::builtin()?, dir);

    Ok(DataCheatContext {
        api,
        config,
        config_error,
    })
}
