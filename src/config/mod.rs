use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::{
    currency::{CurrencyCode, LocaleConfig},
    errors::{InventoryError, Result},
    utils::persistence::write_json_atomic,
};

const DEFAULT_DIR_NAME: &str = ".hogar_core";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_OUTPUT: &str = "data/inventario_completo.json";

pub const HOME_ENV: &str = "HOGAR_CORE_HOME";
pub const CONFIG_ENV: &str = "HOGAR_CORE_CONFIG";
pub const OUTPUT_ENV: &str = "HOGAR_CORE_OUTPUT";
pub const PLAIN_ENV: &str = "HOGAR_CORE_PLAIN";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub locale: String,
    pub currency: String,
    pub output_path: PathBuf,
    pub plain_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "es-MX".into(),
            currency: "MXN".into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            plain_mode: false,
        }
    }
}

impl Config {
    /// Applies `HOGAR_CORE_OUTPUT` and `HOGAR_CORE_PLAIN` from `lookup` on top of the file values.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(output) = lookup(OUTPUT_ENV).filter(|value| !value.trim().is_empty()) {
            self.output_path = PathBuf::from(output);
        }
        if let Some(plain) = lookup(PLAIN_ENV) {
            self.plain_mode = is_truthy(&plain);
        }
        self
    }

    pub fn currency_code(&self) -> CurrencyCode {
        CurrencyCode::new(self.currency.as_str())
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale)
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Base directory for user-level files, defaulting to `~/.hogar_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Loads and stores [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolves the config path from `HOGAR_CORE_CONFIG`, falling back to the app data dir.
    pub fn from_env() -> Self {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| app_data_dir().join(CONFIG_FILE));
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns defaults when the file does not exist.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        serde_json::from_str(&data).map_err(|err| {
            InventoryError::Config(format!("{}: {}", self.path.display(), err))
        })
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        write_json_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("config.json"));
        let config = manager.load().expect("load defaults");
        assert_eq!(config, Config::default());
        assert_eq!(
            config.output_path,
            PathBuf::from("data/inventario_completo.json")
        );
    }

    #[test]
    fn persists_and_reloads() {
        let dir = tempdir().unwrap();
        let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));
        let config = Config {
            currency: "EUR".into(),
            plain_mode: true,
            ..Config::default()
        };
        manager.save(&config).expect("save config");
        assert_eq!(manager.load().expect("reload"), config);
    }

    #[test]
    fn failed_save_leaves_no_staging_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::create_dir_all(&path).unwrap();
        let manager = ConfigManager::new(path.clone());
        assert!(manager.save(&Config::default()).is_err());
        assert!(!dir.path().join("config.json.tmp").exists());
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"currency": "USD"}"#).unwrap();
        let config = ConfigManager::new(path).load().unwrap();
        assert_eq!(config.currency, "USD");
        assert_eq!(config.locale, "es-MX");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "[1, 2").unwrap();
        let err = ConfigManager::new(path).load().unwrap_err();
        assert!(matches!(err, InventoryError::Config(_)), "got {err:?}");
    }

    #[test]
    fn overrides_replace_output_and_plain_mode() {
        let config = Config::default().with_overrides(|key| match key {
            OUTPUT_ENV => Some("out/snapshot.json".into()),
            PLAIN_ENV => Some("TRUE".into()),
            _ => None,
        });
        assert_eq!(config.output_path, PathBuf::from("out/snapshot.json"));
        assert!(config.plain_mode);

        let untouched = Config::default().with_overrides(|_| None);
        assert_eq!(untouched, Config::default());
    }
}
