//! CLI configuration persistence
//!
//! Stored as `config.json` in the data directory. Missing or unreadable
//! files fall back to defaults so the CLI always starts.

use crate::colors::DEFAULT_GRAY;
use crate::utils::{ensure_dirs, get_data_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";

/// Upper bound for `page_size`; larger values are clamped on load.
pub const MAX_PAGE_SIZE: usize = 500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Records per page for `list` when `--page-size` is not given
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Write logs to the state directory instead of stderr
    #[serde(default)]
    pub log_to_file: bool,
    /// Color used when a member has no valid profile color
    #[serde(default = "default_color")]
    pub default_color: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            log_to_file: false,
            default_color: default_color(),
        }
    }
}

fn default_page_size() -> usize {
    10
}

fn default_color() -> String {
    DEFAULT_GRAY.to_string()
}

impl AppConfig {
    fn normalized(mut self) -> Self {
        self.page_size = self.page_size.clamp(1, MAX_PAGE_SIZE);
        if !crate::validators::is_valid_hex_color(&self.default_color) {
            tracing::warn!(
                "Ignoring invalid default_color {:?} in config",
                self.default_color
            );
            self.default_color = default_color();
        }
        self
    }
}

pub fn config_path() -> Option<PathBuf> {
    get_data_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Saves the config to `path` using an atomic write pattern.
/// 1. Writes to a temporary file next to the target.
/// 2. Sets restrictive permissions (0o600) on Unix.
/// 3. Atomically renames to the target path.
pub async fn save_config_to(path: &Path, config: &AppConfig) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    let temp_path = path.with_extension("json.tmp");

    #[cfg(unix)]
    {
        use tokio::fs::OpenOptions;
        use tokio::io::AsyncWriteExt;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .mode(0o600) // Set permissions BEFORE any data is written
            .open(&temp_path)
            .await?;

        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    #[cfg(not(unix))]
    {
        use tokio::io::AsyncWriteExt;

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.sync_all().await?;
    }

    tokio::fs::rename(&temp_path, path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::StorageFull {
            std::io::Error::new(
                std::io::ErrorKind::StorageFull,
                "Disk full: cannot save configuration. Free up space and try again.",
            )
        } else {
            e
        }
    })
}

/// Loads the config from `path`, or returns defaults if it is missing or
/// does not parse.
pub async fn load_config_from(path: &Path) -> AppConfig {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => match serde_json::from_str::<AppConfig>(&json) {
            Ok(config) => config.normalized(),
            Err(e) => {
                tracing::warn!("Config at {} is invalid, using defaults: {e}", path.display());
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

/// Saves to the XDG data directory, creating it if needed. No-op when no
/// home directory is known.
pub async fn save_config(config: &AppConfig) -> std::io::Result<()> {
    match config_path() {
        Some(path) => {
            ensure_dirs()?;
            save_config_to(&path, config).await
        }
        None => Ok(()),
    }
}

pub async fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path).await,
        None => AppConfig::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("nope.json")).await;
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.page_size, 10);
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = AppConfig {
            page_size: 25,
            log_to_file: true,
            default_color: "#16A34A".to_string(),
        };

        save_config_to(&path, &config).await.unwrap();
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(load_config_from(&path).await, config);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_saved_config_is_private() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        save_config_to(&path, &AppConfig::default()).await.unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_partial_and_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, r#"{"page_size": 0, "default_color": "teal"}"#)
            .await
            .unwrap();

        let config = load_config_from(&path).await;
        assert_eq!(config.page_size, 1);
        assert_eq!(config.default_color, DEFAULT_GRAY);
        assert!(!config.log_to_file);
    }

    #[tokio::test]
    async fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        tokio::fs::write(&path, "{not json").await.unwrap();
        assert_eq!(load_config_from(&path).await, AppConfig::default());
    }
}
