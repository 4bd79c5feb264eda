//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables (`ENTIGEN_TEMPLATES_DIR`, `ENTIGEN_OUTPUT_ROOT`)
//! 3. Config file (`--config` path, else `./entigen.toml`, else the
//!    platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const TEMPLATES_DIR_ENV: &str = "ENTIGEN_TEMPLATES_DIR";
pub const OUTPUT_ROOT_ENV: &str = "ENTIGEN_OUTPUT_ROOT";

/// Name of the local configuration file searched for in the CWD.
pub const LOCAL_CONFIG_FILE: &str = "entigen.toml";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Template settings.
    pub templates: TemplatesConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Directory holding `.tpl` files.
    pub dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Root directory generated files are written under.
    pub root: PathBuf,
    pub no_color: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("templates"),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            no_color: false,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            templates: TemplatesConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicit `--config` path must exist and parse; the default
    /// locations are optional and silently skipped when absent.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut config = match config_file {
            Some(path) => Self::from_file(path)
                .with_context(|| format!("failed to load config from '{}'", path.display()))?,
            None => match Self::default_config_file() {
                Some(path) => Self::from_file(&path)
                    .with_context(|| format!("failed to load config from '{}'", path.display()))?,
                None => Self::default(),
            },
        };

        config.apply_env();
        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// First default-location config file that exists, if any.
    fn default_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return Some(local);
        }
        let global = Self::config_path();
        global.is_file().then_some(global)
    }

    /// Environment variables override file values.
    fn apply_env(&mut self) {
        if let Ok(dir) = std::env::var(TEMPLATES_DIR_ENV) {
            if !dir.is_empty() {
                self.templates.dir = PathBuf::from(dir);
            }
        }
        if let Ok(root) = std::env::var(OUTPUT_ROOT_ENV) {
            if !root.is_empty() {
                self.output.root = PathBuf::from(root);
            }
        }
    }

    /// Path to the platform configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `entigen.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "entigen", "entigen")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_cwd_relative() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.templates.dir, PathBuf::from("templates"));
        assert_eq!(cfg.output.root, PathBuf::from("."));
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/absolutely/does/not/exist/entigen.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("entigen.toml");
        std::fs::write(&path, "[templates]\ndir = \"tpl\"\n").unwrap();

        let cfg = AppConfig::from_file(&path).unwrap();
        assert_eq!(cfg.templates.dir, PathBuf::from("tpl"));
        assert_eq!(cfg.output.root, PathBuf::from("."));
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("entigen.toml");
        std::fs::write(&path, "templates = not toml [").unwrap();
        assert!(AppConfig::from_file(&path).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let toml = toml::to_string_pretty(&AppConfig::default()).unwrap();
        let back: AppConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back.templates.dir, PathBuf::from("templates"));
    }
}
