//! Configuration System
//!
//! Handles loading configuration from TOML and environment variables.
//! Every key has a default, so an empty file is a valid configuration.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::primitives::SeededGenerator;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub dashboard: DashboardConfig,

    #[serde(default)]
    pub heatmap: HeatmapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Navigation shell configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DashboardConfig {
    #[serde(default = "default_product_title")]
    pub product_title: String,

    /// Page title for paths outside the route table
    #[serde(default = "default_product_title")]
    pub fallback_title: String,

    #[serde(default = "default_sidebar_open")]
    pub sidebar_open: bool,

    pub logo_url: Option<String>,
}

fn default_product_title() -> String {
    "Global AI Business Control Center".to_string()
}

fn default_sidebar_open() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            product_title: default_product_title(),
            fallback_title: default_product_title(),
            sidebar_open: default_sidebar_open(),
            logo_url: None,
        }
    }
}

/// Intensity grid generator configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HeatmapConfig {
    #[serde(default = "default_seed")]
    pub seed: u64,

    #[serde(default = "default_floor")]
    pub floor: u8,

    #[serde(default = "default_ceiling")]
    pub ceiling: u8,
}

fn default_seed() -> u64 {
    1337
}

fn default_floor() -> u8 {
    30
}

fn default_ceiling() -> u8 {
    99
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            floor: default_floor(),
            ceiling: default_ceiling(),
        }
    }
}

impl HeatmapConfig {
    pub fn generator(&self) -> SeededGenerator {
        SeededGenerator::new(self.seed).range(self.floor, self.ceiling)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `control_center=debug`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for colored console output, `compact` for plain
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        Self::load_first(&Self::search_paths(), |key| std::env::var(key).ok())
    }

    /// Config files tried by [`Config::load_default`], in order
    pub fn search_paths() -> Vec<PathBuf> {
        [
            dirs::config_dir().map(|p| p.join("control-center").join("config.toml")),
            Some(PathBuf::from("./control-center.toml")),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn load_first(paths: &[PathBuf], lookup: impl Fn(&str) -> Option<String>) -> Self {
        for path in paths {
            if path.exists() {
                match Self::load(path) {
                    Ok(mut config) => {
                        config.apply_overrides(&lookup);
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        let mut config = Config::default();
        config.apply_overrides(&lookup);
        config
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(title) = lookup("CONTROL_CENTER_PRODUCT_TITLE") {
            self.dashboard.product_title = title;
        }
        if let Some(seed) = lookup("CONTROL_CENTER_HEATMAP_SEED") {
            match seed.parse() {
                Ok(s) => self.heatmap.seed = s,
                Err(_) => tracing::warn!("Ignoring invalid CONTROL_CENTER_HEATMAP_SEED {:?}", seed),
            }
        }
        if let Some(level) = lookup("CONTROL_CENTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CONTROL_CENTER_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse {
        path: Option<PathBuf>,
        error: String,
    },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Control Center Configuration
#
# Environment variables override these settings:
# - CONTROL_CENTER_PRODUCT_TITLE
# - CONTROL_CENTER_HEATMAP_SEED
# - CONTROL_CENTER_LOG_LEVEL
# - CONTROL_CENTER_LOG_FORMAT

[dashboard]
# Shown in the header
product_title = "Global AI Business Control Center"

# Page title for paths outside the route table
fallback_title = "Global AI Business Control Center"

# Side navigation visible on load
sidebar_open = true

# Optional brand logo shown beside the page title
# logo_url = "/assets/logo.svg"

[heatmap]
# Same seed, same grid
seed = 1337

# Inclusive intensity range in percent
floor = 30
ceiling = 99

[logging]
# EnvFilter directive: trace, debug, info, warn, error
level = "info"

# Console output: pretty (colored) or compact (plain)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config = Config::from_toml_str(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_shipped_config_matches_defaults() {
        let config = Config::from_toml_str(include_str!("../control-center.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = Config::from_toml_str("").unwrap();
        assert!(config.dashboard.sidebar_open);
        assert_eq!(config.heatmap.seed, 1337);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml_str(
            r#"
            [dashboard]
            sidebar_open = false
            logo_url = "/logo.svg"

            [heatmap]
            seed = 42
            "#,
        )
        .unwrap();
        assert!(!config.dashboard.sidebar_open);
        assert_eq!(config.dashboard.logo_url.as_deref(), Some("/logo.svg"));
        assert_eq!(config.heatmap.seed, 42);
        assert_eq!(config.heatmap.floor, 30);
        assert_eq!(config.heatmap.generator(), SeededGenerator::new(42));
    }

    #[test]
    fn test_invalid_config() {
        let err = Config::from_toml_str("[heatmap]\nseed = \"abc\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_search_paths_end_with_working_dir() {
        let paths = Config::search_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("./control-center.toml")));
        if let Some(dir) = dirs::config_dir() {
            assert_eq!(paths[0], dir.join("control-center").join("config.toml"));
        }
    }

    #[test]
    fn test_load_first_skips_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.toml");
        let local = dir.path().join("control-center.toml");
        std::fs::write(&broken, "[heatmap\nseed = 1").unwrap();
        std::fs::write(&local, "[heatmap]\nseed = 7").unwrap();

        let paths = vec![dir.path().join("missing.toml"), broken, local];
        let config = Config::load_first(&paths, |key| {
            (key == "CONTROL_CENTER_PRODUCT_TITLE").then(|| "Ops Control".to_string())
        });

        assert_eq!(config.heatmap.seed, 7);
        assert_eq!(config.dashboard.product_title, "Ops Control");
    }

    #[test]
    fn test_load_first_falls_back_to_env() {
        let dir = tempfile::tempdir().unwrap();
        let paths = vec![dir.path().join("control-center.toml")];
        let config = Config::load_first(&paths, |key| {
            (key == "CONTROL_CENTER_HEATMAP_SEED").then(|| "99".to_string())
        });

        assert_eq!(config.heatmap.seed, 99);
        assert_eq!(config.dashboard, DashboardConfig::default());
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CONTROL_CENTER_PRODUCT_TITLE", "Ops Control"),
            ("CONTROL_CENTER_HEATMAP_SEED", "not-a-number"),
            ("CONTROL_CENTER_LOG_LEVEL", "trace"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.dashboard.product_title, "Ops Control");
        assert_eq!(config.dashboard.fallback_title, "Global AI Business Control Center");
        assert_eq!(config.heatmap.seed, 1337);
        assert_eq!(config.logging.level, "trace");
    }
}
