//! Configuration management for Gradient Feed
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, COPIED_INDICATOR_MAX_MS, COPIED_INDICATOR_MIN_MS, DEFAULT_COPIED_INDICATOR_MS,
    DEFAULT_MAX_IMAGE_BYTES, LOCAL_USER_AVATAR, LOCAL_USER_NAME,
};
use crate::icons::IconTheme;
use crate::models::Author;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub profile: ProfileConfig,
    pub feed: FeedConfig,
    pub composer: ComposerConfig,
    pub clipboard: ClipboardConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// Identity used for posts and comments written locally
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub avatar: String,
}

/// Feed configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FeedConfig {
    /// JSON file holding the startup feed (built-in posts when unset)
    pub seed_file: Option<PathBuf>,
}

/// Composer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    /// Largest image file accepted as an attachment
    pub max_image_bytes: usize,
}

/// Clipboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardConfig {
    /// Copy palette values to the system clipboard
    pub enabled: bool,
    /// How long a copied value shows "Copied!"
    pub copied_indicator_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Icon set: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// Show the avatar initial next to author names
    pub show_avatars: bool,
    /// Show post and comment timestamps
    pub show_timestamps: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: LOCAL_USER_NAME.to_string(),
            avatar: LOCAL_USER_AVATAR.to_string(),
        }
    }
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            max_image_bytes: DEFAULT_MAX_IMAGE_BYTES,
        }
    }
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            copied_indicator_ms: DEFAULT_COPIED_INDICATOR_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::Unicode,
            show_avatars: true,
            show_timestamps: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl ProfileConfig {
    pub fn author(&self) -> Author {
        Author::new(self.name.clone(), self.avatar.clone())
    }
}

impl ClipboardConfig {
    pub fn copied_window(&self) -> Duration {
        Duration::from_millis(self.copied_indicator_ms)
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("gradient-feed.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gradient-feed").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.profile.name.trim().is_empty() {
            anyhow::bail!("profile.name cannot be empty");
        }

        if self.composer.max_image_bytes == 0 {
            anyhow::bail!("composer.max_image_bytes must be greater than 0");
        }

        let window = self.clipboard.copied_indicator_ms;
        if !(COPIED_INDICATOR_MIN_MS..=COPIED_INDICATOR_MAX_MS).contains(&window) {
            anyhow::bail!(
                "copied_indicator_ms must be between {} and {}, got {}",
                COPIED_INDICATOR_MIN_MS,
                COPIED_INDICATOR_MAX_MS,
                window
            );
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Gradient Feed Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("gradient-feed"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
