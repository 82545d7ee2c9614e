//! # Configuration
//!
//! TOML configuration for the `sillyquest` binary. Game rules (health, damage
//! ranges, odds) are fixed and deliberately absent; only session setup,
//! display and logging are configurable.
//!
//! ## Sections
//!
//! - [`GameConfig`] - RNG seed and default hero name
//! - [`DisplayConfig`] - emoji and pacing of the console shell
//! - [`LoggingConfig`] - log level and log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use sillyquest::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     Config::create_default("config.toml")?;
//!     let config = Config::load("config.toml")?;
//!     println!("seed: {:?}", config.game.seed);
//!     Ok(())
//! }
//! ```
//!
//! ## File format
//!
//! ```toml
//! [game]
//! default_name = "Clumsy Hero"
//! # seed = 42
//!
//! [display]
//! emoji = true
//! pause_between_turns = true
//!
//! [logging]
//! level = "info"
//! file = "sillyquest.log"
//! ```

use anyhow::{anyhow, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::game::session::DEFAULT_HERO_NAME;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Fixed RNG seed; unset draws a fresh one per session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Name used when the name prompt is left empty.
    #[serde(default = "default_name")]
    pub default_name: String,
}

fn default_name() -> String {
    DEFAULT_HERO_NAME.to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            default_name: default_name(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Prefix lines with emoji markers. Plain ASCII tags when false.
    #[serde(default = "default_true")]
    pub emoji: bool,
    /// Wait for Enter between encounters.
    #[serde(default = "default_true")]
    pub pause_between_turns: bool,
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            emoji: true,
            pause_between_turns: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: Some("sillyquest.log".to_string()),
        }
    }
}

impl LoggingConfig {
    /// Parsed `level`; unknown names fall back to `Info`.
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Load `path` if it exists, otherwise warn and use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            warn!(
                "Config file {} not found, using defaults (run `sillyquest init` to create one)",
                path.display()
            );
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub fn create_default(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = toml::to_string_pretty(&Config::default())
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path.display(), e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.game.seed, None);
        assert_eq!(config.game.default_name, DEFAULT_HERO_NAME);
        assert!(config.display.emoji);
        assert!(config.display.pause_between_turns);
        assert_eq!(config.logging.file.as_deref(), Some("sillyquest.log"));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let config: Config = toml::from_str("[game]\nseed = 7\n").unwrap();
        assert_eq!(config.game.seed, Some(7));
        assert_eq!(config.game.default_name, DEFAULT_HERO_NAME);
        assert!(config.display.emoji);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_logging_section_keeps_other_defaults() {
        let config: Config = toml::from_str("[logging]\nfile = \"game.log\"\n").unwrap();
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.logging.file.as_deref(), Some("game.log"));

        let config: Config = toml::from_str("[logging]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(config.logging.level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.logging.file.as_deref(), Some("sillyquest.log"));
    }

    #[test]
    fn level_filter_parsing() {
        let mut logging = LoggingConfig::default();
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
        logging.level = "debug".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Debug);
        logging.level = "chatty".into();
        assert_eq!(logging.level_filter(), log::LevelFilter::Info);
    }
}
