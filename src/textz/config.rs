//! # Configuration
//!
//! Saved defaults live in `config.json` inside the textz config directory. The CLI
//! resolves that directory from `TEXTZ_HOME` when set, else from the platform config
//! dir (via the `directories` crate). Flags passed on the command line always win over
//! saved values for that invocation.
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `emoji` | `""` | Prefix for `social` lines |
//! | `use-bullets` | `false` | Bullet every `social` line |
//! | `insert-spacing` | `false` | Blank line between `social` lines |
//! | `emoji-mode` | `codepoint` | `codepoint` or `cluster` for `emoji`/`strip` |
//! | `words-per-minute` | `200` | Reading speed for the reading-time estimate |

use crate::error::{Result, TextzError};
use crate::model::{EmojiMode, SocialFormatOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

pub const KEYS: &[&str] = &[
    "emoji",
    "use-bullets",
    "insert-spacing",
    "emoji-mode",
    "words-per-minute",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TextzConfig {
    #[serde(default)]
    pub emoji: String,

    #[serde(default)]
    pub use_bullets: bool,

    #[serde(default)]
    pub insert_spacing: bool,

    #[serde(default)]
    pub emoji_mode: EmojiMode,

    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
}

fn default_words_per_minute() -> u32 {
    DEFAULT_WORDS_PER_MINUTE
}

impl Default for TextzConfig {
    fn default() -> Self {
        Self {
            emoji: String::new(),
            use_bullets: false,
            insert_spacing: false,
            emoji_mode: EmojiMode::default(),
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl TextzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TextzConfig = serde_json::from_str(&content)?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&config_path, content)?;
        debug!(path = %config_path.display(), "saved config");
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match normalize_key(key).as_str() {
            "emoji" => Some(self.emoji.clone()),
            "use-bullets" => Some(self.use_bullets.to_string()),
            "insert-spacing" => Some(self.insert_spacing.to_string()),
            "emoji-mode" => Some(self.emoji_mode.to_string()),
            "words-per-minute" => Some(self.words_per_minute.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match normalize_key(key).as_str() {
            "emoji" => self.emoji = value.trim().to_string(),
            "use-bullets" => self.use_bullets = parse_bool(key, value)?,
            "insert-spacing" => self.insert_spacing = parse_bool(key, value)?,
            "emoji-mode" => self.emoji_mode = value.parse().map_err(TextzError::Config)?,
            "words-per-minute" => {
                self.words_per_minute = match value.trim().parse::<u32>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(TextzError::Config(format!(
                            "Invalid value for {}: '{}' (expected a positive number)",
                            key, value
                        )))
                    }
                }
            }
            _ => return Err(TextzError::Config(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    /// Entries in display order, as (key, value) pairs.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }

    pub fn social_options(&self) -> SocialFormatOptions {
        SocialFormatOptions::new(self.emoji.clone(), self.use_bullets, self.insert_spacing)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase().replace('_', "-")
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(TextzError::Config(format!(
            "Invalid value for {}: '{}' (expected true or false)",
            key, value
        ))),
    }
}
