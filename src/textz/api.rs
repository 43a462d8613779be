//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for all textz operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Resolves options**: per-call overrides first, saved [`TextzConfig`] values second
//! - **Returns structured types** ([`CmdResult`]), never strings meant for a terminal
//!
//! Text operations cannot fail and return `CmdResult` directly. Only config actions,
//! which touch the filesystem, return `Result`.
//!
//! An unreadable or corrupt `config.json` does not stop text operations: the facade
//! logs a warning, runs on defaults, and attaches a warning message to each result.
//! Config actions still load the file themselves and report the error.

use crate::commands::{self, config::ConfigAction, CmdMessage, CmdResult};
use crate::config::TextzConfig;
use crate::error::Result;
use crate::model::{EmojiMode, SocialFormatOptions};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Per-call overrides for the social formatter. `None` falls back to the config.
#[derive(Debug, Clone, Default)]
pub struct SocialOverrides {
    pub emoji: Option<String>,
    pub use_bullets: Option<bool>,
    pub insert_spacing: Option<bool>,
}

pub struct TextzApi {
    config: TextzConfig,
    config_dir: PathBuf,
    config_warning: Option<String>,
}

impl TextzApi {
    /// Builds the API with the config saved in `config_dir`. Defaults are used when the
    /// file is absent or cannot be loaded.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        let config_dir = config_dir.into();
        let (config, config_warning) = match TextzConfig::load(&config_dir) {
            Ok(config) => (config, None),
            Err(e) => {
                warn!(
                    config_dir = %config_dir.display(),
                    error = %e,
                    "config not loaded, using defaults"
                );
                (
                    TextzConfig::default(),
                    Some(format!("Config not loaded ({}), using defaults", e)),
                )
            }
        };
        Self {
            config,
            config_dir,
            config_warning,
        }
    }

    pub fn with_config(config: TextzConfig, config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            config_dir: config_dir.into(),
            config_warning: None,
        }
    }

    pub fn config(&self) -> &TextzConfig {
        &self.config
    }

    pub fn analyze(&self, text: &str) -> CmdResult {
        self.annotate(commands::stats::run(text, self.config.words_per_minute))
    }

    pub fn extract_emoji(&self, text: &str, mode: Option<EmojiMode>, tally: bool) -> CmdResult {
        self.annotate(commands::emoji::run_extract(
            text,
            self.emoji_mode(mode),
            tally,
        ))
    }

    pub fn strip_emoji(&self, text: &str, mode: Option<EmojiMode>) -> CmdResult {
        self.annotate(commands::emoji::run_remove(text, self.emoji_mode(mode)))
    }

    pub fn format_social(&self, text: &str, overrides: &SocialOverrides) -> CmdResult {
        self.annotate(commands::social::run(text, &self.social_options(overrides)))
    }

    /// Formats `text`, then analyzes the formatted output.
    pub fn format_and_analyze(&self, text: &str, overrides: &SocialOverrides) -> CmdResult {
        let formatted = commands::social::format(text, &self.social_options(overrides));
        let analyzed = self.analyze(&formatted);
        CmdResult {
            text: Some(formatted),
            ..analyzed
        }
    }

    /// Runs a config action. After a successful `Set` the in-memory config is refreshed.
    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.config_dir, action)?;
        if is_set {
            if let Some(config) = &result.config {
                debug!("refreshing in-memory config");
                self.config = config.clone();
                self.config_warning = None;
            }
        }
        Ok(result)
    }

    pub fn social_options(&self, overrides: &SocialOverrides) -> SocialFormatOptions {
        let defaults = self.config.social_options();
        SocialFormatOptions {
            emoji: overrides.emoji.clone().unwrap_or(defaults.emoji),
            use_bullets: overrides.use_bullets.unwrap_or(defaults.use_bullets),
            insert_spacing: overrides.insert_spacing.unwrap_or(defaults.insert_spacing),
        }
    }

    fn emoji_mode(&self, mode: Option<EmojiMode>) -> EmojiMode {
        mode.unwrap_or(self.config.emoji_mode)
    }

    fn annotate(&self, mut result: CmdResult) -> CmdResult {
        if let Some(warning) = &self.config_warning {
            result.add_message(CmdMessage::warning(warning.clone()));
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn api_with(config: TextzConfig) -> TextzApi {
        TextzApi::with_config(config, std::env::temp_dir().join("textz-api-unused"))
    }

    #[test]
    fn overrides_beat_config() {
        let api = api_with(TextzConfig {
            emoji: "🔥".into(),
            use_bullets: true,
            ..Default::default()
        });
        let overrides = SocialOverrides {
            emoji: Some(String::new()),
            use_bullets: None,
            insert_spacing: Some(true),
        };
        assert_eq!(
            api.social_options(&overrides),
            SocialFormatOptions::new("", true, true)
        );
    }

    #[test]
    fn format_social_uses_config_defaults() {
        let api = api_with(TextzConfig {
            emoji: "✨".into(),
            use_bullets: true,
            ..Default::default()
        });
        let result = api.format_social("a\nb", &SocialOverrides::default());
        assert_eq!(result.text.as_deref(), Some("• ✨ a\n• ✨ b"));
    }

    #[test]
    fn emoji_mode_falls_back_to_config() {
        let family = "\u{1F468}\u{200D}\u{1F469}";
        let api = api_with(TextzConfig {
            emoji_mode: EmojiMode::Cluster,
            ..Default::default()
        });
        assert_eq!(api.extract_emoji(family, None, false).emojis.map(|e| e.len()), Some(1));
        assert_eq!(
            api.extract_emoji(family, Some(EmojiMode::CodePoint), false)
                .emojis
                .map(|e| e.len()),
            Some(2)
        );
        assert_eq!(api.strip_emoji(family, None).text.as_deref(), Some(""));
    }

    #[test]
    fn format_and_analyze_measures_formatted_output() {
        let api = api_with(TextzConfig::default());
        let overrides = SocialOverrides {
            emoji: None,
            use_bullets: Some(true),
            insert_spacing: Some(true),
        };
        let result = api.format_and_analyze("one\ntwo", &overrides);
        assert_eq!(result.text.as_deref(), Some("• one\n\n• two"));
        let stats = result.stats.unwrap();
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.words, 4);
        assert!(result.reading_time_secs.is_some());
    }

    #[test]
    fn configure_set_refreshes_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut api = TextzApi::new(dir.path());
        api.configure(ConfigAction::Set("emoji".into(), "🎉".into()))
            .unwrap();
        assert_eq!(api.config().emoji, "🎉");

        let reloaded = TextzApi::new(dir.path());
        assert_eq!(reloaded.config().emoji, "🎉");
    }

    #[test]
    fn corrupt_config_falls_back_for_text_operations() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.json"), "{not json").unwrap();

        let mut api = TextzApi::new(dir.path());
        assert_eq!(api.config(), &TextzConfig::default());

        let result = api.analyze("hello world");
        assert_eq!(result.stats.as_ref().map(|s| s.words), Some(2));
        assert_eq!(result.messages.len(), 1);
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert!(!result.has_errors());

        assert!(api.configure(ConfigAction::ShowAll).is_err());
    }

    #[test]
    fn readable_config_adds_no_messages() {
        let dir = tempfile::tempdir().unwrap();
        let api = TextzApi::new(dir.path());
        assert!(api.strip_emoji("ok 🚀", None).messages.is_empty());
    }
}
