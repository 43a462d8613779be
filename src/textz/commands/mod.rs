use crate::config::TextzConfig;
use crate::model::{EmojiTally, TextStats};
use serde::Serialize;

pub mod config;
pub mod emoji;
pub mod social;
pub mod stats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command. The CLI decides how to present each field.
#[derive(Debug, Default, Serialize)]
pub struct CmdResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<TextStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_time_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emojis: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tallies: Option<Vec<EmojiTally>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<TextzConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    pub fn with_stats(mut self, stats: TextStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_reading_time(mut self, secs: f64) -> Self {
        self.reading_time_secs = Some(secs);
        self
    }

    pub fn with_emojis(mut self, emojis: Vec<String>) -> Self {
        self.emojis = Some(emojis);
        self
    }

    pub fn with_tallies(mut self, tallies: Vec<EmojiTally>) -> Self {
        self.tallies = Some(tallies);
        self
    }

    pub fn with_text(mut self, text: String) -> Self {
        self.text = Some(text);
        self
    }

    pub fn with_config(mut self, config: TextzConfig) -> Self {
        self.config = Some(config);
        self
    }
}
