use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Counts produced by [`crate::commands::stats::analyze`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStats {
    pub chars_with_spaces: usize,
    pub chars_without_spaces: usize,
    pub words: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub lines: usize,
    pub graphemes: usize,
}

impl TextStats {
    /// Estimated reading time in seconds at `words_per_minute`.
    pub fn reading_time_secs(&self, words_per_minute: u32) -> f64 {
        if self.words == 0 || words_per_minute == 0 {
            return 0.0;
        }
        self.words as f64 / f64::from(words_per_minute) * 60.0
    }
}

/// How emoji are grouped when extracted or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmojiMode {
    /// One unit per matching code point. Modifiers and joiners are not merged.
    #[default]
    CodePoint,
    /// One unit per grapheme cluster that holds a matching code point.
    Cluster,
}

impl fmt::Display for EmojiMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmojiMode::CodePoint => write!(f, "codepoint"),
            EmojiMode::Cluster => write!(f, "cluster"),
        }
    }
}

impl FromStr for EmojiMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "codepoint" | "code-point" => Ok(EmojiMode::CodePoint),
            "cluster" | "grapheme" => Ok(EmojiMode::Cluster),
            other => Err(format!(
                "Invalid emoji mode '{}': expected 'codepoint' or 'cluster'",
                other
            )),
        }
    }
}

/// One distinct emoji and how many times it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiTally {
    pub emoji: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialFormatOptions {
    /// Prefix for every line. Surrounding whitespace is ignored; empty disables it.
    pub emoji: String,
    pub use_bullets: bool,
    pub insert_spacing: bool,
}

impl SocialFormatOptions {
    pub fn new(emoji: impl Into<String>, use_bullets: bool, insert_spacing: bool) -> Self {
        Self {
            emoji: emoji.into(),
            use_bullets,
            insert_spacing,
        }
    }
}
