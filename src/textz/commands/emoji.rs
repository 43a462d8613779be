//! # Emoji Extraction and Removal
//!
//! A code point is an emoji when it has the Unicode `Extended_Pictographic` or
//! `Emoji_Presentation` property. That covers pictographs, dingbats, regional
//! indicators and skin-tone modifiers, but not joiners (U+200D) or variation
//! selectors (U+FE0F).
//!
//! Two granularities are offered:
//!
//! - [`EmojiMode::CodePoint`]: every matching code point is its own unit. A ZWJ family
//!   comes out as its members, and removal leaves the joiners behind.
//! - [`EmojiMode::Cluster`]: every grapheme cluster holding a matching code point is one
//!   unit, so families, flags and toned hands stay whole and are removed whole.

use crate::commands::CmdResult;
use crate::model::{EmojiMode, EmojiTally};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

static EMOJI: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\p{Extended_Pictographic}\p{Emoji_Presentation}]")
        .expect("emoji property pattern is valid")
});

/// Every emoji code point in `text`, left to right, duplicates kept.
pub fn extract(text: &str) -> Vec<String> {
    EMOJI
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// `text` with every emoji code point deleted. Everything else is kept byte for byte.
pub fn remove(text: &str) -> String {
    EMOJI.replace_all(text, "").into_owned()
}

/// Every grapheme cluster in `text` that contains an emoji code point.
pub fn extract_clusters(text: &str) -> Vec<String> {
    text.graphemes(true)
        .filter(|g| EMOJI.is_match(g))
        .map(str::to_string)
        .collect()
}

/// `text` without the grapheme clusters that contain an emoji code point.
pub fn remove_clusters(text: &str) -> String {
    text.graphemes(true).filter(|g| !EMOJI.is_match(g)).collect()
}

pub fn contains_emoji(text: &str) -> bool {
    EMOJI.is_match(text)
}

pub fn extract_with(text: &str, mode: EmojiMode) -> Vec<String> {
    match mode {
        EmojiMode::CodePoint => extract(text),
        EmojiMode::Cluster => extract_clusters(text),
    }
}

pub fn remove_with(text: &str, mode: EmojiMode) -> String {
    match mode {
        EmojiMode::CodePoint => remove(text),
        EmojiMode::Cluster => remove_clusters(text),
    }
}

/// Occurrence count per distinct emoji, in order of first appearance.
pub fn tally(text: &str, mode: EmojiMode) -> Vec<EmojiTally> {
    let mut tallies: Vec<EmojiTally> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for emoji in extract_with(text, mode) {
        match positions.get(&emoji) {
            Some(&idx) => tallies[idx].count += 1,
            None => {
                positions.insert(emoji.clone(), tallies.len());
                tallies.push(EmojiTally { emoji, count: 1 });
            }
        }
    }

    tallies
}

pub fn run_extract(text: &str, mode: EmojiMode, with_tally: bool) -> CmdResult {
    if with_tally {
        let tallies = tally(text, mode);
        debug!(%mode, distinct = tallies.len(), "tallied emoji");
        return CmdResult::default().with_tallies(tallies);
    }
    let emojis = extract_with(text, mode);
    debug!(%mode, found = emojis.len(), "extracted emoji");
    CmdResult::default().with_emojis(emojis)
}

pub fn run_remove(text: &str, mode: EmojiMode) -> CmdResult {
    if !contains_emoji(text) {
        debug!(%mode, "no emoji to remove");
        return CmdResult::default().with_text(text.to_string());
    }
    let stripped = remove_with(text, mode);
    debug!(
        %mode,
        removed_bytes = text.len() - stripped.len(),
        "removed emoji"
    );
    CmdResult::default().with_text(stripped)
}
