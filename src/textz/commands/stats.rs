//! # Text Statistics
//!
//! Counting rules:
//!
//! - **Characters** are Unicode scalar values, so an astral emoji counts once.
//! - **Words** are maximal runs of non-whitespace.
//! - **Sentences** are the non-blank segments left after splitting on runs of `.`, `!`
//!   and `?`. An ellipsis or `?!` is a single terminator; abbreviations are not
//!   special-cased, so `Dr. Who` is two sentences.
//! - **Paragraphs** are blocks of non-blank lines separated by one or more blank lines
//!   (lines holding only whitespace).
//! - **Lines** are lines with non-whitespace content.

use crate::commands::CmdResult;
use crate::model::TextStats;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

static SENTENCE_TERMINATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence terminator pattern is valid"));

pub fn analyze(text: &str) -> TextStats {
    let mut chars_with_spaces = 0;
    let mut whitespace = 0;
    for c in text.chars() {
        chars_with_spaces += 1;
        if c.is_whitespace() {
            whitespace += 1;
        }
    }

    TextStats {
        chars_with_spaces,
        chars_without_spaces: chars_with_spaces - whitespace,
        words: text.split_whitespace().count(),
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        lines: text.lines().filter(|line| !is_blank(line)).count(),
        graphemes: text.graphemes(true).count(),
    }
}

fn count_sentences(text: &str) -> usize {
    SENTENCE_TERMINATORS
        .split(text)
        .filter(|segment| !is_blank(segment))
        .count()
}

fn count_paragraphs(text: &str) -> usize {
    let mut paragraphs = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if is_blank(line) {
            in_paragraph = false;
        } else if !in_paragraph {
            paragraphs += 1;
            in_paragraph = true;
        }
    }
    paragraphs
}

fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

pub fn run(text: &str, words_per_minute: u32) -> CmdResult {
    let stats = analyze(text);
    debug!(
        chars = stats.chars_with_spaces,
        words = stats.words,
        sentences = stats.sentences,
        paragraphs = stats.paragraphs,
        "analyzed text"
    );
    CmdResult::default()
        .with_stats(stats)
        .with_reading_time(stats.reading_time_secs(words_per_minute))
}
