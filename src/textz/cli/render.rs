//! # Rendering Module
//!
//! Turns `CmdResult` pieces into terminal strings through the templates in
//! `templates.rs`, rendered by `outstanding` and styled with `TEXTZ_THEME`.
//!
//! Layout math (label padding, emoji column widths) stays in Rust because it needs
//! `unicode-width`; templates only choose where values go and which semantic style
//! applies. Every public renderer takes `use_color` so tests can compare plain text.

use super::styles::{names, TEXTZ_THEME};
use super::templates::{
    CONFIG_TEMPLATE, EMOJI_LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE, TALLY_TEMPLATE,
};
use outstanding::{render_with_color, ThemeChoice};
use serde::Serialize;
use textz::commands::{CmdMessage, MessageLevel};
use textz::config::TextzConfig;
use textz::error::{Result, TextzError};
use textz::model::{EmojiTally, TextStats};
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

#[derive(Serialize)]
struct StatRow {
    label: &'static str,
    padding: String,
    value: usize,
}

#[derive(Serialize)]
struct StatsData {
    rows: Vec<StatRow>,
    reading_padding: String,
    reading_time: String,
}

#[derive(Serialize)]
struct EmojiListData {
    emojis: Vec<String>,
    empty: bool,
}

#[derive(Serialize)]
struct TallyRow {
    emoji: String,
    padding: String,
    count: usize,
}

#[derive(Serialize)]
struct TallyData {
    rows: Vec<TallyRow>,
    empty: bool,
}

#[derive(Serialize)]
struct ConfigEntry {
    key: &'static str,
    padding: String,
    value: String,
}

#[derive(Serialize)]
struct ConfigData {
    entries: Vec<ConfigEntry>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

fn render_template<T: Serialize>(template: &str, data: &T, use_color: bool) -> Result<String> {
    let mut output = render_with_color(
        template,
        data,
        ThemeChoice::from(&*TEXTZ_THEME),
        use_color,
    )
    .map_err(|e| TextzError::Render(e.to_string()))?;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn padding_for(text: &str, column: usize) -> String {
    " ".repeat(column.saturating_sub(text.width()))
}

pub fn render_stats(
    stats: &TextStats,
    reading_time_secs: Option<f64>,
    use_color: bool,
) -> Result<String> {
    let labels: [(&'static str, usize); 7] = [
        ("Characters", stats.chars_with_spaces),
        ("Characters (no spaces)", stats.chars_without_spaces),
        ("Words", stats.words),
        ("Sentences", stats.sentences),
        ("Paragraphs", stats.paragraphs),
        ("Lines", stats.lines),
        ("Graphemes", stats.graphemes),
    ];
    let column = labels
        .iter()
        .map(|(label, _)| label.width())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    let rows = labels
        .into_iter()
        .map(|(label, value)| StatRow {
            label,
            padding: padding_for(label, column),
            value,
        })
        .collect();

    let data = StatsData {
        rows,
        reading_padding: padding_for("Reading time", column),
        reading_time: format_duration(reading_time_secs.unwrap_or(0.0)),
    };
    render_template(STATS_TEMPLATE, &data, use_color)
}

pub fn render_emoji_list(emojis: &[String], use_color: bool) -> Result<String> {
    let data = EmojiListData {
        emojis: emojis.to_vec(),
        empty: emojis.is_empty(),
    };
    render_template(EMOJI_LIST_TEMPLATE, &data, use_color)
}

pub fn render_tally(tallies: &[EmojiTally], use_color: bool) -> Result<String> {
    let column = tallies
        .iter()
        .map(|t| t.emoji.width())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;
    let rows = tallies
        .iter()
        .map(|t| TallyRow {
            emoji: t.emoji.clone(),
            padding: padding_for(&t.emoji, column),
            count: t.count,
        })
        .collect();
    let data = TallyData {
        rows,
        empty: tallies.is_empty(),
    };
    render_template(TALLY_TEMPLATE, &data, use_color)
}

pub fn render_config(config: &TextzConfig, use_color: bool) -> Result<String> {
    let entries = config.entries();
    let column = entries.iter().map(|(k, _)| k.width()).max().unwrap_or(0);
    let data = ConfigData {
        entries: entries
            .into_iter()
            .map(|(key, value)| ConfigEntry {
                key,
                padding: padding_for(key, column),
                value: if value.is_empty() {
                    "\"\"".to_string()
                } else {
                    value
                },
            })
            .collect(),
    };
    render_template(CONFIG_TEMPLATE, &data, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: bool) -> Result<String> {
    if messages.is_empty() {
        return Ok(String::new());
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color)
}

/// `"45s"`, `"3m 05s"`, or `"< 1s"` for anything shorter than a second but not zero.
pub fn format_duration(secs: f64) -> String {
    if secs <= 0.0 {
        return "0s".to_string();
    }
    if secs < 1.0 {
        return "< 1s".to_string();
    }
    let total = secs.round() as u64;
    let (minutes, seconds) = (total / 60, total % 60);
    if minutes == 0 {
        format!("{}s", seconds)
    } else {
        format!("{}m {:02}s", minutes, seconds)
    }
}
