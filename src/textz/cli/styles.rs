//! Styles for the textz CLI.
//!
//! Templates only ever refer to **semantic** style names (`label`, `count`, `emoji`),
//! never to colors. The mapping from a semantic name to an actual `console::Style`
//! lives here, so the look can change without touching templates or renderers.
//!
//! Unknown style names are not silently dropped: `outstanding` prefixes the text with
//! `(!?)` so a typo in a template shows up immediately.

use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const LABEL: &str = "label";
    pub const COUNT: &str = "count";
    pub const MUTED: &str = "muted";
    pub const EMOJI: &str = "emoji";
    pub const KEY: &str = "key";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";

    pub const ALL: &[&str] = &[
        LABEL, COUNT, MUTED, EMOJI, KEY, ERROR, WARNING, SUCCESS, INFO,
    ];
}

pub static TEXTZ_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    Theme::new()
        .add(names::LABEL, Style::new().bold())
        .add(names::COUNT, Style::new().cyan())
        .add(names::MUTED, muted.clone())
        .add(names::EMOJI, Style::new())
        .add(names::KEY, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, Style::new().green())
        .add(names::INFO, muted)
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::templates::{
        CONFIG_TEMPLATE, EMOJI_LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE, TALLY_TEMPLATE,
    };
    use regex::Regex;

    #[test]
    fn every_name_is_in_the_theme() {
        for name in names::ALL {
            assert!(TEXTZ_THEME.styles().has(name), "missing style {}", name);
        }
    }

    #[test]
    fn templates_only_use_known_names() {
        let literal = Regex::new(r#"style\("([a-z_]+)"\)"#).unwrap();
        for template in [
            STATS_TEMPLATE,
            EMOJI_LIST_TEMPLATE,
            TALLY_TEMPLATE,
            CONFIG_TEMPLATE,
            MESSAGES_TEMPLATE,
        ] {
            for caps in literal.captures_iter(template) {
                assert!(names::ALL.contains(&&caps[1]), "unknown style {}", &caps[1]);
            }
        }
    }

    #[test]
    fn plain_mode_returns_text() {
        assert_eq!(TEXTZ_THEME.styles().apply_plain(names::COUNT, "42"), "42");
    }

    #[test]
    fn unknown_style_is_flagged() {
        assert_eq!(TEXTZ_THEME.styles().apply_plain("nope", "x"), "(!?) x");
    }
}
