//! # Social Post Formatting
//!
//! Turns a block of lines into a post-ready list. Each line is trimmed and blank lines
//! are dropped, then every line gets the optional emoji prefix and, outside of that,
//! the optional bullet. Lines are joined by a newline, or by a blank line when spacing
//! is on.
//!
//! ```text
//! input:   "  ship it \n\n\r\nparty  "
//! options: emoji "🚀", bullets, spacing
//! output:  "• 🚀 ship it\n\n• 🚀 party"
//! ```

use crate::commands::CmdResult;
use crate::model::SocialFormatOptions;
use tracing::debug;

pub const BULLET: &str = "• ";

pub fn format(input: &str, options: &SocialFormatOptions) -> String {
    let emoji = options.emoji.trim();
    let separator = if options.insert_spacing { "\n\n" } else { "\n" };

    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut out = String::with_capacity(line.len() + emoji.len() + BULLET.len() + 1);
            if options.use_bullets {
                out.push_str(BULLET);
            }
            if !emoji.is_empty() {
                out.push_str(emoji);
                out.push(' ');
            }
            out.push_str(line);
            out
        })
        .collect::<Vec<_>>()
        .join(separator)
}

pub fn run(input: &str, options: &SocialFormatOptions) -> CmdResult {
    let formatted = format(input, options);
    debug!(
        use_bullets = options.use_bullets,
        insert_spacing = options.insert_spacing,
        has_emoji = !options.emoji.trim().is_empty(),
        output_len = formatted.len(),
        "formatted social text"
    );
    CmdResult::default().with_text(formatted)
}
