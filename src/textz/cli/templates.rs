//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as stand-alone `.tmp`
//! files, so layout can be edited and diffed without touching Rust. They are embedded
//! at compile time.
//!
//! Templates stay dumb: widths, padding and number formatting are computed in
//! `render.rs` (they need Unicode-aware width math), and templates only place values
//! and pick semantic styles through the `style` filter.
//!
//! Every line a template emits ends with an explicit newline inside the loop body,
//! which keeps blank-line handling obvious.

pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const EMOJI_LIST_TEMPLATE: &str = include_str!("templates/emoji_list.tmp");
pub const TALLY_TEMPLATE: &str = include_str!("templates/tally.tmp");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
