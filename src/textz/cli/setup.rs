use clap::{Parser, Subcommand};
use std::path::PathBuf;
use textz::model::EmojiMode;

#[derive(Parser, Debug)]
#[command(name = "textz", bin_name = "textz", version)]
#[command(
    about = "Text statistics, emoji stripping and social-post formatting",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Read input text from a file instead of arguments or stdin
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Count characters, words, sentences and paragraphs
    #[command(alias = "s", display_order = 1)]
    Stats {
        /// Text words (joined with spaces). Falls back to --file, then stdin
        text: Vec<String>,
    },

    /// List the emoji found in the text
    #[command(alias = "e", display_order = 2)]
    Emoji {
        #[command(flatten)]
        mode: ModeArgs,

        /// Count each distinct emoji instead of listing every occurrence
        #[arg(long)]
        tally: bool,

        /// Text words (joined with spaces). Falls back to --file, then stdin
        text: Vec<String>,
    },

    /// Print the text with every emoji removed
    #[command(display_order = 3)]
    Strip {
        #[command(flatten)]
        mode: ModeArgs,

        /// Text words (joined with spaces). Falls back to --file, then stdin
        text: Vec<String>,
    },

    /// Reformat lines into a social post (bullets, emoji prefix, spacing)
    #[command(alias = "post", display_order = 4)]
    Social {
        /// Emoji placed before every line (empty string disables)
        #[arg(long, value_name = "EMOJI")]
        emoji: Option<String>,

        /// Prefix every line with a bullet
        #[arg(long, overrides_with = "no_bullets")]
        bullets: bool,

        /// Never prefix lines with a bullet
        #[arg(long, overrides_with = "bullets")]
        no_bullets: bool,

        /// Put a blank line between lines
        #[arg(long, overrides_with = "no_spacing")]
        spacing: bool,

        /// Join lines with a single newline
        #[arg(long, overrides_with = "spacing")]
        no_spacing: bool,

        /// Also print statistics for the formatted post
        #[arg(long)]
        stats: bool,

        /// Text words (joined with spaces). Falls back to --file, then stdin
        text: Vec<String>,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (e.g., emoji, use-bullets, words-per-minute)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct ModeArgs {
    /// Match per code point or per grapheme cluster (defaults to the emoji-mode config)
    #[arg(long, value_name = "MODE")]
    pub mode: Option<EmojiMode>,

    /// Shorthand for --mode cluster
    #[arg(long, conflicts_with = "mode")]
    pub clusters: bool,
}

impl ModeArgs {
    pub fn resolve(&self) -> Option<EmojiMode> {
        if self.clusters {
            Some(EmojiMode::Cluster)
        } else {
            self.mode
        }
    }
}

/// Collapses a `--flag` / `--no-flag` pair into an override.
pub fn flag_override(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
