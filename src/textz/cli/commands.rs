//! # CLI Layer
//!
//! This module is **one possible UI client** for textz, not the application itself.
//!
//! It is the only place in the codebase that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the logging subscriber
//! - Formats output for human consumption (or JSON)
//!
//! ## Structure
//!
//! - `run()`: parse, set up logging and context, dispatch
//! - `init_context()`: resolves the config dir and builds `TextzApi`
//! - `handle_*()`: per-command handlers that read input, call the API and print

use super::input::read_input;
use super::render::{
    render_config, render_emoji_list, render_messages, render_stats, render_tally,
};
use super::setup::{flag_override, Cli, Commands, ModeArgs};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use textz::api::{SocialOverrides, TextzApi};
use textz::commands::config::ConfigAction;
use textz::commands::{CmdResult, MessageLevel};
use textz::error::{Result, TextzError};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const HOME_ENV: &str = "TEXTZ_HOME";

struct AppContext {
    api: TextzApi,
    file: Option<PathBuf>,
    json: bool,
    use_color: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Stats { text } => handle_stats(&ctx, &text),
        Commands::Emoji { mode, tally, text } => handle_emoji(&ctx, &mode, tally, &text),
        Commands::Strip { mode, text } => handle_strip(&ctx, &mode, &text),
        Commands::Social {
            emoji,
            bullets,
            no_bullets,
            spacing,
            no_spacing,
            stats,
            text,
        } => {
            let overrides = SocialOverrides {
                emoji,
                use_bullets: flag_override(bullets, no_bullets),
                insert_spacing: flag_override(spacing, no_spacing),
            };
            handle_social(&ctx, &overrides, stats, &text)
        }
        Commands::Config { key, value } => handle_config(&mut ctx, key, value),
    }
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("textz=debug")
        } else {
            EnvFilter::new("textz=warn")
        }
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn config_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "textz", "textz")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| TextzError::Config("Could not determine config dir".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = config_dir()?;
    debug!(config_dir = %dir.display(), "initializing context");
    let api = TextzApi::new(dir);

    Ok(AppContext {
        api,
        file: cli.file.clone(),
        json: cli.json,
        use_color: !cli.no_color && console::colors_enabled(),
    })
}

fn input(ctx: &AppContext, words: &[String]) -> Result<String> {
    read_input(words, ctx.file.as_deref())
}

fn print_json(result: &CmdResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Prints the text as-is, adding a final newline only when it lacks one.
fn print_text(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

fn handle_stats(ctx: &AppContext, words: &[String]) -> Result<()> {
    let text = input(ctx, words)?;
    let result = ctx.api.analyze(&text);
    if ctx.json {
        return print_json(&result);
    }
    if let Some(stats) = &result.stats {
        print!(
            "{}",
            render_stats(stats, result.reading_time_secs, ctx.use_color)?
        );
    }
    Ok(())
}

fn handle_emoji(ctx: &AppContext, mode: &ModeArgs, tally: bool, words: &[String]) -> Result<()> {
    let text = input(ctx, words)?;
    let result = ctx.api.extract_emoji(&text, mode.resolve(), tally);
    if ctx.json {
        return print_json(&result);
    }
    if let Some(tallies) = &result.tallies {
        print!("{}", render_tally(tallies, ctx.use_color)?);
    } else if let Some(emojis) = &result.emojis {
        print!("{}", render_emoji_list(emojis, ctx.use_color)?);
    }
    Ok(())
}

fn handle_strip(ctx: &AppContext, mode: &ModeArgs, words: &[String]) -> Result<()> {
    let text = input(ctx, words)?;
    let result = ctx.api.strip_emoji(&text, mode.resolve());
    if ctx.json {
        return print_json(&result);
    }
    if let Some(stripped) = &result.text {
        print_text(stripped);
    }
    Ok(())
}

fn handle_social(
    ctx: &AppContext,
    overrides: &SocialOverrides,
    with_stats: bool,
    words: &[String],
) -> Result<()> {
    let text = input(ctx, words)?;
    let result = if with_stats {
        ctx.api.format_and_analyze(&text, overrides)
    } else {
        ctx.api.format_social(&text, overrides)
    };
    if ctx.json {
        return print_json(&result);
    }
    if let Some(formatted) = &result.text {
        print_text(formatted);
    }
    if let Some(stats) = &result.stats {
        println!();
        print!(
            "{}",
            render_stats(stats, result.reading_time_secs, ctx.use_color)?
        );
    }
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.configure(action)?;

    if let Some(error) = result
        .messages
        .iter()
        .find(|m| m.level == MessageLevel::Error)
    {
        return Err(TextzError::Config(error.content.clone()));
    }

    if ctx.json {
        return print_json(&result);
    }

    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config, ctx.use_color)?);
        }
    }
    print!("{}", render_messages(&result.messages, ctx.use_color)?);
    Ok(())
}
