//! # Textz CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file only
//! invokes `cli::run()` and handles process termination.
//!
//! ```text
//! CLI Layer (cli/)          clap parsing, input, templated rendering
//!        │
//!        ▼
//! API Layer (api.rs)        resolves overrides against config, dispatches
//!        │
//!        ▼
//! Command Layer (commands/) pure text transforms
//! ```
//!
//! Everything from `api.rs` inward is UI agnostic: functions take normal Rust values,
//! return normal Rust types, and never assume terminal I/O.

use colored::Colorize;

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
