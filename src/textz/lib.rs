//! # Textz Architecture
//!
//! Textz is a **UI-agnostic text toolkit**: word and sentence statistics, emoji
//! extraction and stripping, and social-post formatting. It is a library that happens
//! to have a CLI client, and the same core could sit behind a web form.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, reads stdin/files, renders output      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves per-call overrides against the saved config     │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure text transforms: stats, emoji, social               │
//! │  - Operates on &str, returns Rust types                     │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Total Functions in the Core
//!
//! Every text operation accepts any string, including the empty one, and returns a
//! well-defined value. Nothing in `commands::{stats, emoji, social}` can fail. Errors
//! only exist at the edges: reading input, loading the config file, rendering output.
//!
//! Text is always handled as Unicode scalar values (`char`) or grapheme clusters,
//! never as bytes, so astral-plane emoji are never split.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): unit tests of the text rules. Most tests live here.
//! 2. **API** (`api.rs`): verifies overrides and config defaults are resolved correctly.
//! 3. **CLI** (`tests/`): runs the binary with `assert_cmd` and checks stdout/stderr.
//! 4. **Properties** (`tests/`): `proptest` checks the invariants over arbitrary text.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`model`]: Core data types (`TextStats`, `SocialFormatOptions`, `EmojiMode`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types
//! - `cli`: Argument parsing and templated rendering for the binary (not part of the lib API)

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
