//! # CLI Behavior
//!
//! This is **one possible UI client** for textz, not the application itself.
//! For the overall architecture, see the crate-level documentation of the library.
//!
//! ## Input
//!
//! Every text command (`stats`, `emoji`, `strip`, `social`) takes its text from the
//! positional words, else `--file`, else piped stdin. See [`input`].
//!
//! ## Output
//!
//! - Human output goes through `outstanding` templates ([`templates`]) styled by
//!   semantic names ([`styles`]). Colors follow terminal detection and `--no-color`.
//! - `--json` prints the command result as pretty JSON instead.
//! - Transformed text (`strip`, `social`) is printed verbatim, never styled, so it can
//!   be piped onward.
//!
//! ## Config Overrides
//!
//! `social` flags (`--emoji`, `--bullets/--no-bullets`, `--spacing/--no-spacing`) and
//! `--mode/--clusters` override the saved config for a single run. `textz config`
//! persists defaults to `$TEXTZ_HOME/config.json`.

pub mod commands;
pub mod input;
pub mod render;
pub mod setup;
pub mod styles;
pub mod templates;

pub use commands::run;
