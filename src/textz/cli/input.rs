//! Input acquisition for text commands.
//!
//! Priority order:
//!
//! 1. **Arguments**: `textz stats hello world` joins the words with single spaces.
//! 2. **File**: `textz stats -f notes.txt` reads the whole file (may be empty).
//! 3. **Piped stdin**: `cat notes.txt | textz stats`. Whatever arrives is used, so an
//!    empty pipe analyzes as empty text, the same as an empty file.
//!
//! Only an interactive terminal with no arguments and no `--file` is an error.

use std::io::{IsTerminal, Read};
use std::path::Path;
use textz::error::{Result, TextzError};
use tracing::debug;

pub const NO_INPUT: &str = "No input text provided (pass text, --file, or pipe stdin)";

pub fn read_input(words: &[String], file: Option<&Path>) -> Result<String> {
    if !words.is_empty() {
        debug!(words = words.len(), "reading input from arguments");
        return Ok(words.join(" "));
    }

    if let Some(path) = file {
        debug!(path = %path.display(), "reading input from file");
        return std::fs::read_to_string(path)
            .map_err(|e| TextzError::Input(format!("Cannot read {}: {}", path.display(), e)));
    }

    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        debug!(bytes = buffer.len(), "read input from stdin");
        return Ok(buffer);
    }

    Err(TextzError::Input(NO_INPUT.to_string()))
}
