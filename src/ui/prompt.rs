//! Interactive confirmation prompt.

use crate::errors::AppResult;
use std::io::{self, Write};

/// Asks `question` on stderr and reads one line from stdin.
/// Only `y` or `yes`, in any case, count as consent.
pub fn confirm(question: &str) -> AppResult<bool> {
    eprint!("⚠️  {} [y/N]: ", question);
    io::stderr().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;

    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
