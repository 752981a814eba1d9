//! Shared utility functions used across the application

use std::io::{self, BufRead, Write};

/// Print `question`, flush, and read one trimmed line from `input`.
///
/// Returns `None` when the input stream is exhausted.
pub fn prompt_line(question: &str, input: &mut impl BufRead) -> io::Result<Option<String>> {
    print!("{} ", question);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
