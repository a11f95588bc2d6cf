use std::io::{self, Write};

use colored::Colorize;

use crate::theme::THEME;

/// Outcome of a numbered menu prompt.
pub enum Choice {
    Picked(usize),
    /// Input that does not parse as a number.
    Invalid,
    /// End of input; callers treat this as leaving the current menu.
    Eof,
}

/// Prints a themed `label:` prompt and reads one trimmed line.
///
/// `None` means stdin reached end of input.
pub fn read_line(label: &str) -> io::Result<Option<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{} ", format!("{label}:").color(THEME.secondary))?;
    stdout.flush()?;

    let mut buffer = String::new();
    if io::stdin().read_line(&mut buffer)? == 0 {
        // Leave the shell prompt on its own line after Ctrl-D.
        println!();
        return Ok(None);
    }
    Ok(Some(buffer.trim().to_string()))
}

/// Reads a menu selection.
pub fn read_choice(label: &str) -> io::Result<Choice> {
    match read_line(label)? {
        None => Ok(Choice::Eof),
        Some(line) => Ok(parse_choice(&line)),
    }
}

fn parse_choice(line: &str) -> Choice {
    line.parse().map(Choice::Picked).unwrap_or(Choice::Invalid)
}
