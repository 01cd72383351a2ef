//! Yes/no confirmation prompts

use std::io::{self, BufRead, Write};

/// Asks the user a yes/no question
pub trait Confirm {
    /// Ask `question`; an empty answer yields `default`
    fn confirm(&self, question: &str, default: bool) -> io::Result<bool>;
}

/// Interactive prompt on stdin/stdout
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&self, question: &str, default: bool) -> io::Result<bool> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!("{} {} ", question, hint);
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(parse_answer(&line).unwrap_or(default))
    }
}

/// Answers yes without asking (`--yes`)
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, question: &str, _default: bool) -> io::Result<bool> {
        tracing::debug!(question, "assuming yes");
        Ok(true)
    }
}

/// Interpret a typed answer; `None` for empty or unrecognized input
pub fn parse_answer(line: &str) -> Option<bool> {
    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
