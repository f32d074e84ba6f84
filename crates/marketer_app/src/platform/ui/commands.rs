//! Line commands typed at the prompt.

use thiserror::Error;

pub const HELP: &str = "\
Commands:
  url <text>        set the website URL
  scan [url]        start a scan (optionally setting the URL first)
  copy k <n>        copy keyword n
  copy s <n>        copy sentence n
  regen <n>         generate a new sentence n
  show              redraw the page
  help              show this help
  quit              exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    SetUrl(String),
    Scan(Option<String>),
    /// Zero-based keyword index.
    CopyKeyword(usize),
    /// Zero-based sentence slot.
    CopySentence(usize),
    /// Zero-based sentence slot.
    Regenerate(usize),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}` (type `help`)")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
    #[error("`{0}` is not a number from 1 up")]
    BadNumber(String),
}

/// Parses one input line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "url" => Command::SetUrl(rest.to_string()),
        "scan" => Command::Scan((!rest.is_empty()).then(|| rest.to_string())),
        "copy" => parse_copy(rest)?,
        "regen" | "regenerate" | "new" => Command::Regenerate(parse_number(rest, "regen <n>")?),
        "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

fn parse_copy(rest: &str) -> Result<Command, CommandError> {
    const USAGE: &str = "copy k <n> | copy s <n>";
    let (target, number) = rest
        .split_once(char::is_whitespace)
        .ok_or(CommandError::Usage(USAGE))?;
    let index = parse_number(number.trim(), USAGE)?;
    match target.to_ascii_lowercase().as_str() {
        "k" | "kw" | "keyword" => Ok(Command::CopyKeyword(index)),
        "s" | "sentence" => Ok(Command::CopySentence(index)),
        _ => Err(CommandError::Usage(USAGE)),
    }
}

/// Converts a one-based number into a zero-based index.
fn parse_number(text: &str, usage: &'static str) -> Result<usize, CommandError> {
    if text.is_empty() {
        return Err(CommandError::Usage(usage));
    }
    match text.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadNumber(text.to_string())),
    }
}
