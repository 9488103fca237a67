use std::io::{self, BufRead, Write};

use thiserror::Error;

pub const COUNTRY_PROMPT: &str = "Enter the country: ";
pub const DAYS_PROMPT: &str = "Enter the number of days: ";

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid number of days: {input}")]
    InvalidDays { input: String },
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What the user asked for at the prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRequest {
    pub label: String,
    pub days: u64,
}

/// Prompt for the country label and the day count.
pub fn collect<R, W>(reader: &mut R, writer: &mut W) -> Result<UserRequest, InputError>
where
    R: BufRead,
    W: Write,
{
    prompt(writer, COUNTRY_PROMPT)?;
    let label = read_line(reader)?.unwrap_or_default();

    prompt(writer, DAYS_PROMPT)?;
    let raw_days = read_line(reader)?.ok_or_else(|| InputError::InvalidDays {
        input: String::new(),
    })?;
    let days = parse_days(&raw_days)?;

    Ok(UserRequest { label, days })
}

/// Parse a day count; negatives and non-integers are rejected.
pub fn parse_days(raw: &str) -> Result<u64, InputError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .ok()
        .and_then(|d| u64::try_from(d).ok())
        .ok_or_else(|| InputError::InvalidDays {
            input: trimmed.to_string(),
        })
}

fn prompt<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.write_all(text.as_bytes())?;
    writer.flush()
}

/// One line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let stripped = line.strip_suffix('\n').unwrap_or(&line);
    let stripped = stripped.strip_suffix('\r').unwrap_or(stripped);
    Ok(Some(stripped.to_string()))
}
