//! Menu choice parsing.

use dispatch_core::Action;

/// Highest menu number.
pub const MAX_CHOICE: u8 = 6;

/// A parsed menu selection.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Choice {
    Quit,
    Act(Action),
}

/// Why a line was not a valid selection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// Not an integer at all; the line is discarded.
    NotANumber,
    /// An integer outside 0-6.
    OutOfRange(i64),
}

/// Parse one input line. Surrounding whitespace is ignored.
pub fn parse_choice(line: &str) -> Result<Choice, ParseError> {
    let n: i64 = line.trim().parse().map_err(|_| ParseError::NotANumber)?;
    if n == 0 {
        return Ok(Choice::Quit);
    }
    u8::try_from(n)
        .ok()
        .filter(|&n| n <= MAX_CHOICE)
        .and_then(Action::from_number)
        .map(Choice::Act)
        .ok_or(ParseError::OutOfRange(n))
}
