//! Error types for core parsing helpers.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from core parsing helpers.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CoreError {
    /// A wall-clock string did not parse as "h:mm AM/PM".
    ClockParse(String),
}

impl Display for CoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClockParse(msg) => write!(f, "clock parse error: {msg}"),
        }
    }
}

impl Error for CoreError {}
