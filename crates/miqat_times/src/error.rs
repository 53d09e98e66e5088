//! Error types for schedule computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from prayer-schedule computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimesError {
    /// The Sun never rises on this date at this latitude.
    PolarNight,
    /// The Sun never sets on this date at this latitude.
    PolarDay,
    /// A solve degenerated (e.g. observer at a pole).
    Degenerate(&'static str),
}

impl Display for TimesError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolarNight => write!(f, "sun never rises on this date at this latitude"),
            Self::PolarDay => write!(f, "sun never sets on this date at this latitude"),
            Self::Degenerate(msg) => write!(f, "degenerate solve: {msg}"),
        }
    }
}

impl Error for TimesError {}
