//! Error types for calendar resolution.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from a [`crate::CalendarProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CalendarError {
    /// The calendar authority could not resolve the day pillar
    /// (transport failure, non-success response, malformed response).
    Unavailable(String),
    /// The date is outside the supported 1900–2100 window or is not a
    /// real calendar date.
    UnsupportedDate(&'static str),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "calendar unavailable: {msg}"),
            Self::UnsupportedDate(msg) => write!(f, "unsupported date: {msg}"),
        }
    }
}

impl Error for CalendarError {}
