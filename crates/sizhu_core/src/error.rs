//! Error types for chart computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

use sizhu_calendar::CalendarError;

/// Errors from assembling a four-pillar chart.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChartError {
    /// Caller input outside the supported ranges. Rejected before any
    /// calendar call; never silently clamped.
    InvalidInput(&'static str),
    /// The calendar authority failed; fatal to this request.
    Calendar(CalendarError),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::Calendar(e) => write!(f, "calendar error: {e}"),
        }
    }
}

impl Error for ChartError {}

impl From<CalendarError> for ChartError {
    fn from(e: CalendarError) -> Self {
        Self::Calendar(e)
    }
}
