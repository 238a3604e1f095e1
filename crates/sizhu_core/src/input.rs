//! Birth-instant input and its validation window.

use crate::chart::Gender;
use crate::error::ChartError;
use sizhu_calendar::{MAX_YEAR, MIN_YEAR, days_in_month};

/// A Gregorian birth instant as supplied by the caller.
///
/// When `time_unknown` is set the hour is ignored and the engine
/// substitutes noon — a defined normalization, not a clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    /// Clock hour 0..=23; meaningless when `time_unknown` is set.
    pub hour: u32,
    pub gender: Gender,
    pub time_unknown: bool,
}

impl BirthInput {
    /// Check every field against the supported window.
    ///
    /// The epoch arithmetic is only validated for 1900..=2100, so years
    /// outside it are rejected rather than extrapolated.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ChartError::InvalidInput("year outside 1900..=2100"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::InvalidInput("month outside 1..=12"));
        }
        if self.day == 0 || self.day > days_in_month(self.year, self.month) {
            return Err(ChartError::InvalidInput("day outside the month"));
        }
        if !self.time_unknown && self.hour > 23 {
            return Err(ChartError::InvalidInput("hour outside 0..=23"));
        }
        Ok(())
    }

    /// Hour actually used for the hour pillar: noon when time is unknown.
    pub fn normalized_hour(&self) -> u32 {
        if self.time_unknown { 12 } else { self.hour }
    }
}
