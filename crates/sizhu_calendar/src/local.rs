//! Local calendar backend, computed from the embedded tables.

use crate::day_pillar::day_pillar_for_date;
use crate::error::CalendarError;
use crate::julian::days_in_month;
use crate::lunar::solar_to_lunar;
use crate::provider::{CalendarProvider, DayInfo, LunarDisplay};
use crate::{MAX_YEAR, MIN_YEAR};

/// Calendar authority backed by the embedded perpetual calendar.
///
/// Never performs I/O and never fails for real dates in 1900–2100. Unlike
/// a remote backend it always attaches the lunar display strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalCalendar;

impl LocalCalendar {
    pub fn new() -> Self {
        Self
    }
}

impl CalendarProvider for LocalCalendar {
    fn resolve_day(&self, year: i32, month: u32, day: u32) -> Result<DayInfo, CalendarError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(CalendarError::UnsupportedDate("year outside 1900..=2100"));
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::UnsupportedDate("month outside 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(CalendarError::UnsupportedDate("day outside the month"));
        }

        let pillar = day_pillar_for_date(year, month, day);
        let lunar = solar_to_lunar(year, month, day).map(|d| LunarDisplay {
            year: d.year_display(),
            month: d.month_display(),
            day: d.day_display().to_string(),
        });
        Ok(DayInfo { pillar, lunar })
    }
}
