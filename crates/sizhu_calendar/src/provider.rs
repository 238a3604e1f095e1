//! The calendar-authority capability.

use sizhu_tables::Pillar;

use crate::error::CalendarError;

/// Human-readable agricultural-calendar date strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LunarDisplay {
    /// Sexagenary year with zodiac animal, e.g. "己卯兔年".
    pub year: String,
    /// Month name, e.g. "十一月" or "闰二月".
    pub month: String,
    /// Day name, e.g. "廿五".
    pub day: String,
}

/// Resolved day-pillar information for one Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayInfo {
    pub pillar: Pillar,
    /// Lunar display strings; the local backend always supplies them,
    /// a remote backend may not.
    pub lunar: Option<LunarDisplay>,
}

/// A calendar authority that resolves the day pillar of a Gregorian date.
///
/// Selected once at composition time. Consumers stay backend-agnostic;
/// nothing downstream may branch on which implementation is in use.
pub trait CalendarProvider {
    fn resolve_day(&self, year: i32, month: u32, day: u32) -> Result<DayInfo, CalendarError>;
}

impl<P: CalendarProvider + ?Sized> CalendarProvider for &P {
    fn resolve_day(&self, year: i32, month: u32, day: u32) -> Result<DayInfo, CalendarError> {
        (**self).resolve_day(year, month, day)
    }
}
