//! Calendar authority for four-pillar computation.
//!
//! This crate provides:
//! - Gregorian ↔ Julian Day Number conversions
//! - The continuous sexagenary day count (day pillar from JDN)
//! - An embedded 1900–2100 agricultural (lunar) calendar with Chinese
//!   display strings
//! - The [`CalendarProvider`] capability with local and remote backends
//!
//! The day pillar needs a continuous day count from a fixed historical
//! epoch — no per-year formula exists — so chart assembly always delegates
//! it to one of the providers here.

pub mod day_pillar;
pub mod error;
pub mod julian;
pub mod local;
pub mod lunar;
pub mod provider;
pub mod remote;

pub use day_pillar::{day_pillar_for_date, day_pillar_from_jdn};
pub use error::CalendarError;
pub use julian::{days_in_month, gregorian_to_jdn, is_gregorian_leap_year, jdn_to_gregorian};
pub use local::LocalCalendar;
pub use lunar::{LunarDate, solar_to_lunar};
pub use provider::{CalendarProvider, DayInfo, LunarDisplay};
pub use remote::RemoteCalendar;

/// First Gregorian year both providers support.
pub const MIN_YEAR: i32 = 1900;
/// Last Gregorian year both providers support.
pub const MAX_YEAR: i32 = 2100;
