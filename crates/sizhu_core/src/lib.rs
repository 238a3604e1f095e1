//! Four-pillar (BaZi) chart computation.
//!
//! This crate assembles the year/month/day/hour pillars from a Gregorian
//! birth instant, tallies their Five-Element distribution, and derives the
//! day master and the favorable element. The day pillar is delegated to a
//! [`sizhu_calendar::CalendarProvider`]; everything else is pure cyclic
//! arithmetic over the stem/branch tables.
//!
//! Year and month pillars use the published Gregorian-boundary
//! approximation rather than true solar-term boundaries; see
//! [`pillars`] for the exact formulas. Reproducing that approximation is
//! intentional — output compatibility over astronomical precision.

pub mod analysis;
pub mod chart;
pub mod engine;
pub mod error;
pub mod input;
pub mod pillars;

pub use analysis::{Analysis, ElementTally, analyze};
pub use chart::{BaziChart, Gender};
pub use engine::{ChartEngine, compute_chart};
pub use error::ChartError;
pub use input::BirthInput;
pub use pillars::{hour_pillar, month_pillar, year_pillar};
