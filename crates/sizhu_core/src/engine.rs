//! Chart computation façade.

use sizhu_calendar::CalendarProvider;

use crate::analysis::analyze;
use crate::chart::BaziChart;
use crate::error::ChartError;
use crate::input::BirthInput;
use crate::pillars::{hour_pillar, month_pillar, year_pillar};

/// Compute a four-pillar chart from a birth instant.
///
/// Stateless and synchronous; the provider call is the only failure and
/// suspension point, and it is made exactly once, after validation.
/// Concurrent computations share nothing mutable.
pub fn compute_chart<P: CalendarProvider + ?Sized>(
    provider: &P,
    input: &BirthInput,
) -> Result<BaziChart, ChartError> {
    input.validate()?;

    let day_info = provider.resolve_day(input.year, input.month, input.day)?;

    let year = year_pillar(input.year);
    let month = month_pillar(input.year, input.month);
    let day = day_info.pillar;
    let hour = hour_pillar(day.stem, input.normalized_hour());

    let analysis = analyze(&[year, month, day, hour]);

    Ok(BaziChart {
        year,
        month,
        day,
        hour,
        gender: input.gender,
        time_unknown: input.time_unknown,
        lunar: day_info.lunar,
        tally: analysis.tally,
        day_master: analysis.day_master,
        favorable: analysis.favorable,
    })
}

/// A provider bound to the computation entry point.
///
/// Thin wrapper for callers that configure the backend once at startup
/// and hand the engine around.
#[derive(Debug, Clone)]
pub struct ChartEngine<P> {
    provider: P,
}

impl<P: CalendarProvider> ChartEngine<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn compute(&self, input: &BirthInput) -> Result<BaziChart, ChartError> {
        compute_chart(&self.provider, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Gender;
    use sizhu_calendar::{CalendarError, DayInfo, LocalCalendar};
    use sizhu_tables::Pillar;

    /// Provider that always fails, for error-propagation tests.
    struct DownCalendar;

    impl CalendarProvider for DownCalendar {
        fn resolve_day(&self, _: i32, _: u32, _: u32) -> Result<DayInfo, CalendarError> {
            Err(CalendarError::Unavailable("connection refused".into()))
        }
    }

    fn input() -> BirthInput {
        BirthInput {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            gender: Gender::Female,
            time_unknown: false,
        }
    }

    #[test]
    fn assembles_all_four_pillars() {
        let chart = compute_chart(&LocalCalendar::new(), &input()).unwrap();
        assert_eq!(chart.year.to_string(), "庚辰");
        assert_eq!(chart.day.to_string(), "戊午");
        assert_eq!(chart.hour.to_string(), "戊午");
        assert_eq!(chart.tally.total(), 8);
    }

    #[test]
    fn provider_failure_propagates() {
        let err = compute_chart(&DownCalendar, &input()).unwrap_err();
        assert!(matches!(err, ChartError::Calendar(_)));
    }

    #[test]
    fn invalid_input_rejected_before_provider_call() {
        // DownCalendar would fail the request; InvalidInput must win.
        let mut bad = input();
        bad.year = 1899;
        let err = compute_chart(&DownCalendar, &bad).unwrap_err();
        assert!(matches!(err, ChartError::InvalidInput(_)));
    }

    #[test]
    fn engine_wrapper_matches_free_function() {
        let engine = ChartEngine::new(LocalCalendar::new());
        assert_eq!(
            engine.compute(&input()).unwrap(),
            compute_chart(&LocalCalendar::new(), &input()).unwrap()
        );
    }

    #[test]
    fn day_pillar_comes_from_provider_verbatim() {
        /// Provider returning a fixed pillar regardless of the date.
        struct FixedDay(Pillar);

        impl CalendarProvider for FixedDay {
            fn resolve_day(&self, _: i32, _: u32, _: u32) -> Result<DayInfo, CalendarError> {
                Ok(DayInfo {
                    pillar: self.0,
                    lunar: None,
                })
            }
        }

        let fixed = Pillar::from_sexagenary(0); // 甲子
        let chart = compute_chart(&FixedDay(fixed), &input()).unwrap();
        assert_eq!(chart.day, fixed);
        assert!(chart.lunar.is_none());
    }
}
