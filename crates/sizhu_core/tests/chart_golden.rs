//! End-to-end chart properties over the local calendar backend.

use sizhu_calendar::{CalendarError, CalendarProvider, DayInfo, LocalCalendar};
use sizhu_core::{BirthInput, ChartError, Gender, compute_chart, hour_pillar, year_pillar};
use sizhu_tables::{ALL_ELEMENTS, ALL_STEMS, Pillar};

fn input(year: i32, month: u32, day: u32, hour: u32) -> BirthInput {
    BirthInput {
        year,
        month,
        day,
        hour,
        gender: Gender::Male,
        time_unknown: false,
    }
}

#[test]
fn tally_invariant_over_sweep() {
    let cal = LocalCalendar::new();
    for year in (1900..=2100).step_by(13) {
        for (month, day, hour) in [(1, 1, 0), (6, 15, 12), (12, 31, 23)] {
            let chart = compute_chart(&cal, &input(year, month, day, hour)).unwrap();
            assert_eq!(chart.tally.total(), 8, "{year}-{month}-{day} {hour}h");
            for e in ALL_ELEMENTS {
                // Key present even at zero; count() is total over the domain.
                let _ = chart.tally.count(e);
            }
        }
    }
}

#[test]
fn identical_inputs_identical_charts() {
    let cal = LocalCalendar::new();
    let a = compute_chart(&cal, &input(1993, 7, 21, 4)).unwrap();
    let b = compute_chart(&cal, &input(1993, 7, 21, 4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn time_unknown_normalizes_to_noon() {
    let cal = LocalCalendar::new();
    let mut unknown = input(1988, 3, 9, 0);
    unknown.time_unknown = true;
    let noon = compute_chart(&cal, &input(1988, 3, 9, 12)).unwrap();
    let chart = compute_chart(&cal, &unknown).unwrap();
    assert_eq!(chart.hour, noon.hour);
    assert!(chart.time_unknown);
    assert!(!noon.time_unknown);
}

#[test]
fn year_pillar_sixty_year_periodicity() {
    let cal = LocalCalendar::new();
    for year in [1900, 1937, 2012] {
        let a = compute_chart(&cal, &input(year, 5, 5, 5)).unwrap();
        let b = compute_chart(&cal, &input(year + 60, 5, 5, 5)).unwrap();
        assert_eq!(a.year, b.year, "year pillars of {year} and {}", year + 60);
    }
}

#[test]
fn year_pillar_formula_holds_across_window() {
    let cal = LocalCalendar::new();
    for year in (1900..=2100).step_by(7) {
        let chart = compute_chart(&cal, &input(year, 2, 2, 2)).unwrap();
        assert_eq!(
            chart.year.stem.index() as i32,
            (year - 4).rem_euclid(10),
            "{year}"
        );
        assert_eq!(
            chart.year.branch.index() as i32,
            (year - 4).rem_euclid(12),
            "{year}"
        );
        assert_eq!(chart.year, year_pillar(year));
    }
}

#[test]
fn boundary_years_and_hours_rejected() {
    let cal = LocalCalendar::new();
    for bad in [input(1899, 6, 1, 6), input(2101, 6, 1, 6), input(1990, 6, 1, 24)] {
        assert!(matches!(
            compute_chart(&cal, &bad),
            Err(ChartError::InvalidInput(_))
        ));
    }
}

#[test]
fn hour_stem_chains_from_every_day_stem() {
    // One concrete (day stem, hour branch) pair per stem value covers the
    // full five-rat cycle.
    for (d, stem) in ALL_STEMS.iter().enumerate() {
        let hour = ((d * 2 + 1) % 24) as u32;
        let p = hour_pillar(*stem, hour);
        assert_eq!(
            p.stem.index() as usize,
            (d * 2 + p.branch.index() as usize) % 10,
            "day stem index {d}"
        );
    }
}

#[test]
fn calendar_failure_is_fatal_and_typed() {
    struct Down;
    impl CalendarProvider for Down {
        fn resolve_day(&self, _: i32, _: u32, _: u32) -> Result<DayInfo, CalendarError> {
            Err(CalendarError::Unavailable("503 from upstream".into()))
        }
    }
    let err = compute_chart(&Down, &input(1990, 1, 1, 1)).unwrap_err();
    let ChartError::Calendar(CalendarError::Unavailable(msg)) = err else {
        panic!("expected CalendarUnavailable, got {err}");
    };
    assert!(msg.contains("503"));
}

#[test]
fn known_chart_2000_01_01_noon() {
    let chart = compute_chart(&LocalCalendar::new(), &input(2000, 1, 1, 12)).unwrap();
    assert_eq!(chart.year.to_string(), "庚辰");
    assert_eq!(chart.month.to_string(), "乙寅");
    assert_eq!(chart.day.to_string(), "戊午");
    assert_eq!(chart.hour.to_string(), "戊午");
    assert_eq!(chart.day_master.symbol(), "土");
    let lunar = chart.lunar.as_ref().unwrap();
    assert_eq!(lunar.year, "己卯兔年");
}

#[test]
fn remote_style_provider_lunar_passthrough() {
    struct NoLunar;
    impl CalendarProvider for NoLunar {
        fn resolve_day(&self, _: i32, _: u32, _: u32) -> Result<DayInfo, CalendarError> {
            Ok(DayInfo {
                pillar: Pillar::from_sexagenary(10), // 甲戌
                lunar: None,
            })
        }
    }
    let chart = compute_chart(&NoLunar, &input(1975, 4, 18, 9)).unwrap();
    assert_eq!(chart.day.to_string(), "甲戌");
    assert!(chart.lunar.is_none());
}
