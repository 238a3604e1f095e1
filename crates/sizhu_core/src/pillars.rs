//! Year/month/hour pillar arithmetic.
//!
//! These are the published simplified formulas, taken over verbatim:
//! the year pillar turns over at Gregorian January 1st (not the lunar new
//! year), and the month pillar is seeded from the Gregorian month number
//! (not solar terms). A calendar-exact variant would shift charts born
//! near those boundaries; changing this is a reviewed output-format
//! change, not a bug fix.

use sizhu_tables::{Branch, Pillar, Stem};

/// Year pillar: both indices cycle from calendar year 4 CE.
pub fn year_pillar(year: i32) -> Pillar {
    let stem = Stem::from_index((year - 4).rem_euclid(10) as u32);
    let branch = Branch::from_index((year - 4).rem_euclid(12) as u32);
    Pillar::new(stem, branch)
}

/// Month pillar: stem chained from the year stem (five-tiger rule,
/// Gregorian-month approximation), branch fixed per month.
pub fn month_pillar(year: i32, month: u32) -> Pillar {
    let year_stem = year_pillar(year).stem.index() as i32;
    let stem = Stem::from_index((year_stem * 2 + month as i32 - 2).rem_euclid(10) as u32);
    let branch = Branch::from_index(month + 1);
    Pillar::new(stem, branch)
}

/// Hour pillar: branch from the two-hour window, stem chained from the
/// day stem (five-rat rule).
pub fn hour_pillar(day_stem: Stem, hour: u32) -> Pillar {
    let branch = Branch::from_hour(hour);
    let stem = Stem::from_index(day_stem.index() as u32 * 2 + branch.index() as u32);
    Pillar::new(stem, branch)
}
