//! Day pillar from the continuous sexagenary day count.

use sizhu_tables::{Branch, Pillar, Stem};

use crate::julian::gregorian_to_jdn;

/// Day pillar for a Julian Day Number.
///
/// The sexagenary day count runs unbroken through history; the two offsets
/// anchor it so that JDN 2451545 (2000-01-01) is 戊午 and 1949-10-01 is 甲子.
pub fn day_pillar_from_jdn(jdn: i64) -> Pillar {
    let stem = Stem::from_index((jdn + 9).rem_euclid(10) as u32);
    let branch = Branch::from_index((jdn + 1).rem_euclid(12) as u32);
    Pillar::new(stem, branch)
}

/// Day pillar for a Gregorian calendar date.
pub fn day_pillar_for_date(year: i32, month: u32, day: u32) -> Pillar {
    day_pillar_from_jdn(gregorian_to_jdn(year, month, day))
}
