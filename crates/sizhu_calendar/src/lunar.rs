//! Embedded perpetual agricultural (lunar) calendar, 1900–2100.
//!
//! One packed word per lunar year: bits 4..=15 give the 12 regular month
//! lengths (set = 30 days, clear = 29), bits 0..=3 the leap month number
//! (0 = none), and bit 16 the leap month length. The epoch is 1900-01-31,
//! lunar 1900 正月初一.
//!
//! Only display strings are derived from this table; the day pillar uses
//! the continuous day count in `day_pillar` and never consults it.

use sizhu_tables::{Branch, Stem};

use crate::julian::gregorian_to_jdn;

/// First lunar year covered by the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;
/// Last lunar year covered by the table.
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// JDN of 1900-01-31, lunar 1900-01-01.
const LUNAR_EPOCH_JDN: i64 = 2_415_051;

/// Packed month-length words for lunar years 1900..=2100.
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    0x06566, 0x0d4a0, 0x0ea50, 0x06e95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b5a0, 0x195a6,
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x055c0, 0x0ab60, 0x096d5, 0x092e0,
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    0x0a2e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    0x0d520,
];

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "腊月",
];

const DAY_NAMES: [&str; 30] = [
    "初一", "初二", "初三", "初四", "初五", "初六", "初七", "初八", "初九", "初十", "十一",
    "十二", "十三", "十四", "十五", "十六", "十七", "十八", "十九", "二十", "廿一", "廿二",
    "廿三", "廿四", "廿五", "廿六", "廿七", "廿八", "廿九", "三十",
];

fn year_info(year: i32) -> u32 {
    LUNAR_INFO[(year - FIRST_LUNAR_YEAR) as usize]
}

/// Leap month of a lunar year (1..=12), or 0 when the year has none.
pub fn leap_month(year: i32) -> u32 {
    year_info(year) & 0xf
}

/// Length of the leap month in days, or 0 when the year has none.
fn leap_month_days(year: i32) -> u32 {
    if leap_month(year) == 0 {
        0
    } else if year_info(year) & 0x10000 != 0 {
        30
    } else {
        29
    }
}

/// Length in days of regular month `month` (1..=12) of a lunar year.
fn month_days(year: i32, month: u32) -> u32 {
    if year_info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// Total days in a lunar year, leap month included.
fn year_days(year: i32) -> u32 {
    let mut days = 348;
    // Month-length bits occupy 4..=15; the low nibble is the leap month.
    let mut mask = 0x8000u32;
    while mask > 0x8 {
        if year_info(year) & mask != 0 {
            days += 1;
        }
        mask >>= 1;
    }
    days + leap_month_days(year)
}

/// A date on the agricultural calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    pub year: i32,
    /// Lunar month 1..=12; for a leap month this is the host month number.
    pub month: u32,
    /// Day of the lunar month, 1..=30.
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Sexagenary year name with zodiac animal, e.g. "己卯兔年".
    pub fn year_display(&self) -> String {
        let stem = Stem::from_index((self.year - 4).rem_euclid(10) as u32);
        let branch = Branch::from_index((self.year - 4).rem_euclid(12) as u32);
        format!(
            "{}{}{}年",
            stem.symbol(),
            branch.symbol(),
            branch.zodiac_animal()
        )
    }

    /// Chinese month name, e.g. "十一月" or "闰二月".
    pub fn month_display(&self) -> String {
        let name = MONTH_NAMES[(self.month - 1) as usize];
        if self.is_leap_month {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// Chinese day name, e.g. "廿五".
    pub fn day_display(&self) -> &'static str {
        DAY_NAMES[(self.day - 1) as usize]
    }
}

/// Convert a Gregorian date to its agricultural-calendar date.
///
/// Returns `None` outside the table range (before 1900-01-31, or past the
/// end of lunar year 2100).
pub fn solar_to_lunar(year: i32, month: u32, day: u32) -> Option<LunarDate> {
    let mut offset = gregorian_to_jdn(year, month, day) - LUNAR_EPOCH_JDN;
    if offset < 0 {
        return None;
    }

    let mut lunar_year = FIRST_LUNAR_YEAR;
    while lunar_year <= LAST_LUNAR_YEAR && offset >= year_days(lunar_year) as i64 {
        offset -= year_days(lunar_year) as i64;
        lunar_year += 1;
    }
    if lunar_year > LAST_LUNAR_YEAR {
        return None;
    }

    // Walk the months, slotting the leap month in after its host.
    let leap = leap_month(lunar_year);
    let mut lunar_month = 1u32;
    let mut is_leap = false;
    loop {
        let len = if is_leap {
            leap_month_days(lunar_year)
        } else {
            month_days(lunar_year, lunar_month)
        };
        if offset < len as i64 {
            break;
        }
        offset -= len as i64;
        if is_leap {
            is_leap = false;
            lunar_month += 1;
        } else if lunar_month == leap {
            is_leap = true;
        } else {
            lunar_month += 1;
        }
    }

    Some(LunarDate {
        year: lunar_year,
        month: lunar_month,
        day: offset as u32 + 1,
        is_leap_month: is_leap,
    })
}
