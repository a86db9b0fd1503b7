//! Lunar dates and the traditional naming tables.

use std::fmt;

/// The ten heavenly stems (天干).
const HEAVENLY_STEMS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The twelve earthly branches (地支).
const EARTHLY_BRANCHES: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];

/// Lunar month names, indexed by `month - 1`.
const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "腊月",
];

/// Digit names used in day names; index 0 is unused.
const DAY_DIGITS: [&str; 10] = ["", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// The reference 甲子 year for the sexagesimal cycle.
const SEXAGESIMAL_EPOCH: i32 = 1984;

/// A date in the Chinese lunisolar calendar, as produced by a
/// [`LunarEngine`](crate::engine::LunarEngine).
///
/// `year` is the lunar year (the ISO year in which it began), `month` is
/// the month number in `1..=12` with `leap` marking an intercalary month,
/// and `day` is the day within the month in `1..=30`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// The lunar year.
    pub year: i32,
    /// The lunar month number (1..=12).
    pub month: u8,
    /// Whether the month is a leap (intercalary) month.
    pub leap: bool,
    /// The day within the lunar month (1..=30).
    pub day: u8,
}

impl fmt::Display for LunarDate {
    /// Renders `"{stem}{branch}年 {leap_marker}{month_name}{day_name}"`,
    /// e.g. `甲辰年 四月十八` or `癸卯年 閏二月初一`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}年 {}{}",
            sexagesimal_year_name(self.year),
            month_name(self.month, self.leap),
            day_name(self.day)
        )
    }
}

/// Returns the sexagesimal (stem-branch) name of a lunar year, without the
/// trailing 年, e.g. `甲辰` for 2024.
///
/// Stems and branches cycle with periods 10 and 12 around the reference
/// 甲子 year 1984, so the full name repeats every 60 years.
pub fn sexagesimal_year_name(year: i32) -> String {
    let stem = HEAVENLY_STEMS[(year - SEXAGESIMAL_EPOCH).rem_euclid(10) as usize];
    let branch = EARTHLY_BRANCHES[(year - SEXAGESIMAL_EPOCH).rem_euclid(12) as usize];
    format!("{stem}{branch}")
}

/// Returns the lunar month name, with the 閏 prefix for leap months.
///
/// A month number outside `1..=12` violates the engine contract; rather
/// than fail the whole conversion, the name falls back to the 无效月份
/// marker (after the leap prefix, if any).
pub fn month_name(month: u8, leap: bool) -> String {
    let mut name = String::new();
    if leap {
        name += "閏";
    }
    name += match month {
        1..=12 => MONTH_NAMES[month as usize - 1],
        _ => "无效月份",
    };
    name
}

/// Returns the traditional lunar day name: days 10/20/30 have irregular
/// names, days 1..=9 are prefixed 初, 11..=19 prefixed 十, and 21..=29
/// prefixed 廿, each followed by the digit name of `day % 10`.
///
/// # Panics
///
/// Panics if `day` is outside `1..=30`. A correct engine never produces
/// such a value.
pub fn day_name(day: u8) -> String {
    match day {
        10 => "初十".to_owned(),
        20 => "二十".to_owned(),
        30 => "三十".to_owned(),
        1..=9 => format!("初{}", DAY_DIGITS[day as usize]),
        11..=19 => format!("十{}", DAY_DIGITS[day as usize % 10]),
        21..=29 => format!("廿{}", DAY_DIGITS[day as usize % 10]),
        _ => panic!("lunar day {day} not in 1..=30"),
    }
}
