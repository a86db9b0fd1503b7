//! Validated Gregorian (solar) dates.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConvertError;

/// Shape check for caller-supplied date strings: exactly four digits,
/// a dash, two digits, a dash, two digits. ASCII digits only, so the
/// captured fields always parse.
static DATE_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date shape regex is valid")
});

/// Earliest supported date, 1900-01-01, as `(year, month, day)`.
pub const MIN_SUPPORTED: (i32, u8, u8) = (1900, 1, 1);

/// Latest supported date, 2049-12-31, as `(year, month, day)`.
pub const MAX_SUPPORTED: (i32, u8, u8) = (2049, 12, 31);

/// A real Gregorian calendar date.
///
/// Construction validates month and day against the proleptic Gregorian
/// rules, including the century leap-year exception, so a value of this
/// type always denotes a date that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl PartialOrd for SolarDate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolarDate {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl SolarDate {
    /// Creates a new `SolarDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidDate`] if the month is outside
    /// `1..=12` or the day does not exist in that month of that year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, ConvertError> {
        if !(1..=12).contains(&month) {
            return Err(ConvertError::InvalidDate);
        }
        if day < 1 || day > days_in_month(year, month) {
            return Err(ConvertError::InvalidDate);
        }
        Ok(Self { year, month, day })
    }

    /// Parses a `YYYY-MM-DD` string into a `SolarDate`.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::FormatError`] if the string does not have
    /// the `YYYY-MM-DD` shape, and [`ConvertError::InvalidDate`] if it is
    /// well-shaped but does not denote a real date.
    pub fn parse(s: &str) -> Result<Self, ConvertError> {
        if !DATE_SHAPE.is_match(s) {
            return Err(ConvertError::FormatError);
        }
        // The shape check guarantees pure-ASCII digit fields that fit
        // their integer types.
        let year: i32 = s[0..4].parse().expect("four digits fit i32");
        let month: u8 = s[5..7].parse().expect("two digits fit u8");
        let day: u8 = s[8..10].parse().expect("two digits fit u8");
        Self::new(year, month, day)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns `true` if the date lies in the closed supported interval
    /// [`MIN_SUPPORTED`, `MAX_SUPPORTED`].
    pub fn in_supported_range(self) -> bool {
        let ymd = (self.year, self.month, self.day);
        (MIN_SUPPORTED..=MAX_SUPPORTED).contains(&ymd)
    }
}

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in the given month of the given year.
///
/// Months outside `1..=12` return 0, which makes every day invalid for
/// them in [`SolarDate::new`].
fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
