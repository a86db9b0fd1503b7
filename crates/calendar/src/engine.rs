//! The solar-to-lunar conversion engine boundary.

use icu_calendar::cal::Chinese;
use icu_calendar::{Date, Ref};

use crate::lunar::LunarDate;
use crate::solar::SolarDate;

/// A calendrical engine mapping a solar date to its lunar equivalent.
///
/// The formatter only consumes this one operation, so tests can substitute
/// a stub engine that returns fixed lunar dates.
pub trait LunarEngine {
    /// Converts a validated, in-range solar date to a lunar date.
    fn solar_to_lunar(&self, date: SolarDate) -> LunarDate;
}

/// [`LunarEngine`] backed by the `icu_calendar` Chinese calendar, which
/// computes months astronomically from new moons and solar terms.
#[derive(Debug, Clone)]
pub struct IcuEngine {
    chinese: Chinese,
}

impl IcuEngine {
    /// Creates an engine using the compiled calendrical data shipped with
    /// `icu_calendar`.
    pub fn new() -> Self {
        Self {
            chinese: Chinese::new(),
        }
    }
}

impl Default for IcuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LunarEngine for IcuEngine {
    fn solar_to_lunar(&self, date: SolarDate) -> LunarDate {
        let iso = Date::try_new_iso(date.year(), date.month(), date.day())
            .expect("SolarDate is a validated Gregorian date");
        let chinese = iso.to_calendar(Ref(&self.chinese));
        let month = chinese.month();
        LunarDate {
            // The cyclic year's related ISO year is the year the lunar
            // year began in, which is what the sexagesimal naming uses.
            year: chinese.cyclic_year().related_iso,
            month: month.month_number(),
            leap: month.is_leap(),
            day: chinese.day_of_month().0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_date() {
        let engine = IcuEngine::new();
        let lunar = engine.solar_to_lunar(SolarDate::new(2024, 5, 25).unwrap());
        assert_eq!(
            lunar,
            LunarDate {
                year: 2024,
                month: 4,
                leap: false,
                day: 18,
            }
        );
    }

    #[test]
    fn lunar_new_year_day() {
        let engine = IcuEngine::new();
        let lunar = engine.solar_to_lunar(SolarDate::new(2024, 2, 10).unwrap());
        assert_eq!(
            lunar,
            LunarDate {
                year: 2024,
                month: 1,
                leap: false,
                day: 1,
            }
        );
    }

    #[test]
    fn day_before_lunar_new_year_belongs_to_previous_year() {
        let engine = IcuEngine::new();
        let lunar = engine.solar_to_lunar(SolarDate::new(2024, 2, 9).unwrap());
        assert_eq!(lunar.year, 2023);
        assert_eq!(lunar.month, 12);
        assert!(!lunar.leap);
    }

    #[test]
    fn leap_month_flagged() {
        let engine = IcuEngine::new();
        let lunar = engine.solar_to_lunar(SolarDate::new(2023, 3, 22).unwrap());
        assert_eq!(
            lunar,
            LunarDate {
                year: 2023,
                month: 2,
                leap: true,
                day: 1,
            }
        );
    }

    #[test]
    fn same_numeric_month_before_leap_is_not_flagged() {
        let engine = IcuEngine::new();
        // 2023-02-25 falls in the common second month, which precedes the
        // leap second month of that year.
        let lunar = engine.solar_to_lunar(SolarDate::new(2023, 2, 25).unwrap());
        assert_eq!(lunar.month, 2);
        assert!(!lunar.leap);
    }
}
