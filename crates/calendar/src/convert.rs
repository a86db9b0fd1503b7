//! The conversion pipeline: validate, convert, render.

use tracing::debug;

use crate::engine::LunarEngine;
use crate::error::ConvertError;
use crate::solar::SolarDate;

/// Converts a Gregorian `YYYY-MM-DD` string to its formatted lunar date.
///
/// The validation stages run in order and short-circuit: absent or blank
/// input, shape mismatch, nonexistent date, out of supported range. Only a
/// date passing all four reaches the engine.
///
/// # Errors
///
/// Returns the [`ConvertError`] variant for the first failing stage.
pub fn convert<E: LunarEngine>(engine: &E, input: Option<&str>) -> Result<String, ConvertError> {
    let raw = input.ok_or(ConvertError::EmptyInput)?;
    if raw.trim().is_empty() {
        return Err(ConvertError::EmptyInput);
    }
    let solar = SolarDate::parse(raw)?;
    if !solar.in_supported_range() {
        return Err(ConvertError::OutOfRange);
    }
    let lunar = engine.solar_to_lunar(solar);
    debug!(?solar, ?lunar, "converted solar date");
    Ok(lunar.to_string())
}

/// Infallible variant of [`convert`]: validation failures are rendered as
/// their fixed user-facing message instead of an error.
///
/// This is the caller-facing contract — no input value makes it fail.
pub fn gregorian_to_lunar<E: LunarEngine>(engine: &E, input: Option<&str>) -> String {
    match convert(engine, input) {
        Ok(rendered) => rendered,
        Err(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::LunarDate;

    /// Engine stub returning one fixed lunar date, so pipeline behavior
    /// can be tested without real calendrical data.
    struct FixedEngine(LunarDate);

    impl LunarEngine for FixedEngine {
        fn solar_to_lunar(&self, _date: SolarDate) -> LunarDate {
            self.0
        }
    }

    const SAMPLE: LunarDate = LunarDate {
        year: 2024,
        month: 4,
        leap: false,
        day: 18,
    };

    #[test]
    fn absent_and_blank_inputs() {
        let engine = FixedEngine(SAMPLE);
        assert_eq!(gregorian_to_lunar(&engine, None), "請輸入日期");
        assert_eq!(gregorian_to_lunar(&engine, Some("")), "請輸入日期");
        assert_eq!(gregorian_to_lunar(&engine, Some("   ")), "請輸入日期");
        assert_eq!(gregorian_to_lunar(&engine, Some("\t\n")), "請輸入日期");
    }

    #[test]
    fn shape_check_precedes_date_check() {
        let engine = FixedEngine(SAMPLE);
        // Two-digit year is a shape error, not an invalid date.
        assert_eq!(
            gregorian_to_lunar(&engine, Some("24-01-10")),
            "日期格式不正確，請使用 YYYY-MM-DD 格式"
        );
        // Month 13 passes the shape check and fails the real-date check.
        assert_eq!(
            gregorian_to_lunar(&engine, Some("2023-13-01")),
            "請輸入有效的日期"
        );
    }

    #[test]
    fn out_of_range_after_validity() {
        let engine = FixedEngine(SAMPLE);
        assert_eq!(
            convert(&engine, Some("1899-12-31")).unwrap_err(),
            ConvertError::OutOfRange
        );
        assert_eq!(
            convert(&engine, Some("2050-01-01")).unwrap_err(),
            ConvertError::OutOfRange
        );
        // A nonexistent date outside the range still reports invalidity.
        assert_eq!(
            convert(&engine, Some("1899-02-29")).unwrap_err(),
            ConvertError::InvalidDate
        );
    }

    #[test]
    fn renders_engine_output() {
        let engine = FixedEngine(SAMPLE);
        assert_eq!(
            gregorian_to_lunar(&engine, Some("2024-05-25")),
            "甲辰年 四月十八"
        );
    }

    #[test]
    fn renders_leap_marker_from_engine_flag() {
        let engine = FixedEngine(LunarDate {
            year: 2023,
            month: 2,
            leap: true,
            day: 1,
        });
        assert_eq!(
            gregorian_to_lunar(&engine, Some("2023-03-22")),
            "癸卯年 閏二月初一"
        );
    }

    #[test]
    fn engine_month_out_of_contract_renders_fallback() {
        let engine = FixedEngine(LunarDate {
            year: 2024,
            month: 13,
            leap: false,
            day: 1,
        });
        assert_eq!(
            gregorian_to_lunar(&engine, Some("2024-05-25")),
            "甲辰年 无效月份初一"
        );
    }

    #[test]
    fn idempotent_for_same_input() {
        let engine = FixedEngine(SAMPLE);
        let first = gregorian_to_lunar(&engine, Some("2024-05-25"));
        let second = gregorian_to_lunar(&engine, Some("2024-05-25"));
        assert_eq!(first, second);
    }
}
