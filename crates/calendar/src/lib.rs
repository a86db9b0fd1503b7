//! # nongli-calendar
//!
//! Conversion of Gregorian calendar dates into formatted traditional
//! Chinese lunar-calendar date strings.
//!
//! The calendrical computation itself (new moons, solar terms, leap-month
//! placement) is delegated to `icu_calendar`'s Chinese calendar behind the
//! [`LunarEngine`] trait; this crate owns input validation, the supported
//! date range, and the traditional naming rules.
//!
//! ## Quick start
//!
//! ```
//! use nongli_calendar::{IcuEngine, gregorian_to_lunar};
//!
//! let engine = IcuEngine::new();
//! assert_eq!(gregorian_to_lunar(&engine, Some("2024-05-25")), "甲辰年 四月十八");
//! assert_eq!(gregorian_to_lunar(&engine, Some("2023-03-22")), "癸卯年 閏二月初一");
//! assert_eq!(gregorian_to_lunar(&engine, None), "請輸入日期");
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! gregorian_to_lunar()
//!   ├─ blank check                      (convert.rs)
//!   ├─ SolarDate::parse()               (solar.rs: shape + real-date checks)
//!   ├─ in_supported_range()             (solar.rs: 1900-01-01 ..= 2049-12-31)
//!   ├─ LunarEngine::solar_to_lunar()    (engine.rs)
//!   └─ LunarDate Display                (lunar.rs: stems, branches, names)
//! ```
//!
//! Every validation failure maps to a fixed user-facing message; no input
//! value makes [`gregorian_to_lunar`] fail.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `convert` | Validation pipeline and entry points |
//! | `engine` | Engine trait and the `icu_calendar` implementation |
//! | `error` | Error type with the fixed user-facing messages |
//! | `lunar` | Lunar date record and naming tables |
//! | `solar` | Validated Gregorian dates and the supported range |

pub mod convert;
pub mod engine;
pub mod error;
pub mod lunar;
pub mod solar;

pub use convert::{convert, gregorian_to_lunar};
pub use engine::{IcuEngine, LunarEngine};
pub use error::ConvertError;
pub use lunar::LunarDate;
pub use solar::{MAX_SUPPORTED, MIN_SUPPORTED, SolarDate};
