//! Error types for the nongli-calendar crate.

/// Error type for all fallible stages of the conversion pipeline.
///
/// Each variant corresponds to one short-circuiting validation stage. The
/// `Display` text is the exact user-facing message for that stage — callers
/// surface conversion failures to end users verbatim, so the literals here
/// are part of the public contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Returned when the input is absent, empty, or whitespace-only.
    #[error("請輸入日期")]
    EmptyInput,

    /// Returned when the input does not match the `YYYY-MM-DD` shape.
    #[error("日期格式不正確，請使用 YYYY-MM-DD 格式")]
    FormatError,

    /// Returned when the input is well-shaped but does not denote a real
    /// Gregorian calendar date (month 13, Feb 30, Feb 29 in a non-leap year).
    #[error("請輸入有效的日期")]
    InvalidDate,

    /// Returned when the date is real but falls outside the supported
    /// range 1900-01-01 ..= 2049-12-31.
    #[error("此日期超出支援範圍")]
    OutOfRange,
}
