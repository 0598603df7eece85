//! Raw TAQ timestamps to [`TimeOfDay`].
//!
//! Every conversion has a `try_` form that reports why it failed and a plain
//! form that logs the failure at debug level and returns `None`.

use crate::domain::model::{TimeOfDay, TimestampFormat};
use crate::domain::ports::RawNumber;
use crate::utils::error::{Result, TaqError};

const MILLIS_PER_SECOND: i64 = 1_000;

/// Parses `value` as a float and truncates it toward zero.
pub fn try_coerce_float_to_int(value: impl RawNumber) -> Result<i64> {
    let number = value
        .to_f64()
        .ok_or_else(|| TaqError::parse(value.raw_text(), "not a number"))?;

    if !number.is_finite() {
        return Err(TaqError::parse(value.raw_text(), "not a finite number"));
    }

    let truncated = number.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is already out of range
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return Err(TaqError::parse(value.raw_text(), "out of integer range"));
    }

    Ok(truncated as i64)
}

/// `"2.99"` becomes `2`, `"-2.99"` becomes `-2`.
pub fn coerce_float_to_int(value: impl RawNumber) -> Option<i64> {
    try_coerce_float_to_int(value)
        .inspect_err(|e| tracing::debug!("float coercion failed: {}", e))
        .ok()
}

pub fn try_parse_millis_of_day(ms: impl RawNumber) -> Result<TimeOfDay> {
    let ms = try_coerce_float_to_int(ms)?;
    // floor(ms / 3_600_000) mod 24 etc. reduce to whole seconds mod one day
    Ok(TimeOfDay::from_seconds_of_day(ms.div_euclid(MILLIS_PER_SECOND)))
}

/// Milliseconds since midnight to a time of day. Partial seconds are
/// dropped and values past 24h wrap around.
pub fn parse_millis_of_day(ms: impl RawNumber) -> Option<TimeOfDay> {
    try_parse_millis_of_day(ms)
        .inspect_err(|e| tracing::debug!("millis-of-day conversion failed: {}", e))
        .ok()
}

pub fn try_parse_seconds_of_day(sec: impl RawNumber) -> Result<TimeOfDay> {
    let sec = try_coerce_float_to_int(sec)?;
    Ok(TimeOfDay::from_seconds_of_day(sec))
}

/// Seconds since midnight to a time of day; `90000` becomes `01:00:00`.
pub fn parse_seconds_of_day(sec: impl RawNumber) -> Option<TimeOfDay> {
    try_parse_seconds_of_day(sec)
        .inspect_err(|e| tracing::debug!("seconds-of-day conversion failed: {}", e))
        .ok()
}

pub fn try_parse_time_string(text: &str) -> Result<TimeOfDay> {
    text.parse()
}

/// Strict `HH:MM:SS`. Anything else, including `9:30` or a fractional
/// second, yields `None`.
pub fn parse_time_string(text: &str) -> Option<TimeOfDay> {
    try_parse_time_string(text)
        .inspect_err(|e| tracing::debug!("time string conversion failed: {}", e))
        .ok()
}

impl TimestampFormat {
    /// Converts one raw field according to this encoding.
    pub fn parse(&self, raw: &str) -> Result<TimeOfDay> {
        match self {
            TimestampFormat::Millis => try_parse_millis_of_day(raw),
            TimestampFormat::Seconds => try_parse_seconds_of_day(raw),
            TimestampFormat::Text => try_parse_time_string(raw),
        }
    }
}
