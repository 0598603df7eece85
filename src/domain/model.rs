use crate::utils::error::TaqError;
use chrono::{NaiveTime, TimeDelta, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SECONDS_PER_DAY: i64 = 86_400;

static HMS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("HH:MM:SS pattern is valid")
});

/// Wall-clock time with whole-second precision, `00:00:00` through `23:59:59`.
///
/// Carries no date. Arithmetic wraps around midnight instead of rolling a day
/// counter, and the sub-second part of the wrapped `NaiveTime` is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(NaiveTime::MIN);

    /// `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    pub const fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        match NaiveTime::from_hms_opt(hour, minute, second) {
            Some(time) => Some(TimeOfDay(time)),
            None => None,
        }
    }

    /// Builds the time `seconds` after midnight, wrapping modulo one day.
    /// Negative values count back from the following midnight.
    pub fn from_seconds_of_day(seconds: i64) -> Self {
        let wrapped = TimeDelta::seconds(seconds.rem_euclid(SECONDS_PER_DAY));
        TimeOfDay(NaiveTime::MIN.overflowing_add_signed(wrapped).0)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn seconds_from_midnight(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    /// Signed offset from `earlier` to `self` on the same day.
    pub fn signed_seconds_since(&self, earlier: TimeOfDay) -> i64 {
        self.0.signed_duration_since(earlier.0).num_seconds()
    }

    /// Moves the clock by `seconds`, discarding whole days.
    pub fn wrapping_add_seconds(&self, seconds: i64) -> Self {
        let offset = TimeDelta::seconds(seconds.rem_euclid(SECONDS_PER_DAY));
        TimeOfDay(self.0.overflowing_add_signed(offset).0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    /// Truncates fractional (and leap) seconds.
    fn from(time: NaiveTime) -> Self {
        TimeOfDay::from_seconds_of_day(i64::from(time.num_seconds_from_midnight()))
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

impl FromStr for TimeOfDay {
    type Err = TaqError;

    /// Accepts exactly `HH:MM:SS`, zero padded, 24-hour clock.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let caps = HMS_PATTERN
            .captures(text)
            .ok_or_else(|| TaqError::parse(text, "expected HH:MM:SS"))?;

        // 兩位數字必定可解析
        let field = |i: usize| caps[i].parse::<u32>().unwrap_or(u32::MAX);

        TimeOfDay::from_hms(field(1), field(2), field(3))
            .ok_or_else(|| TaqError::parse(text, "hour, minute or second out of range"))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = TaqError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// How a raw timestamp column is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TimestampFormat {
    /// Milliseconds since midnight
    #[serde(alias = "ms")]
    Millis,
    /// Seconds since midnight
    #[serde(alias = "s")]
    Seconds,
    /// `HH:MM:SS`
    #[default]
    #[serde(rename = "string", alias = "text")]
    #[cfg_attr(feature = "cli", value(name = "string", alias = "text"))]
    Text,
}

impl fmt::Display for TimestampFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimestampFormat::Millis => "millis",
            TimestampFormat::Seconds => "seconds",
            TimestampFormat::Text => "string",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(h: u32, m: u32, s: u32) -> TimeOfDay {
        TimeOfDay::from_hms(h, m, s).unwrap()
    }

    #[test]
    fn test_from_hms_bounds() {
        assert!(TimeOfDay::from_hms(23, 59, 59).is_some());
        assert!(TimeOfDay::from_hms(24, 0, 0).is_none());
        assert!(TimeOfDay::from_hms(12, 60, 0).is_none());
        assert!(TimeOfDay::from_hms(12, 0, 60).is_none());
    }

    #[test]
    fn test_from_seconds_of_day_wraps() {
        assert_eq!(TimeOfDay::from_seconds_of_day(0), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_seconds_of_day(3723), hms(1, 2, 3));
        assert_eq!(TimeOfDay::from_seconds_of_day(86_400), TimeOfDay::MIDNIGHT);
        assert_eq!(TimeOfDay::from_seconds_of_day(-1), hms(23, 59, 59));
        assert!(TimeOfDay::from_seconds_of_day(i64::MIN).seconds_from_midnight() < 86_400);
    }

    #[test]
    fn test_display_is_zero_padded() {
        assert_eq!(hms(9, 5, 7).to_string(), "09:05:07");
        assert_eq!(TimeOfDay::MIDNIGHT.to_string(), "00:00:00");
    }

    #[test]
    fn test_from_str_is_strict() {
        assert_eq!("09:30:00".parse::<TimeOfDay>().unwrap(), hms(9, 30, 0));
        assert!("9:30:00".parse::<TimeOfDay>().is_err());
        assert!("09:30".parse::<TimeOfDay>().is_err());
        assert!("09:30:00.5".parse::<TimeOfDay>().is_err());
        assert!(" 09:30:00".parse::<TimeOfDay>().is_err());
        assert!("24:00:00".parse::<TimeOfDay>().is_err());
        assert!("23:59:60".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_from_naive_time_truncates_fraction() {
        let naive = NaiveTime::from_hms_milli_opt(10, 0, 1, 999).unwrap();
        assert_eq!(TimeOfDay::from(naive), hms(10, 0, 1));
    }

    #[test]
    fn test_serde_uses_canonical_string() {
        let json = serde_json::to_string(&hms(16, 0, 0)).unwrap();
        assert_eq!(json, "\"16:00:00\"");
        let back: TimeOfDay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hms(16, 0, 0));
        assert!(serde_json::from_str::<TimeOfDay>("\"4pm\"").is_err());
    }

    #[test]
    fn test_timestamp_format_names() {
        let fmt: TimestampFormat = serde_json::from_str("\"ms\"").unwrap();
        assert_eq!(fmt, TimestampFormat::Millis);
        let fmt: TimestampFormat = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(fmt, TimestampFormat::Text);
        assert_eq!(TimestampFormat::Seconds.to_string(), "seconds");
        assert_eq!(TimestampFormat::default(), TimestampFormat::Text);
    }
}
