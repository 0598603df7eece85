use crate::domain::model::{TimeOfDay, SECONDS_PER_DAY};

/// `after - before` in whole seconds, both taken on the same day.
///
/// No midnight handling: `23:00:00 -> 01:00:00` is `-79200`. Use
/// [`wrapping_seconds_between`] when `after` may belong to the next day.
pub fn seconds_between(before: TimeOfDay, after: TimeOfDay) -> i64 {
    after.signed_seconds_since(before)
}

/// Elapsed seconds from `before` to the next occurrence of `after`,
/// always in `0..86400`.
pub fn wrapping_seconds_between(before: TimeOfDay, after: TimeOfDay) -> u32 {
    // rem_euclid keeps the value in 0..86400
    seconds_between(before, after).rem_euclid(SECONDS_PER_DAY) as u32
}

/// Shifts `time` by a signed number of seconds. Crossing midnight wraps the
/// clock; the day overflow is discarded.
pub fn add_seconds(time: TimeOfDay, seconds: i64) -> TimeOfDay {
    time.wrapping_add_seconds(seconds)
}
