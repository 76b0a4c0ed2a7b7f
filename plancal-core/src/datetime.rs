//! Wall-clock instants parsed from event date and time strings.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A local wall-clock point in time, or the marker for malformed input.
///
/// `Invalid` compares unequal to everything, itself included, and has no
/// ordering, so any `<` involving it is false.
#[derive(Debug, Clone, Copy)]
pub enum Instant {
    Valid(NaiveDateTime),
    Invalid,
}

impl Instant {
    pub fn is_valid(&self) -> bool {
        matches!(self, Instant::Valid(_))
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Instant::Valid(dt) => Some(*dt),
            Instant::Invalid => None,
        }
    }
}

impl PartialEq for Instant {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Instant::Valid(a), Instant::Valid(b)) => a == b,
            _ => false,
        }
    }
}

impl PartialOrd for Instant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Instant::Valid(a), Instant::Valid(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl From<NaiveDateTime> for Instant {
    fn from(dt: NaiveDateTime) -> Self {
        Instant::Valid(dt)
    }
}

/// Combine a `YYYY-MM-DD` date and an `HH:MM` time into an instant.
///
/// Anything that doesn't match those shapes exactly, or names a day or time
/// that doesn't exist, yields `Instant::Invalid`.
pub fn parse_date_time(date: &str, time: &str) -> Instant {
    match (parse_date_strict(date), parse_time_strict(time)) {
        (Some(d), Some(t)) => Instant::Valid(d.and_time(t)),
        _ => Instant::Invalid,
    }
}

/// Parse exactly `YYYY-MM-DD`.
pub fn parse_date_strict(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    if b.len() != 10 || b[4] != b'-' || b[7] != b'-' {
        return None;
    }

    let year = digits(&b[0..4])?;
    let month = digits(&b[5..7])?;
    let day = digits(&b[8..10])?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
}

/// Parse exactly `HH:MM` on a 24-hour clock.
pub fn parse_time_strict(s: &str) -> Option<NaiveTime> {
    let b = s.as_bytes();
    if b.len() != 5 || b[2] != b':' {
        return None;
    }

    let hour = digits(&b[0..2])?;
    let minute = digits(&b[3..5])?;

    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + u32::from(c - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> Instant {
        Instant::Valid(NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, 0).unwrap())
    }

    #[test]
    fn test_parses_literal_instant() {
        assert_eq!(parse_date_time("2025-07-01", "14:30"), at(2025, 7, 1, 14, 30));
        assert_eq!(parse_date_time("2025-07-01", "00:00"), at(2025, 7, 1, 0, 0));
        assert_eq!(parse_date_time("2025-07-01", "23:59"), at(2025, 7, 1, 23, 59));
    }

    #[test]
    fn test_wrong_date_separator_is_invalid() {
        assert!(!parse_date_time("2025/07/01", "14:30").is_valid());
    }

    #[test]
    fn test_out_of_range_time_is_invalid() {
        assert!(!parse_date_time("2025-07-01", "25:00").is_valid());
        assert!(!parse_date_time("2025-07-01", "24:00").is_valid());
        assert!(!parse_date_time("2025-07-01", "12:60").is_valid());
    }

    #[test]
    fn test_empty_or_loose_strings_are_invalid() {
        assert!(!parse_date_time("", "14:30").is_valid());
        assert!(!parse_date_time("2025-07-01", "").is_valid());
        assert!(!parse_date_time("2025-7-1", "14:30").is_valid());
        assert!(!parse_date_time("2025-07-01", "9:30").is_valid());
        assert!(!parse_date_time("2025-07-01", "14:30:00").is_valid());
        assert!(!parse_date_time("+025-07-01", "14:30").is_valid());
    }

    #[test]
    fn test_nonexistent_day_is_invalid() {
        assert!(!parse_date_time("2025-02-29", "10:00").is_valid());
        assert!(!parse_date_time("2025-04-31", "10:00").is_valid());
        assert!(parse_date_time("2024-02-29", "10:00").is_valid());
    }

    #[test]
    fn test_invalid_instants_never_compare() {
        let invalid = Instant::Invalid;
        let valid = at(2025, 7, 1, 10, 0);

        assert_ne!(invalid, Instant::Invalid);
        assert!(!(invalid < valid));
        assert!(!(valid < invalid));
        assert!(!(invalid < Instant::Invalid));
        assert_eq!(invalid.partial_cmp(&valid), None);
    }
}
