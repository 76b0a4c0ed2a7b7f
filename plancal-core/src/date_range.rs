//! Time span covered by an event.

use crate::datetime::{Instant, parse_date_time};
use crate::event::Event;

/// Start and end of an event on its calendar day.
#[derive(Debug, Clone, Copy)]
pub struct DateRange {
    pub start: Instant,
    pub end: Instant,
}

impl DateRange {
    /// Combine the event's date with its start and end times.
    /// If either endpoint is malformed, both become `Instant::Invalid`.
    pub fn from_event(event: &Event) -> Self {
        let start = parse_date_time(&event.date, &event.start_time);
        let end = parse_date_time(&event.date, &event.end_time);

        if start.is_valid() && end.is_valid() {
            DateRange { start, end }
        } else {
            DateRange::invalid()
        }
    }

    pub fn invalid() -> Self {
        DateRange {
            start: Instant::Invalid,
            end: Instant::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.start.is_valid() && self.end.is_valid()
    }

    /// Start-inclusive, end-exclusive intersection test.
    ///
    /// Ranges that only touch (one ends when the other starts) don't overlap.
    /// Invalid endpoints never overlap anything.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shared span in minutes, 0 when the ranges don't overlap.
    pub fn overlap_minutes(&self, other: &DateRange) -> i64 {
        if !self.overlaps(other) {
            return 0;
        }

        let (Some(a_start), Some(a_end), Some(b_start), Some(b_end)) = (
            self.start.as_datetime(),
            self.end.as_datetime(),
            other.start.as_datetime(),
            other.end.as_datetime(),
        ) else {
            return 0;
        };

        (a_end.min(b_end) - a_start.max(b_start)).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn event(date: &str, start: &str, end: &str) -> Event {
        Event::new("Test", date, start, end)
    }

    #[test]
    fn test_from_event_combines_date_and_times() {
        let range = DateRange::from_event(&event("2025-07-01", "14:30", "15:30"));
        let day = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();

        assert_eq!(range.start, Instant::Valid(day.and_hms_opt(14, 30, 0).unwrap()));
        assert_eq!(range.end, Instant::Valid(day.and_hms_opt(15, 30, 0).unwrap()));
    }

    #[test]
    fn test_malformed_date_invalidates_both_ends() {
        let range = DateRange::from_event(&event("2025/07/01", "14:30", "15:30"));
        assert!(!range.start.is_valid());
        assert!(!range.end.is_valid());
    }

    #[test]
    fn test_malformed_time_invalidates_both_ends() {
        let range = DateRange::from_event(&event("2025-07-01", "25:00", "26:00"));
        assert!(!range.start.is_valid());
        assert!(!range.end.is_valid());

        // A single bad endpoint is enough
        let range = DateRange::from_event(&event("2025-07-01", "10:00", "26:00"));
        assert!(!range.is_valid());
    }

    #[test]
    fn test_overlap_minutes() {
        let a = DateRange::from_event(&event("2025-07-01", "14:00", "16:00"));
        let b = DateRange::from_event(&event("2025-07-01", "15:00", "17:00"));
        let c = DateRange::from_event(&event("2025-07-01", "16:00", "18:00"));

        assert_eq!(a.overlap_minutes(&b), 60);
        assert_eq!(b.overlap_minutes(&a), 60);
        assert_eq!(a.overlap_minutes(&c), 0);
        assert_eq!(a.overlap_minutes(&DateRange::invalid()), 0);
    }
}
