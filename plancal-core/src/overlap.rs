//! Detect events that overlap in time on the same day.
//!
//! Two events overlap when `a.start < b.end && b.start < a.end`, so events
//! sharing a start or an end overlap, while back-to-back events don't.
//! Events with malformed dates or times never overlap anything.

use crate::event::Event;

/// Whether two events' time ranges intersect.
pub fn is_overlapping(a: &Event, b: &Event) -> bool {
    a.date_range().overlaps(&b.date_range())
}

/// Find the events in `pool` that clash with `candidate`.
///
/// Only events on the same calendar date are compared, and the candidate's
/// own id is skipped so an event being moved or edited doesn't clash with its
/// stored copy. Pool order is preserved.
pub fn find_overlapping_events<'a>(candidate: &Event, pool: &'a [Event]) -> Vec<&'a Event> {
    let candidate_range = candidate.date_range();

    pool.iter()
        .filter(|event| event.id != candidate.id)
        .filter(|event| event.date == candidate.date)
        .filter(|event| candidate_range.overlaps(&event.date_range()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str, date: &str, start: &str, end: &str) -> Event {
        let mut event = Event::new(format!("Event {}", id), date, start, end);
        event.id = id.to_string();
        event
    }

    fn same_day(id: &str, start: &str, end: &str) -> Event {
        event(id, "2025-07-01", start, end)
    }

    fn assert_overlap(a: &Event, b: &Event, expected: bool) {
        assert_eq!(is_overlapping(a, b), expected, "{}-{} vs {}-{}", a.start_time, a.end_time, b.start_time, b.end_time);
        assert_eq!(is_overlapping(b, a), expected, "overlap must be symmetric");
    }

    #[test]
    fn test_partial_overlap() {
        assert_overlap(&same_day("1", "14:00", "16:00"), &same_day("2", "15:00", "17:00"), true);
    }

    #[test]
    fn test_touching_ranges_do_not_overlap() {
        assert_overlap(&same_day("1", "14:00", "16:00"), &same_day("2", "16:00", "18:00"), false);
    }

    #[test]
    fn test_containment_overlaps_in_both_directions() {
        assert_overlap(&same_day("1", "10:00", "18:00"), &same_day("2", "14:00", "16:00"), true);
    }

    #[test]
    fn test_shared_boundaries_overlap() {
        // Same start
        assert_overlap(&same_day("1", "14:00", "15:00"), &same_day("2", "14:00", "16:00"), true);
        // Same end
        assert_overlap(&same_day("1", "14:00", "16:00"), &same_day("2", "15:00", "16:00"), true);
        // Identical
        assert_overlap(&same_day("1", "14:00", "16:00"), &same_day("2", "14:00", "16:00"), true);
    }

    #[test]
    fn test_day_edges() {
        assert_overlap(&same_day("1", "00:00", "02:00"), &same_day("2", "01:00", "03:00"), true);
        assert_overlap(&same_day("1", "22:00", "23:59"), &same_day("2", "23:00", "23:59"), true);
    }

    #[test]
    fn test_invalid_ranges_never_overlap() {
        let valid = same_day("1", "14:00", "16:00");
        assert_overlap(&valid, &same_day("2", "25:00", "26:00"), false);
        assert_overlap(&valid, &event("3", "2025/07/01", "14:00", "16:00"), false);

        let broken = event("4", "", "14:00", "16:00");
        assert_overlap(&broken, &broken.clone(), false);
    }

    fn base_pool() -> Vec<Event> {
        vec![
            same_day("1", "10:00", "12:00"),
            same_day("2", "11:00", "13:00"),
            same_day("3", "15:00", "16:00"),
        ]
    }

    #[test]
    fn test_finds_all_overlaps_in_pool_order() {
        let pool = base_pool();
        let result = find_overlapping_events(&same_day("4", "11:30", "14:30"), &pool);
        assert_eq!(result, vec![&pool[0], &pool[1]]);
    }

    #[test]
    fn test_no_overlaps_gives_empty_result() {
        let pool = base_pool();
        assert!(find_overlapping_events(&same_day("4", "13:00", "15:00"), &pool).is_empty());
    }

    #[test]
    fn test_excludes_candidate_itself() {
        let pool = base_pool();
        let dragged = same_day("1", "10:30", "12:30");
        assert_eq!(find_overlapping_events(&dragged, &pool), vec![&pool[1]]);

        let identical = pool[0].clone();
        assert_eq!(find_overlapping_events(&identical, &pool), vec![&pool[1]]);
    }

    #[test]
    fn test_empty_pool() {
        assert!(find_overlapping_events(&same_day("1", "10:00", "12:00"), &[]).is_empty());
    }

    #[test]
    fn test_finds_many_overlaps() {
        let pool = vec![
            same_day("1", "10:00", "11:00"),
            same_day("2", "10:30", "11:30"),
            same_day("3", "11:00", "12:00"),
            same_day("4", "13:00", "14:00"),
        ];
        let result = find_overlapping_events(&same_day("5", "10:15", "11:45"), &pool);
        assert_eq!(result, vec![&pool[0], &pool[1], &pool[2]]);
    }

    #[test]
    fn test_other_dates_are_ignored() {
        let pool = vec![
            event("1", "2025-07-01", "10:00", "12:00"),
            event("2", "2025-07-02", "10:00", "12:00"),
        ];
        let result = find_overlapping_events(&event("3", "2025-07-01", "11:00", "13:00"), &pool);
        assert_eq!(result, vec![&pool[0]]);
    }
}
