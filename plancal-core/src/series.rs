//! Operations on a whole recurring series.
//!
//! Occurrences of one series are independent events linked only by their
//! shared series id. These functions take the full event pool and return the
//! new pool, leaving storage to the caller.

use chrono::NaiveDate;

use crate::error::{PlanCalError, PlanCalResult};
use crate::event::{Event, Repeat};

/// Fields to change on every occurrence of a series.
///
/// Empty strings and a zero notification time mean "keep the current value".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventPatch {
    pub title: String,
    pub description: String,
    pub location: String,
    pub category: String,
    pub notification_time: u32,
    /// New last date of the series
    pub end_date: Option<NaiveDate>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }

    fn apply(&self, event: &mut Event) {
        fn replace(target: &mut String, value: &str) {
            if !value.is_empty() {
                *target = value.to_string();
            }
        }

        replace(&mut event.title, &self.title);
        replace(&mut event.description, &self.description);
        replace(&mut event.location, &self.location);
        replace(&mut event.category, &self.category);

        if self.notification_time != 0 {
            event.notification_time = self.notification_time;
        }

        if let (Some(end_date), Repeat::Every(rule)) = (self.end_date, &mut event.repeat) {
            rule.end_date = Some(end_date);
        }
    }
}

/// All occurrences belonging to `series_id`, in pool order.
pub fn series_members<'a>(pool: &'a [Event], series_id: &str) -> Vec<&'a Event> {
    pool.iter()
        .filter(|event| event.series_id() == Some(series_id))
        .collect()
}

/// Apply `patch` to every occurrence of the series.
pub fn update_series(pool: &[Event], series_id: &str, patch: &EventPatch) -> PlanCalResult<Vec<Event>> {
    if series_members(pool, series_id).is_empty() {
        return Err(PlanCalError::SeriesNotFound(series_id.to_string()));
    }

    Ok(pool
        .iter()
        .cloned()
        .map(|mut event| {
            if event.series_id() == Some(series_id) {
                patch.apply(&mut event);
            }
            event
        })
        .collect())
}

/// Drop every occurrence of the series.
pub fn remove_series(pool: &[Event], series_id: &str) -> PlanCalResult<Vec<Event>> {
    let remaining: Vec<Event> = pool
        .iter()
        .filter(|event| event.series_id() != Some(series_id))
        .cloned()
        .collect();

    if remaining.len() == pool.len() {
        return Err(PlanCalError::SeriesNotFound(series_id.to_string()));
    }

    Ok(remaining)
}

/// Turn one occurrence into a standalone event ("edit this occurrence only").
pub fn detach_occurrence(event: &Event) -> Event {
    Event {
        repeat: Repeat::None,
        ..event.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Frequency, RepeatRule};
    use crate::recurrence::expand_recurring_event;

    fn series(anchor: &str, end: &str) -> Vec<Event> {
        let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").unwrap();
        let rule = RepeatRule::new(Frequency::Daily, 1, Some(end)).unwrap();
        let template = Event::new("Workout", anchor, "07:00", "08:00").with_repeat(Repeat::Every(rule));
        expand_recurring_event(&template, None).unwrap()
    }

    fn pool() -> (Vec<Event>, String) {
        let mut pool = series("2025-11-15", "2025-11-17");
        let series_id = pool[0].series_id().unwrap().to_string();
        pool.push(Event::new("Dentist", "2025-11-16", "09:00", "10:00"));
        pool.extend(series("2025-11-20", "2025-11-21"));
        (pool, series_id)
    }

    #[test]
    fn test_series_members() {
        let (pool, series_id) = pool();
        let members = series_members(&pool, &series_id);
        assert_eq!(members.len(), 3);
        assert!(members.iter().all(|e| e.title == "Workout"));
        assert!(series_members(&pool, "missing").is_empty());
    }

    #[test]
    fn test_update_series_only_touches_members() {
        let (pool, series_id) = pool();
        let patch = EventPatch {
            title: "Gym".to_string(),
            notification_time: 15,
            ..Default::default()
        };

        let updated = update_series(&pool, &series_id, &patch).unwrap();

        assert_eq!(updated.len(), pool.len());
        for (before, after) in pool.iter().zip(&updated) {
            if before.series_id() == Some(series_id.as_str()) {
                assert_eq!(after.title, "Gym");
                assert_eq!(after.notification_time, 15);
                assert_eq!(after.date, before.date);
                assert_eq!(after.start_time, before.start_time);
            } else {
                assert_eq!(after, before);
            }
        }
    }

    #[test]
    fn test_empty_patch_fields_keep_values() {
        let (mut pool, series_id) = pool();
        pool[0].location = "Park".to_string();
        pool[0].notification_time = 10;

        let patch = EventPatch {
            category: "health".to_string(),
            ..Default::default()
        };
        let updated = update_series(&pool, &series_id, &patch).unwrap();

        assert_eq!(updated[0].location, "Park");
        assert_eq!(updated[0].notification_time, 10);
        assert_eq!(updated[0].category, "health");
    }

    #[test]
    fn test_update_series_end_date() {
        let (pool, series_id) = pool();
        let end = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        let patch = EventPatch {
            end_date: Some(end),
            ..Default::default()
        };

        let updated = update_series(&pool, &series_id, &patch).unwrap();
        for event in series_members(&updated, &series_id) {
            let Repeat::Every(rule) = &event.repeat else {
                panic!("series member lost its rule");
            };
            assert_eq!(rule.end_date, Some(end));
        }
    }

    #[test]
    fn test_unknown_series_is_an_error() {
        let (pool, _) = pool();
        assert!(matches!(
            update_series(&pool, "missing", &EventPatch::default()),
            Err(PlanCalError::SeriesNotFound(_))
        ));
        assert!(matches!(remove_series(&pool, "missing"), Err(PlanCalError::SeriesNotFound(_))));
    }

    #[test]
    fn test_remove_series() {
        let (pool, series_id) = pool();
        let remaining = remove_series(&pool, &series_id).unwrap();

        assert_eq!(remaining.len(), pool.len() - 3);
        assert!(series_members(&remaining, &series_id).is_empty());
        assert!(remaining.iter().any(|e| e.title == "Dentist"));
    }

    #[test]
    fn test_detach_occurrence() {
        let (pool, series_id) = pool();
        let detached = detach_occurrence(&pool[1]);

        assert_eq!(detached.id, pool[1].id);
        assert_eq!(detached.date, pool[1].date);
        assert!(!detached.is_recurring());
        assert_eq!(pool[1].series_id(), Some(series_id.as_str()));
    }
}
