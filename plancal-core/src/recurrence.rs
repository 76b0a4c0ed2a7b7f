//! RRULE expansion for recurring events.
//!
//! Expands a recurring template into one concrete event per occurrence, up to
//! the rule's end date or the caller's horizon, whichever comes first.
//! Occurrences are computed from the anchor date, so a monthly rule on the
//! 31st skips short months instead of drifting to the 30th.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use rrule::RRuleSet;

use crate::constants::{DATE_FORMAT, MAX_OCCURRENCES};
use crate::error::{PlanCalError, PlanCalResult};
use crate::event::{Event, Repeat, RepeatRule};

/// Build an iCalendar-format RRULE string for the rrule crate parser.
fn build_rrule_string(anchor: NaiveDate, rule: &RepeatRule) -> String {
    // All occurrences sit at midnight UTC; only their dates matter
    format!(
        "DTSTART:{}T000000Z\nRRULE:FREQ={};INTERVAL={}",
        anchor.format("%Y%m%d"),
        rule.frequency.rrule_freq(),
        rule.interval
    )
}

fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Dates of every occurrence in [anchor, until].
fn occurrence_dates(
    template: &Event,
    anchor: NaiveDate,
    until: NaiveDate,
    rule: &RepeatRule,
) -> PlanCalResult<Vec<NaiveDate>> {
    if until <= anchor {
        return Ok(vec![anchor]);
    }

    let rrule_str = build_rrule_string(anchor, rule);

    let rrule_set: RRuleSet = rrule_str.parse().map_err(|e| {
        PlanCalError::Recurrence(format!(
            "Failed to build rule for event '{}': {}",
            template.title, e
        ))
    })?;

    // after/before are exclusive; widen by a second so both ends are included
    let tz: rrule::Tz = Utc.into();
    let after = (midnight_utc(anchor) - Duration::seconds(1)).with_timezone(&tz);
    let before = (midnight_utc(until) + Duration::seconds(1)).with_timezone(&tz);

    // One past the cap so a series of exactly MAX_OCCURRENCES still fits
    let result = rrule_set.after(after).before(before).all(MAX_OCCURRENCES + 1);

    if result.dates.len() > usize::from(MAX_OCCURRENCES) {
        return Err(PlanCalError::TooManyOccurrences(
            template.title.clone(),
            MAX_OCCURRENCES,
        ));
    }

    Ok(result.dates.iter().map(|dt| dt.date_naive()).collect())
}

/// Expand a recurring template into its concrete occurrences.
///
/// - The anchor (the template's own date) is always the first occurrence.
/// - Expansion stops at the rule's end date or `horizon`, whichever is
///   earlier; an occurrence on that day is included. A rule with neither is
///   rejected rather than expanded without bound.
/// - Every occurrence gets a fresh id and the same series id: the template's
///   if it already belongs to a series, otherwise a new one.
/// - A non-recurring template comes back unchanged as the only element.
pub fn expand_recurring_event(template: &Event, horizon: Option<NaiveDate>) -> PlanCalResult<Vec<Event>> {
    let rule = match &template.repeat {
        Repeat::Every(rule) => rule,
        Repeat::None => return Ok(vec![template.clone()]),
    };

    let anchor = template.calendar_date()?;

    let until = match (rule.end_date, horizon) {
        (Some(end), Some(horizon)) => end.min(horizon),
        (Some(end), None) => end,
        (None, Some(horizon)) => horizon,
        (None, None) => return Err(PlanCalError::MissingHorizon(template.title.clone())),
    };

    let series_id = rule
        .series_id
        .clone()
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

    let events = occurrence_dates(template, anchor, until, rule)?
        .into_iter()
        .map(|date| Event {
            id: uuid::Uuid::new_v4().to_string(),
            date: date.format(DATE_FORMAT).to_string(),
            repeat: Repeat::Every(RepeatRule {
                series_id: Some(series_id.clone()),
                ..rule.clone()
            }),
            ..template.clone()
        })
        .collect();

    Ok(events)
}
