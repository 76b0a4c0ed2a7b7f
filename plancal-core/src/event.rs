//! Scheduled event types.
//!
//! `Event` mirrors the record the event store keeps: date and times stay as
//! the raw `YYYY-MM-DD` / `HH:MM` strings, since malformed values have to
//! survive long enough for the overlap engine to reject them. The repeat
//! rule is a proper sum type; its wire form is the flat
//! `{ type, interval, endDate?, id? }` object.

use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DATE_FORMAT;
use crate::date_range::DateRange;
use crate::datetime::parse_date_strict;
use crate::error::{PlanCalError, PlanCalResult};

/// A scheduled event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Wall-clock start, `HH:MM`
    pub start_time: String,
    /// Wall-clock end, `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub repeat: Repeat,
    /// Minutes before the start to notify
    #[serde(default)]
    pub notification_time: u32,
}

impl Event {
    /// Create a non-recurring event with a fresh id.
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Event {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            repeat: Repeat::None,
            notification_time: 0,
        }
    }

    pub fn with_repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Start and end of this event as instants (invalid if malformed).
    pub fn date_range(&self) -> DateRange {
        DateRange::from_event(self)
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self.repeat, Repeat::Every(_))
    }

    /// The id shared by every occurrence of the series this event belongs to.
    pub fn series_id(&self) -> Option<&str> {
        match &self.repeat {
            Repeat::Every(rule) => rule.series_id.as_deref(),
            Repeat::None => None,
        }
    }

    /// Parse the event's `date` field.
    pub fn calendar_date(&self) -> PlanCalResult<NaiveDate> {
        parse_date(&self.date)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// How an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RepeatWire", into = "RepeatWire")]
pub enum Repeat {
    #[default]
    None,
    Every(RepeatRule),
}

/// A fixed-period recurrence rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatRule {
    pub frequency: Frequency,
    /// Step between occurrences, in units of `frequency`
    pub interval: NonZeroU32,
    /// Last date an occurrence may fall on (inclusive)
    pub end_date: Option<NaiveDate>,
    /// Group id linking all occurrences of one series
    pub series_id: Option<String>,
}

impl RepeatRule {
    /// Build a rule, rejecting non-positive intervals.
    pub fn new(frequency: Frequency, interval: i64, end_date: Option<NaiveDate>) -> PlanCalResult<Self> {
        let interval = u32::try_from(interval)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(PlanCalError::InvalidInterval(interval))?;

        Ok(RepeatRule {
            frequency,
            interval,
            end_date,
            series_id: None,
        })
    }

    pub fn with_series_id(mut self, series_id: impl Into<String>) -> Self {
        self.series_id = Some(series_id.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Yearly => "yearly",
        }
    }

    /// RRULE `FREQ` value
    pub(crate) fn rrule_freq(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
            Frequency::Yearly => "YEARLY",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "yearly" => Ok(Frequency::Yearly),
            other => Err(format!(
                "Unknown repeat type '{}'. Expected daily, weekly, monthly or yearly",
                other
            )),
        }
    }
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> PlanCalResult<NaiveDate> {
    parse_date_strict(s).ok_or_else(|| PlanCalError::InvalidDate(s.to_string()))
}

// =============================================================================
// Wire form
// =============================================================================

/// `type` field of the wire form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatKind {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Flat `{ type, interval, endDate?, id? }` form of [`Repeat`] as stored.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepeatWire {
    #[serde(rename = "type")]
    pub kind: RepeatKind,
    #[serde(default)]
    pub interval: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl TryFrom<RepeatWire> for Repeat {
    type Error = PlanCalError;

    fn try_from(wire: RepeatWire) -> Result<Self, Self::Error> {
        let frequency = match wire.kind {
            RepeatKind::None => return Ok(Repeat::None),
            RepeatKind::Daily => Frequency::Daily,
            RepeatKind::Weekly => Frequency::Weekly,
            RepeatKind::Monthly => Frequency::Monthly,
            RepeatKind::Yearly => Frequency::Yearly,
        };

        let end_date = match wire.end_date.as_deref() {
            None | Some("") => None,
            Some(s) => Some(parse_date(s)?),
        };

        let mut rule = RepeatRule::new(frequency, wire.interval, end_date)?;
        rule.series_id = wire.id;
        Ok(Repeat::Every(rule))
    }
}

impl From<Repeat> for RepeatWire {
    fn from(repeat: Repeat) -> Self {
        match repeat {
            Repeat::None => RepeatWire {
                kind: RepeatKind::None,
                interval: 0,
                end_date: None,
                id: None,
            },
            Repeat::Every(rule) => RepeatWire {
                kind: match rule.frequency {
                    Frequency::Daily => RepeatKind::Daily,
                    Frequency::Weekly => RepeatKind::Weekly,
                    Frequency::Monthly => RepeatKind::Monthly,
                    Frequency::Yearly => RepeatKind::Yearly,
                },
                interval: i64::from(rule.interval.get()),
                end_date: rule.end_date.map(|d| d.format(DATE_FORMAT).to_string()),
                id: rule.series_id,
            },
        }
    }
}
