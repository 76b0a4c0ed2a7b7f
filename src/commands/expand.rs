use anyhow::Result;
use chrono::{Months, NaiveDate};
use owo_colors::OwoColorize;
use plancal_core::{Event, Repeat, expand_recurring_event};

use crate::render::{Render, pluralize};

/// Occurrences of a recurring template, plus the horizon that was applied.
pub struct Expansion {
    pub events: Vec<Event>,
    /// Set when the rule had no end date and the configured horizon was used
    pub horizon: Option<NaiveDate>,
}

impl Expansion {
    pub fn print_horizon_note(&self) {
        if let Some(horizon) = self.horizon {
            println!(
                "{}",
                format!("No end date given, repeating through {}", horizon).dimmed()
            );
        }
    }
}

/// Expand a recurring template, falling back to `horizon_months` past the
/// anchor when the rule has no end date.
pub fn occurrences(template: &Event, horizon_months: u32) -> Result<Expansion> {
    let horizon = match &template.repeat {
        Repeat::Every(rule) if rule.end_date.is_none() => template
            .calendar_date()?
            .checked_add_months(Months::new(horizon_months)),
        _ => None,
    };

    tracing::debug!(title = %template.title, ?horizon, "Expanding recurring event");
    let events = expand_recurring_event(template, horizon)?;

    Ok(Expansion { events, horizon })
}

/// Preview the occurrences of a recurring event without saving anything.
pub fn run(template: Event, horizon_months: u32) -> Result<()> {
    if !template.is_recurring() {
        anyhow::bail!("Nothing to expand. Pass --repeat daily|weekly|monthly|yearly");
    }

    let expansion = occurrences(&template, horizon_months)?;
    expansion.print_horizon_note();
    let events = expansion.events;

    println!(
        "{} {}",
        template.title.bold(),
        format!("({} {})", events.len(), pluralize("occurrence", events.len())).dimmed()
    );
    for event in &events {
        println!("   {} {}", event.date, event.render());
    }

    Ok(())
}
