use anyhow::Result;
use owo_colors::OwoColorize;
use plancal_core::{Event, find_overlapping_events};

use super::validate_times;
use crate::render::render_conflicts;
use crate::store::EventStore;

/// Report which stored events a time slot would overlap.
pub async fn run(store: &EventStore, date: String, start: String, end: String) -> Result<()> {
    let candidate = Event::new("", date, start, end);
    validate_times(&candidate)?;

    let pool = store.load().await?;
    let conflicts: Vec<Event> = find_overlapping_events(&candidate, &pool)
        .into_iter()
        .cloned()
        .collect();

    if conflicts.is_empty() {
        println!("{}", "No overlaps".green());
    } else {
        println!("{}", render_conflicts(&candidate, &conflicts));
    }

    Ok(())
}
