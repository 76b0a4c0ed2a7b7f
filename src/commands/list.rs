use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use plancal_core::datetime::parse_date_strict;

use crate::render::Render;
use crate::store::EventStore;

pub async fn run(store: &EventStore, from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<()> {
    let mut events = store.load().await?;

    events.retain(|event| match parse_date_strict(&event.date) {
        Some(date) => from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to),
        // Unparseable dates only show up in an unfiltered listing
        None => from.is_none() && to.is_none(),
    });

    // Sort by day, then start time
    events.sort_by(|a, b| (&a.date, &a.start_time).cmp(&(&b.date, &b.start_time)));

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    // Group events by day and print
    let mut current_date: Option<&str> = None;

    for event in &events {
        if current_date != Some(event.date.as_str()) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", format_date_label(&event.date).bold());
            current_date = Some(event.date.as_str());
        }

        println!("  {} {}", event.render(), event.id.dimmed());
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Wed Feb 25 2026")
fn format_date_label(date: &str) -> String {
    match parse_date_strict(date) {
        Some(d) => d.format("%a %b %-d %Y").to_string(),
        None => date.to_string(),
    }
}
