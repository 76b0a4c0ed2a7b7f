use anyhow::Result;
use owo_colors::OwoColorize;
use plancal_core::{Event, PendingAction, ProposedChange};

use super::expand::occurrences;
use super::settle;
use crate::render::{Render, pluralize};
use crate::store::EventStore;

pub async fn run(store: &EventStore, event: Event, horizon_months: u32, force: bool) -> Result<()> {
    // A new series is stored as independent occurrences without an overlap check
    if event.is_recurring() {
        let expansion = occurrences(&event, horizon_months)?;
        expansion.print_horizon_note();
        let count = expansion.events.len();
        store.create_many(expansion.events).await?;

        println!(
            "Created {} {} of {}",
            count,
            pluralize("occurrence", count),
            event.title.bold()
        );
        return Ok(());
    }

    let pool = store.load().await?;
    let pending = PendingAction::Idle.propose(ProposedChange::Create(event), &pool)?;

    match settle(pending, force)? {
        PendingAction::Committed(event) => {
            let event = store.create(event).await?;
            println!("{} {} {}", "Created".green(), event.date, event.render());
            println!("   {}", event.id.dimmed());
        }
        _ => println!("{}", "Nothing saved".dimmed()),
    }

    Ok(())
}
