use anyhow::Result;
use owo_colors::OwoColorize;
use plancal_core::event::parse_date;
use plancal_core::{PendingAction, PlanCalError, ProposedChange};

use super::settle;
use crate::render::Render;
use crate::store::EventStore;

/// Move an event to another day, keeping its times.
pub async fn run(store: &EventStore, id: &str, new_date: String, force: bool) -> Result<()> {
    parse_date(&new_date)?;

    let pool = store.load().await?;
    let event = pool
        .iter()
        .find(|event| event.id == id)
        .cloned()
        .ok_or_else(|| PlanCalError::EventNotFound(id.to_string()))?;

    let change = ProposedChange::Reschedule { event, new_date };
    let pending = PendingAction::Idle.propose(change, &pool)?;

    match settle(pending, force)? {
        PendingAction::Committed(moved) => {
            let moved = store.update(moved).await?;
            println!("{} {} {}", "Moved".green(), moved.date, moved.render());
        }
        _ => println!("{}", "Nothing moved".dimmed()),
    }

    Ok(())
}
