//! Commands acting on a whole recurring series, or splitting one off it.

use anyhow::Result;
use owo_colors::OwoColorize;
use plancal_core::series::{EventPatch, detach_occurrence, remove_series, series_members, update_series};

use crate::render::{Render, pluralize};
use crate::store::EventStore;

pub async fn update(store: &EventStore, series_id: &str, patch: EventPatch) -> Result<()> {
    if patch.is_empty() {
        anyhow::bail!("Nothing to update. Pass at least one of --title, --description, --location, --category, --notify, --until");
    }

    let pool = store.load().await?;
    let updated = update_series(&pool, series_id, &patch)?;
    let count = series_members(&updated, series_id).len();
    store.save(updated).await?;

    println!("{} {} {}", "Updated".yellow(), count, pluralize("occurrence", count));
    Ok(())
}

pub async fn delete(store: &EventStore, series_id: &str) -> Result<()> {
    let pool = store.load().await?;
    let remaining = remove_series(&pool, series_id)?;
    let count = pool.len() - remaining.len();
    store.save(remaining).await?;

    println!("{} {} {}", "Deleted".red(), count, pluralize("occurrence", count));
    Ok(())
}

/// Make one occurrence standalone so it can be edited on its own.
pub async fn detach(store: &EventStore, id: &str) -> Result<()> {
    let event = store.get(id).await?;

    if !event.is_recurring() {
        println!("{}", "Event is not part of a series".dimmed());
        return Ok(());
    }

    let detached = store.update(detach_occurrence(&event)).await?;
    println!("{} {} {}", "Detached".yellow(), detached.date, detached.render());
    Ok(())
}
