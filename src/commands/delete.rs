use anyhow::Result;
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::store::EventStore;

pub async fn run(store: &EventStore, id: &str) -> Result<()> {
    let removed = store.delete(id).await?;
    println!("{} {} {}", "Deleted".red(), removed.date, removed.render());
    Ok(())
}
