//! Event storage.
//!
//! All events live in one JSON file shaped `{ "events": [...] }`. Every
//! operation reads the whole file and writes it back; there is no locking.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plancal_core::{Event, PlanCalError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    events: Vec<Event>,
}

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every stored event. A missing file is an empty store.
    pub async fn load(&self) -> Result<Vec<Event>> {
        if !tokio::fs::try_exists(&self.path).await.unwrap_or(false) {
            tracing::debug!(path = %self.path.display(), "Store file missing, starting empty");
            return Ok(Vec::new());
        }

        let content = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let file: StoreFile = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count = file.events.len(), "Loaded events");
        Ok(file.events)
    }

    /// Replace the stored events.
    pub async fn save(&self, events: Vec<Event>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let count = events.len();
        let content = serde_json::to_string_pretty(&StoreFile { events })?;

        tokio::fs::write(&self.path, content)
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        tracing::debug!(path = %self.path.display(), count, "Saved events");
        Ok(())
    }

    pub async fn get(&self, id: &str) -> Result<Event> {
        self.load()
            .await?
            .into_iter()
            .find(|event| event.id == id)
            .ok_or_else(|| PlanCalError::EventNotFound(id.to_string()).into())
    }

    pub async fn create(&self, event: Event) -> Result<Event> {
        self.create_many(vec![event.clone()]).await?;
        Ok(event)
    }

    /// Append several events at once (e.g. the occurrences of a new series).
    pub async fn create_many(&self, new_events: Vec<Event>) -> Result<()> {
        let mut events = self.load().await?;
        tracing::info!(count = new_events.len(), "Creating events");
        events.extend(new_events);
        self.save(events).await
    }

    /// Replace the stored event with the same id.
    pub async fn update(&self, event: Event) -> Result<Event> {
        let mut events = self.load().await?;

        let slot = events
            .iter_mut()
            .find(|existing| existing.id == event.id)
            .ok_or_else(|| PlanCalError::EventNotFound(event.id.clone()))?;
        *slot = event.clone();

        tracing::info!(id = %event.id, "Updated event");
        self.save(events).await?;
        Ok(event)
    }

    /// Remove one event, returning it.
    pub async fn delete(&self, id: &str) -> Result<Event> {
        let mut events = self.load().await?;

        let index = events
            .iter()
            .position(|event| event.id == id)
            .ok_or_else(|| PlanCalError::EventNotFound(id.to_string()))?;
        let removed = events.remove(index);

        tracing::info!(id, "Deleted event");
        self.save(events).await?;
        Ok(removed)
    }
}
