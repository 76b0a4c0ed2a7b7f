//! Pending create/update/move actions awaiting overlap confirmation.
//!
//! A change starts `Idle`, is proposed against the current pool, and either
//! goes straight to `Ready` or stops at `AwaitingConfirmation` with the
//! clashing events. Confirming commits it; cancelling rolls it back.
//!
//! ```text
//! Idle ──propose──▶ Ready ─────────────────┬─confirm─▶ Committed
//!          └──────▶ AwaitingConfirmation ──┤
//!                                          └─cancel──▶ RolledBack
//! ```

use crate::error::{PlanCalError, PlanCalResult};
use crate::event::Event;
use crate::overlap::find_overlapping_events;

/// A change the user asked for, before it is stored.
#[derive(Debug, Clone, PartialEq)]
pub enum ProposedChange {
    Create(Event),
    Update(Event),
    /// Move an existing event to another day, keeping its times
    Reschedule { event: Event, new_date: String },
}

impl ProposedChange {
    /// The event as it would be stored if the change is committed.
    pub fn resulting_event(&self) -> Event {
        match self {
            ProposedChange::Create(event) | ProposedChange::Update(event) => event.clone(),
            ProposedChange::Reschedule { event, new_date } => Event {
                date: new_date.clone(),
                ..event.clone()
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum PendingAction {
    #[default]
    Idle,
    Ready(ProposedChange),
    AwaitingConfirmation {
        change: ProposedChange,
        conflicts: Vec<Event>,
    },
    Committed(Event),
    RolledBack(ProposedChange),
}

impl PendingAction {
    /// Check `change` against `pool` and move to `Ready` or
    /// `AwaitingConfirmation`. Only allowed when nothing is pending.
    pub fn propose(self, change: ProposedChange, pool: &[Event]) -> PlanCalResult<Self> {
        if self.is_pending() {
            return Err(self.invalid("propose"));
        }

        let candidate = change.resulting_event();
        let conflicts: Vec<Event> = find_overlapping_events(&candidate, pool)
            .into_iter()
            .cloned()
            .collect();

        if conflicts.is_empty() {
            Ok(PendingAction::Ready(change))
        } else {
            Ok(PendingAction::AwaitingConfirmation { change, conflicts })
        }
    }

    /// Accept the pending change, overlaps and all.
    pub fn confirm(self) -> PlanCalResult<Self> {
        match self {
            PendingAction::Ready(change) | PendingAction::AwaitingConfirmation { change, .. } => {
                Ok(PendingAction::Committed(change.resulting_event()))
            }
            other => Err(other.invalid("confirm")),
        }
    }

    /// Abandon the pending change.
    pub fn cancel(self) -> PlanCalResult<Self> {
        match self {
            PendingAction::Ready(change) | PendingAction::AwaitingConfirmation { change, .. } => {
                Ok(PendingAction::RolledBack(change))
            }
            other => Err(other.invalid("cancel")),
        }
    }

    /// The change still waiting to be confirmed or cancelled.
    pub fn change(&self) -> Option<&ProposedChange> {
        match self {
            PendingAction::Ready(change) | PendingAction::AwaitingConfirmation { change, .. } => Some(change),
            _ => None,
        }
    }

    /// Events the pending change would overlap with.
    pub fn conflicts(&self) -> &[Event] {
        match self {
            PendingAction::AwaitingConfirmation { conflicts, .. } => conflicts,
            _ => &[],
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, PendingAction::AwaitingConfirmation { .. })
    }

    pub fn is_pending(&self) -> bool {
        matches!(
            self,
            PendingAction::Ready(_) | PendingAction::AwaitingConfirmation { .. }
        )
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, PendingAction::Committed(_) | PendingAction::RolledBack(_))
    }

    pub fn state_name(&self) -> &'static str {
        match self {
            PendingAction::Idle => "idle",
            PendingAction::Ready(_) => "ready",
            PendingAction::AwaitingConfirmation { .. } => "awaiting confirmation",
            PendingAction::Committed(_) => "committed",
            PendingAction::RolledBack(_) => "rolled back",
        }
    }

    fn invalid(&self, action: &'static str) -> PlanCalError {
        PlanCalError::InvalidTransition {
            action,
            state: self.state_name(),
        }
    }
}
