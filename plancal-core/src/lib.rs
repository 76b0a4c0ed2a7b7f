//! Core of plancal: overlap detection and recurrence expansion.
//!
//! Everything in this crate is a pure function of its inputs:
//! - `overlap` decides which events clash on the same day
//! - `recurrence` expands a recurring template into concrete occurrences
//! - `series` and `pending` build the create/update/move flow on top of them
//!
//! Storage, prompting and logging belong to the caller.

pub mod config;
pub mod constants;
pub mod date_range;
pub mod datetime;
pub mod error;
pub mod event;
pub mod overlap;
pub mod pending;
pub mod recurrence;
pub mod series;

pub use date_range::DateRange;
pub use datetime::{Instant, parse_date_time};
pub use error::{PlanCalError, PlanCalResult};
pub use event::{Event, Frequency, Repeat, RepeatRule};
pub use overlap::{find_overlapping_events, is_overlapping};
pub use pending::{PendingAction, ProposedChange};
pub use recurrence::expand_recurring_event;
