pub mod add;
pub mod check;
pub mod delete;
pub mod expand;
pub mod list;
pub mod reschedule;
pub mod series;

use anyhow::Result;
use clap::Args;
use dialoguer::Confirm;
use plancal_core::event::parse_date;
use plancal_core::{Event, Frequency, PendingAction, Repeat, RepeatRule};

use crate::render::render_conflicts;

/// Fields describing a single event on the command line.
#[derive(Args, Debug)]
pub struct EventArgs {
    pub title: String,

    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Start time (HH:MM)
    #[arg(short, long)]
    pub start: String,

    /// End time (HH:MM)
    #[arg(short, long)]
    pub end: String,

    #[arg(long, default_value = "")]
    pub description: String,

    #[arg(long, default_value = "")]
    pub location: String,

    #[arg(long, default_value = "")]
    pub category: String,

    /// Minutes before the start to notify
    #[arg(long, default_value_t = 10)]
    pub notify: u32,
}

/// Recurrence flags shared by `add` and `expand`.
#[derive(Args, Debug)]
pub struct RepeatArgs {
    /// daily, weekly, monthly or yearly
    #[arg(long)]
    pub repeat: Option<Frequency>,

    /// Repeat every N days/weeks/months/years
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub interval: i64,

    /// Last date of the series (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<String>,
}

impl RepeatArgs {
    pub fn to_repeat(&self) -> Result<Repeat> {
        let Some(frequency) = self.repeat else {
            return Ok(Repeat::None);
        };

        let end_date = self.until.as_deref().map(parse_date).transpose()?;
        Ok(Repeat::Every(RepeatRule::new(frequency, self.interval, end_date)?))
    }
}

/// Build the event described by the arguments, rejecting bad dates or times.
pub fn build_event(args: EventArgs, repeat: &RepeatArgs) -> Result<Event> {
    let event = Event {
        description: args.description,
        location: args.location,
        category: args.category,
        notification_time: args.notify,
        repeat: repeat.to_repeat()?,
        ..Event::new(args.title, args.date, args.start, args.end)
    };

    validate_times(&event)?;
    Ok(event)
}

pub fn validate_times(event: &Event) -> Result<()> {
    let range = event.date_range();

    if !range.is_valid() {
        anyhow::bail!(
            "Invalid date or time '{} {}-{}'. Expected YYYY-MM-DD and HH:MM",
            event.date,
            event.start_time,
            event.end_time
        );
    }

    if range.start >= range.end {
        anyhow::bail!("End time must be after start time");
    }

    Ok(())
}

/// Carry a proposed change to its end state.
///
/// Overlaps are shown and need a yes at the prompt, unless `force` is set.
pub fn settle(pending: PendingAction, force: bool) -> Result<PendingAction> {
    if !pending.needs_confirmation() {
        return Ok(pending.confirm()?);
    }

    if let Some(change) = pending.change() {
        println!("{}", render_conflicts(&change.resulting_event(), pending.conflicts()));
    }

    if force {
        tracing::info!(conflicts = pending.conflicts().len(), "Saving despite overlap (--force)");
        return Ok(pending.confirm()?);
    }

    let confirmed = Confirm::new()
        .with_prompt("Save anyway?")
        .default(false)
        .interact()?;

    if confirmed {
        Ok(pending.confirm()?)
    } else {
        Ok(pending.cancel()?)
    }
}
