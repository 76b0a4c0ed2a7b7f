mod commands;
mod render;
mod store;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plancal_core::config::PlanCalConfig;
use plancal_core::event::parse_date;
use plancal_core::series::EventPatch;
use tracing_subscriber::EnvFilter;

use crate::commands::{EventArgs, RepeatArgs};
use crate::store::EventStore;

#[derive(Parser)]
#[command(name = "plancal")]
#[command(about = "Schedule events and catch overlaps before they're saved")]
struct Cli {
    /// Use this events file instead of the configured one
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List stored events by day
    List {
        /// Show events from this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Show events until this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },
    /// Add an event, or a recurring series with --repeat
    Add {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        repeat: RepeatArgs,

        /// Save even if the event overlaps others
        #[arg(short, long)]
        force: bool,
    },
    /// Show which events a time slot would overlap
    Check {
        #[arg(short, long)]
        date: String,

        #[arg(short, long)]
        start: String,

        #[arg(short, long)]
        end: String,
    },
    /// Preview the occurrences of a recurring event without saving
    Expand {
        #[command(flatten)]
        event: EventArgs,

        #[command(flatten)]
        repeat: RepeatArgs,
    },
    /// Move an event to another day
    Move {
        id: String,

        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,

        /// Move even if the event overlaps others
        #[arg(short, long)]
        force: bool,
    },
    /// Delete one event
    Delete { id: String },
    /// Delete every occurrence of a recurring series
    DeleteSeries { series_id: String },
    /// Change fields on every occurrence of a recurring series
    UpdateSeries {
        series_id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        location: Option<String>,

        #[arg(long)]
        category: Option<String>,

        /// Minutes before the start to notify
        #[arg(long)]
        notify: Option<u32>,

        /// New last date of the series (YYYY-MM-DD)
        #[arg(long)]
        until: Option<String>,
    },
    /// Split one occurrence off its series so it can change on its own
    Detach { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = PlanCalConfig::load()?;
    init_tracing(&config.log_level);

    let store = EventStore::new(cli.store.unwrap_or_else(|| config.store_path()));
    tracing::debug!(path = %store.path().display(), "Using event store");

    match cli.command {
        Commands::List { from, to } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            commands::list::run(&store, from, to).await
        }
        Commands::Add { event, repeat, force } => {
            let event = commands::build_event(event, &repeat)?;
            commands::add::run(&store, event, config.default_horizon_months, force).await
        }
        Commands::Check { date, start, end } => commands::check::run(&store, date, start, end).await,
        Commands::Expand { event, repeat } => {
            let event = commands::build_event(event, &repeat)?;
            commands::expand::run(event, config.default_horizon_months)
        }
        Commands::Move { id, date, force } => commands::reschedule::run(&store, &id, date, force).await,
        Commands::Delete { id } => commands::delete::run(&store, &id).await,
        Commands::DeleteSeries { series_id } => commands::series::delete(&store, &series_id).await,
        Commands::UpdateSeries {
            series_id,
            title,
            description,
            location,
            category,
            notify,
            until,
        } => {
            let patch = EventPatch {
                title: title.unwrap_or_default(),
                description: description.unwrap_or_default(),
                location: location.unwrap_or_default(),
                category: category.unwrap_or_default(),
                notification_time: notify.unwrap_or_default(),
                end_date: until.as_deref().map(parse_date).transpose()?,
            };
            commands::series::update(&store, &series_id, patch).await
        }
        Commands::Detach { id } => commands::series::detach(&store, &id).await,
    }
}

/// Log to stderr, filtered by RUST_LOG or else the configured level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
