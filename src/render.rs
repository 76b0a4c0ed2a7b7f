//! TUI rendering traits for plancal types.
//!
//! Extension traits that add colored terminal rendering to plancal-core
//! types using owo_colors.

use owo_colors::OwoColorize;
use plancal_core::event::{Event, Repeat};

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let time = format!("{}-{}", self.start_time, self.end_time);
        let mut line = format!("{} {}", time.cyan(), self.title);

        if !self.category.is_empty() {
            line.push_str(&format!(" {}", format!("[{}]", self.category).dimmed()));
        }
        if let Repeat::Every(rule) = &self.repeat {
            line.push_str(&format!(" {}", format!("↻ {}", rule.frequency).dimmed()));
        }

        line
    }
}

/// Render the events `candidate` would clash with.
pub fn render_conflicts(candidate: &Event, conflicts: &[Event]) -> String {
    let range = candidate.date_range();

    let mut lines = vec![format!(
        "{} overlaps with {} {}:",
        "⚠".yellow(),
        conflicts.len(),
        pluralize("event", conflicts.len())
    )];

    for event in conflicts {
        let minutes = range.overlap_minutes(&event.date_range());
        lines.push(format!(
            "   {} {} {}",
            event.date.dimmed(),
            event.render(),
            format!("({} min overlap)", minutes).yellow()
        ));
    }

    lines.join("\n")
}

pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}
