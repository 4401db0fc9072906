//! Plain-text rendering of the month view.

use plancal_core::{CalendarService, Clock, EventRepository, GridCell, WEEKDAY_LABELS};
use std::fmt::Write;

const CELL_WIDTH: usize = 6;

/// Renders the month header, weekday row and grid.
///
/// Selected day: `[12]`. Today: `*12`. Each previewed event adds a dot and
/// overflow shows as `+`.
pub fn render_month<R: EventRepository, C: Clock>(service: &CalendarService<R, C>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", service.displayed_month_label());

    for label in WEEKDAY_LABELS {
        let _ = write!(out, "{label:<CELL_WIDTH$}");
    }
    out.push('\n');

    for week in service.current_grid().weeks() {
        for cell in &week {
            let _ = write!(out, "{:<CELL_WIDTH$}", cell_text(cell));
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
    out
}

/// Renders the selected-day heading, its events and the summary line.
pub fn render_agenda<R: EventRepository, C: Clock>(service: &CalendarService<R, C>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", service.selected_day_heading());

    let events = service.events_for_selected_day();
    if events.is_empty() {
        out.push_str("  No events scheduled\n");
    }
    for event in &events {
        let _ = write!(out, "  [{}] {}", event.kind(), event.title());
        if !event.time().is_empty() {
            let _ = write!(out, " at {}", event.time());
        }
        if let Some(location) = event.location() {
            let _ = write!(out, " @ {location}");
        }
        let _ = writeln!(out, "  ({})", event.id());
    }

    let summary = service.day_summary();
    let _ = writeln!(
        out,
        "Events remaining: {} ({}%)",
        summary.event_count, summary.progress_percent
    );
    out
}

fn cell_text(cell: &GridCell) -> String {
    let Some(day) = cell.as_day() else {
        return String::new();
    };

    let mut text = if day.is_selected {
        format!("[{}]", day.day)
    } else if day.is_today {
        format!("*{}", day.day)
    } else {
        day.day.to_string()
    };
    text.push_str(&".".repeat(day.preview.len()));
    if day.hidden_event_count() > 0 {
        text.push('+');
    }
    text
}
