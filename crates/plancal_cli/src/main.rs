//! Terminal month view.
//!
//! # Responsibility
//! - Drive the core command/projection boundary from command-line flags.
//! - Print one month grid plus the selected day's agenda (text or JSON).

mod render;

use anyhow::{bail, Context, Result};
use clap::Parser;
use plancal_core::{
    init_from_config, CalendarConfig, CalendarService, DayCell, Event, EventDraft, EventType,
    MonthGrid, MonthLabel, YearMonth,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "plancal")]
#[command(about = "Show a month calendar with its events")]
#[command(version)]
struct Cli {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Month to display (YYYY-MM); defaults to the current month
    #[arg(short, long)]
    month: Option<String>,

    /// Day of the displayed month to select
    #[arg(short, long)]
    select: Option<u32>,

    /// Start with the built-in sample events
    #[arg(long)]
    sample: bool,

    /// Add an event with this title on the selected day
    #[arg(long)]
    add: Option<String>,

    /// Time label for --add (e.g. "10:00 AM")
    #[arg(long, requires = "add")]
    time: Option<String>,

    /// Location for --add
    #[arg(long, requires = "add")]
    location: Option<String>,

    /// Event type for --add: work or personal
    #[arg(long, requires = "add")]
    kind: Option<String>,

    /// Print the grid and agenda as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Snapshot<'a> {
    label: MonthLabel,
    grid: MonthGrid,
    selected_heading: String,
    selected_events: Vec<&'a Event>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CalendarConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalendarConfig::default(),
    };
    if cli.sample {
        config.seed_sample_events = true;
    }
    init_from_config(&config.logging).context("starting logging")?;

    let mut service = CalendarService::new(config);

    if let Some(month) = &cli.month {
        let month: YearMonth = month.parse()?;
        service.show_month(month);
    }
    if let Some(day) = cli.select {
        let month = service.view_state().displayed_month;
        let last = month.last_day().day();
        if !(1..=last).contains(&day) {
            bail!("day {day} is not in {month} (1..={last})");
        }
        service.select_day(day);
    }
    if let Some(title) = cli.add {
        let kind = match cli.kind.as_deref() {
            Some(text) => text.parse::<EventType>()?,
            None => EventType::default(),
        };
        let mut draft = EventDraft::new(title)
            .with_time(cli.time.unwrap_or_default())
            .with_location(cli.location.unwrap_or_default())
            .with_kind(kind);
        let event = service.submit_draft(&mut draft)?;
        log::info!("event=cli_add module=cli status=ok id={}", event.id());
    }

    if cli.json {
        let snapshot = Snapshot {
            label: service.displayed_month_label(),
            grid: service.current_grid(),
            selected_heading: service.selected_day_heading(),
            selected_events: service.events_for_selected_day(),
        };
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print!("{}", render::render_month(&service));
    println!();
    print!("{}", render::render_agenda(&service));
    if let Some(busiest) = busiest_day(&service.current_grid()) {
        println!(
            "Busiest day this month: {} ({} events)",
            busiest.date, busiest.event_count
        );
    }
    Ok(())
}

fn busiest_day(grid: &MonthGrid) -> Option<DayCell> {
    grid.day_cells()
        .filter(|cell| cell.has_events())
        .max_by_key(|cell| cell.event_count)
        .cloned()
}
