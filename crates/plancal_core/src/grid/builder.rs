//! Month grid projection.
//!
//! # Responsibility
//! - Turn (displayed month, selected date, events, today) into an ordered
//!   sequence of cells a renderer can draw without further calendar logic.
//!
//! # Invariants
//! - Leading blanks equal the weekday of day 1 (Sunday = 0).
//! - Day cells are strictly ascending by day number.
//! - A day cell previews at most `preview_limit` events but always reports
//!   the full count.
//! - Building never fails and never mutates the repository.

use crate::calendar::clock::Clock;
use crate::calendar::math::{days_in_month, first_weekday_of_month, is_same_day};
use crate::model::date::{CalendarDate, YearMonth};
use crate::model::event::Event;
use crate::repo::event_repo::EventRepository;
use serde::Serialize;

/// Number of event dots shown per day unless configured otherwise.
pub const DEFAULT_PREVIEW_LIMIT: usize = 3;

const DAYS_PER_WEEK: usize = 7;

/// One slot of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridCell {
    /// Padding before day 1. Carries no date and is never selectable.
    Blank,
    Day(DayCell),
}

impl GridCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Blank => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }
}

/// A numbered day of the displayed month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub day: u32,
    pub date: CalendarDate,
    pub is_selected: bool,
    pub is_today: bool,
    /// First events of the day, in insertion order.
    pub preview: Vec<Event>,
    pub event_count: usize,
}

impl DayCell {
    pub fn has_events(&self) -> bool {
        self.event_count > 0
    }

    /// Events counted but left out of `preview`.
    pub fn hidden_event_count(&self) -> usize {
        self.event_count - self.preview.len()
    }
}

/// Ordered cells of one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub cells: Vec<GridCell>,
}

impl MonthGrid {
    /// Cells before any trailing padding: leading blanks plus days.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn leading_blanks(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.is_blank()).count()
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> + '_ {
        self.cells.iter().filter_map(GridCell::as_day)
    }

    pub fn day(&self, day: u32) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.day == day)
    }

    pub fn selected(&self) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.is_selected)
    }

    /// Rows of seven cells; the last row is padded with trailing blanks.
    pub fn weeks(&self) -> Vec<Vec<GridCell>> {
        self.cells
            .chunks(DAYS_PER_WEEK)
            .map(|chunk| {
                let mut row = chunk.to_vec();
                row.resize(DAYS_PER_WEEK, GridCell::Blank);
                row
            })
            .collect()
    }
}

/// Builds month grids from a repository and a clock.
pub struct GridBuilder<'a, R: EventRepository + ?Sized, C: Clock + ?Sized> {
    repo: &'a R,
    clock: &'a C,
    preview_limit: usize,
}

impl<'a, R: EventRepository + ?Sized, C: Clock + ?Sized> GridBuilder<'a, R, C> {
    pub fn new(repo: &'a R, clock: &'a C) -> Self {
        Self {
            repo,
            clock,
            preview_limit: DEFAULT_PREVIEW_LIMIT,
        }
    }

    pub fn preview_limit(mut self, limit: usize) -> Self {
        self.preview_limit = limit;
        self
    }

    /// Builds the grid for `month` with `selected` highlighted.
    ///
    /// `selected` may lie outside `month`; then no cell is selected.
    pub fn build(&self, month: YearMonth, selected: CalendarDate) -> MonthGrid {
        let (year, month0) = (month.year(), month.month() as i32);
        let leading = first_weekday_of_month(year, month0) as usize;
        let days = days_in_month(year, month0);
        let today = self.clock.today();
        let buckets = self.repo.events_in_month(month);

        let mut cells = Vec::with_capacity(leading + days as usize);
        cells.resize(leading, GridCell::Blank);

        for day in 1..=days {
            let date = CalendarDate::new(year, month0, day as i32);
            let events = buckets.get(&day).map(Vec::as_slice).unwrap_or_default();
            cells.push(GridCell::Day(DayCell {
                day,
                date,
                is_selected: is_same_day(&date, &selected),
                is_today: is_same_day(&date, &today),
                preview: events
                    .iter()
                    .take(self.preview_limit)
                    .map(|event| (*event).clone())
                    .collect(),
                event_count: events.len(),
            }));
        }

        MonthGrid { month, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridBuilder, GridCell};
    use crate::calendar::clock::FixedClock;
    use crate::calendar::math::{days_in_month, first_weekday_of_month};
    use crate::model::date::{CalendarDate, YearMonth};
    use crate::model::event::EventDraft;
    use crate::repo::event_repo::{EventRepository, InMemoryEventRepository};

    #[test]
    fn weeks_pad_the_last_row() {
        let repo = InMemoryEventRepository::new();
        let clock = FixedClock::new(CalendarDate::new(2024, 1, 1));
        let grid = GridBuilder::new(&repo, &clock)
            .build(YearMonth::new(2024, 1), CalendarDate::new(2024, 1, 1));

        let weeks = grid.weeks();
        assert_eq!(weeks.len(), 5);
        assert!(weeks.iter().all(|row| row.len() == 7));
        assert_eq!(weeks[4].iter().filter(|cell| cell.is_blank()).count(), 2);
    }

    #[test]
    fn preview_limit_is_configurable() {
        let mut repo = InMemoryEventRepository::new();
        let date = CalendarDate::new(2024, 1, 5);
        for title in ["a", "b", "c"] {
            repo.add_event(&EventDraft::new(title), date).unwrap();
        }
        let clock = FixedClock::new(date);
        let grid = GridBuilder::new(&repo, &clock)
            .preview_limit(1)
            .build(YearMonth::new(2024, 1), date);

        let cell = grid.day(5).unwrap();
        assert_eq!(cell.preview.len(), 1);
        assert_eq!(cell.hidden_event_count(), 2);
    }

    #[test]
    fn blank_cells_serialize_with_kind_tag() {
        let json = serde_json::to_value(GridCell::Blank).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "blank"}));
    }

    #[test]
    fn layout_matches_calendar_math_across_a_year() {
        let repo = InMemoryEventRepository::new();
        let clock = FixedClock::new(CalendarDate::new(2023, 0, 1));
        let builder = GridBuilder::new(&repo, &clock);

        for month0 in 0..12 {
            let grid = builder.build(YearMonth::new(2023, month0), CalendarDate::new(2023, 0, 1));
            assert_eq!(
                grid.leading_blanks(),
                first_weekday_of_month(2023, month0) as usize
            );
            assert_eq!(
                grid.day_cells().count(),
                days_in_month(2023, month0) as usize
            );
        }
    }
}
