//! Displayed-month and selection state with navigation commands.
//!
//! # Invariants
//! - `displayed_month` is always a normalized month.
//! - Navigation never touches `selected_date`; the two may diverge freely.

use crate::calendar::math::days_in_month;
use crate::model::date::{CalendarDate, YearMonth};
use log::debug;
use serde::{Deserialize, Serialize};

/// The two pieces of view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub displayed_month: YearMonth,
    pub selected_date: CalendarDate,
}

impl ViewState {
    /// Displays the month of `today` with `today` selected.
    pub fn starting_at(today: CalendarDate) -> Self {
        Self {
            displayed_month: today.year_month(),
            selected_date: today,
        }
    }
}

/// Owner of [`ViewState`]; every transition is a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewController {
    state: ViewState,
}

impl ViewController {
    pub fn new(today: CalendarDate) -> Self {
        Self::with_state(ViewState::starting_at(today))
    }

    pub fn with_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.state.displayed_month
    }

    pub fn selected_date(&self) -> CalendarDate {
        self.state.selected_date
    }

    pub fn prev_month(&mut self) {
        self.shift_month(-1);
    }

    pub fn next_month(&mut self) {
        self.shift_month(1);
    }

    /// Displays `month` directly. Selection is left alone.
    pub fn show_month(&mut self, month: YearMonth) {
        self.state.displayed_month = month;
        debug!("event=view_navigate module=view status=ok month={month}");
    }

    /// Displays and selects `today`.
    pub fn go_to_today(&mut self, today: CalendarDate) {
        self.state = ViewState::starting_at(today);
        debug!("event=view_today module=view status=ok date={today}");
    }

    /// Selects `day` of the displayed month.
    ///
    /// Callers only offer days present in the grid, so `day` is expected in
    /// `1..=days_in_month`. Out-of-range values normalize like any date.
    pub fn select_day(&mut self, day: u32) {
        let month = self.state.displayed_month;
        debug_assert!(
            (1..=days_in_month(month.year(), month.month() as i32)).contains(&day),
            "day {day} outside {month}"
        );
        let date = day_of(month, day);
        self.state.selected_date = date;
        debug!("event=view_select module=view status=ok date={date}");
    }

    fn shift_month(&mut self, delta: i32) {
        self.show_month(self.state.displayed_month.offset(delta));
    }
}

fn day_of(month: YearMonth, day: u32) -> CalendarDate {
    let day = i32::try_from(day).unwrap_or(i32::MAX);
    CalendarDate::new(month.year(), month.month() as i32, day)
}
