//! Month view use-case service.
//!
//! # Responsibility
//! - Accept view commands (navigation, selection, add/delete event).
//! - Compute every projection fresh from current state on each read.
//!
//! # Invariants
//! - No derived state is cached; a read after a command always reflects it.
//! - New events are always attached to the currently selected date.
//! - A rejected add leaves repository, view state and draft untouched.

use crate::calendar::clock::{Clock, SystemClock};
use crate::calendar::math::{is_same_day, month_name};
use crate::config::CalendarConfig;
use crate::grid::builder::{GridBuilder, MonthGrid};
use crate::model::date::YearMonth;
use crate::model::event::{Event, EventDraft, EventId};
use crate::repo::event_repo::{EventRepository, InMemoryEventRepository, RepoResult};
use crate::service::sample_events::sample_drafts;
use crate::view::controller::{ViewController, ViewState};
use log::{info, warn};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Percentage points each event adds to the day progress bar.
const PROGRESS_PER_EVENT: usize = 20;
const PROGRESS_MAX: usize = 100;

/// Header label of the displayed month, e.g. `February 2024`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthLabel {
    pub name: &'static str,
    pub year: i32,
}

impl Display for MonthLabel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.year)
    }
}

/// Sidebar summary of the selected day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DaySummary {
    pub event_count: usize,
    /// `min(event_count * 20, 100)`.
    pub progress_percent: usize,
}

/// Month view facade over an event repository and a clock.
pub struct CalendarService<R: EventRepository = InMemoryEventRepository, C: Clock = SystemClock> {
    repo: R,
    clock: C,
    view: ViewController,
    config: CalendarConfig,
}

impl CalendarService {
    /// In-memory service on the local wall clock.
    pub fn new(config: CalendarConfig) -> Self {
        Self::with_parts(InMemoryEventRepository::new(), SystemClock, config)
    }
}

impl<R: EventRepository, C: Clock> CalendarService<R, C> {
    /// Assembles a service; the view starts on today.
    ///
    /// Seeds the sample events when `config.seed_sample_events` is set.
    pub fn with_parts(repo: R, clock: C, config: CalendarConfig) -> Self {
        let view = ViewController::new(clock.today());
        let mut service = Self {
            repo,
            clock,
            view,
            config,
        };
        if service.config.seed_sample_events {
            service.seed_sample_events();
        }
        info!(
            "event=service_start module=service status=ok month={} events={}",
            service.view.displayed_month(),
            service.repo.len()
        );
        service
    }

    fn seed_sample_events(&mut self) {
        for (draft, date) in sample_drafts(self.clock.today()) {
            if let Err(err) = self.repo.add_event(&draft, date) {
                warn!("event=sample_seed module=service status=error reason={err}");
            }
        }
    }

    pub fn prev_month(&mut self) {
        self.view.prev_month();
    }

    pub fn next_month(&mut self) {
        self.view.next_month();
    }

    pub fn show_month(&mut self, month: YearMonth) {
        self.view.show_month(month);
    }

    pub fn go_to_today(&mut self) {
        self.view.go_to_today(self.clock.today());
    }

    /// Selects `day` of the displayed month.
    pub fn select_day(&mut self, day: u32) {
        self.view.select_day(day);
    }

    /// Adds an event built from `draft` on the selected date.
    ///
    /// # Errors
    /// - `RepoError::Validation` when the title is empty.
    pub fn add_event(&mut self, draft: &EventDraft) -> RepoResult<Event> {
        self.repo.add_event(draft, self.view.selected_date())
    }

    /// Submits `draft` and resets it on success.
    ///
    /// On failure the draft keeps its content so the form can be corrected.
    pub fn submit_draft(&mut self, draft: &mut EventDraft) -> RepoResult<Event> {
        let event = self.add_event(draft)?;
        draft.reset();
        Ok(event)
    }

    /// Deletes the event with `id`; unknown ids are ignored.
    pub fn delete_event(&mut self, id: EventId) -> bool {
        self.repo.remove_event(id)
    }

    pub fn current_grid(&self) -> MonthGrid {
        GridBuilder::new(&self.repo, &self.clock)
            .preview_limit(self.config.preview_limit)
            .build(self.view.displayed_month(), self.view.selected_date())
    }

    pub fn events_for_selected_day(&self) -> Vec<&Event> {
        self.repo.events_on(self.view.selected_date())
    }

    pub fn displayed_month_label(&self) -> MonthLabel {
        let month = self.view.displayed_month();
        MonthLabel {
            name: month_name(month.month()),
            year: month.year(),
        }
    }

    /// `Today` when the selection is today, otherwise e.g. `March 5`.
    pub fn selected_day_heading(&self) -> String {
        let selected = self.view.selected_date();
        if is_same_day(&selected, &self.clock.today()) {
            return "Today".to_string();
        }
        format!("{} {}", month_name(selected.month()), selected.day())
    }

    pub fn day_summary(&self) -> DaySummary {
        let event_count = self.repo.events_on(self.view.selected_date()).len();
        DaySummary {
            event_count,
            progress_percent: (event_count * PROGRESS_PER_EVENT).min(PROGRESS_MAX),
        }
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }
}
