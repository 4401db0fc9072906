//! Core domain logic for the plancal month view.
//! This crate is the single source of truth for calendar invariants.

pub mod calendar;
pub mod config;
pub mod grid;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use calendar::clock::{Clock, FixedClock, SystemClock};
pub use calendar::math::{
    add_months, days_in_month, first_weekday_of_month, is_same_day, is_today, is_today_on,
    month_name, WEEKDAY_LABELS,
};
pub use config::{CalendarConfig, ConfigError, LoggingConfig};
pub use grid::builder::{DayCell, GridBuilder, GridCell, MonthGrid, DEFAULT_PREVIEW_LIMIT};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LoggingError,
};
pub use model::date::{CalendarDate, ParseDateError, YearMonth};
pub use model::event::{
    Event, EventDraft, EventId, EventType, EventValidationError, ParseEventTypeError,
};
pub use repo::event_repo::{EventRepository, InMemoryEventRepository, RepoError, RepoResult};
pub use service::calendar_service::{CalendarService, DaySummary, MonthLabel};
pub use view::controller::{ViewController, ViewState};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
