//! Source of "today".

use crate::model::date::CalendarDate;
use chrono::Local;

/// Provides the current local calendar day.
pub trait Clock {
    fn today(&self) -> CalendarDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> CalendarDate {
        (**self).today()
    }
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        CalendarDate::from_naive(Local::now().date_naive())
    }
}

/// Always reports the same day. Used by tests and replay tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    today: CalendarDate,
}

impl FixedClock {
    pub fn new(today: CalendarDate) -> Self {
        Self { today }
    }

    pub fn set(&mut self, today: CalendarDate) {
        self.today = today;
    }
}

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.today
    }
}
