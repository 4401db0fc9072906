//! Calendar arithmetic and the clock abstraction.
//!
//! # Responsibility
//! - Answer month-shape questions (length, first weekday).
//! - Decide "same day" and "today" without any time-of-day component.

pub mod clock;
pub mod math;
