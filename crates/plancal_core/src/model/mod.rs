//! Domain model for the month view.
//!
//! # Responsibility
//! - Define calendar-day values and event records used by every other layer.
//!
//! # Invariants
//! - Every event is identified by a stable, non-nil `EventId`.
//! - Calendar values are always normalized real days.

pub mod date;
pub mod event;
