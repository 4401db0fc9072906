//! Built-in demo events placed around today.

use crate::model::date::CalendarDate;
use crate::model::event::{EventDraft, EventType};

/// Demo drafts and the day each belongs to.
pub fn sample_drafts(today: CalendarDate) -> Vec<(EventDraft, CalendarDate)> {
    vec![
        (
            EventDraft::new("Team Standup")
                .with_time("10:00 AM")
                .with_location("Conference Room A")
                .with_kind(EventType::Work),
            today,
        ),
        (
            EventDraft::new("Lunch with Sarah")
                .with_time("12:30 PM")
                .with_location("Italian Bistro")
                .with_kind(EventType::Personal),
            today,
        ),
        (
            EventDraft::new("Project Review")
                .with_time("02:00 PM")
                .with_location("Zoom")
                .with_kind(EventType::Work),
            today.add_days(2),
        ),
    ]
}
