//! Calendar event records and the draft they are created from.
//!
//! # Responsibility
//! - Define the immutable `Event` record stored by the event repository.
//! - Define `EventDraft`, the unsaved form data collected by an input surface.
//!
//! # Invariants
//! - `id` is never the nil UUID and never changes after creation.
//! - `title` is never empty.
//! - `location` is `None` rather than an empty string.
//! - Deserialization enforces the same rules as construction.

use crate::model::date::CalendarDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier of one event.
pub type EventId = Uuid;

/// Closed set of event categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    Work,
    Personal,
}

impl EventType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Personal => "personal",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = ParseEventTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "work" => Ok(Self::Work),
            "personal" => Ok(Self::Personal),
            _ => Err(ParseEventTypeError(s.trim().to_string())),
        }
    }
}

/// Text is neither `work` nor `personal`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEventTypeError(String);

impl Display for ParseEventTypeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown event type `{}`; expected work|personal", self.0)
    }
}

impl Error for ParseEventTypeError {}

/// Validation failure for event data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Title is the empty string.
    EmptyTitle,
    /// Id is the nil UUID.
    NilId,
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "event title must not be empty"),
            Self::NilId => write!(f, "event id must not be nil"),
        }
    }
}

impl Error for EventValidationError {}

/// Unsaved event form data.
///
/// Owned by whatever collects user input. It becomes an [`Event`] only when
/// submitted against a date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    /// Free-text time label, e.g. `10:00 AM`. Never parsed.
    pub time: String,
    /// Empty means "no location".
    pub location: String,
    pub kind: EventType,
}

impl EventDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_kind(mut self, kind: EventType) -> Self {
        self.kind = kind;
        self
    }

    /// Whether submitting this draft would pass validation.
    pub fn is_submittable(&self) -> bool {
        !self.title.is_empty()
    }

    /// Restores the blank form state (`work`, all text empty).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// One calendar event attached to a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "EventRecord")]
pub struct Event {
    id: EventId,
    title: String,
    date: CalendarDate,
    time: String,
    location: Option<String>,
    #[serde(rename = "type")]
    kind: EventType,
}

#[derive(Deserialize)]
struct EventRecord {
    id: EventId,
    title: String,
    date: CalendarDate,
    #[serde(default)]
    time: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(rename = "type", default)]
    kind: EventType,
}

impl TryFrom<EventRecord> for Event {
    type Error = EventValidationError;

    fn try_from(value: EventRecord) -> Result<Self, Self::Error> {
        let event = Self {
            id: value.id,
            title: value.title,
            date: value.date,
            time: value.time,
            location: value.location.as_deref().and_then(normalize_location),
            kind: value.kind,
        };
        event.validate()?;
        Ok(event)
    }
}

impl Event {
    /// Creates an event from a draft with a freshly generated id.
    ///
    /// # Errors
    /// - `EmptyTitle` when `draft.title` is empty.
    pub fn new(draft: &EventDraft, date: CalendarDate) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4(), draft, date)
    }

    /// Creates an event with a caller-provided id.
    ///
    /// # Errors
    /// - `NilId` when `id` is nil.
    /// - `EmptyTitle` when `draft.title` is empty.
    pub fn with_id(
        id: EventId,
        draft: &EventDraft,
        date: CalendarDate,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id,
            title: draft.title.clone(),
            date,
            time: draft.time.clone(),
            location: normalize_location(&draft.location),
            kind: draft.kind,
        };
        event.validate()?;
        Ok(event)
    }

    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.is_nil() {
            return Err(EventValidationError::NilId);
        }
        if self.title.is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }
        Ok(())
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn kind(&self) -> EventType {
        self.kind
    }
}

fn normalize_location(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_location, EventDraft, EventType, ParseEventTypeError};

    #[test]
    fn blank_location_becomes_none() {
        assert_eq!(normalize_location(""), None);
        assert_eq!(normalize_location("   "), None);
        assert_eq!(normalize_location("Zoom").as_deref(), Some("Zoom"));
    }

    #[test]
    fn draft_defaults_to_work() {
        let draft = EventDraft::default();
        assert_eq!(draft.kind, EventType::Work);
        assert!(!draft.is_submittable());
    }

    #[test]
    fn reset_clears_every_field() {
        let mut draft = EventDraft::new("Lunch")
            .with_time("12:30")
            .with_location("Bistro")
            .with_kind(EventType::Personal);
        draft.reset();
        assert_eq!(draft, EventDraft::default());
    }

    #[test]
    fn event_type_parses_case_insensitively() {
        assert_eq!(" Personal ".parse::<EventType>().unwrap(), EventType::Personal);
        let err = " Holiday ".parse::<EventType>().unwrap_err();
        assert_eq!(err, ParseEventTypeError("Holiday".to_string()));
        assert!(err.to_string().contains("expected work|personal"));
    }
}
