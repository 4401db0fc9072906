//! Event repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Own every `Event` record for the lifetime of the view.
//! - Index events by calendar day for per-day and per-month lookups.
//!
//! # Invariants
//! - Event ids are unique across the repository at all times.
//! - Per-day results preserve insertion order.
//! - A failed write leaves the repository unchanged.

use crate::model::date::{CalendarDate, YearMonth};
use crate::model::event::{Event, EventDraft, EventId, EventValidationError};
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Write failure for event repository operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(EventValidationError),
    /// An event with this id is already stored.
    DuplicateId(EventId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::DuplicateId(id) => write!(f, "event already exists: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::DuplicateId(_) => None,
        }
    }
}

impl From<EventValidationError> for RepoError {
    fn from(value: EventValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for event storage and day-bucketed queries.
pub trait EventRepository {
    /// Validates `draft`, assigns a fresh id and appends the event on `date`.
    fn add_event(&mut self, draft: &EventDraft, date: CalendarDate) -> RepoResult<Event>;
    /// Appends an event that already carries an id.
    fn insert_event(&mut self, event: Event) -> RepoResult<EventId>;
    /// Removes the event with `id`. Returns `false` when nothing matched.
    fn remove_event(&mut self, id: EventId) -> bool;
    fn get_event(&self, id: EventId) -> Option<&Event>;
    /// Events on `date` in insertion order.
    fn events_on(&self, date: CalendarDate) -> Vec<&Event>;
    /// Events of `month` keyed by day number, each bucket in insertion order.
    fn events_in_month(&self, month: YearMonth) -> BTreeMap<u32, Vec<&Event>>;
    /// All events in insertion order.
    fn list_events(&self) -> Vec<&Event>;
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-local event repository.
///
/// Events are keyed by an insertion sequence number, which gives a stable
/// global order. A per-day index maps each date to the sequence numbers of
/// its events.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    next_seq: u64,
    events: BTreeMap<u64, Event>,
    seq_by_id: HashMap<EventId, u64>,
    by_day: BTreeMap<CalendarDate, Vec<u64>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: Event) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.seq_by_id.insert(event.id(), seq);
        self.by_day.entry(event.date()).or_default().push(seq);
        self.events.insert(seq, event);
    }

    fn resolve<'a>(&'a self, seqs: &'a [u64]) -> impl Iterator<Item = &'a Event> + 'a {
        seqs.iter().filter_map(|seq| self.events.get(seq))
    }
}

impl EventRepository for InMemoryEventRepository {
    fn add_event(&mut self, draft: &EventDraft, date: CalendarDate) -> RepoResult<Event> {
        let event = match Event::new(draft, date) {
            Ok(event) => event,
            Err(err) => {
                warn!("event=event_add module=repo status=rejected reason={err}");
                return Err(err.into());
            }
        };
        debug_assert!(
            !self.seq_by_id.contains_key(&event.id()),
            "generated event id collided"
        );

        self.push(event.clone());
        debug!(
            "event=event_add module=repo status=ok id={} date={} total={}",
            event.id(),
            event.date(),
            self.events.len()
        );
        Ok(event)
    }

    fn insert_event(&mut self, event: Event) -> RepoResult<EventId> {
        event.validate()?;
        let id = event.id();
        if self.seq_by_id.contains_key(&id) {
            return Err(RepoError::DuplicateId(id));
        }

        self.push(event);
        debug!(
            "event=event_insert module=repo status=ok id={id} total={}",
            self.events.len()
        );
        Ok(id)
    }

    fn remove_event(&mut self, id: EventId) -> bool {
        let Some(seq) = self.seq_by_id.remove(&id) else {
            debug!("event=event_remove module=repo status=noop id={id}");
            return false;
        };

        if let Some(event) = self.events.remove(&seq) {
            if let Some(bucket) = self.by_day.get_mut(&event.date()) {
                bucket.retain(|candidate| *candidate != seq);
                if bucket.is_empty() {
                    self.by_day.remove(&event.date());
                }
            }
        }
        debug!(
            "event=event_remove module=repo status=ok id={id} total={}",
            self.events.len()
        );
        true
    }

    fn get_event(&self, id: EventId) -> Option<&Event> {
        self.seq_by_id
            .get(&id)
            .and_then(|seq| self.events.get(seq))
    }

    fn events_on(&self, date: CalendarDate) -> Vec<&Event> {
        match self.by_day.get(&date) {
            Some(seqs) => self.resolve(seqs).collect(),
            None => Vec::new(),
        }
    }

    fn events_in_month(&self, month: YearMonth) -> BTreeMap<u32, Vec<&Event>> {
        self.by_day
            .range(month.first_day()..=month.last_day())
            .map(|(date, seqs)| (date.day(), self.resolve(seqs).collect::<Vec<_>>()))
            .collect()
    }

    fn list_events(&self) -> Vec<&Event> {
        self.events.values().collect()
    }

    fn len(&self) -> usize {
        self.events.len()
    }
}
