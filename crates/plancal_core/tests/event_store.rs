use plancal_core::{
    CalendarDate, Event, EventDraft, EventRepository, EventType, EventValidationError,
    InMemoryEventRepository, RepoError,
};
use std::collections::HashSet;
use uuid::Uuid;

fn standup() -> EventDraft {
    EventDraft::new("Standup")
        .with_time("10:00")
        .with_location("Room A")
        .with_kind(EventType::Work)
}

#[test]
fn add_stores_one_matching_record() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);

    let event = repo.add_event(&standup(), date).unwrap();

    assert_eq!(repo.len(), 1);
    let on_day = repo.events_on(date);
    assert_eq!(on_day.len(), 1);
    assert_eq!(on_day[0], &event);
    assert!(!event.id().is_nil());
    assert_eq!(event.title(), "Standup");
    assert_eq!(event.time(), "10:00");
    assert_eq!(event.location(), Some("Room A"));
    assert_eq!(event.kind(), EventType::Work);
    assert_eq!(event.date(), date);
}

#[test]
fn add_generates_unique_ids() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);

    let ids: HashSet<_> = (0..50)
        .map(|_| repo.add_event(&standup(), date).unwrap().id())
        .collect();

    assert_eq!(ids.len(), 50);
    assert_eq!(repo.len(), 50);
}

#[test]
fn add_with_empty_title_is_rejected_without_side_effects() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);
    repo.add_event(&standup(), date).unwrap();

    let err = repo.add_event(&EventDraft::new(""), date).unwrap_err();

    assert_eq!(err, RepoError::Validation(EventValidationError::EmptyTitle));
    assert_eq!(repo.len(), 1);
    assert_eq!(repo.events_on(date).len(), 1);
}

#[test]
fn same_day_events_keep_insertion_order() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);
    repo.add_event(&EventDraft::new("Standup"), date).unwrap();
    repo.add_event(&EventDraft::new("Other day"), date.add_days(1))
        .unwrap();
    repo.add_event(&EventDraft::new("Lunch"), date).unwrap();

    let titles: Vec<_> = repo.events_on(date).iter().map(|e| e.title()).collect();
    assert_eq!(titles, vec!["Standup", "Lunch"]);

    // Repeated reads are identical.
    let again: Vec<_> = repo.events_on(date).iter().map(|e| e.title()).collect();
    assert_eq!(titles, again);
}

#[test]
fn remove_existing_id_hides_it_everywhere() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);
    let keep = repo.add_event(&EventDraft::new("keep"), date).unwrap();
    let drop = repo.add_event(&EventDraft::new("drop"), date).unwrap();

    assert!(repo.remove_event(drop.id()));

    assert_eq!(repo.len(), 1);
    assert!(repo.get_event(drop.id()).is_none());
    assert!(repo.list_events().iter().all(|e| e.id() != drop.id()));
    assert_eq!(repo.events_on(date), vec![&keep]);
}

#[test]
fn remove_unknown_id_is_a_noop() {
    let mut repo = InMemoryEventRepository::new();
    let date = CalendarDate::new(2024, 4, 14);
    repo.add_event(&standup(), date).unwrap();

    assert!(!repo.remove_event(Uuid::new_v4()));
    assert_eq!(repo.len(), 1);
}

#[test]
fn insert_rejects_duplicate_id() {
    let mut repo = InMemoryEventRepository::new();
    let id = Uuid::new_v4();
    let date = CalendarDate::new(2024, 4, 14);
    let first = Event::with_id(id, &standup(), date).unwrap();
    let second = Event::with_id(id, &EventDraft::new("copy"), date).unwrap();

    assert_eq!(repo.insert_event(first).unwrap(), id);
    assert_eq!(repo.insert_event(second).unwrap_err(), RepoError::DuplicateId(id));
    assert_eq!(repo.events_on(date)[0].title(), "Standup");
}

#[test]
fn with_id_rejects_nil_id() {
    let err = Event::with_id(Uuid::nil(), &standup(), CalendarDate::new(2024, 0, 1)).unwrap_err();
    assert_eq!(err, EventValidationError::NilId);
}

#[test]
fn event_serialization_uses_type_field() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let event = Event::with_id(id, &standup(), CalendarDate::new(2024, 1, 29)).unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["type"], "work");
    assert_eq!(json["date"], serde_json::json!({"year": 2024, "month": 1, "day": 29}));
    assert_eq!(json["location"], "Room A");

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_empty_title() {
    let value = serde_json::json!({
        "id": "11111111-2222-4333-8444-555555555555",
        "title": "",
        "date": {"year": 2024, "month": 0, "day": 1},
        "time": "",
        "location": null,
        "type": "personal"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains("title must not be empty"),
        "unexpected error: {err}"
    );
}
