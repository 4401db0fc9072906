//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define the event storage contract consumed by the grid and service.
//! - Keep indexing details out of the projection code.
//!
//! # Invariants
//! - Repository writes validate events before storing them.
//! - Removing an unknown id is a no-op, not an error.

pub mod event_repo;
