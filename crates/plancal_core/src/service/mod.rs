//! Core use-case services.
//!
//! # Responsibility
//! - Expose the command/projection boundary consumed by renderers.
//! - Keep renderers decoupled from repository and calendar details.

pub mod calendar_service;
pub mod sample_events;
