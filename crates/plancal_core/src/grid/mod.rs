//! Month grid projection built from calendar math and the event repository.

pub mod builder;
