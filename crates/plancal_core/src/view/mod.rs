//! View state owned by the month view.

pub mod controller;
