//! Core services: breadcrumb derivation, duration formatting and timer schedules

pub mod breadcrumb;
pub mod format;
pub mod schedule;
