//! Controllers owning per-view state and rendering into a [`crate::Page`]

pub mod browser;
pub mod dashboard;
