//! Files written by the console: rendered pages and downloaded recordings

pub mod download;
pub mod page;
