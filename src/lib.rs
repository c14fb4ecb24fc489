//! Recording Appliance Operator Console
//!
//! This library drives the two operator views of a recording appliance: a file
//! browser over the recordings tree (breadcrumbs, listing grid, downloads) and an
//! operations dashboard (disk statistics, server/recording uptime, start/stop and
//! age-based cleanup). Views are rendered as escaped HTML fragments into a
//! [`Page`] model; the appliance itself is reached through the [`Backend`] trait.

pub mod cli;
pub mod client;
pub mod config;
pub mod controllers;
pub mod io;
pub mod models;
pub mod page;
pub mod render;
pub mod runtime;
pub mod services;

pub use client::{Backend, HttpBackend};
pub use config::Config;
pub use controllers::browser::FileBrowser;
pub use controllers::dashboard::Dashboard;
pub use models::{DirectoryEntry, EntryKind, Listing, StatisticsSnapshot};
pub use page::Page;

use std::result;

/// Custom error type for the library
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("Malformed response: {0}")]
    Malformed(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// HTTP status of an application error, if this is one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Malformed(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Malformed(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
