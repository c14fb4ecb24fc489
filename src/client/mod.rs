//! Appliance backend seam: listing, statistics and control endpoints

mod http;

pub use http::HttpBackend;

use crate::Result;
use crate::models::{CommandReply, Listing, StatisticsSnapshot};
use std::io::Write;

/// Everything the controllers need from the appliance.
///
/// Implementations report a non-2xx answer as [`crate::Error::Api`] carrying
/// the server-supplied message, network failures as
/// [`crate::Error::Transport`], and undecodable or invalid bodies as
/// [`crate::Error::Malformed`].
pub trait Backend: Send + Sync {
    /// `GET /api/files?path=<path>`
    fn list_files(&self, path: &str) -> Result<Listing>;

    /// `GET /statistics`
    fn statistics(&self) -> Result<StatisticsSnapshot>;

    /// `GET /record`
    fn start_recording(&self) -> Result<CommandReply>;

    /// `GET /stoprecord`
    fn stop_recording(&self) -> Result<CommandReply>;

    /// `POST /delete` with form field `days`; returns the plain-text reply.
    fn delete_older_than(&self, days: u32) -> Result<String>;

    /// `GET /download/<path>`, streamed into `sink`. Returns the byte count.
    fn download(&self, path: &str, sink: &mut dyn Write) -> Result<u64>;
}
