//! Operations dashboard: statistics polling, uptime clock and control commands

use crate::client::Backend;
use crate::models::{CommandReply, StatisticsSnapshot};
use crate::page::{ContainerId, Control, Page};
use crate::render::dashboard::{render_stats, render_stats_error};
use crate::services::format::format_duration;
use crate::{Error, Result};
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const INVALID_DAYS_MESSAGE: &str =
    "Deletion Status: Please enter a valid number of days (0 or more).";

/// Wall clock in milliseconds since the Unix epoch.
#[must_use]
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
}

/// Parse the cleanup "days" input: a non-negative integer, surrounding
/// whitespace allowed.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for empty, signed, fractional or
/// non-numeric input, or a value that does not fit in `u32`.
pub fn validate_days(input: &str) -> Result<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidInput(format!(
            "days must be a non-negative integer, got '{input}'"
        )));
    }
    trimmed
        .parse()
        .map_err(|_| Error::InvalidInput(format!("days out of range: '{input}'")))
}

/// Handle for one statistics request; newer tickets carry larger sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    #[must_use]
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Cached uptime anchors and fetch sequencing
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    server_start_millis: Option<i64>,
    recording_start_millis: Option<i64>,
    snapshot: Option<StatisticsSnapshot>,
    next_seq: u64,
    newest_completed: Option<u64>,
}

impl DashboardState {
    #[must_use]
    pub fn server_start_millis(&self) -> Option<i64> {
        self.server_start_millis
    }

    #[must_use]
    pub fn recording_start_millis(&self) -> Option<i64> {
        self.recording_start_millis
    }

    /// Last applied snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Option<&StatisticsSnapshot> {
        self.snapshot.as_ref()
    }
}

pub struct Dashboard {
    backend: Arc<dyn Backend>,
    state: DashboardState,
}

impl Dashboard {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: DashboardState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Shared handle to the backend, for fetches run off the owning thread.
    #[must_use]
    pub fn backend(&self) -> Arc<dyn Backend> {
        Arc::clone(&self.backend)
    }

    /// Fetch statistics and apply the result in one step.
    ///
    /// # Errors
    ///
    /// Returns the backend error after rendering it into the stats container.
    pub fn fetch_statistics(&mut self, page: &mut Page) -> Result<()> {
        let ticket = self.begin_statistics();
        let result = self.backend.statistics();
        self.complete_statistics(page, ticket, result).map(|_| ())
    }

    /// Issue a ticket for a new statistics request.
    pub fn begin_statistics(&mut self) -> FetchTicket {
        self.state.next_seq += 1;
        FetchTicket {
            seq: self.state.next_seq,
        }
    }

    /// Apply the result of the request `ticket` was issued for.
    ///
    /// Returns `Ok(false)` without touching the page when a newer request has
    /// already completed. Otherwise a snapshot replaces the stats container and
    /// both start times; a failure replaces the stats container with an inline
    /// error and leaves the start times as they were.
    ///
    /// # Errors
    ///
    /// Returns the request's error after rendering it.
    pub fn complete_statistics(
        &mut self,
        page: &mut Page,
        ticket: FetchTicket,
        result: Result<StatisticsSnapshot>,
    ) -> Result<bool> {
        if self.state.newest_completed.is_some_and(|newest| ticket.seq < newest) {
            warn!(
                "discarding statistics response #{} (newer #{} already applied)",
                ticket.seq,
                self.state.newest_completed.unwrap_or_default()
            );
            return Ok(false);
        }
        self.state.newest_completed = Some(ticket.seq);

        match result {
            Ok(snapshot) => {
                debug!("applying statistics response #{}", ticket.seq);
                page.set_html(ContainerId::DiskStats, render_stats(&snapshot));
                self.state.server_start_millis = snapshot.server_start_time_millis;
                self.state.recording_start_millis = snapshot.recording_start_time_millis;
                self.state.snapshot = Some(snapshot);
                Ok(true)
            }
            Err(e) => {
                error!("Error fetching disk statistics: {e}");
                page.set_html(ContainerId::DiskStats, render_stats_error(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Recompute both uptime labels against `now_ms`.
    pub fn update_uptimes_display(&self, page: &mut Page, now_ms: i64) {
        match self.state.server_start_millis {
            Some(start) => page.set_text(
                ContainerId::ServerUptime,
                format_duration(now_ms.saturating_sub(start)),
            ),
            None => page.set_text(ContainerId::ServerUptime, "Loading..."),
        }

        match self.state.recording_start_millis {
            Some(start) => {
                page.set_text(
                    ContainerId::RecordingUptime,
                    format_duration(now_ms.saturating_sub(start)),
                );
                page.set_text(ContainerId::RecordingStatus, "Status: Recording");
            }
            None => page.set_text(ContainerId::RecordingUptime, "Idle"),
        }
    }

    /// Ask the appliance to start recording.
    ///
    /// # Errors
    ///
    /// A non-2xx answer or transport failure is logged and returned; the page
    /// is left untouched.
    pub fn start_recording(&self, page: &mut Page) -> Result<CommandReply> {
        self.command(page, "start", |backend| backend.start_recording())
    }

    /// Ask the appliance to stop recording.
    ///
    /// # Errors
    ///
    /// See [`Dashboard::start_recording`].
    pub fn stop_recording(&self, page: &mut Page) -> Result<CommandReply> {
        self.command(page, "stop", |backend| backend.stop_recording())
    }

    fn command<F>(&self, page: &mut Page, name: &str, send: F) -> Result<CommandReply>
    where
        F: FnOnce(&dyn Backend) -> Result<CommandReply>,
    {
        match send(self.backend.as_ref()) {
            Ok(reply) => {
                info!("{name} recording: {}", reply.message);
                page.set_text(
                    ContainerId::RecordingStatus,
                    format!("Recording Status: {}", reply.message),
                );
                Ok(reply)
            }
            Err(e) => {
                error!("{name} recording failed: {e}");
                Err(e)
            }
        }
    }

    /// Run the age-based cleanup with the value of the days input.
    ///
    /// The delete control is disabled while the request is outstanding and
    /// re-enabled afterwards whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] without contacting the appliance when the
    /// input is invalid or a cleanup is already outstanding; otherwise the
    /// backend error after rendering it.
    pub fn send_cleanup(&self, page: &mut Page) -> Result<String> {
        if page.is_disabled(Control::DeleteButton) {
            return Err(Error::InvalidInput("a cleanup is already in progress".to_string()));
        }

        let days = match validate_days(page.days_input()) {
            Ok(days) => days,
            Err(e) => {
                page.set_text(ContainerId::CleanupStatus, INVALID_DAYS_MESSAGE);
                return Err(e);
            }
        };

        page.set_text(
            ContainerId::CleanupStatus,
            format!("Deletion Status: Deleting files older than {days} days..."),
        );
        page.set_disabled(Control::DeleteButton, true);

        let result = self.backend.delete_older_than(days);
        match &result {
            Ok(body) => {
                info!("cleanup ({days} days): {body}");
                page.set_text(ContainerId::CleanupStatus, format!("Status: {body}"));
            }
            Err(Error::Api { status, message }) => {
                page.set_text(
                    ContainerId::CleanupStatus,
                    format!("Status: Error ({status}) - {message}"),
                );
            }
            Err(e) => {
                error!("Fetch error (delete): {e}");
                page.set_text(
                    ContainerId::CleanupStatus,
                    format!("Status: Network Error - {e}"),
                );
            }
        }

        page.set_disabled(Control::DeleteButton, false);
        result
    }
}
