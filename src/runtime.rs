//! Dashboard event loop.
//!
//! One thread owns the [`Page`] and the [`Dashboard`]. Statistics requests run
//! on short-lived worker threads so a slow appliance never stalls the uptime
//! clock; their results come back over a channel and are applied in arrival
//! order, with stale ones discarded by the dashboard's fetch sequencing.

use crate::controllers::dashboard::{Dashboard, FetchTicket, now_millis};
use crate::models::StatisticsSnapshot;
use crate::services::schedule::Interval;
use crate::{Config, Error, Page, Result};
use log::{debug, error, info};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

/// Receives the page after every change.
pub trait FrameSink {
    /// # Errors
    ///
    /// A sink error stops the loop.
    fn emit(&mut self, page: &Page) -> Result<()>;
}

/// Timing of the watch loop
#[derive(Debug, Clone)]
pub struct WatchOptions {
    pub stats_interval: Duration,
    pub uptime_interval: Duration,
    /// Stop after this many uptime recomputations; run forever when `None`.
    pub max_ticks: Option<u64>,
    /// How long to wait for outstanding fetches once the tick budget is spent.
    pub drain_timeout: Duration,
}

impl WatchOptions {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            stats_interval: config.stats_interval(),
            uptime_interval: config.uptime_interval(),
            max_ticks: None,
            drain_timeout: Duration::from_secs(config.timeout_secs),
        }
    }
}

enum Event {
    Statistics(FetchTicket, Result<StatisticsSnapshot>),
}

pub struct WatchLoop {
    dashboard: Dashboard,
    page: Page,
    options: WatchOptions,
    stats: Interval,
    uptime: Interval,
    tx: Sender<Event>,
    rx: Receiver<Event>,
    in_flight: usize,
    emitted_revision: Option<u64>,
}

impl WatchLoop {
    #[must_use]
    pub fn new(dashboard: Dashboard, page: Page, options: WatchOptions) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            stats: Interval::new(options.stats_interval),
            uptime: Interval::new(options.uptime_interval),
            dashboard,
            page,
            options,
            tx,
            rx,
            in_flight: 0,
            emitted_revision: None,
        }
    }

    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    #[must_use]
    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Number of statistics requests issued so far.
    #[must_use]
    pub fn fetches(&self) -> u64 {
        self.stats.fired()
    }

    /// Run until the tick budget is spent or the sink fails.
    ///
    /// # Errors
    ///
    /// Returns the first sink error.
    pub fn run(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        info!(
            "watching statistics every {:?}, uptime every {:?}",
            self.stats.period(),
            self.uptime.period()
        );

        loop {
            let now = Instant::now();
            if self.stats.poll(now) {
                self.spawn_fetch();
            }
            if self.uptime.poll(now) {
                self.dashboard.update_uptimes_display(&mut self.page, now_millis());
            }
            self.emit(sink)?;

            if self
                .options
                .max_ticks
                .is_some_and(|budget| self.uptime.fired() >= budget)
            {
                return self.drain(sink);
            }

            let now = Instant::now();
            let wait = self.stats.remaining(now).min(self.uptime.remaining(now));
            match self.rx.recv_timeout(wait) {
                Ok(event) => {
                    self.apply(event);
                    self.emit(sink)?;
                }
                Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => {}
            }
        }
    }

    fn spawn_fetch(&mut self) {
        let ticket = self.dashboard.begin_statistics();
        let backend = self.dashboard.backend();
        let tx = self.tx.clone();
        debug!("statistics request #{} issued", ticket.seq());

        let spawned = thread::Builder::new()
            .name(format!("stats-fetch-{}", ticket.seq()))
            .spawn(move || {
                let result = backend.statistics();
                let _ = tx.send(Event::Statistics(ticket, result));
            });

        match spawned {
            Ok(_) => self.in_flight += 1,
            Err(e) => {
                error!("cannot spawn statistics fetch: {e}");
                let _ = self.dashboard.complete_statistics(
                    &mut self.page,
                    ticket,
                    Err(Error::Transport(e.to_string())),
                );
            }
        }
    }

    fn apply(&mut self, event: Event) {
        match event {
            Event::Statistics(ticket, result) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                // Failures are rendered into the page; polling carries on.
                let _ = self
                    .dashboard
                    .complete_statistics(&mut self.page, ticket, result);
                self.dashboard
                    .update_uptimes_display(&mut self.page, now_millis());
            }
        }
    }

    fn drain(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        let deadline = Instant::now() + self.options.drain_timeout;
        while self.in_flight > 0 {
            let wait = deadline.saturating_duration_since(Instant::now());
            match self.rx.recv_timeout(wait) {
                Ok(event) => {
                    self.apply(event);
                    self.emit(sink)?;
                }
                Err(_) => {
                    debug!("{} statistics request(s) abandoned", self.in_flight);
                    break;
                }
            }
        }
        Ok(())
    }

    fn emit(&mut self, sink: &mut dyn FrameSink) -> Result<()> {
        let revision = self.page.revision();
        if self.emitted_revision == Some(revision) {
            return Ok(());
        }
        sink.emit(&self.page)?;
        self.emitted_revision = Some(revision);
        Ok(())
    }
}
