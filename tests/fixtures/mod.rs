//! Test fixtures: a scripted in-memory backend

#![allow(dead_code)]

use recview::models::{CommandReply, DirectoryEntry, EntryKind, Listing, StatisticsSnapshot};
use recview::{Backend, Error, Result};
use std::collections::{HashMap, VecDeque};
use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

/// Backend answering from queued responses and recording every call
#[derive(Default)]
pub struct FakeBackend {
    listings: Mutex<HashMap<String, Result<Listing>>>,
    statistics: Mutex<VecDeque<Result<StatisticsSnapshot>>>,
    commands: Mutex<VecDeque<Result<CommandReply>>>,
    deletes: Mutex<VecDeque<Result<String>>>,
    files: Mutex<HashMap<String, Vec<u8>>>,
    statistics_delay: Option<Duration>,
    pub calls: Mutex<Vec<String>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statistics_delay(mut self, delay: Duration) -> Self {
        self.statistics_delay = Some(delay);
        self
    }

    pub fn listing(self, path: &str, result: Result<Listing>) -> Self {
        self.listings.lock().unwrap().insert(path.to_string(), result);
        self
    }

    pub fn push_statistics(&self, result: Result<StatisticsSnapshot>) {
        self.statistics.lock().unwrap().push_back(result);
    }

    pub fn push_command(&self, result: Result<CommandReply>) {
        self.commands.lock().unwrap().push_back(result);
    }

    pub fn push_delete(&self, result: Result<String>) {
        self.deletes.lock().unwrap().push_back(result);
    }

    pub fn file(self, path: &str, body: &[u8]) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), body.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

fn take_listing(result: &Result<Listing>) -> Result<Listing> {
    match result {
        Ok(listing) => Ok(listing.clone()),
        Err(e) => Err(clone_error(e)),
    }
}

/// `Error` is not `Clone`; rebuild the same variant so tests see what was scripted.
pub fn clone_error(err: &Error) -> Error {
    match err {
        Error::Api { status, message } => Error::Api {
            status: *status,
            message: message.clone(),
        },
        Error::Transport(m) => Error::Transport(m.clone()),
        Error::Malformed(m) => Error::Malformed(m.clone()),
        Error::InvalidInput(m) => Error::InvalidInput(m.clone()),
        Error::Config(m) => Error::Config(m.clone()),
        Error::Io(e) => Error::Io(std::io::Error::new(e.kind(), e.to_string())),
    }
}

impl Backend for FakeBackend {
    fn list_files(&self, path: &str) -> Result<Listing> {
        self.record(format!("list:{path}"));
        match self.listings.lock().unwrap().get(path) {
            Some(result) => take_listing(result),
            None => Err(Error::Api {
                status: 404,
                message: "Directory not found".to_string(),
            }),
        }
    }

    fn statistics(&self) -> Result<StatisticsSnapshot> {
        self.record("statistics".to_string());
        if let Some(delay) = self.statistics_delay {
            std::thread::sleep(delay);
        }
        self.statistics
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transport("no scripted statistics".to_string())))
    }

    fn start_recording(&self) -> Result<CommandReply> {
        self.record("record".to_string());
        self.commands.lock().unwrap().pop_front().expect("scripted command")
    }

    fn stop_recording(&self) -> Result<CommandReply> {
        self.record("stoprecord".to_string());
        self.commands.lock().unwrap().pop_front().expect("scripted command")
    }

    fn delete_older_than(&self, days: u32) -> Result<String> {
        self.record(format!("delete:{days}"));
        self.deletes.lock().unwrap().pop_front().expect("scripted delete")
    }

    fn download(&self, path: &str, sink: &mut dyn Write) -> Result<u64> {
        self.record(format!("download:{path}"));
        match self.files.lock().unwrap().get(path) {
            Some(body) => {
                sink.write_all(body)?;
                Ok(body.len() as u64)
            }
            None => Err(Error::Api {
                status: 404,
                message: "File not found".to_string(),
            }),
        }
    }
}

pub fn dir(name: &str, path: &str) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::Directory,
        size: None,
    }
}

pub fn file(name: &str, path: &str, size: &str) -> DirectoryEntry {
    DirectoryEntry {
        name: name.to_string(),
        path: path.to_string(),
        kind: EntryKind::File,
        size: Some(size.to_string()),
    }
}

pub fn listing(items: Vec<DirectoryEntry>) -> Listing {
    Listing {
        items,
        current_path: None,
    }
}

pub fn snapshot(used: &str, server_start: Option<i64>, recording_start: Option<i64>) -> StatisticsSnapshot {
    StatisticsSnapshot {
        total_space_formatted: "58.00 GB".to_string(),
        free_space_formatted: "20.00 GB".to_string(),
        usable_space_formatted: "20.00 GB".to_string(),
        used_space_percentage: used.to_string(),
        server_start_time_millis: server_start,
        recording_start_time_millis: recording_start,
        total_space: None,
        free_space: None,
        usable_space: None,
        is_recording: None,
    }
}

pub fn reply(message: &str) -> CommandReply {
    CommandReply {
        status: Some("success".to_string()),
        message: message.to_string(),
    }
}
