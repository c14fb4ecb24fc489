//! Wire models for listings, statistics and command replies

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

/// Kind of a listing entry, carried as `type` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Directory,
    File,
}

/// One file or folder record in a listing response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub name: String,
    /// Relative, slash-separated; unique within a listing.
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Pre-formatted size, present only for files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

impl DirectoryEntry {
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directory listing returned by `/api/files`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Listing {
    pub items: Vec<DirectoryEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_path: Option<String>,
}

impl Listing {
    /// Check the invariants the renderer relies on.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if an entry has an empty name, a path repeats
    /// within the listing, or a file entry carries no size.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for entry in &self.items {
            if entry.name.is_empty() {
                return Err(Error::Malformed(format!(
                    "entry with path '{}' has an empty name",
                    entry.path
                )));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(Error::Malformed(format!(
                    "duplicate entry path '{}'",
                    entry.path
                )));
            }
            if entry.kind == EntryKind::File && entry.size.is_none() {
                return Err(Error::Malformed(format!(
                    "file entry '{}' has no size",
                    entry.name
                )));
            }
        }
        Ok(())
    }
}

/// Structured error body of the JSON endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub detail: String,
}

/// Reply of the start/stop recording commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandReply {
    #[serde(default)]
    pub status: Option<String>,
    pub message: String,
}

/// Disk usage and uptime anchors reported by `/statistics`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_space_formatted: String,
    pub free_space_formatted: String,
    pub usable_space_formatted: String,
    pub used_space_percentage: String,
    #[serde(default, deserialize_with = "start_time")]
    pub server_start_time_millis: Option<i64>,
    /// `None` means the appliance is not recording.
    #[serde(default, deserialize_with = "start_time")]
    pub recording_start_time_millis: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_space: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_space: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usable_space: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_recording: Option<bool>,
}

impl StatisticsSnapshot {
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] if one of the formatted fields is blank.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("totalSpaceFormatted", &self.total_space_formatted),
            ("freeSpaceFormatted", &self.free_space_formatted),
            ("usableSpaceFormatted", &self.usable_space_formatted),
            ("usedSpacePercentage", &self.used_space_percentage),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(Error::Malformed(format!("statistics field {name} is empty")));
            }
        }
        Ok(())
    }
}

// The backend sends -1 for "unknown"; null, absent and any negative value
// collapse to None. Float timestamps are truncated.
fn start_time<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Number>::deserialize(deserializer)?;
    let millis = raw.and_then(|n| {
        n.as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
    });
    Ok(millis.filter(|m| *m >= 0))
}
