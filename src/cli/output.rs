//! Output formatting for CLI

use crate::models::{DirectoryEntry, StatisticsSnapshot};
use crate::page::{ContainerId, Page};
use crate::runtime::FrameSink;
use crate::services::breadcrumb::{self, ROOT_LABEL};
use crate::services::format::download_href;
use crate::Result;
use std::io::Write;
use std::path::PathBuf;

/// Format a listing as a plain-text table
#[must_use]
pub fn format_listing_text(path: &str, items: &[DirectoryEntry]) -> String {
    let mut out = String::new();

    let mut trail = vec![ROOT_LABEL.to_string()];
    if !breadcrumb::is_root(path) {
        trail.extend(breadcrumb::breadcrumb(path).into_iter().map(|c| c.label));
    }
    out.push_str(&trail.join(" / "));
    out.push_str("\n\n");

    if items.is_empty() {
        out.push_str("No files or folders found.\n");
        return out;
    }

    for entry in items {
        if entry.is_dir() {
            out.push_str(&format!("{:<50} {:>12}\n", format!("{}/", entry.name), "<dir>"));
        } else {
            out.push_str(&format!(
                "{:<50} {:>12}  {}\n",
                entry.name,
                entry.size.as_deref().unwrap_or_default(),
                download_href(&entry.path)
            ));
        }
    }
    out
}

/// Format a listing as JSON
pub fn format_listing_json(path: &str, items: &[DirectoryEntry]) -> String {
    let output = serde_json::json!({
        "path": path,
        "breadcrumb": breadcrumb::breadcrumb(path)
            .into_iter()
            .map(|c| serde_json::json!({ "label": c.label, "path": c.path, "clickable": c.clickable }))
            .collect::<Vec<_>>(),
        "items": items,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
}

/// Format the dashboard labels as plain text
#[must_use]
pub fn format_dashboard_text(page: &Page, snapshot: Option<&StatisticsSnapshot>) -> String {
    let mut out = String::new();
    if let Some(s) = snapshot {
        out.push_str(&format!("Total Space:  {}\n", s.total_space_formatted));
        out.push_str(&format!("Free Space:   {}\n", s.free_space_formatted));
        out.push_str(&format!("Usable Space: {}\n", s.usable_space_formatted));
        out.push_str(&format!("Space Used:   {}\n", s.used_space_percentage));
    }
    for (label, id) in [
        ("Server uptime", ContainerId::ServerUptime),
        ("Recording uptime", ContainerId::RecordingUptime),
        ("Recording status", ContainerId::RecordingStatus),
    ] {
        if let Some(text) = page.text(id) {
            out.push_str(&format!("{label}: {text}\n"));
        }
    }
    out
}

#[must_use]
pub fn format_stats_json(snapshot: &StatisticsSnapshot) -> String {
    serde_json::to_string_pretty(snapshot).unwrap_or_else(|_| "{}".to_string())
}

/// Writes every frame to a file, replacing it atomically
#[derive(Debug)]
pub struct PageFileSink {
    target: PathBuf,
}

impl PageFileSink {
    #[must_use]
    pub fn new(target: impl Into<PathBuf>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

impl FrameSink for PageFileSink {
    fn emit(&mut self, page: &Page) -> Result<()> {
        crate::io::page::write_page(&self.target, page)?;
        Ok(())
    }
}

/// Prints the dashboard labels of every frame to stdout
#[derive(Debug, Default)]
pub struct StdoutSink;

impl FrameSink for StdoutSink {
    fn emit(&mut self, page: &Page) -> Result<()> {
        let line = [
            ContainerId::ServerUptime,
            ContainerId::RecordingUptime,
            ContainerId::RecordingStatus,
        ]
        .iter()
        .filter_map(|id| page.text(*id).map(|t| format!("{id}={t}")))
        .collect::<Vec<_>>()
        .join("  ");

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{line}")?;
        stdout.flush()?;
        Ok(())
    }
}
