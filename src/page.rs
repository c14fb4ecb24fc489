//! In-memory model of the operator page: named containers and controls.

use crate::render::{Markup, escape};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Named output container
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContainerId {
    Breadcrumb,
    FileList,
    DiskStats,
    ServerUptime,
    RecordingUptime,
    RecordingStatus,
    CleanupStatus,
}

impl ContainerId {
    pub const ALL: [ContainerId; 7] = [
        ContainerId::Breadcrumb,
        ContainerId::FileList,
        ContainerId::DiskStats,
        ContainerId::ServerUptime,
        ContainerId::RecordingUptime,
        ContainerId::RecordingStatus,
        ContainerId::CleanupStatus,
    ];

    /// Element id of the container in the page document.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContainerId::Breadcrumb => "breadcrumb",
            ContainerId::FileList => "fileList",
            ContainerId::DiskStats => "diskStats",
            ContainerId::ServerUptime => "serverUptime",
            ContainerId::RecordingUptime => "recordingUptime",
            ContainerId::RecordingStatus => "recordingStatus",
            ContainerId::CleanupStatus => "cleanupStatus",
        }
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interactive control
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Control {
    RecordButton,
    StopButton,
    DeleteButton,
    DaysInput,
}

impl Control {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Control::RecordButton => "recordBtn",
            Control::StopButton => "stopBtn",
            Control::DeleteButton => "deleteBtn",
            Control::DaysInput => "daysInput",
        }
    }
}

/// Content of one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Assigned as a text node; never parsed as markup.
    Text(String),
    Html(Markup),
}

impl Content {
    fn to_html(&self) -> String {
        match self {
            Content::Text(text) => escape(text),
            Content::Html(markup) => markup.as_str().to_string(),
        }
    }
}

/// Containers and control state for both operator views
#[derive(Debug, Clone, Default)]
pub struct Page {
    containers: BTreeMap<ContainerId, Content>,
    disabled: BTreeSet<Control>,
    days_input: String,
    revision: u64,
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the container's content with a rendered fragment.
    pub fn set_html(&mut self, id: ContainerId, markup: Markup) {
        self.containers.insert(id, Content::Html(markup));
        self.revision += 1;
    }

    /// Replace the container's content with plain text.
    pub fn set_text(&mut self, id: ContainerId, text: impl Into<String>) {
        self.containers.insert(id, Content::Text(text.into()));
        self.revision += 1;
    }

    #[must_use]
    pub fn content(&self, id: ContainerId) -> Option<&Content> {
        self.containers.get(&id)
    }

    /// Plain text of a text container.
    #[must_use]
    pub fn text(&self, id: ContainerId) -> Option<&str> {
        match self.containers.get(&id) {
            Some(Content::Text(text)) => Some(text),
            _ => None,
        }
    }

    /// Serialized inner HTML of a container; empty when never written.
    #[must_use]
    pub fn inner_html(&self, id: ContainerId) -> String {
        self.containers
            .get(&id)
            .map(Content::to_html)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_disabled(&self, control: Control) -> bool {
        self.disabled.contains(&control)
    }

    pub fn set_disabled(&mut self, control: Control, disabled: bool) {
        let changed = if disabled {
            self.disabled.insert(control)
        } else {
            self.disabled.remove(&control)
        };
        if changed {
            self.revision += 1;
        }
    }

    #[must_use]
    pub fn days_input(&self) -> &str {
        &self.days_input
    }

    pub fn set_days_input(&mut self, value: impl Into<String>) {
        self.days_input = value.into();
        self.revision += 1;
    }

    /// Counter bumped on every change; lets the event loop skip unchanged frames.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Assemble a standalone document holding every container and control.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut body = String::new();
        for id in ContainerId::ALL {
            body.push_str(&format!(
                "<div id=\"{}\">{}</div>\n",
                id.as_str(),
                self.inner_html(id)
            ));
        }

        body.push_str(&format!(
            "<input id=\"{}\" type=\"number\" min=\"0\" value=\"{}\">\n",
            Control::DaysInput.as_str(),
            escape(&self.days_input)
        ));

        for (control, label) in [
            (Control::RecordButton, "Record"),
            (Control::StopButton, "Stop"),
            (Control::DeleteButton, "Delete"),
        ] {
            let disabled = if self.is_disabled(control) { " disabled" } else { "" };
            body.push_str(&format!(
                "<button id=\"{}\"{disabled}>{label}</button>\n",
                control.as_str()
            ));
        }

        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>Recordings</title></head>\n<body>\n{body}</body>\n</html>\n"
        )
    }
}
