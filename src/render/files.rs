//! File browser fragments: breadcrumb trail and listing grid

use super::{Element, Markup};
use crate::models::DirectoryEntry;
use crate::services::breadcrumb::{self, ROOT_LABEL};
use crate::services::format::download_href;

/// Placeholder shown instead of an empty grid.
pub const EMPTY_LISTING: &str = "No files or folders found.";

/// Navigation link carrying the path it re-loads in `data-path`.
fn nav_link(label: &str, path: &str) -> Markup {
    Element::new("a")
        .attr("href", "#")
        .class("breadcrumb-link")
        .attr("data-action", "navigate")
        .attr("data-path", path)
        .text(label)
        .build()
}

fn current_item(label: &str) -> Markup {
    Element::new("span")
        .class("breadcrumb-item")
        .text(label)
        .build()
}

/// Render the trail for `path`, prefixed by a root link when below the root.
#[must_use]
pub fn render_breadcrumb(path: &str) -> Markup {
    if breadcrumb::is_root(path) {
        return current_item(ROOT_LABEL);
    }

    let mut parts = vec![nav_link(ROOT_LABEL, "")];
    for crumb in &breadcrumb::breadcrumb(path) {
        parts.push(Markup::literal(" / "));
        if crumb.clickable {
            parts.push(nav_link(&crumb.label, &crumb.path));
        } else {
            parts.push(current_item(&crumb.label));
        }
    }
    Markup::concat(parts)
}

fn render_folder(entry: &DirectoryEntry) -> Markup {
    Element::new("div")
        .class("file-item folder")
        .attr("data-action", "navigate")
        .attr("data-path", &entry.path)
        .child(Element::new("div").class("file-icon").text("\u{1F4C1}").build())
        .child(Element::new("div").class("file-name").text(&entry.name).build())
        .build()
}

fn render_file(entry: &DirectoryEntry) -> Markup {
    let details = Element::new("div")
        .class("file-details")
        .child(Element::new("div").class("file-name").text(&entry.name).build())
        .child(
            Element::new("div")
                .class("file-size")
                .text(entry.size.as_deref().unwrap_or_default())
                .build(),
        )
        .build();

    let download = Element::new("a")
        .attr("href", &download_href(&entry.path))
        .class("download-btn")
        .attr("download", &entry.name)
        .text("Download")
        .build();

    Element::new("div")
        .class("file-item file")
        .child(Element::new("div").class("file-icon").text("\u{1F3AC}").build())
        .child(details)
        .child(download)
        .build()
}

/// Render the listing grid, or the placeholder when there is nothing to show.
#[must_use]
pub fn render_file_list(items: &[DirectoryEntry]) -> Markup {
    if items.is_empty() {
        return Element::new("p").class("empty").text(EMPTY_LISTING).build();
    }

    let tiles = items.iter().map(|entry| {
        if entry.is_dir() {
            render_folder(entry)
        } else {
            render_file(entry)
        }
    });

    Element::new("div")
        .class("files-grid")
        .child(Markup::concat(tiles))
        .build()
}

/// Inline error for a non-2xx listing response.
#[must_use]
pub fn render_listing_error(detail: &str) -> Markup {
    Element::new("p")
        .class("error")
        .text(&format!("Error: {detail}"))
        .build()
}

/// Inline error for a transport or parse failure.
#[must_use]
pub fn render_load_failure(message: &str) -> Markup {
    Element::new("p")
        .class("error")
        .text(&format!("Error loading files: {message}"))
        .build()
}
