//! File browser: listing navigation, breadcrumbs and downloads

use crate::client::Backend;
use crate::models::DirectoryEntry;
use crate::page::{ContainerId, Page};
use crate::render::files::{
    render_breadcrumb, render_file_list, render_listing_error, render_load_failure,
};
use crate::services::breadcrumb::segments;
use crate::services::format::download_href;
use crate::{Error, Result, io};
use log::{debug, error};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// State remembered between loads
#[derive(Debug, Clone, Default)]
pub struct BrowserState {
    current_path: String,
    items: Vec<DirectoryEntry>,
}

impl BrowserState {
    /// Path of the last successful load; empty at the root.
    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Entries of the last successful load.
    #[must_use]
    pub fn items(&self) -> &[DirectoryEntry] {
        &self.items
    }
}

/// Outcome of activating a listing tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A directory was loaded.
    Navigated,
    /// A file tile; carries its download target. No request was made.
    Download { href: String, filename: String },
}

pub struct FileBrowser {
    backend: Arc<dyn Backend>,
    state: BrowserState,
}

impl FileBrowser {
    #[must_use]
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            state: BrowserState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    #[must_use]
    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    /// Load the listing for `path` and render it.
    ///
    /// On success the breadcrumb and listing containers are replaced and
    /// `path` becomes the current path. On failure only the listing container
    /// is replaced, with an inline error; state stays as it was.
    ///
    /// # Errors
    ///
    /// Returns the backend error after rendering it.
    pub fn load_files(&mut self, page: &mut Page, path: &str) -> Result<()> {
        debug!("loading listing for '{path}'");
        match self.backend.list_files(path) {
            Ok(listing) => {
                self.state.current_path = path.to_string();
                page.set_html(ContainerId::Breadcrumb, render_breadcrumb(path));
                page.set_html(ContainerId::FileList, render_file_list(&listing.items));
                self.state.items = listing.items;
                Ok(())
            }
            Err(Error::Api { status, message }) => {
                page.set_html(ContainerId::FileList, render_listing_error(&message));
                Err(Error::Api { status, message })
            }
            Err(e) => {
                error!("Error loading files: {e}");
                page.set_html(ContainerId::FileList, render_load_failure(&e.to_string()));
                Err(e)
            }
        }
    }

    /// Re-load the current path.
    ///
    /// # Errors
    ///
    /// See [`FileBrowser::load_files`].
    pub fn reload(&mut self, page: &mut Page) -> Result<()> {
        let path = self.state.current_path.clone();
        self.load_files(page, &path)
    }

    /// Activate a tile: directories navigate to exactly `entry.path`, files
    /// yield their download target.
    ///
    /// # Errors
    ///
    /// See [`FileBrowser::load_files`].
    pub fn activate(&mut self, page: &mut Page, entry: &DirectoryEntry) -> Result<Activation> {
        if entry.is_dir() {
            self.load_files(page, &entry.path)?;
            Ok(Activation::Navigated)
        } else {
            Ok(Activation::Download {
                href: download_href(&entry.path),
                filename: entry.name.clone(),
            })
        }
    }

    /// Download the file at `path` into `dest_dir`, named after its last segment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for a path without a file name, or the
    /// backend/I/O error if the transfer fails.
    pub fn download(&self, path: &str, dest_dir: &Path) -> Result<PathBuf> {
        let filename = segments(path)
            .last()
            .filter(|name| is_plain_file_name(name))
            .ok_or_else(|| Error::InvalidInput(format!("no file name in '{path}'")))?;

        let target = dest_dir.join(filename);
        let bytes = io::download::save_download(&target, |sink| {
            self.backend.download(path, sink)
        })?;
        log::info!("downloaded {path} ({bytes} bytes) to {}", target.display());
        Ok(target)
    }
}

// A single path component on every platform: no backslash, and nothing that
// `Path` would read as a parent, root or prefix.
fn is_plain_file_name(name: &str) -> bool {
    !name.contains('\\')
        && Path::new(name).file_name().and_then(|n| n.to_str()) == Some(name)
}
