//! Rendered page output
//!
//! The watch loop rewrites the output file on every change, so writes go to a
//! sibling temporary file which is then renamed over the target. A reader
//! (a browser tab with auto-refresh, `watch cat`, ...) never sees a torn page.

use crate::Page;
use std::fs::{self, File};
use std::io::{Result, Write};
use std::path::{Path, PathBuf};

fn staging_path(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page.html".to_string());
    target.with_file_name(format!(".{name}.tmp"))
}

/// Write `page` as a standalone HTML document to `target`.
pub fn write_page<P: AsRef<Path>>(target: P, page: &Page) -> Result<()> {
    let target = target.as_ref();
    let staging = staging_path(target);

    let written = File::create(&staging).and_then(|mut file| {
        file.write_all(page.to_html().as_bytes())?;
        file.sync_all()
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&staging);
        return Err(e);
    }

    fs::rename(&staging, target)
}
