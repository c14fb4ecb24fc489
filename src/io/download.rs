//! Saving downloaded recordings

use crate::Result;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

fn partial_path(target: &Path) -> PathBuf {
    let mut name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    target.with_file_name(name)
}

/// Stream a download into `target`.
///
/// `fetch` receives the sink to copy the body into. Data lands in
/// `<target>.part` first and is renamed into place only after the whole body
/// arrived; a failed transfer leaves no file behind.
pub fn save_download<F>(target: &Path, fetch: F) -> Result<u64>
where
    F: FnOnce(&mut dyn Write) -> Result<u64>,
{
    let partial = partial_path(target);
    let file = File::create(&partial)?;
    let mut writer = BufWriter::new(file);

    let outcome = fetch(&mut writer).and_then(|bytes| {
        writer.flush()?;
        Ok(bytes)
    });

    match outcome {
        Ok(bytes) => {
            drop(writer);
            fs::rename(&partial, target)?;
            Ok(bytes)
        }
        Err(e) => {
            drop(writer);
            let _ = fs::remove_file(&partial);
            Err(e)
        }
    }
}
