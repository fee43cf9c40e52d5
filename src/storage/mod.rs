//! Durable storage: the attendance CSV file and the internal operation log.

pub mod csv_store;
pub mod log;

use crate::errors::AppResult;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Replace `path` with `contents` in one step.
///
/// The bytes are written to a sibling `*.tmp` file which is then renamed over
/// the destination, so a failure never leaves a truncated file behind.
pub fn write_atomic(path: &Path, contents: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_path(path);

    if let Err(e) = write_tmp(&tmp, contents) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }

    Ok(())
}

fn write_tmp(tmp: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = File::create(tmp)?;
    file.write_all(contents)?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("rattendance"));
    name.push(".tmp");
    path.with_file_name(name)
}
