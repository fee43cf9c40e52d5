use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use chrono::Local;
use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the register file to `dest` (or a timestamped file next to it)
    /// and optionally compress the copy. Returns the final backup path.
    pub fn backup(store_path: &Path, dest: Option<&Path>, compress: bool) -> AppResult<PathBuf> {
        // 1️⃣ Check register exists
        if !store_path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("Attendance file not found: {}", store_path.display()),
            )
            .into());
        }

        let dest = match dest {
            Some(d) => d.to_path_buf(),
            None => default_backup_path(store_path),
        };

        if dest == store_path {
            return Err(AppError::Validation(
                "backup destination is the attendance file itself".into(),
            ));
        }

        // 2️⃣ Ensure destination folder exists
        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Copy register
        fs::copy(store_path, &dest)?;
        success(format!("Backup created: {}", dest.display()));

        if !compress {
            return Ok(dest);
        }

        // 4️⃣ Optional compression
        let compressed = if cfg!(target_os = "windows") {
            compress_zip(&dest)?
        } else {
            compress_tar_gz(&dest)?
        };

        // remove uncompressed copy
        if let Err(e) = fs::remove_file(&dest) {
            warning(format!("Failed to remove uncompressed backup: {}", e));
        } else {
            info(format!("Removed uncompressed backup: {}", dest.display()));
        }

        Ok(compressed)
    }
}

/// `attendance.csv` → `attendance_backup_20251112_093000.csv`, same folder.
pub fn default_backup_path(store_path: &Path) -> PathBuf {
    let stem = store_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance".to_string());
    let ext = store_path
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_else(|| "csv".to_string());
    let stamp = Local::now().format("%Y%m%d_%H%M%S");

    store_path.with_file_name(format!("{stem}_backup_{stamp}.{ext}"))
}

fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "attendance.csv".to_string())
}

/// Compress a backup using .zip
fn compress_zip(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut f = File::open(path)?;
    zip.start_file(entry_name(path), options)?;

    io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path)
}

/// Compress a backup using .tar.gz
fn compress_tar_gz(path: &Path) -> AppResult<PathBuf> {
    let gz_path = path.with_extension("tar.gz");
    let file = File::create(&gz_path)?;
    let encoder = GzEncoder::new(file, Compression::default());

    let mut archive = tar::Builder::new(encoder);
    archive.append_path_with_name(path, entry_name(path))?;
    archive.into_inner()?.finish()?;

    info(format!("Compressed: {}", gz_path.display()));
    Ok(gz_path)
}
