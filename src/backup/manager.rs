//! Backup manager
//!
//! Snapshots the whole data directory (store files plus managed images) into
//! a timestamped JSON archive. Each file is stored under its path relative to
//! the data directory with base64-encoded contents, so the archive restores
//! onto any base directory.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chrono::{DateTime, Local, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::config::paths::WorkshopPaths;
use crate::error::{WorkshopError, WorkshopResult};

/// Filename timestamp format: backup_YYYYMMDD_HHMMSS.json
const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A single file inside a backup archive
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveEntry {
    /// Path relative to the data directory (forward slashes)
    pub path: String,
    /// Base64-encoded file contents
    pub contents: String,
}

/// Backup archive format
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupArchive {
    /// Schema version for migration support
    pub schema_version: u32,
    /// When the backup was created
    pub created_at: DateTime<Utc>,
    /// Every file under the data directory at snapshot time
    pub files: Vec<ArchiveEntry>,
}

/// Metadata about a backup on disk
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Backup filename
    pub filename: String,
    /// Full path to the backup
    pub path: PathBuf,
    /// Timestamp parsed from the filename
    pub created_at: NaiveDateTime,
    /// Size in bytes
    pub size_bytes: u64,
}

/// Manages backup creation and listing
pub struct BackupManager {
    data_dir: PathBuf,
    backup_dir: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(paths: &WorkshopPaths) -> Self {
        Self {
            data_dir: paths.data_dir(),
            backup_dir: paths.backup_dir(),
        }
    }

    /// Snapshot the data directory into a new timestamped archive.
    ///
    /// Returns the path of the created backup file. Concurrent writers are
    /// not locked out; for a single-user desktop tool the snapshot is taken
    /// as-is.
    pub fn create_backup(&self) -> WorkshopResult<PathBuf> {
        fs::create_dir_all(&self.backup_dir)
            .map_err(|e| WorkshopError::Io(format!("Failed to create backup directory: {}", e)))?;

        let stamp = Local::now().format(STAMP_FORMAT).to_string();
        let backup_path = self.backup_dir.join(format!("backup_{}.json", stamp));

        let archive = self.create_archive()?;
        let json = serde_json::to_string_pretty(&archive)
            .map_err(|e| WorkshopError::Json(format!("Failed to serialize backup: {}", e)))?;

        fs::write(&backup_path, json)
            .map_err(|e| WorkshopError::Io(format!("Failed to write backup file: {}", e)))?;

        Ok(backup_path)
    }

    /// Collect the data directory tree into an archive value
    fn create_archive(&self) -> WorkshopResult<BackupArchive> {
        let mut files = Vec::new();

        for entry in WalkDir::new(&self.data_dir).sort_by_file_name() {
            let entry = entry
                .map_err(|e| WorkshopError::Io(format!("Failed to walk data directory: {}", e)))?;

            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(&self.data_dir)
                .map_err(|e| WorkshopError::Io(format!("Path outside data directory: {}", e)))?;

            let bytes = fs::read(entry.path()).map_err(|e| {
                WorkshopError::Io(format!("Failed to read {}: {}", entry.path().display(), e))
            })?;

            files.push(ArchiveEntry {
                path: relative
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/"),
                contents: BASE64.encode(bytes),
            });
        }

        Ok(BackupArchive {
            schema_version: 1,
            created_at: Utc::now(),
            files,
        })
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> WorkshopResult<Vec<BackupInfo>> {
        if !self.backup_dir.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.backup_dir)
            .map_err(|e| WorkshopError::Io(format!("Failed to read backup directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| WorkshopError::Io(format!("Failed to read directory entry: {}", e)))?;

            if let Some(info) = parse_backup_info(&entry.path()) {
                backups.push(info);
            }
        }

        backups.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(backups)
    }

    /// Get the most recent backup
    pub fn latest(&self) -> WorkshopResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }

    /// Get a specific backup by filename
    pub fn get_backup(&self, filename: &str) -> WorkshopResult<Option<BackupInfo>> {
        let path = self.backup_dir.join(filename);
        if path.exists() {
            Ok(parse_backup_info(&path))
        } else {
            Ok(None)
        }
    }

    /// Get the backup directory path
    pub fn backup_dir(&self) -> &PathBuf {
        &self.backup_dir
    }
}

/// Parse backup metadata from a `backup_YYYYMMDD_HHMMSS.json` path
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let filename = path.file_name()?.to_string_lossy().to_string();

    let stamp = filename
        .strip_prefix("backup_")?
        .strip_suffix(".json")?;
    let created_at = NaiveDateTime::parse_from_str(stamp, STAMP_FORMAT).ok()?;

    let metadata = fs::metadata(path).ok()?;

    Some(BackupInfo {
        filename,
        path: path.to_path_buf(),
        created_at,
        size_bytes: metadata.len(),
    })
}
