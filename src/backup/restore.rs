//! Restore manager
//!
//! Replaces the live data directory with the contents of a backup archive.
//! The archive is read and validated in full before any live file is touched,
//! so a corrupt backup never destroys current data.

use std::fs;
use std::path::{Component, Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::backup::manager::BackupArchive;
use crate::config::paths::WorkshopPaths;
use crate::error::{WorkshopError, WorkshopResult};

/// Restores the data directory from a backup archive
pub struct RestoreManager {
    data_dir: PathBuf,
}

impl RestoreManager {
    /// Create a new RestoreManager
    pub fn new(paths: &WorkshopPaths) -> Self {
        Self {
            data_dir: paths.data_dir(),
        }
    }

    /// Restore the data directory from the given backup file.
    ///
    /// Returns the number of files extracted. The archive must parse and every
    /// entry must decode before existing data is removed; only then are the
    /// regular files at the top level of the data directory deleted and the
    /// archive entries written out.
    pub fn restore_from_file(&self, backup_path: &Path) -> WorkshopResult<usize> {
        let contents = fs::read_to_string(backup_path).map_err(|e| {
            WorkshopError::Restore(format!(
                "Failed to read backup {}: {}",
                backup_path.display(),
                e
            ))
        })?;

        let archive: BackupArchive = serde_json::from_str(&contents)
            .map_err(|e| WorkshopError::Restore(format!("Invalid backup file: {}", e)))?;

        // Decode everything up front so a bad entry aborts before deletion
        let mut decoded = Vec::with_capacity(archive.files.len());
        for entry in &archive.files {
            let relative = validate_entry_path(&entry.path)?;
            let bytes = BASE64.decode(&entry.contents).map_err(|e| {
                WorkshopError::Restore(format!("Corrupt entry {}: {}", entry.path, e))
            })?;
            decoded.push((relative, bytes));
        }

        self.clear_data_files()?;

        for (relative, bytes) in &decoded {
            let target = self.data_dir.join(relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| {
                    WorkshopError::Io(format!("Failed to create {}: {}", parent.display(), e))
                })?;
            }
            fs::write(&target, bytes).map_err(|e| {
                WorkshopError::Io(format!("Failed to write {}: {}", target.display(), e))
            })?;
        }

        Ok(decoded.len())
    }

    /// Delete regular files at the top level of the data directory.
    ///
    /// Subdirectories are left in place; their files are overwritten by the
    /// extracted entries.
    fn clear_data_files(&self) -> WorkshopResult<()> {
        if !self.data_dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.data_dir)
            .map_err(|e| WorkshopError::Io(format!("Failed to read data directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| WorkshopError::Io(format!("Failed to read directory entry: {}", e)))?;
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| {
                    WorkshopError::Io(format!("Failed to remove {}: {}", path.display(), e))
                })?;
            }
        }

        Ok(())
    }
}

/// Reject absolute paths and parent-directory components in archive entries
fn validate_entry_path(path: &str) -> WorkshopResult<PathBuf> {
    let relative = PathBuf::from(path);

    let safe = !path.is_empty()
        && relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

    if safe {
        Ok(relative)
    } else {
        Err(WorkshopError::Restore(format!(
            "Unsafe path in backup: {}",
            path
        )))
    }
}
