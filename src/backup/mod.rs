//! Backup and restore
//!
//! Backups are self-contained JSON archives of the data directory. Restore
//! validates the archive in full before replacing any live data.

pub mod manager;
pub mod restore;

pub use manager::{BackupArchive, BackupInfo, BackupManager};
pub use restore::RestoreManager;
