//! Backup CLI commands
//!
//! Implements CLI commands for backup creation, listing, and restore.

use clap::Subcommand;

use crate::backup::{BackupManager, RestoreManager};
use crate::config::paths::WorkshopPaths;
use crate::error::{WorkshopError, WorkshopResult};

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup of all workshop data
    Create,
    /// List available backups
    List,
    /// Restore from a backup (the most recent one by default)
    Restore {
        /// Backup filename (see `backup list`)
        file: Option<String>,
    },
}

/// Handle a backup command
pub fn handle_backup_command(paths: &WorkshopPaths, cmd: BackupCommands) -> WorkshopResult<()> {
    let manager = BackupManager::new(paths);

    match cmd {
        BackupCommands::Create => {
            let path = manager.create_backup()?;
            println!("Backup created: {}", path.display());
        }

        BackupCommands::List => {
            let backups = manager.list_backups()?;
            if backups.is_empty() {
                println!("No backups found in {}", manager.backup_dir().display());
                return Ok(());
            }

            println!("Available backups (newest first):");
            for backup in backups {
                println!(
                    "  {}  {}  {} bytes",
                    backup.filename,
                    backup.created_at.format("%Y-%m-%d %H:%M:%S"),
                    backup.size_bytes,
                );
            }
        }

        BackupCommands::Restore { file } => {
            let info = match file {
                Some(name) => manager
                    .get_backup(&name)?
                    .ok_or_else(|| WorkshopError::backup_not_found(name))?,
                None => manager
                    .latest()?
                    .ok_or_else(|| WorkshopError::backup_not_found("no backups available"))?,
            };

            let restored = RestoreManager::new(paths).restore_from_file(&info.path)?;
            println!("Restored {} file(s) from {}", restored, info.filename);
        }
    }

    Ok(())
}
