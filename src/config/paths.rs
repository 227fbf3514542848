//! Path management for the workshop
//!
//! Provides XDG-compliant path resolution for the data directory, managed
//! images, generated artifacts and backups.
//!
//! ## Path Resolution Order
//!
//! 1. `WORKSHOP_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/workshop` or `~/.config/workshop`
//! 3. Windows: `%APPDATA%\workshop`

use std::path::PathBuf;

use crate::error::WorkshopError;

/// Manages all paths used by the workshop application
#[derive(Debug, Clone)]
pub struct WorkshopPaths {
    /// Base directory for all workshop data
    base_dir: PathBuf,
}

impl WorkshopPaths {
    /// Create a new WorkshopPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, WorkshopError> {
        let base_dir = if let Ok(custom) = std::env::var("WORKSHOP_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create WorkshopPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the record store
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("database")
    }

    /// Get the managed image directory (inside the data directory so it is
    /// included in backups)
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir().join("images")
    }

    /// Get the directory for generated receipts and reports
    pub fn receipts_dir(&self) -> PathBuf {
        self.base_dir.join("receipts")
    }

    /// Get the directory for generated invoices
    pub fn invoices_dir(&self) -> PathBuf {
        self.base_dir.join("invoices")
    }

    /// Get the backup directory
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to clients.json
    pub fn clients_file(&self) -> PathBuf {
        self.data_dir().join("clients.json")
    }

    /// Get the path to devices.json
    pub fn devices_file(&self) -> PathBuf {
        self.data_dir().join("devices.json")
    }

    /// Path where the receipt for a device is rendered
    pub fn receipt_file(&self, device_id: crate::models::DeviceId) -> PathBuf {
        self.receipts_dir().join(format!("Recibo_{}.pdf", device_id))
    }

    /// Path where the invoice with the given number is rendered
    pub fn invoice_file(&self, invoice_number: u32) -> PathBuf {
        self.invoices_dir()
            .join(format!("Factura_{}.pdf", invoice_number))
    }

    /// Path where an exported report with the given timestamp stamp lands
    pub fn report_file(&self, stamp: &str) -> PathBuf {
        self.receipts_dir().join(format!("Reporte_{}.txt", stamp))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), WorkshopError> {
        for dir in [
            self.base_dir.clone(),
            self.data_dir(),
            self.images_dir(),
            self.receipts_dir(),
            self.invoices_dir(),
            self.backup_dir(),
        ] {
            std::fs::create_dir_all(&dir).map_err(|e| {
                WorkshopError::Io(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }
        Ok(())
    }

    /// Check if the workshop has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, WorkshopError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| {
                    WorkshopError::Config("Could not determine home directory".into())
                })
        })?;
    Ok(config_base.join("workshop"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, WorkshopError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| WorkshopError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("workshop"))
}
