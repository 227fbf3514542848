//! Storage layer for the workshop
//!
//! Provides JSON file storage with atomic whole-file rewrites and lenient,
//! defaulting reads. The `Storage` coordinator owns both repositories and the
//! audit logger used by the service layer.

pub mod clients;
pub mod devices;
pub mod file_io;
pub mod init;

pub use clients::ClientRepository;
pub use devices::DeviceRepository;
pub use file_io::{read_records, write_records_atomic};
pub use init::initialize_storage;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::WorkshopPaths;
use crate::error::WorkshopError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: WorkshopPaths,
    audit: AuditLogger,
    pub clients: ClientRepository,
    pub devices: DeviceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: WorkshopPaths) -> Result<Self, WorkshopError> {
        paths.ensure_directories()?;

        Ok(Self {
            clients: ClientRepository::new(paths.clients_file()),
            devices: DeviceRepository::new(paths.devices_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &WorkshopPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), WorkshopError> {
        self.clients.load()?;
        self.devices.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), WorkshopError> {
        self.clients.save()?;
        self.devices.save()?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.clients_file().exists() && self.paths.devices_file().exists()
    }

    /// Log a create operation to the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WorkshopError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Log an update operation to the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), WorkshopError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            entity_name,
            before,
            after,
            diff_summary,
        ))
    }

    /// Log a delete operation to the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), WorkshopError> {
        self.audit
            .log(&AuditEntry::delete(entity_type, entity_id, entity_name, entity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WorkshopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        assert!(temp_dir.path().join("database").exists());
        assert!(temp_dir.path().join("backups").exists());
        assert!(!storage.is_initialized());
    }

    #[test]
    fn test_load_all_on_fresh_store() {
        let temp_dir = TempDir::new().unwrap();
        let paths = WorkshopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();

        storage.load_all().unwrap();
        assert_eq!(storage.clients.count().unwrap(), 0);
        assert_eq!(storage.devices.count().unwrap(), 0);
    }
}
