//! Device repository for JSON storage
//!
//! Manages loading and saving devices to devices.json. Every save rewrites
//! the whole collection; the in-memory map is the source of truth.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::WorkshopError;
use crate::models::{ClientId, Device, DeviceId, DeviceStatus};

use super::file_io::{read_records, write_records_atomic};

/// Repository for device persistence
pub struct DeviceRepository {
    path: PathBuf,
    data: RwLock<HashMap<DeviceId, Device>>,
}

impl DeviceRepository {
    /// Create a new device repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load devices from disk. A missing or corrupt file yields an empty set.
    pub fn load(&self) -> Result<(), WorkshopError> {
        let records: Vec<Device> = read_records(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for device in records {
            data.insert(device.id, device);
        }

        Ok(())
    }

    /// Save the whole collection to disk
    pub fn save(&self) -> Result<(), WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<Device> = data.values().cloned().collect();
        records.sort_by_key(|d| d.id);

        write_records_atomic(&self.path, &records)
    }

    /// Get a device by ID
    pub fn get(&self, id: DeviceId) -> Result<Option<Device>, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all devices, ordered by id
    pub fn get_all(&self) -> Result<Vec<Device>, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let mut devices: Vec<_> = data.values().cloned().collect();
        devices.sort_by_key(|d| d.id);
        Ok(devices)
    }

    /// Get all devices belonging to a client
    pub fn get_by_client(&self, client_id: ClientId) -> Result<Vec<Device>, WorkshopError> {
        let all = self.get_all()?;
        Ok(all.into_iter().filter(|d| d.client_id == client_id).collect())
    }

    /// Get devices still in the workshop (status Received)
    pub fn get_pending(&self) -> Result<Vec<Device>, WorkshopError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|d| d.status == DeviceStatus::Received)
            .collect())
    }

    /// Insert or update a device
    pub fn upsert(&self, device: Device) -> Result<(), WorkshopError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(device.id, device);
        Ok(())
    }

    /// Check if a device exists
    pub fn exists(&self, id: DeviceId) -> Result<bool, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Next free id: one past the current maximum, 1 when empty
    pub fn next_id(&self) -> Result<DeviceId, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let max = data.keys().map(|id| id.value()).max().unwrap_or(0);
        Ok(DeviceId::new(max + 1))
    }

    /// Count devices
    pub fn count(&self) -> Result<usize, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, DeviceRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("devices.json");
        let repo = DeviceRepository::new(path);
        (temp_dir, repo)
    }

    fn sample_device(id: u64, client_id: u64) -> Device {
        Device {
            id: DeviceId::new(id),
            client_id: ClientId::new(client_id),
            client_name: "Ana".into(),
            device_type: "Laptop".into(),
            brand: "Acme".into(),
            model: "X1".into(),
            cost: Money::from_units(100),
            date_received: "2024-01-15 10:30:00".into(),
            ..Device::default()
        }
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
        assert_eq!(repo.next_id().unwrap(), DeviceId::new(1));
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.upsert(sample_device(1, 1)).unwrap();
        repo.save().unwrap();

        let repo2 = DeviceRepository::new(temp_dir.path().join("devices.json"));
        repo2.load().unwrap();
        let retrieved = repo2.get(DeviceId::new(1)).unwrap().unwrap();
        assert_eq!(retrieved.brand, "Acme");
        assert_eq!(retrieved.status, DeviceStatus::Received);
    }

    #[test]
    fn test_get_by_client() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        repo.upsert(sample_device(1, 1)).unwrap();
        repo.upsert(sample_device(2, 2)).unwrap();
        repo.upsert(sample_device(3, 1)).unwrap();

        let devices = repo.get_by_client(ClientId::new(1)).unwrap();
        assert_eq!(devices.len(), 2);
        assert!(devices.iter().all(|d| d.client_id == ClientId::new(1)));
    }

    #[test]
    fn test_get_pending_excludes_delivered() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let mut delivered = sample_device(1, 1);
        delivered.status = DeviceStatus::Delivered;
        delivered.invoice_number = 1001;
        repo.upsert(delivered).unwrap();
        repo.upsert(sample_device(2, 1)).unwrap();

        let pending = repo.get_pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, DeviceId::new(2));
    }

    #[test]
    fn test_load_defaults_missing_fields() {
        let (temp_dir, repo) = create_test_repo();
        std::fs::write(
            temp_dir.path().join("devices.json"),
            r#"[{"id": 4, "brand": "Acme"}, "junk", 12]"#,
        )
        .unwrap();

        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let device = repo.get(DeviceId::new(4)).unwrap().unwrap();
        assert_eq!(device.status, DeviceStatus::Received);
        assert_eq!(device.model, "");
        assert!(device.images.is_empty());
    }
}
