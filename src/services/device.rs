//! Device service
//!
//! Business logic for the device lifecycle: intake (Received) and handover
//! (Delivered, with invoice assignment). Intake credits the owning client's
//! balance with cost minus advance; delivery never touches the balance.

use std::path::PathBuf;

use chrono::Local;

use crate::audit::EntityType;
use crate::error::{WorkshopError, WorkshopResult};
use crate::models::device::{format_timestamp, MAX_IMAGES};
use crate::models::{ClientId, Device, DeviceId, DeviceStatus, Money};
use crate::storage::Storage;

use super::invoice::next_invoice_number;

/// Fields supplied at device intake
#[derive(Debug, Clone, Default)]
pub struct DeviceIntake {
    pub client_id: ClientId,
    pub device_type: String,
    pub brand: String,
    pub model: String,
    pub serial: String,
    pub issues: String,
    pub cost: Money,
    pub advance: Money,
    /// Source paths of photos taken at intake; only the first three are kept
    pub images: Vec<PathBuf>,
}

/// Service for device lifecycle management
pub struct DeviceService<'a> {
    storage: &'a Storage,
}

impl<'a> DeviceService<'a> {
    /// Create a new device service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a device intake.
    ///
    /// Validates that the client exists and that brand and model are present,
    /// copies up to three supplied images into managed storage, credits the
    /// client's balance with cost minus advance, and persists both
    /// collections.
    pub fn receive(&self, intake: DeviceIntake) -> WorkshopResult<Device> {
        let mut client = self
            .storage
            .clients
            .get(intake.client_id)?
            .ok_or_else(|| WorkshopError::client_not_found(intake.client_id.to_string()))?;

        if intake.brand.trim().is_empty() || intake.model.trim().is_empty() {
            return Err(WorkshopError::Validation(
                "Brand and model are required".into(),
            ));
        }
        if intake.cost.is_negative() {
            return Err(WorkshopError::Validation("Cost cannot be negative".into()));
        }
        if intake.advance.is_negative() {
            return Err(WorkshopError::Validation(
                "Advance cannot be negative".into(),
            ));
        }

        let id = self.storage.devices.next_id()?;
        let images = self.store_images(id, &intake.images)?;

        let device = Device {
            id,
            client_id: client.id,
            client_name: client.name.clone(),
            device_type: intake.device_type.trim().to_string(),
            brand: intake.brand.trim().to_string(),
            model: intake.model.trim().to_string(),
            serial: intake.serial.trim().to_string(),
            issues: intake.issues.trim().to_string(),
            cost: intake.cost,
            advance: intake.advance,
            status: DeviceStatus::Received,
            date_received: format_timestamp(Local::now().naive_local()),
            date_delivered: String::new(),
            images,
            invoice_number: 0,
        };

        device
            .validate()
            .map_err(|e| WorkshopError::Validation(e.to_string()))?;

        self.storage.devices.upsert(device.clone())?;
        self.storage.devices.save()?;

        let client_before = client.clone();
        client.credit_for_intake(device.cost, device.advance);
        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        self.storage.log_create(
            EntityType::Device,
            device.id.to_string(),
            Some(format!("{} {}", device.brand, device.model)),
            &device,
        )?;
        self.storage.log_update(
            EntityType::Client,
            client.id.to_string(),
            Some(client.name.clone()),
            &client_before,
            &client,
            Some(format!(
                "balance: {} -> {}",
                client_before.balance, client.balance
            )),
        )?;

        Ok(device)
    }

    /// Mark a device as delivered and assign its invoice number.
    ///
    /// Fails if the device or its client no longer exists, or if the device
    /// has already been delivered. Returns the updated device together with
    /// the assigned invoice number.
    pub fn deliver(&self, device_id: DeviceId) -> WorkshopResult<(Device, u32)> {
        let mut device = self
            .storage
            .devices
            .get(device_id)?
            .ok_or_else(|| WorkshopError::device_not_found(device_id.to_string()))?;

        if self.storage.clients.get(device.client_id)?.is_none() {
            return Err(WorkshopError::client_not_found(
                device.client_id.to_string(),
            ));
        }

        if device.is_delivered() {
            return Err(WorkshopError::InvalidState(format!(
                "Device {} has already been delivered (invoice {})",
                device.id, device.invoice_number
            )));
        }

        let all_devices = self.storage.devices.get_all()?;
        let invoice_number = next_invoice_number(&all_devices);

        let before = device.clone();
        device.status = DeviceStatus::Delivered;
        device.date_delivered = format_timestamp(Local::now().naive_local());
        device.invoice_number = invoice_number;

        self.storage.devices.upsert(device.clone())?;
        self.storage.devices.save()?;

        self.storage.log_update(
            EntityType::Device,
            device.id.to_string(),
            Some(format!("{} {}", device.brand, device.model)),
            &before,
            &device,
            Some(format!(
                "status: Received -> Delivered, invoice: {}",
                invoice_number
            )),
        )?;

        Ok((device, invoice_number))
    }

    /// Get a device by ID
    pub fn get(&self, id: DeviceId) -> WorkshopResult<Option<Device>> {
        self.storage.devices.get(id)
    }

    /// Get all devices ordered by id
    pub fn list(&self) -> WorkshopResult<Vec<Device>> {
        self.storage.devices.get_all()
    }

    /// Get devices still in the workshop (deliverable)
    pub fn pending(&self) -> WorkshopResult<Vec<Device>> {
        self.storage.devices.get_pending()
    }

    /// Copy intake images into managed storage.
    ///
    /// Images land in the image directory as `device_<id>_<slot><ext>`.
    /// Sources past the third are ignored; a source that no longer exists is
    /// skipped (cosmetic, the intake proceeds without it).
    fn store_images(&self, id: DeviceId, sources: &[PathBuf]) -> WorkshopResult<Vec<String>> {
        let images_dir = self.storage.paths().images_dir();
        let mut stored = Vec::new();

        for (slot, source) in sources.iter().take(MAX_IMAGES).enumerate() {
            if !source.exists() {
                continue;
            }

            let ext = source
                .extension()
                .and_then(|e| e.to_str())
                .map(|e| format!(".{}", e))
                .unwrap_or_default();
            let dest = images_dir.join(format!("device_{}_{}{}", id, slot, ext));

            std::fs::copy(source, &dest).map_err(|e| {
                WorkshopError::Io(format!(
                    "Failed to copy image {} -> {}: {}",
                    source.display(),
                    dest.display(),
                    e
                ))
            })?;

            stored.push(dest.to_string_lossy().into_owned());
        }

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::WorkshopPaths;
    use crate::services::client::ClientService;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = WorkshopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_client(storage: &Storage, name: &str) -> ClientId {
        ClientService::new(storage)
            .create(name, "555", "a@b.c", "", "")
            .unwrap()
            .id
    }

    fn intake(client_id: ClientId, cost: i64, advance: i64) -> DeviceIntake {
        DeviceIntake {
            client_id,
            device_type: "Laptop".into(),
            brand: "Acme".into(),
            model: "X1".into(),
            serial: "SN-1".into(),
            issues: "No enciende".into(),
            cost: Money::from_units(cost),
            advance: Money::from_units(advance),
            images: Vec::new(),
        }
    }

    #[test]
    fn test_receive_device() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let device = service.receive(intake(client_id, 100, 30)).unwrap();

        assert_eq!(device.id, DeviceId::new(1));
        assert_eq!(device.status, DeviceStatus::Received);
        assert_eq!(device.client_name, "Ana");
        assert_eq!(device.invoice_number, 0);
        assert!(!device.date_received.is_empty());
        assert!(device.date_delivered.is_empty());

        // The client balance picks up cost - advance
        let client = storage.clients.get(client_id).unwrap().unwrap();
        assert_eq!(client.balance, Money::from_units(70));
    }

    #[test]
    fn test_receive_unknown_client() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DeviceService::new(&storage);

        let result = service.receive(intake(ClientId::new(9), 100, 0));
        assert!(matches!(result, Err(WorkshopError::NotFound { .. })));
    }

    #[test]
    fn test_receive_requires_brand_and_model() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let mut no_brand = intake(client_id, 100, 0);
        no_brand.brand = " ".into();
        assert!(matches!(
            service.receive(no_brand),
            Err(WorkshopError::Validation(_))
        ));

        let mut no_model = intake(client_id, 100, 0);
        no_model.model = String::new();
        assert!(matches!(
            service.receive(no_model),
            Err(WorkshopError::Validation(_))
        ));
    }

    #[test]
    fn test_receive_assigns_sequential_ids_and_accumulates_balance() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let a = service.receive(intake(client_id, 100, 30)).unwrap();
        let b = service.receive(intake(client_id, 50, 0)).unwrap();

        assert_eq!(a.id, DeviceId::new(1));
        assert_eq!(b.id, DeviceId::new(2));

        let client = storage.clients.get(client_id).unwrap().unwrap();
        assert_eq!(client.balance, Money::from_units(120));
    }

    #[test]
    fn test_receive_copies_up_to_three_images() {
        let (temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let mut sources = Vec::new();
        for i in 0..4 {
            let src = temp_dir.path().join(format!("photo{}.jpg", i));
            std::fs::write(&src, b"jpeg bytes").unwrap();
            sources.push(src);
        }
        // One source vanished between selection and intake
        sources.insert(1, temp_dir.path().join("gone.jpg"));

        let mut fields = intake(client_id, 100, 0);
        fields.images = sources;
        let device = service.receive(fields).unwrap();

        assert_eq!(device.images.len(), 2);
        for (slot, path) in device.images.iter().enumerate() {
            assert!(path.contains(&format!("device_1_{}", if slot == 0 { 0 } else { 2 })));
            assert!(std::path::Path::new(path).exists());
        }
    }

    #[test]
    fn test_deliver_device() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let device = service.receive(intake(client_id, 100, 30)).unwrap();
        let (delivered, invoice_number) = service.deliver(device.id).unwrap();

        assert_eq!(invoice_number, 1001);
        assert_eq!(delivered.status, DeviceStatus::Delivered);
        assert_eq!(delivered.invoice_number, 1001);
        assert!(!delivered.date_delivered.is_empty());

        // Delivery does not touch the client balance
        let client = storage.clients.get(client_id).unwrap().unwrap();
        assert_eq!(client.balance, Money::from_units(70));
    }

    #[test]
    fn test_deliver_twice_fails_and_keeps_invoice() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let device = service.receive(intake(client_id, 100, 0)).unwrap();
        service.deliver(device.id).unwrap();

        let result = service.deliver(device.id);
        assert!(matches!(result, Err(WorkshopError::InvalidState(_))));

        let unchanged = service.get(device.id).unwrap().unwrap();
        assert_eq!(unchanged.invoice_number, 1001);
    }

    #[test]
    fn test_deliver_unknown_device() {
        let (_temp_dir, storage) = create_test_storage();
        let service = DeviceService::new(&storage);

        let result = service.deliver(DeviceId::new(9));
        assert!(matches!(result, Err(WorkshopError::NotFound { .. })));
    }

    #[test]
    fn test_invoice_numbers_increase_across_deliveries() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let a = service.receive(intake(client_id, 10, 0)).unwrap();
        let b = service.receive(intake(client_id, 20, 0)).unwrap();

        let (_, first) = service.deliver(a.id).unwrap();
        let (_, second) = service.deliver(b.id).unwrap();

        assert_eq!(first, 1001);
        assert_eq!(second, 1002);
    }

    #[test]
    fn test_pending_excludes_delivered() {
        let (_temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let a = service.receive(intake(client_id, 10, 0)).unwrap();
        service.receive(intake(client_id, 20, 0)).unwrap();
        service.deliver(a.id).unwrap();

        let pending = service.pending().unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, DeviceId::new(2));
    }

    #[test]
    fn test_state_survives_reload() {
        let (temp_dir, storage) = create_test_storage();
        let client_id = add_client(&storage, "Ana");
        let service = DeviceService::new(&storage);

        let device = service.receive(intake(client_id, 100, 30)).unwrap();
        service.deliver(device.id).unwrap();

        let paths = WorkshopPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage2 = Storage::new(paths).unwrap();
        storage2.load_all().unwrap();

        let reloaded = storage2.devices.get(device.id).unwrap().unwrap();
        assert_eq!(reloaded.status, DeviceStatus::Delivered);
        assert_eq!(reloaded.invoice_number, 1001);

        let client = storage2.clients.get(client_id).unwrap().unwrap();
        assert_eq!(client.balance, Money::from_units(70));
    }
}
