//! Device model
//!
//! Represents a device taken in for repair and its lifecycle from intake
//! (Received) to handover (Delivered).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ClientId, DeviceId};
use super::money::Money;

/// Timestamp format used for `date_received` / `date_delivered`
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum number of images stored per device
pub const MAX_IMAGES: usize = 3;

/// Lifecycle status of a device
///
/// Transitions only ever move Received -> Delivered, never backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeviceStatus {
    /// In the workshop, repair pending or in progress
    #[default]
    Received,
    /// Handed back to the client, invoice assigned
    Delivered,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Received => write!(f, "Received"),
            Self::Delivered => write!(f, "Delivered"),
        }
    }
}

/// A device registered for repair
///
/// Every field carries a serde default so that legacy records with missing
/// fields load as fully-populated values instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Device {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: DeviceId,

    /// Owning client
    #[serde(default)]
    pub client_id: ClientId,

    /// Snapshot of the client's name at intake time (not synced on rename)
    #[serde(default)]
    pub client_name: String,

    /// Kind of device (phone, laptop, console, ...)
    #[serde(rename = "type", default)]
    pub device_type: String,

    /// Manufacturer (required)
    #[serde(default)]
    pub brand: String,

    /// Model (required)
    #[serde(default)]
    pub model: String,

    /// Serial number
    #[serde(default)]
    pub serial: String,

    /// Reported issues, free text
    #[serde(default)]
    pub issues: String,

    /// Quoted repair cost
    #[serde(default)]
    pub cost: Money,

    /// Advance payment taken at intake
    #[serde(default)]
    pub advance: Money,

    /// Lifecycle status
    #[serde(default)]
    pub status: DeviceStatus,

    /// Intake timestamp (`%Y-%m-%d %H:%M:%S`), set at creation
    #[serde(default)]
    pub date_received: String,

    /// Delivery timestamp, empty until the device is delivered
    #[serde(default)]
    pub date_delivered: String,

    /// Managed image paths, at most [`MAX_IMAGES`]
    #[serde(default)]
    pub images: Vec<String>,

    /// Invoice number, 0 until assigned at delivery
    #[serde(default)]
    pub invoice_number: u32,
}

impl Device {
    /// Whether the device has been delivered
    pub fn is_delivered(&self) -> bool {
        self.status == DeviceStatus::Delivered
    }

    /// Amount still owed for this device
    pub fn balance_due(&self) -> Money {
        self.cost - self.advance
    }

    /// Parse the intake timestamp, `None` when missing or unparsable
    pub fn received_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date_received, DATE_FORMAT).ok()
    }

    /// Parse the delivery timestamp, `None` when missing or unparsable
    pub fn delivered_at(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.date_delivered, DATE_FORMAT).ok()
    }

    /// Validate the device
    pub fn validate(&self) -> Result<(), DeviceValidationError> {
        if self.brand.trim().is_empty() {
            return Err(DeviceValidationError::EmptyBrand);
        }
        if self.model.trim().is_empty() {
            return Err(DeviceValidationError::EmptyModel);
        }
        if self.cost.is_negative() {
            return Err(DeviceValidationError::NegativeCost);
        }
        if self.advance.is_negative() {
            return Err(DeviceValidationError::NegativeAdvance);
        }
        if self.images.len() > MAX_IMAGES {
            return Err(DeviceValidationError::TooManyImages(self.images.len()));
        }
        Ok(())
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {} ({})",
            self.id, self.device_type, self.brand, self.model, self.status
        )
    }
}

/// Validation errors for devices
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceValidationError {
    EmptyBrand,
    EmptyModel,
    NegativeCost,
    NegativeAdvance,
    TooManyImages(usize),
}

impl fmt::Display for DeviceValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBrand => write!(f, "Device brand cannot be empty"),
            Self::EmptyModel => write!(f, "Device model cannot be empty"),
            Self::NegativeCost => write!(f, "Device cost cannot be negative"),
            Self::NegativeAdvance => write!(f, "Device advance cannot be negative"),
            Self::TooManyImages(n) => {
                write!(f, "Too many images ({}, max {})", n, MAX_IMAGES)
            }
        }
    }
}

impl std::error::Error for DeviceValidationError {}

/// Format a timestamp in the persisted date format
pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_device() -> Device {
        Device {
            id: DeviceId::new(1),
            client_id: ClientId::new(1),
            client_name: "Ana".into(),
            device_type: "Laptop".into(),
            brand: "Acme".into(),
            model: "X1".into(),
            cost: Money::from_units(100),
            advance: Money::from_units(30),
            date_received: "2024-01-15 10:30:00".into(),
            ..Device::default()
        }
    }

    #[test]
    fn test_default_status_is_received() {
        assert_eq!(DeviceStatus::default(), DeviceStatus::Received);
        assert!(!Device::default().is_delivered());
    }

    #[test]
    fn test_balance_due() {
        assert_eq!(sample_device().balance_due(), Money::from_units(70));
    }

    #[test]
    fn test_received_at() {
        let device = sample_device();
        let expected = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        assert_eq!(device.received_at(), Some(expected));

        let mut bad = device;
        bad.date_received = "not a date".into();
        assert_eq!(bad.received_at(), None);
    }

    #[test]
    fn test_delivered_at_empty_until_delivery() {
        assert_eq!(sample_device().delivered_at(), None);
    }

    #[test]
    fn test_validation() {
        let mut device = sample_device();
        assert!(device.validate().is_ok());

        device.brand = " ".into();
        assert_eq!(device.validate(), Err(DeviceValidationError::EmptyBrand));

        device.brand = "Acme".into();
        device.model = String::new();
        assert_eq!(device.validate(), Err(DeviceValidationError::EmptyModel));

        device.model = "X1".into();
        device.images = vec!["a".into(), "b".into(), "c".into(), "d".into()];
        assert_eq!(
            device.validate(),
            Err(DeviceValidationError::TooManyImages(4))
        );
    }

    #[test]
    fn test_missing_fields_default() {
        let device: Device = serde_json::from_str(r#"{"id": 2, "brand": "Acme"}"#).unwrap();
        assert_eq!(device.id, DeviceId::new(2));
        assert_eq!(device.status, DeviceStatus::Received);
        assert_eq!(device.invoice_number, 0);
        assert!(device.images.is_empty());
        assert_eq!(device.date_delivered, "");
    }

    #[test]
    fn test_type_field_rename() {
        let device: Device = serde_json::from_str(r#"{"type": "Phone"}"#).unwrap();
        assert_eq!(device.device_type, "Phone");

        let json = serde_json::to_string(&device).unwrap();
        assert!(json.contains(r#""type":"Phone""#));
    }

    #[test]
    fn test_serialization_round_trip() {
        let device = sample_device();
        let json = serde_json::to_string(&device).unwrap();
        let back: Device = serde_json::from_str(&json).unwrap();
        assert_eq!(back, device);
    }
}
