//! User settings for the workshop
//!
//! Replaces the fixed global configuration the desktop tool grew up with:
//! SMTP credentials and display preferences live in an explicit settings
//! struct constructed once at process start.

use serde::{Deserialize, Serialize};

use super::paths::WorkshopPaths;
use crate::error::WorkshopError;

/// Outbound SMTP configuration consumed by the (external) mail sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmtpSettings {
    /// SMTP server hostname
    pub server: String,
    /// SMTP port (587 for STARTTLS)
    pub port: u16,
    /// Account/sender address
    #[serde(default)]
    pub username: String,
    /// Account password or app token
    #[serde(default)]
    pub password: String,
    /// Connect/command timeout in seconds
    #[serde(default = "default_smtp_timeout")]
    pub timeout_secs: u64,
}

fn default_smtp_timeout() -> u64 {
    30
}

impl Default for SmtpSettings {
    fn default() -> Self {
        Self {
            server: "smtp.gmail.com".to_string(),
            port: 587,
            username: String::new(),
            password: String::new(),
            timeout_secs: default_smtp_timeout(),
        }
    }
}

/// User settings for the workshop application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in formatted output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Display date format (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Workshop name printed on receipts and reports
    #[serde(default = "default_shop_name")]
    pub shop_name: String,

    /// Outbound SMTP configuration
    #[serde(default)]
    pub smtp: SmtpSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%d/%m/%Y".to_string()
}

fn default_shop_name() -> String {
    "Repair Workshop".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            shop_name: default_shop_name(),
            smtp: SmtpSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &WorkshopPaths) -> Result<Self, WorkshopError> {
        let path = paths.settings_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path).map_err(|e| {
                WorkshopError::Io(format!("Failed to read {}: {}", path.display(), e))
            })?;
            serde_json::from_str(&contents).map_err(|e| {
                WorkshopError::Json(format!("Failed to parse {}: {}", path.display(), e))
            })
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &WorkshopPaths) -> Result<(), WorkshopError> {
        let path = paths.settings_file();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                WorkshopError::Io(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .map_err(|e| WorkshopError::Io(format!("Failed to write {}: {}", path.display(), e)))
    }
}
