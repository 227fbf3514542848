//! Workshop - repair shop management core
//!
//! This library provides the core functionality for a device repair workshop:
//! clients and their running balances, device intake through delivery,
//! sequential invoice numbering, activity reports, and backup/restore of the
//! flat-file store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (clients, devices, money, ids)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic layer
//! - `audit`: Audit logging system
//! - `backup`: Backup and restore
//! - `reports`: Repair activity reports
//! - `share`: Receipt email and WhatsApp link composition
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use workshop::config::{paths::WorkshopPaths, settings::Settings};
//!
//! let paths = WorkshopPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod audit;
pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod share;
pub mod storage;

pub use error::WorkshopError;
