//! Core data models for the workshop
//!
//! This module contains the data structures that represent the repair-shop
//! domain: clients, devices, money and typed ids.

pub mod client;
pub mod device;
pub mod ids;
pub mod money;

pub use client::Client;
pub use device::{Device, DeviceStatus};
pub use ids::{ClientId, DeviceId};
pub use money::Money;
