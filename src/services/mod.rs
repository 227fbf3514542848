//! Business logic layer
//!
//! Services sit between the CLI handlers and the repositories: they validate
//! input, apply the domain rules, persist through `Storage`, and audit every
//! mutation.

pub mod client;
pub mod device;
pub mod invoice;

pub use client::ClientService;
pub use device::{DeviceIntake, DeviceService};
pub use invoice::{next_invoice_number, INVOICE_FLOOR};
