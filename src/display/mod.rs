//! Terminal output formatting
//!
//! Hand-formatted tables and detail views. Column widths are computed from
//! the data so output stays aligned without a table crate.

pub mod client;
pub mod device;
pub mod report;

pub use client::{format_client_details, format_client_list};
pub use device::{format_device_details, format_device_list};
pub use report::format_report;
