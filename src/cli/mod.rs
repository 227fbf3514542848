//! CLI command handlers
//!
//! Each submodule defines a clap `Subcommand` enum and a handler that drives
//! the corresponding service layer.

pub mod backup;
pub mod client;
pub mod device;
pub mod report;
pub mod share;

pub use backup::{handle_backup_command, BackupCommands};
pub use client::{handle_client_command, ClientCommands};
pub use device::{handle_device_command, DeviceCommands};
pub use report::{handle_report_command, ReportCommands};
pub use share::{handle_share_command, ShareCommands};
