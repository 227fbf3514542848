//! Storage initialization
//!
//! Creates the directory layout and empty store files on first run.

use crate::config::paths::WorkshopPaths;
use crate::error::WorkshopError;

use super::file_io::write_records_atomic;
use crate::models::{Client, Device};

/// Initialize the storage layout, creating empty store files if missing.
///
/// Existing files are left untouched.
pub fn initialize_storage(paths: &WorkshopPaths) -> Result<(), WorkshopError> {
    paths.ensure_directories()?;

    if !paths.clients_file().exists() {
        let empty: Vec<Client> = Vec::new();
        write_records_atomic(paths.clients_file(), &empty)?;
    }

    if !paths.devices_file().exists() {
        let empty: Vec<Device> = Vec::new();
        write_records_atomic(paths.devices_file(), &empty)?;
    }

    Ok(())
}
