//! File I/O utilities for the record store
//!
//! Reads are lenient: a missing or corrupt store file yields an empty
//! collection, records with missing fields are defaulted, and entries that are
//! not JSON objects are dropped. Writes are atomic (write to temp, then
//! rename) so a crash never leaves a partially-written store file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::WorkshopError;

/// Read a collection of records from a JSON array file.
///
/// Never fails: a missing file, unreadable file, or malformed JSON yields an
/// empty vector. Array entries that are not objects, or objects that cannot be
/// deserialized even with field defaults, are dropped silently.
pub fn read_records<T, P>(path: P) -> Vec<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Vec::new();
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(_) => return Vec::new(),
    };

    let reader = BufReader::new(file);
    let raw: Vec<serde_json::Value> = match serde_json::from_reader(reader) {
        Ok(serde_json::Value::Array(entries)) => entries,
        _ => return Vec::new(),
    };

    raw.into_iter()
        .filter(|entry| entry.is_object())
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

/// Write a collection of records to a JSON array file atomically.
///
/// The file is either completely replaced or left untouched; callers keep the
/// in-memory collection as the source of truth and treat the file as a mirror.
pub fn write_records_atomic<T, P>(path: P, records: &[T]) -> Result<(), WorkshopError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            WorkshopError::Persistence(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file in the same directory, so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| WorkshopError::Persistence(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records)
        .map_err(|e| WorkshopError::Persistence(format!("Failed to serialize records: {}", e)))?;

    writer
        .flush()
        .map_err(|e| WorkshopError::Persistence(format!("Failed to flush records: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| WorkshopError::Persistence(format!("Failed to sync records: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        WorkshopError::Persistence(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}
