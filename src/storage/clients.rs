//! Client repository for JSON storage
//!
//! Manages loading and saving clients to clients.json. Every save rewrites
//! the whole collection; the in-memory map is the source of truth.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::WorkshopError;
use crate::models::{Client, ClientId};

use super::file_io::{read_records, write_records_atomic};

/// Repository for client persistence
pub struct ClientRepository {
    path: PathBuf,
    data: RwLock<HashMap<ClientId, Client>>,
}

impl ClientRepository {
    /// Create a new client repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load clients from disk. A missing or corrupt file yields an empty set.
    pub fn load(&self) -> Result<(), WorkshopError> {
        let records: Vec<Client> = read_records(&self.path);

        let mut data = self
            .data
            .write()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for client in records {
            data.insert(client.id, client);
        }

        Ok(())
    }

    /// Save the whole collection to disk
    pub fn save(&self) -> Result<(), WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let mut records: Vec<Client> = data.values().cloned().collect();
        records.sort_by_key(|c| c.id);

        write_records_atomic(&self.path, &records)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> Result<Option<Client>, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all clients, ordered by id
    pub fn get_all(&self) -> Result<Vec<Client>, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let mut clients: Vec<_> = data.values().cloned().collect();
        clients.sort_by_key(|c| c.id);
        Ok(clients)
    }

    /// Get a client by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Client>, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let name_lower = name.to_lowercase();
        Ok(data
            .values()
            .find(|c| c.name.to_lowercase() == name_lower)
            .cloned())
    }

    /// Insert or update a client
    pub fn upsert(&self, client: Client) -> Result<(), WorkshopError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(client.id, client);
        Ok(())
    }

    /// Delete a client
    pub fn delete(&self, id: ClientId) -> Result<bool, WorkshopError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Check if a client exists
    pub fn exists(&self, id: ClientId) -> Result<bool, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.contains_key(&id))
    }

    /// Next free id: one past the current maximum, 1 when empty.
    /// Ids are never reused after deletion while higher ids remain.
    pub fn next_id(&self) -> Result<ClientId, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        let max = data.keys().map(|id| id.value()).max().unwrap_or(0);
        Ok(ClientId::new(max + 1))
    }

    /// Count clients
    pub fn count(&self) -> Result<usize, WorkshopError> {
        let data = self
            .data
            .read()
            .map_err(|e| WorkshopError::Persistence(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
