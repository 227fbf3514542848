//! Client service
//!
//! Business logic for the client ledger: registration, lookup, and deletion
//! guarded by the device referential invariant.

use crate::audit::EntityType;
use crate::error::{WorkshopError, WorkshopResult};
use crate::models::{Client, ClientId};
use crate::storage::Storage;

/// Service for client management
pub struct ClientService<'a> {
    storage: &'a Storage,
}

impl<'a> ClientService<'a> {
    /// Create a new client service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new client with a zero balance
    pub fn create(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
        nit: &str,
    ) -> WorkshopResult<Client> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorkshopError::Validation(
                "Client name cannot be empty".into(),
            ));
        }

        let id = self.storage.clients.next_id()?;
        let client = Client::new(id, name, phone.trim(), email.trim(), address.trim(), nit.trim());

        client
            .validate()
            .map_err(|e| WorkshopError::Validation(e.to_string()))?;

        self.storage.clients.upsert(client.clone())?;
        self.storage.clients.save()?;

        self.storage.log_create(
            EntityType::Client,
            client.id.to_string(),
            Some(client.name.clone()),
            &client,
        )?;

        Ok(client)
    }

    /// Get a client by ID
    pub fn get(&self, id: ClientId) -> WorkshopResult<Option<Client>> {
        self.storage.clients.get(id)
    }

    /// Find a client by id string or name (case-insensitive)
    pub fn find(&self, identifier: &str) -> WorkshopResult<Option<Client>> {
        if let Ok(id) = identifier.parse::<ClientId>() {
            if let Some(client) = self.storage.clients.get(id)? {
                return Ok(Some(client));
            }
        }

        self.storage.clients.get_by_name(identifier)
    }

    /// Get all clients ordered by id
    pub fn list(&self) -> WorkshopResult<Vec<Client>> {
        self.storage.clients.get_all()
    }

    /// Delete a client.
    ///
    /// A client with registered devices cannot be deleted; the devices must
    /// be handled first. Confirmation prompts are the caller's concern.
    pub fn delete(&self, id: ClientId) -> WorkshopResult<Client> {
        let client = self
            .storage
            .clients
            .get(id)?
            .ok_or_else(|| WorkshopError::client_not_found(id.to_string()))?;

        let devices = self.storage.devices.get_by_client(id)?;
        if !devices.is_empty() {
            return Err(WorkshopError::Conflict(format!(
                "Client '{}' has {} registered device(s); delete or transfer them first",
                client.name,
                devices.len()
            )));
        }

        self.storage.clients.delete(id)?;
        self.storage.clients.save()?;

        self.storage.log_delete(
            EntityType::Client,
            client.id.to_string(),
            Some(client.name.clone()),
            &client,
        )?;

        Ok(client)
    }
}
