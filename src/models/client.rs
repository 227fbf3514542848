//! Client model
//!
//! Represents a workshop client and their running balance. The balance is an
//! independent additive total of (cost - advance) across every device ever
//! received for the client; it is never recomputed from the device collection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ClientId;
use super::money::Money;

/// A workshop client
///
/// Every field carries a serde default so that legacy records with missing
/// fields load as fully-populated values instead of being rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// Unique identifier, assigned by the repository
    #[serde(default)]
    pub id: ClientId,

    /// Client name (required)
    #[serde(default)]
    pub name: String,

    /// Contact phone number
    #[serde(default)]
    pub phone: String,

    /// Contact email address
    #[serde(default)]
    pub email: String,

    /// Postal address
    #[serde(default)]
    pub address: String,

    /// Tax id (NIT/CI)
    #[serde(default)]
    pub nit: String,

    /// Running total of (cost - advance) across all received devices
    #[serde(default)]
    pub balance: Money,
}

impl Client {
    /// Create a new client with a zero balance
    pub fn new(
        id: ClientId,
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        nit: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            nit: nit.into(),
            balance: Money::zero(),
        }
    }

    /// Add a device intake charge to the running balance
    pub fn credit_for_intake(&mut self, cost: Money, advance: Money) {
        self.balance += cost - advance;
    }

    /// Validate the client
    pub fn validate(&self) -> Result<(), ClientValidationError> {
        if self.name.trim().is_empty() {
            return Err(ClientValidationError::EmptyName);
        }
        Ok(())
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.id)
    }
}

/// Validation errors for clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientValidationError {
    EmptyName,
}

impl fmt::Display for ClientValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Client name cannot be empty"),
        }
    }
}

impl std::error::Error for ClientValidationError {}
