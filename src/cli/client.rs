//! Client CLI commands
//!
//! Implements CLI commands for the client ledger.

use clap::Subcommand;

use crate::display::client::{format_client_details, format_client_list};
use crate::error::{WorkshopError, WorkshopResult};
use crate::services::ClientService;
use crate::storage::Storage;

/// Client subcommands
#[derive(Subcommand)]
pub enum ClientCommands {
    /// Register a new client
    Add {
        /// Client name
        name: String,
        /// Contact phone number
        #[arg(short, long, default_value = "")]
        phone: String,
        /// Contact email address
        #[arg(short, long, default_value = "")]
        email: String,
        /// Postal address
        #[arg(short, long, default_value = "")]
        address: String,
        /// Tax id (NIT/CI)
        #[arg(short, long, default_value = "")]
        nit: String,
    },
    /// List all clients
    List,
    /// Show client details and their devices
    Show {
        /// Client name or ID
        client: String,
    },
    /// Delete a client (only possible with no registered devices)
    Delete {
        /// Client name or ID
        client: String,
    },
}

/// Handle a client command
pub fn handle_client_command(storage: &Storage, cmd: ClientCommands) -> WorkshopResult<()> {
    let service = ClientService::new(storage);

    match cmd {
        ClientCommands::Add {
            name,
            phone,
            email,
            address,
            nit,
        } => {
            let client = service.create(&name, &phone, &email, &address, &nit)?;

            println!("Registered client: {}", client.name);
            println!("  ID: {}", client.id);
            if !client.phone.is_empty() {
                println!("  Phone: {}", client.phone);
            }
            if !client.email.is_empty() {
                println!("  Email: {}", client.email);
            }
        }

        ClientCommands::List => {
            let clients = service.list()?;
            print!("{}", format_client_list(&clients));
        }

        ClientCommands::Show { client } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| WorkshopError::client_not_found(&client))?;

            let devices = storage.devices.get_by_client(found.id)?;
            print!("{}", format_client_details(&found, &devices));
        }

        ClientCommands::Delete { client } => {
            let found = service
                .find(&client)?
                .ok_or_else(|| WorkshopError::client_not_found(&client))?;

            let deleted = service.delete(found.id)?;
            println!("Deleted client: {}", deleted.name);
        }
    }

    Ok(())
}
