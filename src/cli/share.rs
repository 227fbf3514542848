//! Share CLI commands
//!
//! Implements CLI commands for sharing receipts and status with clients.

use clap::Subcommand;

use crate::error::{WorkshopError, WorkshopResult};
use crate::models::DeviceId;
use crate::services::DeviceService;
use crate::share::{receipt_email, status_message, whatsapp_link};
use crate::storage::Storage;

/// Share subcommands
#[derive(Subcommand)]
pub enum ShareCommands {
    /// Compose the receipt email for a device
    Email {
        /// Device ID
        id: DeviceId,
    },
    /// Build a WhatsApp link with the device status for the client
    Whatsapp {
        /// Device ID
        id: DeviceId,
    },
}

/// Handle a share command
pub fn handle_share_command(storage: &Storage, cmd: ShareCommands) -> WorkshopResult<()> {
    let service = DeviceService::new(storage);

    match cmd {
        ShareCommands::Email { id } => {
            let device = service
                .get(id)?
                .ok_or_else(|| WorkshopError::device_not_found(id.to_string()))?;
            let client = storage
                .clients
                .get(device.client_id)?
                .ok_or_else(|| WorkshopError::client_not_found(device.client_id.to_string()))?;

            let receipt = storage.paths().receipt_file(device.id);
            let attachment = receipt.exists().then_some(receipt);

            let message = receipt_email(&client, &device, attachment)?;

            println!("To:      {}", message.to);
            println!("Subject: {}", message.subject);
            if let Some(attachment) = &message.attachment {
                println!("Attach:  {}", attachment.display());
            }
            println!();
            print!("{}", message.body);
        }

        ShareCommands::Whatsapp { id } => {
            let device = service
                .get(id)?
                .ok_or_else(|| WorkshopError::device_not_found(id.to_string()))?;
            let client = storage
                .clients
                .get(device.client_id)?
                .ok_or_else(|| WorkshopError::client_not_found(device.client_id.to_string()))?;

            let link = whatsapp_link(&client.phone, &status_message(&client, &device))?;
            println!("{}", link);
        }
    }

    Ok(())
}
