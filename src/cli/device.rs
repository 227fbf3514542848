//! Device CLI commands
//!
//! Implements CLI commands for the device repair lifecycle.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::device::{format_device_details, format_device_list};
use crate::error::{WorkshopError, WorkshopResult};
use crate::models::{DeviceId, Money};
use crate::services::{ClientService, DeviceIntake, DeviceService};
use crate::storage::Storage;

/// Device subcommands
#[derive(Subcommand)]
pub enum DeviceCommands {
    /// Register a device intake
    Receive {
        /// Owning client (name or ID)
        client: String,
        /// Manufacturer
        brand: String,
        /// Model
        model: String,
        /// Kind of device (phone, laptop, console, ...)
        #[arg(short = 't', long = "type", default_value = "")]
        device_type: String,
        /// Serial number
        #[arg(short, long, default_value = "")]
        serial: String,
        /// Reported issues
        #[arg(short, long, default_value = "")]
        issues: String,
        /// Quoted repair cost (e.g., "150.00" or "150")
        #[arg(short, long, default_value = "0")]
        cost: String,
        /// Advance payment taken at intake
        #[arg(short, long, default_value = "0")]
        advance: String,
        /// Photo to attach (repeatable, first three are kept)
        #[arg(long = "image")]
        images: Vec<PathBuf>,
    },
    /// List devices
    List {
        /// Only devices still in repair
        #[arg(short, long)]
        pending: bool,
        /// Filter by client (name or ID)
        #[arg(short, long)]
        client: Option<String>,
    },
    /// Show device details
    Show {
        /// Device ID
        id: DeviceId,
    },
    /// Mark a device as delivered and assign its invoice number
    Deliver {
        /// Device ID
        id: DeviceId,
    },
}

/// Handle a device command
pub fn handle_device_command(storage: &Storage, cmd: DeviceCommands) -> WorkshopResult<()> {
    let service = DeviceService::new(storage);

    match cmd {
        DeviceCommands::Receive {
            client,
            brand,
            model,
            device_type,
            serial,
            issues,
            cost,
            advance,
            images,
        } => {
            let owner = ClientService::new(storage)
                .find(&client)?
                .ok_or_else(|| WorkshopError::client_not_found(&client))?;

            let cost = Money::parse(&cost).map_err(|e| {
                WorkshopError::Validation(format!("Invalid cost '{}': {}", cost, e))
            })?;
            let advance = Money::parse(&advance).map_err(|e| {
                WorkshopError::Validation(format!("Invalid advance '{}': {}", advance, e))
            })?;

            let device = service.receive(DeviceIntake {
                client_id: owner.id,
                device_type,
                brand,
                model,
                serial,
                issues,
                cost,
                advance,
                images,
            })?;

            println!(
                "Received device #{}: {} {} {}",
                device.id, device.device_type, device.brand, device.model
            );
            println!("  Client:  {}", device.client_name);
            println!("  Cost:    {}", device.cost);
            println!("  Advance: {}", device.advance);
            println!("  Due:     {}", device.balance_due());
            if !device.images.is_empty() {
                println!("  Images:  {}", device.images.len());
            }
        }

        DeviceCommands::List { pending, client } => {
            let mut devices = if pending {
                service.pending()?
            } else {
                service.list()?
            };

            if let Some(identifier) = client {
                let owner = ClientService::new(storage)
                    .find(&identifier)?
                    .ok_or_else(|| WorkshopError::client_not_found(&identifier))?;
                devices.retain(|d| d.client_id == owner.id);
            }

            print!("{}", format_device_list(&devices));
        }

        DeviceCommands::Show { id } => {
            let device = service
                .get(id)?
                .ok_or_else(|| WorkshopError::device_not_found(id.to_string()))?;

            print!("{}", format_device_details(&device));
        }

        DeviceCommands::Deliver { id } => {
            let (device, invoice_number) = service.deliver(id)?;

            println!(
                "Delivered device #{}: {} {} {}",
                device.id, device.device_type, device.brand, device.model
            );
            println!("  Invoice:   {}", invoice_number);
            println!("  Delivered: {}", device.date_delivered);
            println!("  Due:       {}", device.balance_due());
        }
    }

    Ok(())
}
