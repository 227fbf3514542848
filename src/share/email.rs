//! Receipt email composition
//!
//! Builds the outgoing message for a device receipt. Actual SMTP delivery is
//! handled by the caller using the configured [`SmtpSettings`]; this module
//! only composes.
//!
//! [`SmtpSettings`]: crate::config::settings::SmtpSettings

use std::path::PathBuf;

use crate::error::{WorkshopError, WorkshopResult};
use crate::models::{Client, Device};

/// An outgoing email message
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// Plain-text body
    pub body: String,
    /// Optional attachment (the receipt document)
    pub attachment: Option<PathBuf>,
}

/// Compose the receipt email for a device.
///
/// Fails with a validation error when the client has no email on file.
pub fn receipt_email(
    client: &Client,
    device: &Device,
    attachment: Option<PathBuf>,
) -> WorkshopResult<EmailMessage> {
    let to = client.email.trim();
    if to.is_empty() {
        return Err(WorkshopError::Validation(format!(
            "Client '{}' has no email address on file",
            client.name
        )));
    }

    let body = format!(
        "Hello {},\n\n\
         We received your {} {} {} for repair.\n\n\
         Reported issues: {}\n\
         Quoted cost: {}\n\
         Advance paid: {}\n\
         Balance due: {}\n\n\
         We will contact you when the repair is complete.\n",
        client.name,
        device.device_type,
        device.brand,
        device.model,
        if device.issues.trim().is_empty() {
            "(none recorded)"
        } else {
            device.issues.trim()
        },
        device.cost,
        device.advance,
        device.balance_due(),
    );

    Ok(EmailMessage {
        to: to.to_string(),
        subject: format!("Repair receipt #{}", device.id),
        body,
        attachment,
    })
}
