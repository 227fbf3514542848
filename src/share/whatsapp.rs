//! WhatsApp share links
//!
//! Builds `https://wa.me/` links with a pre-filled message. The link is
//! printed for the user to open; no network access happens here.

use crate::error::{WorkshopError, WorkshopResult};
use crate::models::{Client, Device};

/// Build a wa.me link to the client's phone with a pre-filled message.
///
/// Everything but the digits of the phone number is dropped (spaces, dashes,
/// a leading `+`). Fails with a validation error when no digits remain.
pub fn whatsapp_link(phone: &str, message: &str) -> WorkshopResult<String> {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(WorkshopError::Validation(format!(
            "Phone number '{}' contains no digits",
            phone
        )));
    }

    Ok(format!(
        "https://wa.me/{}?text={}",
        digits,
        percent_encode(message)
    ))
}

/// The default status message sent when sharing a device over WhatsApp
pub fn status_message(client: &Client, device: &Device) -> String {
    format!(
        "Hello {}, your {} {} {} is {}. Balance due: {}.",
        client.name,
        device.device_type,
        device.brand,
        device.model,
        if device.is_delivered() {
            "ready for pickup"
        } else {
            "in repair"
        },
        device.balance_due(),
    )
}

/// Percent-encode a query value: unreserved characters pass through,
/// everything else becomes UTF-8 %XX escapes.
fn percent_encode(text: &str) -> String {
    let mut encoded = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                encoded.push_str(&format!("%{:02X}", byte));
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientId, Money};

    #[test]
    fn test_link_strips_formatting() {
        let link = whatsapp_link("+591 7123-4567", "Hi").unwrap();
        assert_eq!(link, "https://wa.me/59171234567?text=Hi");
    }

    #[test]
    fn test_message_is_percent_encoded() {
        let link = whatsapp_link("5917000000", "Hello Ana, ready!").unwrap();
        assert_eq!(
            link,
            "https://wa.me/5917000000?text=Hello%20Ana%2C%20ready%21"
        );
    }

    #[test]
    fn test_non_ascii_uses_utf8_escapes() {
        assert_eq!(percent_encode("año"), "a%C3%B1o");
    }

    #[test]
    fn test_phone_without_digits_is_rejected() {
        let err = whatsapp_link("n/a", "Hi").unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_status_message() {
        let client = Client::new(ClientId::new(1), "Ana", "591", "", "", "");
        let mut device = Device {
            device_type: "Phone".into(),
            brand: "Acme".into(),
            model: "Z2".into(),
            cost: Money::from_units(50),
            ..Device::default()
        };

        let pending = status_message(&client, &device);
        assert!(pending.contains("in repair"));
        assert!(pending.contains("Balance due: $50.00"));

        device.status = crate::models::DeviceStatus::Delivered;
        assert!(status_message(&client, &device).contains("ready for pickup"));
    }
}
