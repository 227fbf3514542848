//! Sharing receipts and status with clients
//!
//! Email composition and WhatsApp link building. Neither performs delivery;
//! the CLI prints or hands off the result.

pub mod email;
pub mod whatsapp;

pub use email::{receipt_email, EmailMessage};
pub use whatsapp::{status_message, whatsapp_link};
