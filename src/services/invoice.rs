//! Invoice numbering
//!
//! Invoice numbers are derived by scanning the invoice numbers already
//! assigned to devices: the next number is one past the current maximum, with
//! a base floor so the first real invoice is `INVOICE_FLOOR + 1`.
//!
//! There is no counter stored independently of the device records, so numbers
//! stay monotonic only while the highest-numbered device record exists.

use crate::models::Device;

/// Base value below which invoice numbers are never assigned
pub const INVOICE_FLOOR: u32 = 1000;

/// Compute the next invoice number from the current device collection.
///
/// Scans all devices for the highest assigned invoice number (0 means
/// unassigned), substitutes [`INVOICE_FLOOR`] when nothing has been assigned
/// yet, and adds one.
pub fn next_invoice_number(devices: &[Device]) -> u32 {
    let last = devices
        .iter()
        .map(|d| d.invoice_number)
        .max()
        .unwrap_or(0);

    let last = if last == 0 { INVOICE_FLOOR } else { last };
    last + 1
}
