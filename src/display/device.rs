//! Device display formatting
//!
//! Formats devices for terminal output in table and detail views.

use crate::models::Device;

/// Format a list of devices as a table
pub fn format_device_list(devices: &[Device]) -> String {
    if devices.is_empty() {
        return "No devices found.".to_string();
    }

    // Calculate column widths
    let client_width = devices
        .iter()
        .map(|d| d.client_name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let device_width = devices
        .iter()
        .map(|d| format!("{} {} {}", d.device_type, d.brand, d.model).len())
        .max()
        .unwrap_or(6)
        .max(6);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<client_width$}  {:<device_width$}  {:<9}  {:>10}  {:>10}\n",
        "ID",
        "Client",
        "Device",
        "Status",
        "Cost",
        "Due",
        client_width = client_width,
        device_width = device_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:->4}  {:-<client_width$}  {:-<device_width$}  {:-<9}  {:->10}  {:->10}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        client_width = client_width,
        device_width = device_width,
    ));

    // Device rows
    for device in devices {
        output.push_str(&format!(
            "{:>4}  {:<client_width$}  {:<device_width$}  {:<9}  {:>10}  {:>10}\n",
            device.id.to_string(),
            device.client_name,
            format!("{} {} {}", device.device_type, device.brand, device.model),
            device.status.to_string(),
            device.cost.to_string(),
            device.balance_due().to_string(),
            client_width = client_width,
            device_width = device_width,
        ));
    }

    output
}

/// Format a single device's details
pub fn format_device_details(device: &Device) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Device #{}: {} {} {}\n",
        device.id, device.device_type, device.brand, device.model
    ));
    output.push_str(&format!(
        "  Client:    {} (#{})\n",
        device.client_name, device.client_id
    ));
    if !device.serial.is_empty() {
        output.push_str(&format!("  Serial:    {}\n", device.serial));
    }
    if !device.issues.is_empty() {
        output.push_str(&format!("  Issues:    {}\n", device.issues));
    }
    output.push_str(&format!("  Status:    {}\n", device.status));
    output.push('\n');
    output.push_str(&format!("  Cost:      {}\n", device.cost));
    output.push_str(&format!("  Advance:   {}\n", device.advance));
    output.push_str(&format!("  Due:       {}\n", device.balance_due()));
    output.push('\n');
    output.push_str(&format!("  Received:  {}\n", device.date_received));
    if !device.date_delivered.is_empty() {
        output.push_str(&format!("  Delivered: {}\n", device.date_delivered));
    }
    if device.invoice_number > 0 {
        output.push_str(&format!("  Invoice:   {}\n", device.invoice_number));
    }

    if !device.images.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Images ({}):\n", device.images.len()));
        for image in &device.images {
            output.push_str(&format!("    {}\n", image));
        }
    }

    output
}
