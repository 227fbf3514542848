//! Client display formatting
//!
//! Formats clients for terminal output in table and detail views.

use crate::models::{Client, Device, Money};

/// Format a list of clients as a table
pub fn format_client_list(clients: &[Client]) -> String {
    if clients.is_empty() {
        return "No clients found.".to_string();
    }

    // Calculate column widths
    let name_width = clients
        .iter()
        .map(|c| c.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let phone_width = clients
        .iter()
        .map(|c| c.phone.len())
        .max()
        .unwrap_or(5)
        .max(5);

    // Build header
    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<phone_width$}  {:>12}\n",
        "ID",
        "Name",
        "Phone",
        "Balance",
        name_width = name_width,
        phone_width = phone_width,
    ));

    // Separator line
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<phone_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width,
    ));

    // Client rows
    for client in clients {
        output.push_str(&format!(
            "{:>4}  {:<name_width$}  {:<phone_width$}  {:>12}\n",
            client.id.to_string(),
            client.name,
            client.phone,
            client.balance.to_string(),
            name_width = name_width,
            phone_width = phone_width,
        ));
    }

    // Total row
    let total: Money = clients.iter().map(|c| c.balance).sum();
    output.push_str(&format!(
        "{:->4}  {:-<name_width$}  {:-<phone_width$}  {:->12}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
        phone_width = phone_width,
    ));
    output.push_str(&format!(
        "{:>4}  {:<name_width$}  {:<phone_width$}  {:>12}\n",
        "",
        "TOTAL",
        "",
        total.to_string(),
        name_width = name_width,
        phone_width = phone_width,
    ));

    output
}

/// Format a single client's details, with their devices when provided
pub fn format_client_details(client: &Client, devices: &[Device]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Client: {}\n", client.name));
    output.push_str(&format!("  ID:      {}\n", client.id));
    if !client.phone.is_empty() {
        output.push_str(&format!("  Phone:   {}\n", client.phone));
    }
    if !client.email.is_empty() {
        output.push_str(&format!("  Email:   {}\n", client.email));
    }
    if !client.address.is_empty() {
        output.push_str(&format!("  Address: {}\n", client.address));
    }
    if !client.nit.is_empty() {
        output.push_str(&format!("  Tax ID:  {}\n", client.nit));
    }
    output.push_str(&format!("  Balance: {}\n", client.balance));

    if !devices.is_empty() {
        output.push('\n');
        output.push_str(&format!("  Devices ({}):\n", devices.len()));
        for device in devices {
            output.push_str(&format!(
                "    #{} {} {} {} - {} (due {})\n",
                device.id,
                device.device_type,
                device.brand,
                device.model,
                device.status,
                device.balance_due(),
            ));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClientId, DeviceId, Money};

    fn create_test_client(id: u64, name: &str, balance: i64) -> Client {
        let mut client = Client::new(ClientId::new(id), name, "555-0101", "", "", "");
        client.balance = Money::from_units(balance);
        client
    }

    #[test]
    fn test_format_client_list() {
        let clients = vec![
            create_test_client(1, "Ana", 70),
            create_test_client(2, "Luis Alberto", 0),
        ];

        let output = format_client_list(&clients);
        assert!(output.contains("Ana"));
        assert!(output.contains("Luis Alberto"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("$70.00"));
    }

    #[test]
    fn test_format_empty_list() {
        let output = format_client_list(&[]);
        assert!(output.contains("No clients found"));
    }

    #[test]
    fn test_format_client_details() {
        let client = create_test_client(1, "Ana", 70);
        let device = Device {
            id: DeviceId::new(3),
            device_type: "Laptop".into(),
            brand: "Acme".into(),
            model: "X1".into(),
            cost: Money::from_units(100),
            advance: Money::from_units(30),
            ..Device::default()
        };

        let output = format_client_details(&client, &[device]);
        assert!(output.contains("Client: Ana"));
        assert!(output.contains("Devices (1):"));
        assert!(output.contains("#3 Laptop Acme X1"));
        assert!(output.contains("due $70.00"));
    }

    #[test]
    fn test_details_skip_empty_fields() {
        let client = Client::new(ClientId::new(1), "Ana", "", "", "", "");
        let output = format_client_details(&client, &[]);
        assert!(!output.contains("Phone:"));
        assert!(!output.contains("Email:"));
        assert!(!output.contains("Devices"));
    }
}
