//! Report display formatting
//!
//! Renders a repair report as text: a summary block followed by one detail
//! line per device. The same rendering is printed to the terminal and written
//! to the exported report file.

use crate::reports::RepairReport;

/// Render a repair report as text
pub fn format_report(report: &RepairReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} Repair Report\n", report.window.label));
    output.push_str(&format!(
        "Period: {} to {}\n",
        report.window.start.format("%Y-%m-%d"),
        report.window.end.format("%Y-%m-%d"),
    ));
    output.push_str(&"=".repeat(50));
    output.push('\n');

    output.push_str(&format!("  Devices received: {}\n", report.total_received));
    output.push_str(&format!("  Delivered:        {}\n", report.delivered));
    output.push_str(&format!("  In repair:        {}\n", report.in_repair));
    output.push_str(&format!("  Total cost:       {}\n", report.total_cost));

    if report.devices.is_empty() {
        output.push('\n');
        output.push_str("No devices received in this period.\n");
        return output;
    }

    output.push('\n');
    output.push_str(&"-".repeat(50));
    output.push('\n');

    for device in &report.devices {
        output.push_str(&format!(
            "#{} {} - {} {} {}\n",
            device.id, device.client_name, device.device_type, device.brand, device.model
        ));
        output.push_str(&format!(
            "    {} | received {} | cost {}\n",
            device.status, device.date_received, device.cost
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Device, DeviceId, Money};
    use crate::reports::ReportWindow;
    use chrono::NaiveDate;

    fn january() -> ReportWindow {
        ReportWindow::custom(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_format_empty_report() {
        let report = RepairReport::generate(&[], january());
        let output = format_report(&report);

        assert!(output.contains("Custom Repair Report"));
        assert!(output.contains("Period: 2024-01-01 to 2024-01-31"));
        assert!(output.contains("Devices received: 0"));
        assert!(output.contains("No devices received in this period"));
    }

    #[test]
    fn test_format_report_with_devices() {
        let device = Device {
            id: DeviceId::new(5),
            client_name: "Ana".into(),
            device_type: "Phone".into(),
            brand: "Acme".into(),
            model: "Z2".into(),
            cost: Money::from_units(80),
            date_received: "2024-01-10 09:00:00".into(),
            ..Device::default()
        };

        let report = RepairReport::generate(&[device], january());
        let output = format_report(&report);

        assert!(output.contains("Devices received: 1"));
        assert!(output.contains("Total cost:       $80.00"));
        assert!(output.contains("#5 Ana - Phone Acme Z2"));
        assert!(output.contains("received 2024-01-10 09:00:00"));
    }
}
