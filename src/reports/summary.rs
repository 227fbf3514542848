//! Repair activity report
//!
//! Aggregates devices over a report window by intake date: totals, status
//! breakdown, and gross income (cost, not cost minus advance).

use crate::models::{Device, Money};

use super::window::ReportWindow;

/// Summary of repair activity over a window
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// The window the report covers
    pub window: ReportWindow,
    /// Devices received inside the window (unparsable intake dates excluded)
    pub devices: Vec<Device>,
    /// Total devices received
    pub total_received: usize,
    /// Devices delivered (status, regardless of delivery date)
    pub delivered: usize,
    /// Devices still in repair
    pub in_repair: usize,
    /// Sum of quoted cost across the filtered devices
    pub total_cost: Money,
}

impl RepairReport {
    /// Build a report over the given window.
    ///
    /// Devices are filtered by intake date only; a delivered device counts in
    /// whichever window it was received, not the one it was delivered in.
    /// Devices whose intake timestamp is missing or unparsable are excluded.
    pub fn generate(devices: &[Device], window: ReportWindow) -> Self {
        let filtered: Vec<Device> = devices
            .iter()
            .filter(|d| d.received_at().is_some_and(|t| window.contains(t)))
            .cloned()
            .collect();

        let total_received = filtered.len();
        let delivered = filtered.iter().filter(|d| d.is_delivered()).count();
        let in_repair = total_received - delivered;
        let total_cost = filtered.iter().map(|d| d.cost).sum();

        Self {
            window,
            devices: filtered,
            total_received,
            delivered,
            in_repair,
            total_cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn device(date_received: &str, delivered: bool, cost: i64) -> Device {
        use crate::models::DeviceStatus;
        Device {
            date_received: date_received.to_string(),
            status: if delivered {
                DeviceStatus::Delivered
            } else {
                DeviceStatus::Received
            },
            cost: Money::from_units(cost),
            ..Device::default()
        }
    }

    fn january() -> ReportWindow {
        ReportWindow::custom(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        )
    }

    #[test]
    fn test_empty_report() {
        let report = RepairReport::generate(&[], january());
        assert_eq!(report.total_received, 0);
        assert_eq!(report.delivered, 0);
        assert_eq!(report.in_repair, 0);
        assert_eq!(report.total_cost, Money::zero());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let devices = vec![
            device("2024-01-01 00:00:00", false, 10),
            device("2024-01-31 23:59:59", false, 20),
            device("2024-02-01 00:00:00", false, 40),
            device("2023-12-31 23:59:59", false, 80),
        ];

        let report = RepairReport::generate(&devices, january());
        assert_eq!(report.total_received, 2);
        assert_eq!(report.total_cost, Money::from_units(30));
    }

    #[test]
    fn test_unparsable_dates_excluded() {
        let devices = vec![
            device("2024-01-15 10:00:00", false, 10),
            device("", false, 20),
            device("yesterday", false, 40),
        ];

        let report = RepairReport::generate(&devices, january());
        assert_eq!(report.total_received, 1);
        assert_eq!(report.total_cost, Money::from_units(10));
    }

    #[test]
    fn test_status_breakdown() {
        let devices = vec![
            device("2024-01-10 09:00:00", true, 10),
            device("2024-01-11 09:00:00", false, 20),
            device("2024-01-12 09:00:00", true, 40),
        ];

        let report = RepairReport::generate(&devices, january());
        assert_eq!(report.total_received, 3);
        assert_eq!(report.delivered, 2);
        assert_eq!(report.in_repair, 1);
    }

    #[test]
    fn test_cost_sums_cost_not_balance_due() {
        let mut d = device("2024-01-10 09:00:00", false, 100);
        d.advance = Money::from_units(30);

        let report = RepairReport::generate(&[d], january());
        assert_eq!(report.total_cost, Money::from_units(100));
    }

    #[test]
    fn test_filters_by_intake_date_even_for_delivered() {
        // Delivered in February but received in January: counts in January.
        let mut d = device("2024-01-20 09:00:00", true, 10);
        d.date_delivered = "2024-02-05 12:00:00".to_string();

        let report = RepairReport::generate(&[d], january());
        assert_eq!(report.total_received, 1);
        assert_eq!(report.delivered, 1);
    }
}
