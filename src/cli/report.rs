//! Report CLI commands
//!
//! Implements CLI commands for repair activity reports.

use std::fs;

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::report::format_report;
use crate::error::{WorkshopError, WorkshopResult};
use crate::reports::{RepairReport, ReportWindow};
use crate::services::DeviceService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Devices received today
    Daily {
        /// Write the report to a file as well
        #[arg(short, long)]
        export: bool,
    },
    /// Devices received this week (Monday through Sunday)
    Weekly {
        /// Write the report to a file as well
        #[arg(short, long)]
        export: bool,
    },
    /// Devices received this month
    Monthly {
        /// Write the report to a file as well
        #[arg(short, long)]
        export: bool,
    },
    /// Devices received in a custom date range
    Custom {
        /// Start date (YYYY-MM-DD, inclusive)
        from: String,
        /// End date (YYYY-MM-DD, inclusive)
        to: String,
        /// Write the report to a file as well
        #[arg(short, long)]
        export: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> WorkshopResult<()> {
    let today = Local::now().date_naive();

    let (window, export) = match cmd {
        ReportCommands::Daily { export } => (ReportWindow::daily(today), export),
        ReportCommands::Weekly { export } => (ReportWindow::weekly(today), export),
        ReportCommands::Monthly { export } => (ReportWindow::monthly(today), export),
        ReportCommands::Custom { from, to, export } => {
            let start = parse_date(&from)?;
            let end = parse_date(&to)?;
            if end < start {
                return Err(WorkshopError::Validation(format!(
                    "End date {} is before start date {}",
                    to, from
                )));
            }
            (ReportWindow::custom(start, end), export)
        }
    };

    let devices = DeviceService::new(storage).list()?;
    let report = RepairReport::generate(&devices, window);
    let rendered = format_report(&report);

    print!("{}", rendered);

    if export {
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let path = storage.paths().report_file(&stamp);
        fs::write(&path, &rendered)
            .map_err(|e| WorkshopError::Io(format!("Failed to write report: {}", e)))?;
        println!();
        println!("Report written to {}", path.display());
    }

    Ok(())
}

fn parse_date(text: &str) -> WorkshopResult<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| {
        WorkshopError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD.", text))
    })
}
