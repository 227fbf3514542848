//! Report generation
//!
//! Builds repair-activity summaries over daily/weekly/monthly/custom windows.
//! Formatting for terminal output and export lives in `display::report`.

pub mod summary;
pub mod window;

pub use summary::RepairReport;
pub use window::ReportWindow;
