//! Audit logging for the workshop
//!
//! Records every create, update and delete on clients and devices with
//! before/after values in an append-only, line-delimited JSON log. The
//! service layer writes entries through the `Storage` helpers after each
//! successful save.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
