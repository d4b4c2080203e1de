//! natal-core
//!
//! Pure domain types for delivery and newborn records, the date filter, and
//! the RUT identifier conventions. No spreadsheet dependency; this is the
//! shared vocabulary of the reporting workspace.

pub mod error;
pub mod models;
pub mod rut;
