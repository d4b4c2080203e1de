//! natal-report
//!
//! Statistical reports over delivery records: the REM summary, the Robson
//! crosstab, the APS newborn extract and the A09/A04 registers. Each report
//! turns a filtered record set into a sheet layout; the workbook
//! module renders and serializes them.

pub mod aps;
pub mod config;
pub mod error;
pub mod registers;
pub mod rem;
pub mod robson;
pub mod workbook;

use natal_core::models::DeliveryView;
use natal_export::layout::SheetSpec;

/// Trait implemented by each report sheet.
pub trait Report: Send + Sync {
    /// Unique identifier (e.g. "rem", "robson").
    fn id(&self) -> &str;

    /// Name of the worksheet this report produces.
    fn sheet_name(&self) -> &str;

    /// Build the sheet from deliveries that already passed the date filter.
    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec;
}

/// Reports combined into the BS22 workbook, in sheet order.
pub const BS22_REPORTS: [&str; 3] = ["rem", "aps", "robson"];

/// Return all registered reports.
pub fn all_reports() -> Vec<Box<dyn Report>> {
    vec![
        Box::new(rem::RemReport),
        Box::new(aps::ApsReport),
        Box::new(robson::RobsonReport),
        Box::new(registers::DischargeRegister),
        Box::new(registers::DeathRegister),
    ]
}

/// Look up a report by ID.
pub fn get_report(id: &str) -> Option<Box<dyn Report>> {
    all_reports().into_iter().find(|r| r.id() == id)
}

pub(crate) fn yes_no(value: bool) -> &'static str {
    if value { "Sí" } else { "No" }
}
