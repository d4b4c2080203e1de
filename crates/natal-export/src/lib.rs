//! natal-export
//!
//! Generic spreadsheet layout and XLSX generation. Sheets are described
//! declaratively (merged header regions, data rows, column widths) and carry
//! no knowledge of what the numbers mean.

pub mod error;
pub mod layout;
pub mod styles;
pub mod xlsx;
