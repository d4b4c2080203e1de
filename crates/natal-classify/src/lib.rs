//! natal-classify
//!
//! Obstetric risk classification. Pure data and decision rules, no
//! spreadsheet dependency. Defines the ten Robson groups and the fixed-order
//! rule table that assigns a delivery to one of them.

pub mod error;
pub mod groups;
pub mod robson;

pub use groups::RobsonGroup;
pub use robson::{RobsonInput, classify, classify_delivery};
