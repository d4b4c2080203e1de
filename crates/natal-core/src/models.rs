pub mod delivery;
pub mod filter;
pub mod indicator;
pub mod mother;
pub mod newborn;
pub mod record_set;

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use delivery::{
    Analgesia, AttentionType, CompanionMode, DeliveryRecord, DeliveryType, FetalPresentation,
    LaborOnset, Recorder,
};
pub use filter::ReportFilter;
pub use indicator::Indicator;
pub use mother::{MotherProfile, Parity};
pub use newborn::{DeathType, FeedingMethod, NewbornRecord, Resuscitation, Sex, WeightBand};
pub use record_set::{DeliveryView, RecordSet};

macro_rules! record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[serde(transparent)]
        #[ts(export)]
        pub struct $name(pub u64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

record_id!(
    /// Identity of a mother profile.
    MotherId
);
record_id!(
    /// Identity of a delivery record. Deliveries are reported in ascending id order.
    DeliveryId
);
record_id!(
    /// Identity of a newborn record. The APS extract is sorted by this id.
    NewbornId
);
