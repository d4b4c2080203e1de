use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Deserialize;

use super::delivery::DeliveryRecord;
use super::filter::ReportFilter;
use super::mother::MotherProfile;
use super::newborn::NewbornRecord;
use super::MotherId;
use crate::error::CoreError;

/// A delivery joined with its mother.
#[derive(Debug, Clone, Copy)]
pub struct DeliveryView<'a> {
    pub delivery: &'a DeliveryRecord,
    pub mother: &'a MotherProfile,
}

impl<'a> DeliveryView<'a> {
    pub fn newborns(&self) -> &'a [NewbornRecord] {
        &self.delivery.newborns
    }
}

/// Read-only arena of mothers and deliveries.
///
/// Mother references are resolved once at construction; every delivery is
/// guaranteed to point at a mother in the set.
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    mothers: Vec<MotherProfile>,
    deliveries: Vec<DeliveryRecord>,
    mother_slots: Vec<usize>,
}

#[derive(Deserialize)]
struct RawRecordSet {
    #[serde(default)]
    mothers: Vec<MotherProfile>,
    #[serde(default)]
    deliveries: Vec<DeliveryRecord>,
}

impl RecordSet {
    pub fn new(
        mothers: Vec<MotherProfile>,
        mut deliveries: Vec<DeliveryRecord>,
    ) -> Result<Self, CoreError> {
        let mut index: HashMap<MotherId, usize> = HashMap::with_capacity(mothers.len());
        for (slot, mother) in mothers.iter().enumerate() {
            match index.entry(mother.id) {
                Entry::Occupied(_) => return Err(CoreError::DuplicateMother(mother.id)),
                Entry::Vacant(v) => {
                    v.insert(slot);
                }
            }
        }

        deliveries.sort_by_key(|d| d.id);

        let mother_slots = deliveries
            .iter()
            .map(|d| {
                index
                    .get(&d.mother_id)
                    .copied()
                    .ok_or(CoreError::UnknownMother {
                        delivery: d.id,
                        mother: d.mother_id,
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            mothers,
            deliveries,
            mother_slots,
        })
    }

    /// Parse `{"mothers": [...], "deliveries": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let raw: RawRecordSet = serde_json::from_str(json)?;
        Self::new(raw.mothers, raw.deliveries)
    }

    pub fn mothers(&self) -> &[MotherProfile] {
        &self.mothers
    }

    /// Deliveries in ascending id order.
    pub fn deliveries(&self) -> &[DeliveryRecord] {
        &self.deliveries
    }

    pub fn len(&self) -> usize {
        self.deliveries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deliveries.is_empty()
    }

    pub fn views(&self) -> impl Iterator<Item = DeliveryView<'_>> {
        self.deliveries
            .iter()
            .zip(&self.mother_slots)
            .map(|(delivery, &slot)| DeliveryView {
                delivery,
                mother: &self.mothers[slot],
            })
    }

    /// Deliveries whose date falls inside `filter`, in ascending id order.
    pub fn filtered(&self, filter: &ReportFilter) -> Vec<DeliveryView<'_>> {
        self.views()
            .filter(|view| filter.contains(view.delivery.date))
            .collect()
    }
}
