//! Flat registers: REM A09 discharges and REM A04 newborn deaths.

use natal_core::models::DeliveryView;
use natal_export::layout::{CellValue, ColumnWidths, DataRow, HeaderBuilder, SheetSpec};
use serde::Serialize;

use crate::{Report, yes_no};

pub const DISCHARGE_SHEET_NAME: &str = "REM A09 - Egresos";
pub const DEATH_SHEET_NAME: &str = "REM A04 - Defunciones";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DischargeRow {
    pub date: String,
    pub mother_name: String,
    pub delivery_type: String,
    pub gestational_weeks: Option<u32>,
    pub complications: String,
    /// Newborns not marked deceased. Unlike a plain newborn count, deceased
    /// newborns are left out, so this can be lower than `newborns().len()`.
    pub live_births: u64,
    pub recorded_by: String,
}

/// One row per delivery, in delivery id order.
pub fn discharges(deliveries: &[DeliveryView<'_>]) -> Vec<DischargeRow> {
    deliveries
        .iter()
        .map(|view| {
            let delivery = view.delivery;
            DischargeRow {
                date: delivery.date.to_string(),
                mother_name: view.mother.display_name(),
                delivery_type: delivery.delivery_type.label().to_string(),
                gestational_weeks: delivery.gestational_weeks,
                complications: yes_no(delivery.complications).to_string(),
                live_births: view.newborns().iter().filter(|n| !n.deceased).count() as u64,
                recorded_by: delivery.recorder_name().to_string(),
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeathRow {
    pub date: String,
    pub mother_name: String,
    pub mother_age: Option<u32>,
    pub commune: String,
    pub sex: String,
    pub death_type: String,
    pub recorded_by: String,
}

/// One row per deceased newborn, sorted by newborn id.
pub fn deaths(deliveries: &[DeliveryView<'_>]) -> Vec<DeathRow> {
    let mut rows: Vec<_> = deliveries
        .iter()
        .flat_map(|view| {
            view.newborns()
                .iter()
                .filter(|n| n.deceased)
                .map(move |newborn| {
                    let delivery = view.delivery;
                    let row = DeathRow {
                        date: delivery.date.to_string(),
                        mother_name: view.mother.display_name(),
                        mother_age: view.mother.age,
                        commune: view.mother.commune.clone(),
                        sex: newborn.sex.label().to_string(),
                        death_type: newborn
                            .recorded_death()
                            .map(|d| d.label().to_string())
                            .unwrap_or_default(),
                        recorded_by: delivery.recorder_name().to_string(),
                    };
                    (newborn.id, row)
                })
        })
        .collect();
    rows.sort_by_key(|(id, _)| *id);
    rows.into_iter().map(|(_, row)| row).collect()
}

/// The REM A09 discharge register.
pub struct DischargeRegister;

impl Report for DischargeRegister {
    fn id(&self) -> &str {
        "rem_a09"
    }

    fn sheet_name(&self) -> &str {
        DISCHARGE_SHEET_NAME
    }

    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec {
        let header = HeaderBuilder::flat(&[
            "Fecha",
            "Madre",
            "Tipo de parto",
            "Edad gestacional",
            "Complicaciones",
            "Nacidos vivos",
            "Registrado por",
        ]);
        let rows = discharges(deliveries).into_iter().map(|r| {
            DataRow::new(vec![
                r.date.into(),
                r.mother_name.into(),
                r.delivery_type.into(),
                CellValue::from(r.gestational_weeks),
                r.complications.into(),
                CellValue::from(r.live_births),
                r.recorded_by.into(),
            ])
        });
        SheetSpec::new(DISCHARGE_SHEET_NAME, 1, header)
            .with_column_widths(ColumnWidths::uniform(18.0).with(1, 32.0))
            .with_rows(rows)
    }
}

/// The REM A04 newborn death register.
pub struct DeathRegister;

impl Report for DeathRegister {
    fn id(&self) -> &str {
        "rem_a04"
    }

    fn sheet_name(&self) -> &str {
        DEATH_SHEET_NAME
    }

    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec {
        let header = HeaderBuilder::flat(&[
            "Fecha parto",
            "Madre",
            "Edad madre",
            "Comuna",
            "Sexo RN",
            "Tipo fallecimiento",
            "Matrona responsable",
        ]);
        let rows = deaths(deliveries).into_iter().map(|r| {
            DataRow::new(vec![
                r.date.into(),
                r.mother_name.into(),
                CellValue::from(r.mother_age),
                r.commune.into(),
                r.sex.into(),
                r.death_type.into(),
                r.recorded_by.into(),
            ])
        });
        SheetSpec::new(DEATH_SHEET_NAME, 1, header)
            .with_column_widths(ColumnWidths::uniform(18.0).with(1, 32.0))
            .with_rows(rows)
    }
}
