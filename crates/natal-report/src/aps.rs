//! APS extract: one flat row per newborn for primary-care follow-up.

use natal_core::models::{DeliveryView, NewbornId};
use natal_core::rut;
use natal_export::layout::{CellValue, ColumnWidths, DataRow, HeaderBuilder, SheetSpec};
use serde::Serialize;

use crate::{Report, yes_no};

pub const SHEET_NAME: &str = "APS";

pub const HEADERS: [&str; 11] = [
    "Fecha",
    "Hora",
    "Nombre madre",
    "RUT",
    "DV",
    "Tipo de parto",
    "Peso (kg)",
    "Talla (cm)",
    "Apgar 1",
    "Apgar 5",
    "Apego (piel a piel)",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApsRow {
    pub newborn_id: NewbornId,
    /// ISO date, `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, empty when the delivery time was not recorded.
    pub time: String,
    pub mother_name: String,
    pub rut_body: String,
    pub rut_check_digit: String,
    pub delivery_type: String,
    pub weight_kg: Option<f64>,
    pub height_cm: Option<u32>,
    pub apgar_1: Option<u8>,
    pub apgar_5: Option<u8>,
    pub skin_to_skin: String,
}

impl ApsRow {
    fn into_data_row(self) -> DataRow {
        DataRow::new(vec![
            self.date.into(),
            self.time.into(),
            self.mother_name.into(),
            self.rut_body.into(),
            self.rut_check_digit.into(),
            self.delivery_type.into(),
            CellValue::from(self.weight_kg),
            CellValue::from(self.height_cm),
            CellValue::from(self.apgar_1),
            CellValue::from(self.apgar_5),
            self.skin_to_skin.into(),
        ])
    }
}

/// Flatten every newborn of the given deliveries, sorted by newborn id.
pub fn extract(deliveries: &[DeliveryView<'_>]) -> Vec<ApsRow> {
    let mut rows: Vec<ApsRow> = deliveries
        .iter()
        .flat_map(|view| {
            let delivery = view.delivery;
            let (rut_body, rut_check_digit) = rut::split(&view.mother.rut);
            let time = delivery
                .time
                .map(|t| t.strftime("%H:%M").to_string())
                .unwrap_or_default();
            let mother_name = view.mother.display_name();

            view.newborns().iter().map(move |newborn| ApsRow {
                newborn_id: newborn.id,
                date: delivery.date.to_string(),
                time: time.clone(),
                mother_name: mother_name.clone(),
                rut_body: rut_body.clone(),
                rut_check_digit: rut_check_digit.clone(),
                delivery_type: delivery.delivery_type.label().to_string(),
                weight_kg: newborn.weight_kg,
                height_cm: newborn.height_cm,
                apgar_1: newborn.apgar_1,
                apgar_5: newborn.apgar_5,
                skin_to_skin: yes_no(delivery.skin_to_skin).to_string(),
            })
        })
        .collect();
    rows.sort_by_key(|r| r.newborn_id);
    rows
}

pub fn to_sheet(rows: Vec<ApsRow>) -> SheetSpec {
    SheetSpec::new(SHEET_NAME, 1, HeaderBuilder::flat(&HEADERS))
        .with_column_widths(ColumnWidths::uniform(18.0))
        .with_rows(rows.into_iter().map(ApsRow::into_data_row))
}

/// The per-newborn APS extract sheet.
pub struct ApsReport;

impl Report for ApsReport {
    fn id(&self) -> &str {
        "aps"
    }

    fn sheet_name(&self) -> &str {
        SHEET_NAME
    }

    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec {
        to_sheet(extract(deliveries))
    }
}
