//! Robson group × attention type crosstab.

use natal_classify::{RobsonGroup, classify_delivery};
use natal_core::models::{AttentionType, DeliveryView};
use natal_export::layout::{CellValue, ColumnWidths, DataRow, HeaderBuilder, SheetSpec};
use serde::Serialize;

use crate::Report;

pub const REPORT_ID: &str = "robson";
pub const SHEET_NAME: &str = "ROBSON";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GroupTally {
    pub group: RobsonGroup,
    pub scheduled: u64,
    pub emergency: u64,
}

impl GroupTally {
    pub fn total(&self) -> u64 {
        self.scheduled + self.emergency
    }
}

/// Per-group counts plus the deliveries no rule matched.
///
/// Unclassified deliveries are left out of the crosstab body and totals but
/// are still counted here so the sheet can be cross-checked against the
/// number of filtered deliveries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobsonTally {
    pub groups: Vec<GroupTally>,
    pub unclassified: u64,
}

impl RobsonTally {
    pub fn tally(deliveries: &[DeliveryView<'_>]) -> Self {
        let mut groups: Vec<GroupTally> = RobsonGroup::ALL
            .iter()
            .map(|&group| GroupTally {
                group,
                scheduled: 0,
                emergency: 0,
            })
            .collect();
        let mut unclassified = 0;

        for view in deliveries {
            match classify_delivery(view) {
                Some(group) => {
                    let tally = &mut groups[group.index()];
                    match view.delivery.attention {
                        AttentionType::Scheduled => tally.scheduled += 1,
                        AttentionType::Emergency => tally.emergency += 1,
                    }
                }
                None => unclassified += 1,
            }
        }

        if unclassified > 0 {
            tracing::warn!(unclassified, "deliveries left out of the Robson crosstab");
        }

        Self {
            groups,
            unclassified,
        }
    }

    pub fn group(&self, group: RobsonGroup) -> &GroupTally {
        &self.groups[group.index()]
    }

    pub fn scheduled_total(&self) -> u64 {
        self.groups.iter().map(|g| g.scheduled).sum()
    }

    pub fn emergency_total(&self) -> u64 {
        self.groups.iter().map(|g| g.emergency).sum()
    }

    /// Grand total over all groups; excludes unclassified deliveries.
    pub fn total(&self) -> u64 {
        self.scheduled_total() + self.emergency_total()
    }

    pub fn to_sheet(&self) -> SheetSpec {
        let mut rows: Vec<DataRow> = self
            .groups
            .iter()
            .map(|g| {
                DataRow::new(vec![
                    CellValue::from(g.group.to_string()),
                    CellValue::from(g.group.description()),
                    CellValue::from(g.scheduled),
                    CellValue::from(g.emergency),
                    CellValue::from(g.total()),
                ])
            })
            .collect();
        rows.push(DataRow::emphasized(vec![
            CellValue::Empty,
            CellValue::from("Totales"),
            CellValue::from(self.scheduled_total()),
            CellValue::from(self.emergency_total()),
            CellValue::from(self.total()),
        ]));

        let header = HeaderBuilder::flat(&[
            "Grupo Robson",
            "Descripción (resumen)",
            "Programada",
            "Urgencia",
            "Total",
        ]);
        SheetSpec::new(SHEET_NAME, 1, header)
            .with_column_widths(ColumnWidths::listed(&[14.0, 60.0, 12.0, 12.0, 12.0]))
            .with_label_columns(&[0])
            .with_rows(rows)
    }
}

/// The Robson crosstab sheet.
pub struct RobsonReport;

impl Report for RobsonReport {
    fn id(&self) -> &str {
        REPORT_ID
    }

    fn sheet_name(&self) -> &str {
        SHEET_NAME
    }

    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec {
        RobsonTally::tally(deliveries).to_sheet()
    }
}
