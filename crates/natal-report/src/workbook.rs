//! Workbook assembly: filter once, build each sheet, render, serialize.

use jiff::civil::DateTime;
use natal_core::models::{DeliveryView, RecordSet, ReportFilter};
use natal_export::layout::{RenderedSheet, render};
use natal_export::styles::SheetStyles;
use natal_export::xlsx::{XLSX_CONTENT_TYPE, write_workbook};

use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::robson::{self, RobsonTally};
use crate::{BS22_REPORTS, get_report};

/// A serialized workbook ready to be streamed to a client.
#[derive(Debug, Clone)]
pub struct ReportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
    pub sheet_names: Vec<String>,
    /// Filtered deliveries that went into the workbook.
    pub delivery_count: usize,
    /// Deliveries no Robson rule matched; absent from the ROBSON sheet totals.
    pub robson_unclassified: u64,
}

/// Build the REM / APS / ROBSON workbook, stamped with the current local time.
pub fn generate_bs22(
    records: &RecordSet,
    filter: &ReportFilter,
    config: &ReportConfig,
) -> Result<ReportArtifact, ReportError> {
    generate_bs22_at(records, filter, config, jiff::Zoned::now().datetime())
}

/// Build the REM / APS / ROBSON workbook with an explicit generation time.
pub fn generate_bs22_at(
    records: &RecordSet,
    filter: &ReportFilter,
    config: &ReportConfig,
    generated_at: DateTime,
) -> Result<ReportArtifact, ReportError> {
    let deliveries = records.filtered(filter);
    let (sheets, robson_unclassified) = build_sheets(&BS22_REPORTS, &deliveries, &config.styles)?;
    let artifact = package(sheets, deliveries.len(), robson_unclassified, config, generated_at)?;

    tracing::info!(
        filename = %artifact.filename,
        deliveries = artifact.delivery_count,
        bytes = artifact.bytes.len(),
        robson_unclassified,
        start = ?filter.start,
        end = ?filter.end,
        "bs22 workbook generated"
    );
    Ok(artifact)
}

/// Build a single-sheet workbook for any registered report.
pub fn generate_register(
    report_id: &str,
    records: &RecordSet,
    filter: &ReportFilter,
    config: &ReportConfig,
    generated_at: DateTime,
) -> Result<ReportArtifact, ReportError> {
    let deliveries = records.filtered(filter);
    let (sheets, robson_unclassified) = build_sheets(&[report_id], &deliveries, &config.styles)?;
    let artifact = package(sheets, deliveries.len(), robson_unclassified, config, generated_at)?;

    tracing::info!(
        report = report_id,
        filename = %artifact.filename,
        deliveries = artifact.delivery_count,
        "register workbook generated"
    );
    Ok(artifact)
}

/// Build and lay out the named reports over already-filtered deliveries.
pub fn render_sheets(
    report_ids: &[&str],
    deliveries: &[DeliveryView<'_>],
    styles: &SheetStyles,
) -> Result<Vec<RenderedSheet>, ReportError> {
    build_sheets(report_ids, deliveries, styles).map(|(sheets, _)| sheets)
}

/// Like [`render_sheets`], also returning the Robson unclassified count
/// (zero when the Robson report is not requested). The Robson tally that
/// fills the sheet is the one the count is read from.
fn build_sheets(
    report_ids: &[&str],
    deliveries: &[DeliveryView<'_>],
    styles: &SheetStyles,
) -> Result<(Vec<RenderedSheet>, u64), ReportError> {
    let mut sheets = Vec::with_capacity(report_ids.len());
    let mut robson_unclassified = 0;
    for id in report_ids {
        let report =
            get_report(id).ok_or_else(|| ReportError::UnknownReport((*id).to_string()))?;
        let spec = if *id == robson::REPORT_ID {
            let tally = RobsonTally::tally(deliveries);
            robson_unclassified = tally.unclassified;
            tally.to_sheet()
        } else {
            report.build(deliveries)
        };
        sheets.push(render(spec, styles)?);
    }
    Ok((sheets, robson_unclassified))
}

pub fn suggested_filename(prefix: &str, generated_at: DateTime) -> String {
    format!("{prefix}_{}.xlsx", generated_at.strftime("%Y-%m-%d_%H-%M-%S"))
}

fn package(
    sheets: Vec<RenderedSheet>,
    delivery_count: usize,
    robson_unclassified: u64,
    config: &ReportConfig,
    generated_at: DateTime,
) -> Result<ReportArtifact, ReportError> {
    let bytes = write_workbook(&sheets, &config.styles)?;
    Ok(ReportArtifact {
        filename: suggested_filename(&config.filename_prefix, generated_at),
        content_type: XLSX_CONTENT_TYPE,
        bytes,
        sheet_names: sheets.into_iter().map(|s| s.name).collect(),
        delivery_count,
        robson_unclassified,
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use natal_core::models::{
        DeliveryId, DeliveryRecord, DeliveryType, MotherId, MotherProfile,
    };

    use super::*;

    fn records() -> RecordSet {
        let mother = MotherProfile::new(MotherId(1), "1-9", "Ana", "Rojas");
        let deliveries = (1..=3)
            .map(|id| {
                let mut d = DeliveryRecord::new(
                    DeliveryId(id),
                    MotherId(1),
                    date(2024, 1, 10),
                    DeliveryType::Vaginal,
                );
                d.gestational_weeks = Some(39);
                d
            })
            .collect();
        RecordSet::new(vec![mother], deliveries).unwrap()
    }

    #[test]
    fn robson_sheet_and_count_share_one_tally() {
        let set = records();
        let views = set.filtered(&ReportFilter::unbounded());
        let (sheets, unclassified) =
            build_sheets(&BS22_REPORTS, &views, &SheetStyles::default()).unwrap();

        assert_eq!(sheets.len(), 3);
        assert_eq!(unclassified, 0);
        let robson = &sheets[2];
        let totals = robson.data_row(10);
        assert_eq!(totals[4].as_number(), Some(3.0));
    }

    #[test]
    fn count_is_zero_without_the_robson_sheet() {
        let set = records();
        let views = set.filtered(&ReportFilter::unbounded());
        let (sheets, unclassified) =
            build_sheets(&["rem", "aps"], &views, &SheetStyles::default()).unwrap();
        assert_eq!(sheets.len(), 2);
        assert_eq!(unclassified, 0);
    }
}
