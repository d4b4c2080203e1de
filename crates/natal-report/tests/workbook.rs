use jiff::civil::{date, datetime};
use natal_core::models::{
    DeliveryId, DeliveryRecord, DeliveryType, MotherId, MotherProfile, NewbornId, NewbornRecord,
    RecordSet, ReportFilter, Sex,
};
use natal_report::config::ReportConfig;
use natal_report::error::ReportError;
use natal_report::workbook::{
    generate_bs22_at, generate_register, render_sheets, suggested_filename,
};
use natal_report::{BS22_REPORTS, all_reports, get_report};

fn records() -> RecordSet {
    let mut mother = MotherProfile::new(MotherId(1), "12345678-5", "Ana", "Rojas");
    mother.age = Some(29);
    let mut d =
        DeliveryRecord::new(DeliveryId(1), MotherId(1), date(2024, 5, 20), DeliveryType::Vaginal);
    d.gestational_weeks = Some(40);
    d.newborns = vec![NewbornRecord::new(NewbornId(1), Sex::Male)];
    RecordSet::new(vec![mother], vec![d]).unwrap()
}

#[test]
fn bs22_workbook_has_three_sheets_in_order() {
    let set = records();
    let artifact = generate_bs22_at(
        &set,
        &ReportFilter::unbounded(),
        &ReportConfig::default(),
        datetime(2024, 6, 1, 14, 3, 9, 0),
    )
    .unwrap();

    assert_eq!(artifact.sheet_names, vec!["REM", "APS", "ROBSON"]);
    assert_eq!(artifact.filename, "reporte_bs22_2024-06-01_14-03-09.xlsx");
    assert_eq!(
        artifact.content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(&artifact.bytes[..2], b"PK");
    assert_eq!(artifact.delivery_count, 1);
    assert_eq!(artifact.robson_unclassified, 0);
}

#[test]
fn empty_filter_window_still_builds_every_sheet() {
    let set = records();
    let filter = ReportFilter::from_params(Some("2030-01-01"), Some("2030-12-31"));
    let artifact = generate_bs22_at(
        &set,
        &filter,
        &ReportConfig::default(),
        datetime(2030, 1, 2, 0, 0, 0, 0),
    )
    .unwrap();
    assert_eq!(artifact.delivery_count, 0);
    assert_eq!(artifact.sheet_names.len(), 3);
    assert_eq!(&artifact.bytes[..2], b"PK");
}

#[test]
fn filename_uses_configured_prefix() {
    let config = ReportConfig::from_json_str(r#"{ "filename_prefix": "partos" }"#).unwrap();
    assert_eq!(
        suggested_filename(&config.filename_prefix, datetime(2024, 12, 31, 23, 59, 0, 0)),
        "partos_2024-12-31_23-59-00.xlsx"
    );
}

#[test]
fn register_workbooks_contain_one_sheet() {
    let set = records();
    let at = datetime(2024, 6, 1, 8, 0, 0, 0);
    let config = ReportConfig::default();

    let discharges =
        generate_register("rem_a09", &set, &ReportFilter::unbounded(), &config, at).unwrap();
    assert_eq!(discharges.sheet_names, vec!["REM A09 - Egresos"]);

    let deaths =
        generate_register("rem_a04", &set, &ReportFilter::unbounded(), &config, at).unwrap();
    assert_eq!(deaths.sheet_names, vec!["REM A04 - Defunciones"]);
}

#[test]
fn unknown_report_is_an_error() {
    let set = records();
    let err = generate_register(
        "rem_z99",
        &set,
        &ReportFilter::unbounded(),
        &ReportConfig::default(),
        datetime(2024, 6, 1, 8, 0, 0, 0),
    )
    .unwrap_err();
    assert!(matches!(err, ReportError::UnknownReport(id) if id == "rem_z99"));
}

#[test]
fn registry_ids_are_unique_and_resolve() {
    let reports = all_reports();
    let mut ids: Vec<&str> = reports.iter().map(|r| r.id()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), reports.len());

    for id in BS22_REPORTS {
        assert!(get_report(id).is_some(), "{id}");
    }
}

#[test]
fn rendered_sheets_follow_requested_order() {
    let set = records();
    let views = set.filtered(&ReportFilter::unbounded());
    let sheets = render_sheets(
        &["robson", "rem"],
        &views,
        &ReportConfig::default().styles,
    )
    .unwrap();
    let names: Vec<_> = sheets.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["ROBSON", "REM"]);
}

#[test]
fn missing_config_file_reports_the_path() {
    let path = std::path::Path::new("/nonexistent/natal/report.json");
    let err = ReportConfig::load(path).unwrap_err();
    match err {
        ReportError::ConfigIo { path, .. } => assert!(path.ends_with("report.json")),
        other => panic!("unexpected error: {other}"),
    }
}
