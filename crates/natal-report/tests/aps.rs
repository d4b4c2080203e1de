use jiff::civil::{date, time};
use natal_core::models::{
    DeliveryId, DeliveryRecord, DeliveryType, MotherId, MotherProfile, NewbornId, NewbornRecord,
    RecordSet, ReportFilter, Sex,
};
use natal_export::layout::{CellValue, render};
use natal_export::styles::SheetStyles;
use natal_report::aps::{self, HEADERS};

fn records() -> RecordSet {
    let mother = MotherProfile::new(MotherId(1), "12.345.678-5", "Ana María", "Rojas Pérez");

    let mut first = DeliveryRecord::new(
        DeliveryId(1),
        MotherId(1),
        date(2024, 2, 3),
        DeliveryType::ElectiveCesarean,
    );
    first.time = Some(time(9, 5, 0, 0));
    first.skin_to_skin = true;
    let mut twin_b = NewbornRecord::new(NewbornId(11), Sex::Male);
    twin_b.weight_kg = Some(2.45);
    twin_b.height_cm = Some(45);
    twin_b.apgar_1 = Some(7);
    twin_b.apgar_5 = Some(9);
    first.newborns = vec![twin_b, NewbornRecord::new(NewbornId(10), Sex::Female)];

    let mut second =
        DeliveryRecord::new(DeliveryId(2), MotherId(1), date(2024, 2, 4), DeliveryType::Vaginal);
    second.newborns = vec![NewbornRecord::new(NewbornId(5), Sex::Female)];

    let empty =
        DeliveryRecord::new(DeliveryId(3), MotherId(1), date(2024, 2, 5), DeliveryType::Home);

    RecordSet::new(vec![mother], vec![first, second, empty]).unwrap()
}

#[test]
fn one_row_per_newborn_sorted_by_id() {
    let set = records();
    let rows = aps::extract(&set.filtered(&ReportFilter::unbounded()));
    let ids: Vec<u64> = rows.iter().map(|r| r.newborn_id.0).collect();
    assert_eq!(ids, vec![5, 10, 11]);
}

#[test]
fn row_fields_come_from_delivery_mother_and_newborn() {
    let set = records();
    let rows = aps::extract(&set.filtered(&ReportFilter::unbounded()));
    let twin_b = &rows[2];
    assert_eq!(twin_b.date, "2024-02-03");
    assert_eq!(twin_b.time, "09:05");
    assert_eq!(twin_b.mother_name, "Ana María Rojas Pérez");
    assert_eq!(twin_b.rut_body, "12345678");
    assert_eq!(twin_b.rut_check_digit, "5");
    assert_eq!(twin_b.weight_kg, Some(2.45));
    assert_eq!(twin_b.apgar_5, Some(9));
    assert_eq!(twin_b.skin_to_skin, "Sí");

    let later = &rows[0];
    assert_eq!(later.time, "");
    assert_eq!(later.weight_kg, None);
    assert_eq!(later.skin_to_skin, "No");
}

#[test]
fn sheet_leaves_missing_values_blank() {
    let set = records();
    let rows = aps::extract(&set.filtered(&ReportFilter::unbounded()));
    let sheet = render(aps::to_sheet(rows), &SheetStyles::default()).unwrap();

    assert_eq!(sheet.name, "APS");
    assert_eq!(usize::from(sheet.width), HEADERS.len());
    assert_eq!(sheet.data_row_count(), 3);
    assert!(sheet.column_widths.iter().all(|w| *w == 18.0));

    let first = sheet.data_row(0);
    assert_eq!(first[1], &CellValue::from(""));
    assert_eq!(first[6], &CellValue::Empty);
}

#[test]
fn no_newborns_gives_header_only() {
    let set = records();
    let filter = ReportFilter::from_params(Some("2024-02-05"), Some("2024-02-05"));
    let rows = aps::extract(&set.filtered(&filter));
    assert!(rows.is_empty());
    let sheet = render(aps::to_sheet(rows), &SheetStyles::default()).unwrap();
    assert_eq!(sheet.data_row_count(), 0);
}
