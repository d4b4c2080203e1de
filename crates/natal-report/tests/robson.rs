use jiff::civil::date;
use natal_classify::RobsonGroup;
use natal_core::models::{
    AttentionType, DeliveryId, DeliveryRecord, DeliveryType, FetalPresentation, MotherId,
    MotherProfile, Parity, RecordSet, ReportFilter,
};
use natal_export::layout::{CellValue, render};
use natal_export::styles::SheetStyles;
use natal_report::robson::RobsonTally;
use proptest::prelude::*;

fn nullipara(id: u64) -> MotherProfile {
    let mut m = MotherProfile::new(MotherId(id), "11111111-1", "Paz", "Díaz");
    m.parity = Some(Parity::Nulliparous);
    m
}

fn term_cephalic(id: u64, mother_id: u64, attention: AttentionType) -> DeliveryRecord {
    let mut d = DeliveryRecord::new(
        DeliveryId(id),
        MotherId(mother_id),
        date(2024, 6, 1),
        DeliveryType::Vaginal,
    );
    d.gestational_weeks = Some(39);
    d.presentation = Some(FetalPresentation::Cephalic);
    d.attention = attention;
    d
}

#[test]
fn crosstab_splits_by_attention_type() {
    let mut breech = term_cephalic(3, 1, AttentionType::Emergency);
    breech.presentation = Some(FetalPresentation::Breech);
    breech.delivery_type = DeliveryType::EmergencyCesarean;

    let set = RecordSet::new(
        vec![nullipara(1)],
        vec![
            term_cephalic(1, 1, AttentionType::Scheduled),
            term_cephalic(2, 1, AttentionType::Emergency),
            breech,
        ],
    )
    .unwrap();
    let views = set.filtered(&ReportFilter::unbounded());
    let tally = RobsonTally::tally(&views);

    let g1 = tally.group(RobsonGroup::Group1);
    assert_eq!((g1.scheduled, g1.emergency, g1.total()), (1, 1, 2));
    let g6 = tally.group(RobsonGroup::Group6);
    assert_eq!((g6.scheduled, g6.emergency), (0, 1));
    assert_eq!(tally.scheduled_total(), 1);
    assert_eq!(tally.emergency_total(), 2);
    assert_eq!(tally.total() + tally.unclassified, views.len() as u64);
    assert_eq!(tally.unclassified, 0);
}

#[test]
fn empty_input_gives_zero_rows_for_every_group() {
    let tally = RobsonTally::tally(&[]);
    assert_eq!(tally.groups.len(), 10);
    assert!(tally.groups.iter().all(|g| g.total() == 0));
    assert_eq!(tally.total(), 0);
}

#[test]
fn sheet_has_ten_groups_and_a_totals_row() {
    let set = RecordSet::new(
        vec![nullipara(1)],
        vec![
            term_cephalic(1, 1, AttentionType::Scheduled),
            term_cephalic(2, 1, AttentionType::Scheduled),
        ],
    )
    .unwrap();
    let tally = RobsonTally::tally(&set.filtered(&ReportFilter::unbounded()));
    let sheet = render(tally.to_sheet(), &SheetStyles::default()).unwrap();

    assert_eq!(sheet.name, "ROBSON");
    assert_eq!(sheet.data_row_count(), 11);
    assert_eq!(sheet.column_widths, vec![14.0, 60.0, 12.0, 12.0, 12.0]);

    let first = sheet.data_row(0);
    assert_eq!(first[0], &CellValue::from("Grupo 1"));
    assert_eq!(first[2], &CellValue::Number(2.0));
    assert_eq!(first[4], &CellValue::Number(2.0));

    let totals = sheet.data_row(10);
    assert_eq!(totals[0], &CellValue::Empty);
    assert_eq!(totals[1], &CellValue::from("Totales"));
    assert_eq!(totals[2], &CellValue::Number(2.0));
    assert_eq!(totals[3], &CellValue::Number(0.0));
    assert!(sheet.cell(sheet.header_depth + 10, 2).unwrap().style.bold);
}

fn arb_delivery() -> impl Strategy<Value = (Option<Parity>, Option<u32>, DeliveryRecord)> {
    (
        prop::option::of(prop_oneof![Just(Parity::Nulliparous), Just(Parity::Multiparous)]),
        prop::option::of(0u32..4),
        1i8..=28,
        prop_oneof![
            Just(DeliveryType::Vaginal),
            Just(DeliveryType::Instrumental),
            Just(DeliveryType::ElectiveCesarean),
            Just(DeliveryType::EmergencyCesarean),
            Just(DeliveryType::Home),
            Just(DeliveryType::Prehospital),
        ],
        prop::option::of(prop_oneof![
            Just(FetalPresentation::Cephalic),
            Just(FetalPresentation::Breech),
            Just(FetalPresentation::Transverse),
        ]),
        prop::option::of(20u32..44),
        any::<bool>(),
        any::<bool>(),
    )
        .prop_map(
            |(parity, prior, day, delivery_type, presentation, weeks, multiple, emergency)| {
                let mut d = DeliveryRecord::new(
                    DeliveryId(0),
                    MotherId(0),
                    date(2024, 2, day),
                    delivery_type,
                );
                d.presentation = presentation;
                d.gestational_weeks = weeks;
                d.multiple_pregnancy = multiple;
                d.attention = if emergency {
                    AttentionType::Emergency
                } else {
                    AttentionType::Scheduled
                };
                (parity, prior, d)
            },
        )
}

proptest! {
    #[test]
    fn totals_plus_unclassified_match_filtered_size(
        generated in prop::collection::vec(arb_delivery(), 0..30),
        start in prop::option::of(1i8..=28),
        end in prop::option::of(1i8..=28),
    ) {
        let mut mothers = Vec::new();
        let mut deliveries = Vec::new();
        for (i, (parity, prior, mut delivery)) in generated.into_iter().enumerate() {
            let mut mother = nullipara(i as u64);
            mother.parity = parity;
            mother.prior_cesareans = prior;
            delivery.id = DeliveryId(i as u64);
            delivery.mother_id = MotherId(i as u64);
            mothers.push(mother);
            deliveries.push(delivery);
        }
        let set = RecordSet::new(mothers, deliveries).unwrap();
        let filter = ReportFilter::new(
            start.map(|d| date(2024, 2, d)),
            end.map(|d| date(2024, 2, d)),
        );
        let filtered = set.filtered(&filter);
        let tally = RobsonTally::tally(&filtered);

        prop_assert_eq!(tally.total() + tally.unclassified, filtered.len() as u64);
        prop_assert_eq!(
            tally.scheduled_total() + tally.emergency_total(),
            tally.total()
        );
    }
}
