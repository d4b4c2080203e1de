use jiff::civil::date;
use natal_core::error::CoreError;
use natal_core::models::{
    DeliveryId, DeliveryType, Indicator, MotherId, RecordSet, ReportFilter, Sex,
};

const FIXTURE: &str = r#"{
  "mothers": [
    {
      "id": 1, "rut": "12345678-5", "given_names": "Ana", "surnames": "Rojas",
      "age": 28, "nationality": "chilena", "indigenous": "Si", "disability": false,
      "antenatal_care": "no", "parity": "multiparous", "prior_cesareans": 1
    },
    {
      "id": 2, "rut": "9876543-2", "given_names": "Luz", "surnames": "Mamani",
      "age": null, "nationality": "Migrante"
    }
  ],
  "deliveries": [
    {
      "id": 20, "mother_id": 2, "date": "2024-05-02", "delivery_type": "home",
      "newborns": []
    },
    {
      "id": 10, "mother_id": 1, "date": "2024-04-18", "time": "08:45:00",
      "delivery_type": "emergency_cesarean", "attention": "emergency",
      "gestational_weeks": 38, "presentation": "cephalic", "skin_to_skin": true,
      "recorded_by": { "id": 7, "name": "Matrona Soto" },
      "newborns": [
        { "id": 100, "sex": "F", "weight_kg": 3.12, "height_cm": 49, "apgar_1": 8, "apgar_5": 9 }
      ]
    }
  ]
}"#;

#[test]
fn parses_fixture_and_orders_deliveries_by_id() {
    let set = RecordSet::from_json(FIXTURE).unwrap();
    assert_eq!(set.len(), 2);
    let ids: Vec<_> = set.deliveries().iter().map(|d| d.id).collect();
    assert_eq!(ids, vec![DeliveryId(10), DeliveryId(20)]);

    let first = set.views().next().unwrap();
    assert_eq!(first.mother.id, MotherId(1));
    assert_eq!(first.delivery.delivery_type, DeliveryType::EmergencyCesarean);
    assert_eq!(first.newborns()[0].sex, Sex::Female);
    assert_eq!(first.mother.indigenous, Indicator::Yes);
    assert_eq!(first.mother.antenatal_care, Indicator::No);
    assert_eq!(first.delivery.recorder_name(), "Matrona Soto");
}

#[test]
fn missing_optional_fields_take_defaults() {
    let set = RecordSet::from_json(FIXTURE).unwrap();
    let home = set.views().nth(1).unwrap();
    assert!(home.delivery.is_home_birth());
    assert!(!home.delivery.has_professional_attendance());
    assert_eq!(home.mother.age, None);
    assert_eq!(home.mother.parity, None);
    assert_eq!(home.mother.disability, Indicator::Unknown);
    assert!(home.mother.is_migrant());
}

#[test]
fn filtered_applies_inclusive_bounds() {
    let set = RecordSet::from_json(FIXTURE).unwrap();
    let filter = ReportFilter::new(Some(date(2024, 4, 18)), Some(date(2024, 4, 30)));
    let views = set.filtered(&filter);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].delivery.id, DeliveryId(10));
    assert_eq!(set.filtered(&ReportFilter::unbounded()).len(), 2);
}

#[test]
fn dangling_mother_reference_is_rejected() {
    let json = r#"{
      "mothers": [],
      "deliveries": [{ "id": 1, "mother_id": 99, "date": "2024-01-01", "delivery_type": "vaginal" }]
    }"#;
    let err = RecordSet::from_json(json).unwrap_err();
    assert!(matches!(
        err,
        CoreError::UnknownMother {
            delivery: DeliveryId(1),
            mother: MotherId(99)
        }
    ));
}

#[test]
fn duplicate_mother_is_rejected() {
    let json = r#"{
      "mothers": [
        { "id": 3, "rut": "1-9", "given_names": "A", "surnames": "B", "age": 20,
          "nationality": "chilena" },
        { "id": 3, "rut": "2-7", "given_names": "C", "surnames": "D", "age": 21,
          "nationality": "chilena" }
      ]
    }"#;
    assert!(matches!(
        RecordSet::from_json(json).unwrap_err(),
        CoreError::DuplicateMother(MotherId(3))
    ));
}
