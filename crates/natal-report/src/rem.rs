//! REM summary: delivery counts over a fixed row × column taxonomy.
//!
//! Column order is part of the ministry format and must stay stable. Columns
//! with no backing field in the records are kept as zero placeholders so
//! later data can fill them without shifting the layout.

use natal_core::models::{Analgesia, DeliveryType, DeliveryView, WeightBand};
use natal_export::layout::{CellValue, ColumnWidths, DataRow, HeaderBuilder, SheetSpec};

use crate::Report;

pub const SHEET_NAME: &str = "REM";
const HEADER_DEPTH: u32 = 3;

/// Maternal age band. Every age falls in exactly one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBand {
    Under15,
    From15To19,
    From20To34,
    From35,
}

impl AgeBand {
    pub const ALL: [AgeBand; 4] = [
        AgeBand::Under15,
        AgeBand::From15To19,
        AgeBand::From20To34,
        AgeBand::From35,
    ];

    pub fn of(age: u32) -> Self {
        match age {
            0..=14 => AgeBand::Under15,
            15..=19 => AgeBand::From15To19,
            20..=34 => AgeBand::From20To34,
            _ => AgeBand::From35,
        }
    }

    fn label(self) -> &'static str {
        match self {
            AgeBand::Under15 => "<15 AÑOS",
            AgeBand::From15To19 => "15 A 19 AÑOS",
            AgeBand::From20To34 => "20 A 34 AÑOS",
            AgeBand::From35 => "≥35 AÑOS",
        }
    }
}

/// Preterm band on completed gestational weeks. Term deliveries have none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PretermBand {
    Under24,
    From24To28,
    From29To32,
    From33To36,
}

impl PretermBand {
    pub const ALL: [PretermBand; 4] = [
        PretermBand::Under24,
        PretermBand::From24To28,
        PretermBand::From29To32,
        PretermBand::From33To36,
    ];

    pub fn of(weeks: u32) -> Option<Self> {
        match weeks {
            0..=23 => Some(PretermBand::Under24),
            24..=28 => Some(PretermBand::From24To28),
            29..=32 => Some(PretermBand::From29To32),
            33..=36 => Some(PretermBand::From33To36),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PretermBand::Under24 => "Menos de 24 semanas",
            PretermBand::From24To28 => "24 a 28 semanas",
            PretermBand::From29To32 => "29 a 32 semanas",
            PretermBand::From33To36 => "33 a 36 semanas",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemRow {
    Total,
    Vaginal,
    Instrumental,
    ElectiveCesarean,
    EmergencyCesarean,
    Prehospital,
    BirthPlan,
    PlacentaOnRequest,
    UncontrolledPregnancy,
    HomeAttended,
    HomeUnattended,
}

impl RemRow {
    pub const ALL: [RemRow; 11] = [
        RemRow::Total,
        RemRow::Vaginal,
        RemRow::Instrumental,
        RemRow::ElectiveCesarean,
        RemRow::EmergencyCesarean,
        RemRow::Prehospital,
        RemRow::BirthPlan,
        RemRow::PlacentaOnRequest,
        RemRow::UncontrolledPregnancy,
        RemRow::HomeAttended,
        RemRow::HomeUnattended,
    ];

    pub fn label(self) -> &'static str {
        match self {
            RemRow::Total => "TOTAL PARTOS",
            RemRow::Vaginal => "VAGINAL",
            RemRow::Instrumental => "INSTRUMENTAL",
            RemRow::ElectiveCesarean => "CESÁREA ELECTIVA",
            RemRow::EmergencyCesarean => "CESÁREA URGENCIA",
            RemRow::Prehospital => "PARTO PREHOSPITALARIO",
            RemRow::BirthPlan => "Plan de parto",
            RemRow::PlacentaOnRequest => "ENTREGA DE PLACENTA A SOLICITUD",
            RemRow::UncontrolledPregnancy => "EMBARAZO NO CONTROLADO",
            RemRow::HomeAttended => "PARTO EN DOMICILIO - CON ATENCIÓN PROFESIONAL",
            RemRow::HomeUnattended => "PARTO EN DOMICILIO - SIN ATENCIÓN PROFESIONAL",
        }
    }

    /// Whether a delivery belongs to this row.
    pub fn selects(self, view: &DeliveryView<'_>) -> bool {
        let delivery = view.delivery;
        match self {
            RemRow::Total => true,
            RemRow::Vaginal => delivery.delivery_type == DeliveryType::Vaginal,
            RemRow::Instrumental => delivery.delivery_type == DeliveryType::Instrumental,
            RemRow::ElectiveCesarean => delivery.delivery_type == DeliveryType::ElectiveCesarean,
            RemRow::EmergencyCesarean => {
                delivery.delivery_type == DeliveryType::EmergencyCesarean
            }
            RemRow::Prehospital => delivery.delivery_type == DeliveryType::Prehospital,
            RemRow::BirthPlan => delivery.birth_plan,
            // No backing field.
            RemRow::PlacentaOnRequest => false,
            RemRow::UncontrolledPregnancy => view.mother.antenatal_care.is_no(),
            RemRow::HomeAttended => {
                delivery.is_home_birth() && delivery.has_professional_attendance()
            }
            RemRow::HomeUnattended => {
                delivery.is_home_birth() && !delivery.has_professional_attendance()
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemColumn {
    Total,
    Age(AgeBand),
    Preterm(PretermBand),
    ProphylacticOxytocin,
    Analgesia(Analgesia),
    /// No backing field; always zero.
    LateCordClamping,
    /// Deliveries with skin-to-skin contact and at least one newborn in the band.
    SkinToSkin(WeightBand),
    /// No backing field; always zero.
    EarlyBreastfeeding,
    RoomingIn,
    /// No backing field; always zero.
    CulturalPertinence,
    Indigenous,
    Migrant,
    Disability,
    Incarcerated,
}

impl RemColumn {
    pub const ALL: [RemColumn; 26] = [
        RemColumn::Total,
        RemColumn::Age(AgeBand::Under15),
        RemColumn::Age(AgeBand::From15To19),
        RemColumn::Age(AgeBand::From20To34),
        RemColumn::Age(AgeBand::From35),
        RemColumn::Preterm(PretermBand::Under24),
        RemColumn::Preterm(PretermBand::From24To28),
        RemColumn::Preterm(PretermBand::From29To32),
        RemColumn::Preterm(PretermBand::From33To36),
        RemColumn::ProphylacticOxytocin,
        RemColumn::Analgesia(Analgesia::Neuraxial),
        RemColumn::Analgesia(Analgesia::NitrousOxide),
        RemColumn::Analgesia(Analgesia::Intravenous),
        RemColumn::Analgesia(Analgesia::General),
        RemColumn::Analgesia(Analgesia::Local),
        RemColumn::Analgesia(Analgesia::NonPharmacological),
        RemColumn::LateCordClamping,
        RemColumn::SkinToSkin(WeightBand::Low),
        RemColumn::SkinToSkin(WeightBand::Normal),
        RemColumn::EarlyBreastfeeding,
        RemColumn::RoomingIn,
        RemColumn::CulturalPertinence,
        RemColumn::Indigenous,
        RemColumn::Migrant,
        RemColumn::Disability,
        RemColumn::Incarcerated,
    ];

    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|c| *c == self)
            .unwrap_or_default()
    }

    /// Whether a delivery adds one to this column.
    pub fn counts(self, view: &DeliveryView<'_>) -> bool {
        let delivery = view.delivery;
        let mother = view.mother;
        match self {
            RemColumn::Total => true,
            RemColumn::Age(band) => mother.age.map(AgeBand::of) == Some(band),
            RemColumn::Preterm(band) => {
                delivery.gestational_weeks.and_then(PretermBand::of) == Some(band)
            }
            RemColumn::ProphylacticOxytocin => delivery.prophylactic_oxytocin,
            RemColumn::Analgesia(kind) => delivery.analgesia == Some(kind),
            RemColumn::LateCordClamping
            | RemColumn::EarlyBreastfeeding
            | RemColumn::CulturalPertinence => false,
            RemColumn::SkinToSkin(band) => {
                delivery.skin_to_skin
                    && view
                        .newborns()
                        .iter()
                        .any(|n| n.weight_band() == Some(band))
            }
            RemColumn::RoomingIn => delivery.rooming_in,
            RemColumn::Indigenous => mother.indigenous.is_yes(),
            RemColumn::Migrant => mother.is_migrant(),
            RemColumn::Disability => mother.disability.is_yes(),
            RemColumn::Incarcerated => mother.incarcerated.is_yes(),
        }
    }

    /// Physical sheet columns this column occupies.
    fn sheet_span(self) -> usize {
        match self {
            RemColumn::SkinToSkin(_) => 2,
            _ => 1,
        }
    }
}

/// Row × column count matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemTable {
    counts: Vec<[u64; RemColumn::ALL.len()]>,
}

impl RemTable {
    pub fn aggregate(deliveries: &[DeliveryView<'_>]) -> Self {
        let counts = RemRow::ALL
            .iter()
            .map(|row| {
                let mut cells = [0u64; RemColumn::ALL.len()];
                for view in deliveries.iter().filter(|v| row.selects(v)) {
                    for (cell, column) in cells.iter_mut().zip(RemColumn::ALL) {
                        if column.counts(view) {
                            *cell += 1;
                        }
                    }
                }
                cells
            })
            .collect();
        Self { counts }
    }

    pub fn count(&self, row: RemRow, column: RemColumn) -> u64 {
        self.row(row)[column.index()]
    }

    /// Counts for one row in [`RemColumn::ALL`] order.
    pub fn row(&self, row: RemRow) -> &[u64] {
        let index = RemRow::ALL
            .iter()
            .position(|r| *r == row)
            .unwrap_or_default();
        &self.counts[index]
    }

    pub fn to_sheet(&self) -> SheetSpec {
        let rows = RemRow::ALL.iter().map(|row| {
            let mut cells = vec![CellValue::from(row.label())];
            for (column, count) in RemColumn::ALL.iter().zip(self.row(*row)) {
                for _ in 0..column.sheet_span() {
                    cells.push(CellValue::from(*count));
                }
            }
            DataRow::new(cells)
        });

        SheetSpec::new(SHEET_NAME, HEADER_DEPTH, header())
            .with_column_widths(ColumnWidths::uniform(16.0).with(0, 40.0))
            .with_label_columns(&[0])
            .with_centered_data()
            .with_rows(rows)
    }
}

fn header() -> Vec<natal_export::layout::HeaderRegion> {
    let ages = AgeBand::ALL.map(AgeBand::label);
    let preterm = PretermBand::ALL.map(PretermBand::label);
    let analgesia = Analgesia::ALL.map(Analgesia::label);

    HeaderBuilder::new(HEADER_DEPTH)
        .column("CARACTERÍSTICAS DEL PARTO")
        .column("TOTAL")
        .group("PARTOS SEGÚN EDAD DE LA MADRE", &ages)
        .group("PARTOS PREMATUROS (>22 semanas)", &preterm)
        .column("Uso de oxitocina profiláctica")
        .group("Anestesia y/o Analgesia", &analgesia)
        .column("Ligadura tardía del cordón (>60 seg)")
        .group_spanned(
            "Contacto piel a piel >30 min (Madre)",
            &[("RN peso ≤ 2.499g", 2), ("RN peso ≥ 2.500g", 2)],
        )
        .column("Lactancia primeros 60 min")
        .column("Alojamiento conjunto")
        .column("Atención con pertinencia cultural")
        .column("Pueblos originarios")
        .column("Migrantes")
        .column("Discapacidad")
        .column("Privada de libertad")
        .build()
}

/// The REM summary sheet.
pub struct RemReport;

impl Report for RemReport {
    fn id(&self) -> &str {
        "rem"
    }

    fn sheet_name(&self) -> &str {
        SHEET_NAME
    }

    fn build(&self, deliveries: &[DeliveryView<'_>]) -> SheetSpec {
        RemTable::aggregate(deliveries).to_sheet()
    }
}
