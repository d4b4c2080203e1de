use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::newborn::NewbornRecord;
use super::{DeliveryId, MotherId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeliveryType {
    Vaginal,
    Instrumental,
    ElectiveCesarean,
    EmergencyCesarean,
    Home,
    Prehospital,
}

impl DeliveryType {
    pub fn is_cesarean(self) -> bool {
        matches!(
            self,
            DeliveryType::ElectiveCesarean | DeliveryType::EmergencyCesarean
        )
    }

    /// Display label used in the extracts.
    pub fn label(self) -> &'static str {
        match self {
            DeliveryType::Vaginal => "Vaginal",
            DeliveryType::Instrumental => "Instrumental",
            DeliveryType::ElectiveCesarean => "Cesárea electiva",
            DeliveryType::EmergencyCesarean => "Cesárea de urgencia",
            DeliveryType::Home => "Parto en domicilio",
            DeliveryType::Prehospital => "Prehospitalario",
        }
    }
}

/// Whether the delivery was attended as scheduled or as an emergency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AttentionType {
    #[default]
    Scheduled,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FetalPresentation {
    Cephalic,
    Breech,
    Transverse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum LaborOnset {
    Spontaneous,
    Induced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Analgesia {
    Neuraxial,
    NitrousOxide,
    Intravenous,
    General,
    Local,
    NonPharmacological,
}

impl Analgesia {
    /// Report column order.
    pub const ALL: [Analgesia; 6] = [
        Analgesia::Neuraxial,
        Analgesia::NitrousOxide,
        Analgesia::Intravenous,
        Analgesia::General,
        Analgesia::Local,
        Analgesia::NonPharmacological,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Analgesia::Neuraxial => "Neuroaxial",
            Analgesia::NitrousOxide => "Óxido nitroso",
            Analgesia::Intravenous => "Endovenosa",
            Analgesia::General => "General",
            Analgesia::Local => "Local",
            Analgesia::NonPharmacological => "No farmacológica",
        }
    }
}

/// Who accompanied the mother, and when.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CompanionMode {
    Absent,
    DuringLabor,
    DuringExpulsion,
}

/// The professional who registered the delivery.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Recorder {
    pub id: u64,
    pub name: String,
}

/// A single delivery, owning its newborns.
///
/// The mother is referenced by id and resolved through a
/// [`RecordSet`](super::RecordSet).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DeliveryRecord {
    pub id: DeliveryId,
    pub mother_id: MotherId,
    pub date: jiff::civil::Date,
    #[serde(default)]
    pub time: Option<jiff::civil::Time>,
    pub delivery_type: DeliveryType,
    #[serde(default)]
    pub attention: AttentionType,
    /// Completed weeks of gestation.
    #[serde(default)]
    pub gestational_weeks: Option<u32>,
    #[serde(default)]
    pub presentation: Option<FetalPresentation>,
    #[serde(default)]
    pub multiple_pregnancy: bool,
    #[serde(default)]
    pub labor_onset: Option<LaborOnset>,
    #[serde(default)]
    pub analgesia: Option<Analgesia>,
    #[serde(default)]
    pub companion: Option<CompanionMode>,
    #[serde(default)]
    pub episiotomy: bool,
    #[serde(default)]
    pub prophylactic_oxytocin: bool,
    #[serde(default)]
    pub birth_plan: bool,
    #[serde(default)]
    pub skin_to_skin: bool,
    #[serde(default)]
    pub rooming_in: bool,
    #[serde(default)]
    pub scheduled_cesarean: bool,
    #[serde(default)]
    pub complications: bool,
    /// Absent for home deliveries without professional attendance.
    #[serde(default)]
    pub recorded_by: Option<Recorder>,
    #[serde(default)]
    pub newborns: Vec<NewbornRecord>,
}

impl DeliveryRecord {
    /// A scheduled delivery with no optional attributes and no newborns.
    pub fn new(
        id: DeliveryId,
        mother_id: MotherId,
        date: jiff::civil::Date,
        delivery_type: DeliveryType,
    ) -> Self {
        Self {
            id,
            mother_id,
            date,
            time: None,
            delivery_type,
            attention: AttentionType::default(),
            gestational_weeks: None,
            presentation: None,
            multiple_pregnancy: false,
            labor_onset: None,
            analgesia: None,
            companion: None,
            episiotomy: false,
            prophylactic_oxytocin: false,
            birth_plan: false,
            skin_to_skin: false,
            rooming_in: false,
            scheduled_cesarean: false,
            complications: false,
            recorded_by: None,
            newborns: Vec::new(),
        }
    }

    pub fn is_home_birth(&self) -> bool {
        self.delivery_type == DeliveryType::Home
    }

    pub fn has_professional_attendance(&self) -> bool {
        self.recorded_by.is_some()
    }

    pub fn recorder_name(&self) -> &str {
        self.recorded_by.as_ref().map_or("", |r| r.name.as_str())
    }
}
