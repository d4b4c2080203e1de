use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::NewbornId;

/// Upper bound of the low birth weight band, in kilograms.
pub const LOW_WEIGHT_MAX_KG: f64 = 2.499;
/// Lower bound of the normal birth weight band, in kilograms.
pub const NORMAL_WEIGHT_MIN_KG: f64 = 2.500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    #[serde(alias = "F")]
    Female,
    #[serde(alias = "M")]
    Male,
}

impl Sex {
    pub fn label(self) -> &'static str {
        match self {
            Sex::Female => "Femenino",
            Sex::Male => "Masculino",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Resuscitation {
    #[default]
    NotPerformed,
    Basic,
    Advanced,
}

/// Meaningful only when the newborn is marked deceased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DeathType {
    Abortion,
    Stillbirth,
    NeonatalDeath,
}

impl DeathType {
    pub fn label(self) -> &'static str {
        match self {
            DeathType::Abortion => "Aborto",
            DeathType::Stillbirth => "Mortinato",
            DeathType::NeonatalDeath => "Mortineonato",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FeedingMethod {
    ExclusiveBreastfeeding,
    Mixed,
    Formula,
    NotBreastfed,
    HtlvHiv,
    Law21155,
}

/// Birth weight class used by the skin-to-skin columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeightBand {
    /// At most 2.499 kg.
    Low,
    /// At least 2.500 kg.
    Normal,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewbornRecord {
    pub id: NewbornId,
    pub sex: Sex,
    /// Kilograms, three decimal places in source data.
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default)]
    pub height_cm: Option<u32>,
    #[serde(default)]
    pub apgar_1: Option<u8>,
    #[serde(default)]
    pub apgar_5: Option<u8>,
    #[serde(default)]
    pub congenital_anomaly: bool,
    #[serde(default)]
    pub hepatitis_b_prophylaxis: bool,
    #[serde(default)]
    pub eye_prophylaxis: bool,
    #[serde(default)]
    pub resuscitation: Resuscitation,
    #[serde(default)]
    pub asphyxia: bool,
    #[serde(default)]
    pub metabolic_screening: bool,
    #[serde(default)]
    pub hearing_screening: bool,
    #[serde(default)]
    pub cardiac_screening: bool,
    #[serde(default)]
    pub deceased: bool,
    #[serde(default)]
    pub death_type: Option<DeathType>,
    #[serde(default)]
    pub feeding: Option<FeedingMethod>,
}

impl NewbornRecord {
    pub fn new(id: NewbornId, sex: Sex) -> Self {
        Self {
            id,
            sex,
            weight_kg: None,
            height_cm: None,
            apgar_1: None,
            apgar_5: None,
            congenital_anomaly: false,
            hepatitis_b_prophylaxis: false,
            eye_prophylaxis: false,
            resuscitation: Resuscitation::default(),
            asphyxia: false,
            metabolic_screening: false,
            hearing_screening: false,
            cardiac_screening: false,
            deceased: false,
            death_type: None,
            feeding: None,
        }
    }

    /// `None` when the weight is unknown or falls between the two bands.
    pub fn weight_band(&self) -> Option<WeightBand> {
        let weight = self.weight_kg?;
        if weight <= LOW_WEIGHT_MAX_KG {
            Some(WeightBand::Low)
        } else if weight >= NORMAL_WEIGHT_MIN_KG {
            Some(WeightBand::Normal)
        } else {
            None
        }
    }

    /// The death type, if the newborn is marked deceased.
    pub fn recorded_death(&self) -> Option<DeathType> {
        if self.deceased { self.death_type } else { None }
    }
}
