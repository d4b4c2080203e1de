use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::MotherId;
use super::indicator::Indicator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Parity {
    Nulliparous,
    Multiparous,
}

/// Demographic and obstetric history of a mother.
///
/// `parity` and `prior_cesareans` are optional in source data; classification
/// treats a missing parity as nulliparous and missing prior cesareans as zero.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MotherProfile {
    pub id: MotherId,
    /// Normalized national identifier, e.g. `12345678-5`.
    pub rut: String,
    pub given_names: String,
    pub surnames: String,
    #[serde(default)]
    pub commune: String,
    pub age: Option<u32>,
    pub nationality: String,
    #[serde(default)]
    pub indigenous: Indicator,
    #[serde(default)]
    pub disability: Indicator,
    #[serde(default)]
    pub incarcerated: Indicator,
    #[serde(default)]
    pub antenatal_care: Indicator,
    #[serde(default)]
    pub parity: Option<Parity>,
    #[serde(default)]
    pub prior_cesareans: Option<u32>,
}

impl MotherProfile {
    /// A profile with every optional attribute unset.
    pub fn new(
        id: MotherId,
        rut: impl Into<String>,
        given_names: impl Into<String>,
        surnames: impl Into<String>,
    ) -> Self {
        Self {
            id,
            rut: rut.into(),
            given_names: given_names.into(),
            surnames: surnames.into(),
            commune: String::new(),
            age: None,
            nationality: String::new(),
            indigenous: Indicator::Unknown,
            disability: Indicator::Unknown,
            incarcerated: Indicator::Unknown,
            antenatal_care: Indicator::Unknown,
            parity: None,
            prior_cesareans: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_names, self.surnames)
            .trim()
            .to_string()
    }

    pub fn is_migrant(&self) -> bool {
        let nationality = self.nationality.trim();
        nationality.eq_ignore_ascii_case("migrante") || nationality.eq_ignore_ascii_case("migrant")
    }
}
