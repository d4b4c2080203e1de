use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// A yes/no indicator that may also be unknown.
///
/// Source data stores some of these as booleans and others as free text
/// ("Si", "No", "sí"). Both shapes deserialize into this type so the
/// aggregators only ever see one representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Indicator {
    Yes,
    No,
    #[default]
    Unknown,
}

impl Indicator {
    /// Interpret a free-text label: `si`, `sí` or `yes` and `no`. Matching is
    /// case-insensitive and ignores surrounding whitespace; anything else,
    /// abbreviations and digits included, is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "si" | "sí" | "yes" => Indicator::Yes,
            "no" => Indicator::No,
            _ => Indicator::Unknown,
        }
    }

    pub fn is_yes(self) -> bool {
        self == Indicator::Yes
    }

    pub fn is_no(self) -> bool {
        self == Indicator::No
    }
}

impl From<bool> for Indicator {
    fn from(value: bool) -> Self {
        if value { Indicator::Yes } else { Indicator::No }
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Flag(bool),
            Label(String),
        }

        Ok(match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Flag(flag)) => Indicator::from(flag),
            Some(Raw::Label(label)) => Indicator::from_label(&label),
            None => Indicator::Unknown,
        })
    }
}
