use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ClassifyError;

/// One of the ten Robson groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RobsonGroup {
    Group1,
    Group2,
    Group3,
    Group4,
    Group5,
    Group6,
    Group7,
    Group8,
    Group9,
    Group10,
}

impl RobsonGroup {
    pub const ALL: [RobsonGroup; 10] = [
        RobsonGroup::Group1,
        RobsonGroup::Group2,
        RobsonGroup::Group3,
        RobsonGroup::Group4,
        RobsonGroup::Group5,
        RobsonGroup::Group6,
        RobsonGroup::Group7,
        RobsonGroup::Group8,
        RobsonGroup::Group9,
        RobsonGroup::Group10,
    ];

    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Zero-based position, usable as an array index.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short Spanish summary shown next to the group in the crosstab.
    pub fn description(self) -> &'static str {
        match self {
            RobsonGroup::Group1 => "Nulípara, único, cefálica, >=37, espontáneo (vaginal)",
            RobsonGroup::Group2 => "Nulípara, único, cefálica, >=37, inducción o cesárea",
            RobsonGroup::Group3 => {
                "Multípara sin cesárea previa, único, cefálica, >=37, espontáneo"
            }
            RobsonGroup::Group4 => {
                "Multípara sin cesárea previa, único, cefálica, >=37, inducción/cesárea"
            }
            RobsonGroup::Group5 => "Multípara con ≥1 cesárea previa, único, cefálica, ≥37",
            RobsonGroup::Group6 => "Nulípara, único, podálica",
            RobsonGroup::Group7 => "Multípara, único, podálica",
            RobsonGroup::Group8 => "Embarazo múltiple",
            RobsonGroup::Group9 => "Presentación transversa/oblicua",
            RobsonGroup::Group10 => "Único, cefálica, <37 semanas",
        }
    }
}

impl fmt::Display for RobsonGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Grupo {}", self.number())
    }
}

impl TryFrom<u8> for RobsonGroup {
    type Error = ClassifyError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=10 => Ok(RobsonGroup::ALL[usize::from(value - 1)]),
            other => Err(ClassifyError::UnknownGroup(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_match_positions() {
        for (i, group) in RobsonGroup::ALL.iter().enumerate() {
            assert_eq!(group.index(), i);
            assert_eq!(usize::from(group.number()), i + 1);
            assert_eq!(RobsonGroup::try_from(group.number()).unwrap(), *group);
        }
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert!(matches!(RobsonGroup::try_from(0), Err(ClassifyError::UnknownGroup(0))));
        assert!(matches!(RobsonGroup::try_from(11), Err(ClassifyError::UnknownGroup(11))));
    }

    #[test]
    fn display_uses_group_label() {
        assert_eq!(RobsonGroup::Group10.to_string(), "Grupo 10");
    }
}
