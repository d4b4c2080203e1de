use natal_core::models::{DeliveryView, FetalPresentation, Parity};

use crate::groups::RobsonGroup;

/// Term threshold in completed weeks.
const TERM_WEEKS: u32 = 37;

/// The attributes the Robson rules look at, with defaults already applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RobsonInput {
    pub parity: Parity,
    pub prior_cesareans: u32,
    pub multiple_pregnancy: bool,
    pub presentation: FetalPresentation,
    pub gestational_weeks: u32,
    pub cesarean: bool,
}

impl RobsonInput {
    /// Collect the inputs for a delivery.
    ///
    /// Missing parity is nulliparous, missing prior cesareans is zero, missing
    /// presentation is cephalic and missing gestational age is zero weeks.
    pub fn from_view(view: &DeliveryView<'_>) -> Self {
        let delivery = view.delivery;
        Self {
            parity: view.mother.parity.unwrap_or(Parity::Nulliparous),
            prior_cesareans: view.mother.prior_cesareans.unwrap_or(0),
            multiple_pregnancy: delivery.multiple_pregnancy,
            presentation: delivery
                .presentation
                .unwrap_or(FetalPresentation::Cephalic),
            gestational_weeks: delivery.gestational_weeks.unwrap_or(0),
            cesarean: delivery.delivery_type.is_cesarean(),
        }
    }

    fn single(&self) -> bool {
        !self.multiple_pregnancy
    }

    fn single_cephalic_term(&self) -> bool {
        self.single()
            && self.presentation == FetalPresentation::Cephalic
            && self.gestational_weeks >= TERM_WEEKS
    }

    fn nulliparous(&self) -> bool {
        self.parity == Parity::Nulliparous
    }

    fn multiparous(&self) -> bool {
        self.parity == Parity::Multiparous
    }
}

struct Rule {
    group: RobsonGroup,
    applies: fn(&RobsonInput) -> bool,
}

/// Evaluated top to bottom; the first matching rule decides the group.
/// Later rules rely on earlier ones having already claimed their cases.
static RULES: [Rule; 10] = [
    Rule {
        group: RobsonGroup::Group1,
        applies: group1,
    },
    Rule {
        group: RobsonGroup::Group2,
        applies: group2,
    },
    Rule {
        group: RobsonGroup::Group3,
        applies: group3,
    },
    Rule {
        group: RobsonGroup::Group4,
        applies: group4,
    },
    Rule {
        group: RobsonGroup::Group5,
        applies: group5,
    },
    Rule {
        group: RobsonGroup::Group6,
        applies: group6,
    },
    Rule {
        group: RobsonGroup::Group7,
        applies: group7,
    },
    Rule {
        group: RobsonGroup::Group8,
        applies: group8,
    },
    Rule {
        group: RobsonGroup::Group9,
        applies: group9,
    },
    Rule {
        group: RobsonGroup::Group10,
        applies: group10,
    },
];

fn group1(i: &RobsonInput) -> bool {
    i.nulliparous() && i.single_cephalic_term() && !i.cesarean
}

fn group2(i: &RobsonInput) -> bool {
    i.nulliparous() && i.single_cephalic_term()
}

fn group3(i: &RobsonInput) -> bool {
    i.multiparous() && i.prior_cesareans == 0 && i.single_cephalic_term() && !i.cesarean
}

fn group4(i: &RobsonInput) -> bool {
    i.multiparous() && i.prior_cesareans == 0 && i.single_cephalic_term()
}

fn group5(i: &RobsonInput) -> bool {
    i.multiparous() && i.prior_cesareans >= 1 && i.single_cephalic_term()
}

fn group6(i: &RobsonInput) -> bool {
    i.nulliparous() && i.presentation == FetalPresentation::Breech && i.single()
}

fn group7(i: &RobsonInput) -> bool {
    i.multiparous() && i.presentation == FetalPresentation::Breech && i.single()
}

fn group8(i: &RobsonInput) -> bool {
    i.multiple_pregnancy
}

fn group9(i: &RobsonInput) -> bool {
    i.presentation == FetalPresentation::Transverse
}

fn group10(i: &RobsonInput) -> bool {
    i.single()
        && i.presentation == FetalPresentation::Cephalic
        && i.gestational_weeks < TERM_WEEKS
}

/// Assign a Robson group, or `None` when no rule matches.
pub fn classify(input: &RobsonInput) -> Option<RobsonGroup> {
    RULES
        .iter()
        .find(|rule| (rule.applies)(input))
        .map(|rule| rule.group)
}

pub fn classify_delivery(view: &DeliveryView<'_>) -> Option<RobsonGroup> {
    classify(&RobsonInput::from_view(view))
}
