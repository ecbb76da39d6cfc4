//! Per-Crop Suitability Rules
//!
//! Each crop carries a fixed list of boolean conditions over the
//! normalized soil state plus two count thresholds. The evaluator counts
//! satisfied conditions; meeting the higher threshold reads Highly
//! Suitable, the lower Moderately Suitable, anything below Not Suitable.
//!
//! Conditions only ever test canonical levels. A missing or unrecognized
//! attribute simply fails its conditions, so sparse surveys degrade
//! toward Not Suitable instead of erroring.

use crate::crops::Crop;
use crate::soil::{Level, SoilAttribute, SoilState};

/// One boolean requirement over the normalized state
#[derive(Debug, Clone, Copy)]
pub enum Condition {
    /// Attribute reads exactly this level
    Is(SoilAttribute, Level),
    /// Attribute reads one of these levels
    AnyOf(SoilAttribute, &'static [Level]),
    /// At least one of the two attributes reads Sufficient
    EitherSufficient(SoilAttribute, SoilAttribute),
    /// At least one seasonal temperature reads High or Medium
    AnySeasonTemperate,
}

impl Condition {
    pub fn holds(&self, state: &SoilState) -> bool {
        match self {
            Condition::Is(attr, level) => state.is(*attr, *level),
            Condition::AnyOf(attr, levels) => state.is_any(*attr, levels),
            Condition::EitherSufficient(a, b) => {
                state.is(*a, Level::Sufficient) || state.is(*b, Level::Sufficient)
            }
            Condition::AnySeasonTemperate => [
                SoilAttribute::TemperatureSummer,
                SoilAttribute::TemperatureWinter,
                SoilAttribute::TemperatureMonsoon,
            ]
            .iter()
            .any(|t| state.is_any(*t, HIGH_OR_MEDIUM)),
        }
    }
}

/// Rule set for one crop
#[derive(Debug)]
pub struct CropRule {
    pub crop: Crop,
    pub conditions: &'static [Condition],
    /// Satisfied-count floor for Highly Suitable
    pub highly_min: u8,
    /// Satisfied-count floor for Moderately Suitable
    pub moderately_min: u8,
}

// Shared level sets
const HIGH_OR_MEDIUM: &[Level] = &[Level::High, Level::Medium];
const ANY_BAND: &[Level] = &[Level::High, Level::Medium, Level::Low];
const NEUTRAL_OR_ALKALINE: &[Level] = &[Level::Neutral, Level::Alkaline];
const NEUTRAL_OR_ACIDIC: &[Level] = &[Level::Neutral, Level::Acidic];
const ANY_PH: &[Level] = &[Level::Neutral, Level::Acidic, Level::Alkaline];

use Condition::{AnyOf, AnySeasonTemperate, EitherSufficient, Is};
use SoilAttribute::*;

/// All twelve rule sets, in `Crop::ALL` order
pub static RULES: [CropRule; 12] = [
    CropRule {
        crop: Crop::Sugarcane,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            AnyOf(OrganicCarbon, HIGH_OR_MEDIUM),
            Is(ElectricalConductivity, Level::NonSaline),
            AnyOf(Ph, NEUTRAL_OR_ALKALINE),
            Is(TemperatureWinter, Level::High),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 6,
        moderately_min: 5,
    },
    CropRule {
        crop: Crop::Cotton,
        conditions: &[
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Zinc, Level::Sufficient),
            AnyOf(Ph, NEUTRAL_OR_ALKALINE),
            Is(TemperatureWinter, Level::High),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Soyabean,
        conditions: &[
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            Is(Boron, Level::Sufficient),
            Is(Sulphur, Level::Sufficient),
            AnyOf(OrganicCarbon, HIGH_OR_MEDIUM),
            AnyOf(Ph, NEUTRAL_OR_ACIDIC),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Rice,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Ph, ANY_PH),
            Is(ElectricalConductivity, Level::NonSaline),
            Is(TemperatureWinter, Level::High),
            Is(Rainfall, Level::High),
            EitherSufficient(Boron, Copper),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Jowar,
        conditions: &[
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Zinc, Level::Sufficient),
            Is(ElectricalConductivity, Level::NonSaline),
            AnyOf(Ph, NEUTRAL_OR_ALKALINE),
            Is(TemperatureWinter, Level::High),
            Is(Rainfall, Level::Medium),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Tur,
        conditions: &[
            AnyOf(Phosphorus, ANY_BAND),
            AnyOf(OrganicCarbon, HIGH_OR_MEDIUM),
            Is(Iron, Level::Sufficient),
            AnyOf(Ph, ANY_PH),
            Is(TemperatureWinter, Level::High),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Wheat,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Zinc, Level::Sufficient),
            Is(Iron, Level::Sufficient),
            Is(Manganese, Level::Sufficient),
            Is(Ph, Level::Neutral),
            Is(TemperatureMonsoon, Level::Medium),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 6,
        moderately_min: 5,
    },
    CropRule {
        crop: Crop::Groundnut,
        conditions: &[
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Boron, Level::Sufficient),
            Is(ElectricalConductivity, Level::NonSaline),
            Is(Ph, Level::Neutral),
            Is(TemperatureWinter, Level::High),
            Is(Rainfall, Level::Medium),
        ],
        highly_min: 6,
        moderately_min: 5,
    },
    CropRule {
        crop: Crop::Onion,
        conditions: &[
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Sulphur, Level::Sufficient),
            Is(Zinc, Level::Sufficient),
            AnyOf(OrganicCarbon, HIGH_OR_MEDIUM),
            AnySeasonTemperate,
        ],
        highly_min: 5,
        moderately_min: 3,
    },
    CropRule {
        crop: Crop::Tomato,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(Zinc, Level::Sufficient),
            Is(Boron, Level::Sufficient),
            AnySeasonTemperate,
        ],
        highly_min: 5,
        moderately_min: 4,
    },
    CropRule {
        crop: Crop::Potato,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Phosphorus, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            Is(ElectricalConductivity, Level::NonSaline),
            AnyOf(Ph, NEUTRAL_OR_ALKALINE),
            AnyOf(TemperatureSummer, HIGH_OR_MEDIUM),
            AnyOf(TemperatureMonsoon, HIGH_OR_MEDIUM),
        ],
        highly_min: 6,
        moderately_min: 5,
    },
    CropRule {
        crop: Crop::Garlic,
        conditions: &[
            AnyOf(Nitrogen, HIGH_OR_MEDIUM),
            AnyOf(Potassium, HIGH_OR_MEDIUM),
            AnyOf(OrganicCarbon, HIGH_OR_MEDIUM),
            AnyOf(Ph, NEUTRAL_OR_ALKALINE),
            Is(Zinc, Level::Sufficient),
            AnyOf(TemperatureWinter, HIGH_OR_MEDIUM),
            AnyOf(Rainfall, HIGH_OR_MEDIUM),
        ],
        highly_min: 5,
        moderately_min: 4,
    },
];

/// Rule set for a crop. Total over the closed crop enum.
pub fn rule_for(crop: Crop) -> &'static CropRule {
    &RULES[crop as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_align_with_crop_order() {
        for (i, crop) in Crop::ALL.iter().enumerate() {
            assert_eq!(
                RULES[i].crop, *crop,
                "rule at index {} must belong to {:?}",
                i, crop
            );
            assert_eq!(rule_for(*crop).crop, *crop);
        }
    }

    #[test]
    fn test_thresholds_are_satisfiable() {
        for rule in &RULES {
            let total = rule.conditions.len() as u8;
            assert!(
                rule.highly_min <= total,
                "{:?}: highly threshold {} exceeds {} conditions",
                rule.crop,
                rule.highly_min,
                total
            );
            assert!(
                rule.moderately_min < rule.highly_min,
                "{:?}: moderate threshold must sit below highly",
                rule.crop
            );
        }
    }

    #[test]
    fn test_condition_counts_per_crop() {
        let expected = [
            (Crop::Sugarcane, 7),
            (Crop::Cotton, 6),
            (Crop::Soyabean, 6),
            (Crop::Rice, 7),
            (Crop::Jowar, 6),
            (Crop::Tur, 6),
            (Crop::Wheat, 9),
            (Crop::Groundnut, 7),
            (Crop::Onion, 5),
            (Crop::Tomato, 6),
            (Crop::Potato, 7),
            (Crop::Garlic, 7),
        ];
        for (crop, count) in expected {
            assert_eq!(
                rule_for(crop).conditions.len(),
                count,
                "{:?} condition count",
                crop
            );
        }
    }

    #[test]
    fn test_either_sufficient_accepts_one_side() {
        use crate::soil::SoilValue;
        let cond = EitherSufficient(Boron, Copper);

        let mut state = SoilState::new();
        assert!(!cond.holds(&state));

        state.insert(Copper, SoilValue::Level(Level::Sufficient));
        assert!(cond.holds(&state));

        let mut other = SoilState::new();
        other.insert(Boron, SoilValue::Level(Level::Sufficient));
        other.insert(Copper, SoilValue::Level(Level::Deficient));
        assert!(cond.holds(&other));
    }

    #[test]
    fn test_any_season_temperate_checks_all_three_seasons() {
        use crate::soil::SoilValue;
        let cond = AnySeasonTemperate;

        let mut state = SoilState::new();
        state.insert(TemperatureSummer, SoilValue::Level(Level::Low));
        state.insert(TemperatureWinter, SoilValue::Level(Level::Low));
        assert!(!cond.holds(&state));

        state.insert(TemperatureMonsoon, SoilValue::Level(Level::Medium));
        assert!(cond.holds(&state));
    }
}
