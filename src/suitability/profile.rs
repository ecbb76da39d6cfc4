//! Crop Requirement Profiles and Soil Scoring
//!
//! Static per-crop agronomy metadata (ideal conditions, critical factors,
//! nominal growth period, sowing seasons) plus the simplified 0–100 soil
//! score and the deficiency/recommendation notes built from a normalized
//! reading.

use serde::Serialize;

use crate::crops::Crop;
use crate::soil::{Level, SoilAttribute, SoilState};

/// Indian cropping season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Kharif,
    Rabi,
    Summer,
}

impl Season {
    pub fn display_text(&self) -> &'static str {
        match self {
            Season::Kharif => "Kharif",
            Season::Rabi => "Rabi",
            Season::Summer => "Summer",
        }
    }
}

/// Static requirement profile for one crop
#[derive(Debug, Serialize)]
pub struct CropProfile {
    pub crop: Crop,
    /// Headline soil conditions the crop wants, reader-facing
    pub ideal_conditions: &'static [&'static str],
    /// Attributes whose reading drives the deficiency notes
    pub critical_factors: &'static [SoilAttribute],
    /// Nominal seed-to-harvest span
    pub growth_period_days: u32,
    pub seasons: &'static [Season],
}

use SoilAttribute::*;

/// Profiles in `Crop::ALL` order
pub static PROFILES: [CropProfile; 12] = [
    CropProfile {
        crop: Crop::Sugarcane,
        ideal_conditions: &[
            "High Nitrogen",
            "High/Medium Potassium",
            "High/Medium OC",
            "Non-Saline EC",
            "Neutral/Alkaline pH",
        ],
        critical_factors: &[Nitrogen, ElectricalConductivity, Ph],
        growth_period_days: 365,
        seasons: &[Season::Kharif, Season::Rabi],
    },
    CropProfile {
        crop: Crop::Cotton,
        ideal_conditions: &[
            "High/Medium Phosphorus",
            "High/Medium Potassium",
            "Sufficient Zinc",
            "Neutral/Alkaline pH",
        ],
        critical_factors: &[Phosphorus, Zinc, Ph],
        growth_period_days: 180,
        seasons: &[Season::Kharif],
    },
    CropProfile {
        crop: Crop::Soyabean,
        ideal_conditions: &[
            "High/Medium Phosphorus",
            "Sufficient Boron",
            "Sufficient Sulphur",
            "Neutral/Acidic pH",
        ],
        critical_factors: &[Phosphorus, Boron, Ph],
        growth_period_days: 100,
        seasons: &[Season::Kharif],
    },
    CropProfile {
        crop: Crop::Rice,
        ideal_conditions: &[
            "High/Medium Nitrogen",
            "High/Medium Phosphorus",
            "Non-Saline EC",
            "High Rainfall",
        ],
        critical_factors: &[Nitrogen, ElectricalConductivity, Rainfall],
        growth_period_days: 120,
        seasons: &[Season::Kharif, Season::Rabi],
    },
    CropProfile {
        crop: Crop::Jowar,
        ideal_conditions: &[
            "High/Medium Potassium",
            "Sufficient Zinc",
            "Non-Saline EC",
            "Neutral/Alkaline pH",
        ],
        critical_factors: &[Potassium, Zinc, ElectricalConductivity],
        growth_period_days: 110,
        seasons: &[Season::Kharif, Season::Rabi],
    },
    CropProfile {
        crop: Crop::Tur,
        ideal_conditions: &["High/Medium OC", "Sufficient Iron", "Medium Rainfall"],
        critical_factors: &[OrganicCarbon, Iron, Rainfall],
        growth_period_days: 150,
        seasons: &[Season::Kharif],
    },
    CropProfile {
        crop: Crop::Wheat,
        ideal_conditions: &[
            "High/Medium Nitrogen",
            "High/Medium Phosphorus",
            "Neutral pH",
            "Sufficient Zinc",
        ],
        critical_factors: &[Nitrogen, Phosphorus, Ph, Zinc],
        growth_period_days: 120,
        seasons: &[Season::Rabi],
    },
    CropProfile {
        crop: Crop::Groundnut,
        ideal_conditions: &[
            "High/Medium Phosphorus",
            "Sufficient Boron",
            "Non-Saline EC",
            "Neutral pH",
        ],
        critical_factors: &[Phosphorus, Boron, ElectricalConductivity],
        growth_period_days: 110,
        seasons: &[Season::Kharif, Season::Rabi],
    },
    CropProfile {
        crop: Crop::Onion,
        ideal_conditions: &[
            "High/Medium Potassium",
            "Sufficient Sulphur",
            "High/Medium OC",
        ],
        critical_factors: &[Potassium, Sulphur, OrganicCarbon],
        growth_period_days: 150,
        seasons: &[Season::Rabi, Season::Summer],
    },
    CropProfile {
        crop: Crop::Tomato,
        ideal_conditions: &["High/Medium NPK", "Sufficient Zinc", "Sufficient Boron"],
        critical_factors: &[Nitrogen, Phosphorus, Potassium],
        growth_period_days: 120,
        seasons: &[Season::Rabi, Season::Summer],
    },
    CropProfile {
        crop: Crop::Potato,
        ideal_conditions: &["High/Medium NPK", "Non-Saline EC", "Neutral/Alkaline pH"],
        critical_factors: &[Nitrogen, ElectricalConductivity, Ph],
        growth_period_days: 90,
        seasons: &[Season::Rabi],
    },
    CropProfile {
        crop: Crop::Garlic,
        ideal_conditions: &[
            "High/Medium Nitrogen",
            "High/Medium Potassium",
            "Sufficient Zinc",
            "Neutral/Alkaline pH",
        ],
        critical_factors: &[Nitrogen, Potassium, Ph],
        growth_period_days: 150,
        seasons: &[Season::Rabi],
    },
];

pub fn profile_for(crop: Crop) -> &'static CropProfile {
    &PROFILES[crop as usize]
}

// ============================================================================
// Soil score
// ============================================================================

/// One scored preference: attribute present and in the accepted set gains
/// points, present but outside loses a few, absent is neutral
struct Preference {
    attr: SoilAttribute,
    accepted: &'static [Level],
}

const HM: &[Level] = &[Level::High, Level::Medium];

/// Scored preferences; crops without an entry sit at the base score
fn preferences_for(crop: Crop) -> &'static [Preference] {
    match crop {
        Crop::Sugarcane => &[
            Preference { attr: Nitrogen, accepted: HM },
            Preference { attr: ElectricalConductivity, accepted: &[Level::NonSaline] },
            Preference { attr: Ph, accepted: &[Level::Neutral, Level::Alkaline] },
        ],
        Crop::Cotton => &[
            Preference { attr: Phosphorus, accepted: HM },
            Preference { attr: Ph, accepted: &[Level::Neutral, Level::Alkaline] },
            Preference { attr: Zinc, accepted: &[Level::Sufficient] },
        ],
        Crop::Soyabean => &[
            Preference { attr: Phosphorus, accepted: HM },
            Preference { attr: Ph, accepted: &[Level::Neutral, Level::Acidic] },
            Preference { attr: Boron, accepted: &[Level::Sufficient] },
        ],
        Crop::Rice => &[
            Preference { attr: Nitrogen, accepted: HM },
            Preference { attr: ElectricalConductivity, accepted: &[Level::NonSaline] },
            Preference { attr: Rainfall, accepted: &[Level::High] },
        ],
        Crop::Wheat => &[
            Preference { attr: Nitrogen, accepted: HM },
            Preference { attr: Ph, accepted: &[Level::Neutral] },
            Preference { attr: Zinc, accepted: &[Level::Sufficient] },
        ],
        Crop::Groundnut => &[
            Preference { attr: Phosphorus, accepted: HM },
            Preference { attr: ElectricalConductivity, accepted: &[Level::NonSaline] },
            Preference { attr: Ph, accepted: &[Level::Neutral] },
        ],
        Crop::Potato => &[
            Preference { attr: Nitrogen, accepted: HM },
            Preference { attr: ElectricalConductivity, accepted: &[Level::NonSaline] },
            Preference { attr: Ph, accepted: &[Level::Neutral, Level::Alkaline] },
        ],
        Crop::Garlic => &[
            Preference { attr: Nitrogen, accepted: HM },
            Preference { attr: Ph, accepted: &[Level::Neutral, Level::Alkaline] },
            Preference { attr: Potassium, accepted: HM },
        ],
        Crop::Jowar | Crop::Tur | Crop::Onion | Crop::Tomato => &[],
    }
}

/// Simplified 0–100 suitability score: base 50, +10 per matched
/// preference, -5 per present-but-mismatched one
pub fn soil_score(crop: Crop, state: &SoilState) -> u8 {
    let mut score: i32 = 50;
    for pref in preferences_for(crop) {
        if state.get(pref.attr).is_some() {
            if state.is_any(pref.attr, pref.accepted) {
                score += 10;
            } else {
                score -= 5;
            }
        }
    }
    score.clamp(0, 100) as u8
}

// ============================================================================
// Per-crop soil analysis
// ============================================================================

/// Reading-specific outlook for growing one crop
#[derive(Debug, Clone, Serialize)]
pub struct CropAnalysis {
    pub crop: Crop,
    pub growth_period_days: u32,
    pub ideal_seasons: &'static [Season],
    /// Critical-factor shortfalls with a suggested correction
    pub deficiencies: Vec<String>,
    /// General amendments suggested by the reading
    pub recommendations: Vec<String>,
    pub soil_score: u8,
}

/// Build the analysis view for one crop from a normalized reading
pub fn analyze(crop: Crop, state: &SoilState) -> CropAnalysis {
    let profile = profile_for(crop);
    let mut deficiencies = Vec::new();

    for factor in profile.critical_factors {
        let Some(value) = state.get(*factor) else {
            continue;
        };
        match (crop, factor) {
            (Crop::Sugarcane, Nitrogen) if state.is(Nitrogen, Level::Low) => {
                deficiencies.push("Low Nitrogen - Consider nitrogen-rich fertilizers".to_string());
            }
            (Crop::Cotton, Phosphorus) if state.is(Phosphorus, Level::Low) => {
                deficiencies.push("Low Phosphorus - Apply phosphate fertilizers".to_string());
            }
            (Crop::Wheat | Crop::Groundnut, Ph) => {
                if value.as_level() != Some(Level::Neutral) {
                    deficiencies.push(format!(
                        "{} pH - Consider soil pH adjustment",
                        value.as_str()
                    ));
                }
            }
            (Crop::Soyabean, Ph) if state.is(Ph, Level::Alkaline) => {
                deficiencies.push("Alkaline pH - Consider acidifying agents".to_string());
            }
            _ => {}
        }
    }

    let mut recommendations = Vec::new();
    if state.is(OrganicCarbon, Level::Low) {
        recommendations.push("Increase organic matter through compost or FYM".to_string());
    }
    if state.is(ElectricalConductivity, Level::Saline) {
        recommendations.push("Soil salinity management required - consider drainage".to_string());
    }
    if state.is(Rainfall, Level::Low) {
        recommendations.push("Irrigation system planning essential".to_string());
    }

    CropAnalysis {
        crop,
        growth_period_days: profile.growth_period_days,
        ideal_seasons: profile.seasons,
        deficiencies,
        recommendations,
        soil_score: soil_score(crop, state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilValue;

    fn state_with(pairs: &[(SoilAttribute, Level)]) -> SoilState {
        let mut state = SoilState::new();
        for (attr, level) in pairs {
            state.insert(*attr, SoilValue::Level(*level));
        }
        state
    }

    #[test]
    fn test_profiles_align_with_crop_order() {
        for (i, crop) in Crop::ALL.iter().enumerate() {
            assert_eq!(PROFILES[i].crop, *crop);
        }
    }

    #[test]
    fn test_growth_periods_match_catalog() {
        assert_eq!(profile_for(Crop::Sugarcane).growth_period_days, 365);
        assert_eq!(profile_for(Crop::Potato).growth_period_days, 90);
        assert_eq!(profile_for(Crop::Soyabean).growth_period_days, 100);
    }

    #[test]
    fn test_soil_score_rewards_matches_and_penalizes_mismatches() {
        let matched = state_with(&[
            (Nitrogen, Level::High),
            (ElectricalConductivity, Level::NonSaline),
            (Ph, Level::Neutral),
        ]);
        assert_eq!(soil_score(Crop::Sugarcane, &matched), 80);

        let mismatched = state_with(&[
            (Nitrogen, Level::Low),
            (ElectricalConductivity, Level::Saline),
            (Ph, Level::Acidic),
        ]);
        assert_eq!(soil_score(Crop::Sugarcane, &mismatched), 35);

        // Absent attributes neither reward nor penalize
        assert_eq!(soil_score(Crop::Sugarcane, &SoilState::new()), 50);
    }

    #[test]
    fn test_unscored_crops_hold_the_base_score() {
        let state = state_with(&[(Potassium, Level::High)]);
        assert_eq!(soil_score(Crop::Jowar, &state), 50);
        assert_eq!(soil_score(Crop::Tomato, &state), 50);
    }

    #[test]
    fn test_analysis_collects_deficiencies_and_recommendations() {
        let state = state_with(&[
            (Nitrogen, Level::Low),
            (OrganicCarbon, Level::Low),
            (ElectricalConductivity, Level::Saline),
        ]);
        let analysis = analyze(Crop::Sugarcane, &state);
        assert_eq!(
            analysis.deficiencies,
            vec!["Low Nitrogen - Consider nitrogen-rich fertilizers".to_string()]
        );
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("organic matter")));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("salinity management")));
    }

    #[test]
    fn test_wheat_flags_off_neutral_ph() {
        let state = state_with(&[(Ph, Level::Acidic)]);
        let analysis = analyze(Crop::Wheat, &state);
        assert_eq!(
            analysis.deficiencies,
            vec!["Acidic pH - Consider soil pH adjustment".to_string()]
        );

        let neutral = state_with(&[(Ph, Level::Neutral)]);
        assert!(analyze(Crop::Wheat, &neutral).deficiencies.is_empty());
    }
}
