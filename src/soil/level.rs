//! Canonical Soil Vocabulary
//!
//! The closed sets the rest of the engine matches on: the sixteen
//! recognized soil/climate attributes and the ten canonical levels their
//! descriptive readings normalize to. Free text exists only at the
//! normalization boundary; from here on everything is an enum.

use serde::{Deserialize, Serialize};

/// Canonical level a descriptive soil reading normalizes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    High,
    Medium,
    Low,
    Sufficient,
    Deficient,
    Saline,
    #[serde(rename = "Non-Saline")]
    NonSaline,
    Neutral,
    Acidic,
    Alkaline,
}

impl Level {
    pub const ALL: [Level; 10] = [
        Level::High,
        Level::Medium,
        Level::Low,
        Level::Sufficient,
        Level::Deficient,
        Level::Saline,
        Level::NonSaline,
        Level::Neutral,
        Level::Acidic,
        Level::Alkaline,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::High => "High",
            Level::Medium => "Medium",
            Level::Low => "Low",
            Level::Sufficient => "Sufficient",
            Level::Deficient => "Deficient",
            Level::Saline => "Saline",
            Level::NonSaline => "Non-Saline",
            Level::Neutral => "Neutral",
            Level::Acidic => "Acidic",
            Level::Alkaline => "Alkaline",
        }
    }

    /// Parse an exact canonical string (callers trim first)
    pub fn parse(s: &str) -> Option<Level> {
        Level::ALL.iter().copied().find(|l| l.as_str() == s)
    }
}

/// Recognized soil and climate attributes
///
/// Wire keys follow the reading form the field sensors/surveys use
/// (`OC`, `EC`, `pH`, `Temperature_Winter`). Keys outside this set are
/// skipped during normalization; no rule ever reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SoilAttribute {
    Nitrogen,
    Phosphorus,
    Potassium,
    #[serde(rename = "OC")]
    OrganicCarbon,
    #[serde(rename = "EC")]
    ElectricalConductivity,
    #[serde(rename = "pH")]
    Ph,
    Copper,
    Boron,
    Sulphur,
    Iron,
    Zinc,
    Manganese,
    #[serde(rename = "Temperature_Summer")]
    TemperatureSummer,
    #[serde(rename = "Temperature_Winter")]
    TemperatureWinter,
    #[serde(rename = "Temperature_Monsoon")]
    TemperatureMonsoon,
    Rainfall,
}

impl SoilAttribute {
    pub const ALL: [SoilAttribute; 16] = [
        SoilAttribute::Nitrogen,
        SoilAttribute::Phosphorus,
        SoilAttribute::Potassium,
        SoilAttribute::OrganicCarbon,
        SoilAttribute::ElectricalConductivity,
        SoilAttribute::Ph,
        SoilAttribute::Copper,
        SoilAttribute::Boron,
        SoilAttribute::Sulphur,
        SoilAttribute::Iron,
        SoilAttribute::Zinc,
        SoilAttribute::Manganese,
        SoilAttribute::TemperatureSummer,
        SoilAttribute::TemperatureWinter,
        SoilAttribute::TemperatureMonsoon,
        SoilAttribute::Rainfall,
    ];

    /// Wire key as it appears in readings and API payloads
    pub fn key(&self) -> &'static str {
        match self {
            SoilAttribute::Nitrogen => "Nitrogen",
            SoilAttribute::Phosphorus => "Phosphorus",
            SoilAttribute::Potassium => "Potassium",
            SoilAttribute::OrganicCarbon => "OC",
            SoilAttribute::ElectricalConductivity => "EC",
            SoilAttribute::Ph => "pH",
            SoilAttribute::Copper => "Copper",
            SoilAttribute::Boron => "Boron",
            SoilAttribute::Sulphur => "Sulphur",
            SoilAttribute::Iron => "Iron",
            SoilAttribute::Zinc => "Zinc",
            SoilAttribute::Manganese => "Manganese",
            SoilAttribute::TemperatureSummer => "Temperature_Summer",
            SoilAttribute::TemperatureWinter => "Temperature_Winter",
            SoilAttribute::TemperatureMonsoon => "Temperature_Monsoon",
            SoilAttribute::Rainfall => "Rainfall",
        }
    }

    /// Resolve a trimmed reading key, including the legacy
    /// "Rainfall overall" survey heading
    pub fn parse_key(s: &str) -> Option<SoilAttribute> {
        let key = s.trim();
        if key == "Rainfall overall" {
            return Some(SoilAttribute::Rainfall);
        }
        SoilAttribute::ALL.iter().copied().find(|a| a.key() == key)
    }

    /// The three macronutrients whose deficiency stretches growth phases
    pub fn is_macronutrient(&self) -> bool {
        matches!(
            self,
            SoilAttribute::Nitrogen | SoilAttribute::Phosphorus | SoilAttribute::Potassium
        )
    }

    /// Micronutrients with a known corrective amendment
    pub fn is_treatable_micronutrient(&self) -> bool {
        matches!(
            self,
            SoilAttribute::Zinc | SoilAttribute::Boron | SoilAttribute::Iron | SoilAttribute::Manganese
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trips_through_as_str() {
        for level in Level::ALL {
            assert_eq!(Level::parse(level.as_str()), Some(level));
        }
    }

    #[test]
    fn test_level_parse_is_exact() {
        assert_eq!(Level::parse("Non-Saline"), Some(Level::NonSaline));
        assert_eq!(Level::parse("non-saline"), None);
        assert_eq!(Level::parse("High (81–100%)"), None);
    }

    #[test]
    fn test_attribute_keys_round_trip() {
        for attr in SoilAttribute::ALL {
            assert_eq!(SoilAttribute::parse_key(attr.key()), Some(attr));
        }
    }

    #[test]
    fn test_legacy_rainfall_heading_resolves() {
        assert_eq!(
            SoilAttribute::parse_key("Rainfall overall"),
            Some(SoilAttribute::Rainfall)
        );
        assert_eq!(
            SoilAttribute::parse_key("  Temperature_Winter "),
            Some(SoilAttribute::TemperatureWinter)
        );
    }

    #[test]
    fn test_unrecognized_keys_do_not_resolve() {
        assert_eq!(SoilAttribute::parse_key("Molybdenum"), None);
        assert_eq!(SoilAttribute::parse_key("ph"), None);
    }

    #[test]
    fn test_nutrient_classes() {
        assert!(SoilAttribute::Nitrogen.is_macronutrient());
        assert!(!SoilAttribute::Zinc.is_macronutrient());
        assert!(SoilAttribute::Manganese.is_treatable_micronutrient());
        // Copper and Sulphur have no amendment product in the catalog
        assert!(!SoilAttribute::Copper.is_treatable_micronutrient());
        assert!(!SoilAttribute::Sulphur.is_treatable_micronutrient());
    }
}
