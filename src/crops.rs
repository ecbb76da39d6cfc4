//! Crop Identity
//!
//! The twelve supported crops as a closed enum. Everything downstream
//! (rules, templates, profiles) is total over this set, so resolving a
//! free-text name is the only place an unknown crop can appear.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Supported crop set, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Sugarcane,
    Cotton,
    Soyabean,
    Rice,
    Jowar,
    Tur,
    Wheat,
    Groundnut,
    Onion,
    Tomato,
    Potato,
    Garlic,
}

impl Crop {
    pub const ALL: [Crop; 12] = [
        Crop::Sugarcane,
        Crop::Cotton,
        Crop::Soyabean,
        Crop::Rice,
        Crop::Jowar,
        Crop::Tur,
        Crop::Wheat,
        Crop::Groundnut,
        Crop::Onion,
        Crop::Tomato,
        Crop::Potato,
        Crop::Garlic,
    ];

    /// Lowercase identifier used in wire formats and URLs
    pub fn id(&self) -> &'static str {
        match self {
            Crop::Sugarcane => "sugarcane",
            Crop::Cotton => "cotton",
            Crop::Soyabean => "soyabean",
            Crop::Rice => "rice",
            Crop::Jowar => "jowar",
            Crop::Tur => "tur",
            Crop::Wheat => "wheat",
            Crop::Groundnut => "groundnut",
            Crop::Onion => "onion",
            Crop::Tomato => "tomato",
            Crop::Potato => "potato",
            Crop::Garlic => "garlic",
        }
    }

    /// Formal name shown in reports
    pub fn display_name(&self) -> &'static str {
        match self {
            Crop::Sugarcane => "Sugarcane",
            Crop::Cotton => "Cotton",
            Crop::Soyabean => "Soyabean",
            Crop::Rice => "Rice",
            Crop::Jowar => "Jowar",
            Crop::Tur => "Tur (Pigeon Pea)",
            Crop::Wheat => "Wheat",
            Crop::Groundnut => "Groundnut",
            Crop::Onion => "Onion",
            Crop::Tomato => "Tomato",
            Crop::Potato => "Potato",
            Crop::Garlic => "Garlic",
        }
    }

    /// Resolve a free-text crop name (id or display name, case-insensitive)
    pub fn parse(name: &str) -> Result<Crop, EngineError> {
        let needle = name.trim().to_lowercase();
        Crop::ALL
            .iter()
            .copied()
            .find(|c| c.id() == needle || c.display_name().to_lowercase() == needle)
            .ok_or_else(|| EngineError::UnknownCrop(name.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_ids_and_display_names() {
        assert_eq!(Crop::parse("sugarcane"), Ok(Crop::Sugarcane));
        assert_eq!(Crop::parse("Tur (Pigeon Pea)"), Ok(Crop::Tur));
        assert_eq!(Crop::parse("  WHEAT  "), Ok(Crop::Wheat));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        assert_eq!(
            Crop::parse("quinoa"),
            Err(EngineError::UnknownCrop("quinoa".to_string()))
        );
        // Nothing falls back to a default crop
        assert!(Crop::parse("").is_err());
    }

    #[test]
    fn test_all_covers_twelve_distinct_crops() {
        let mut ids: Vec<&str> = Crop::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12, "crop ids must be unique");
    }
}
