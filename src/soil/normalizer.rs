//! Descriptive Value Normalization
//!
//! One fixed translation table takes every descriptive reading the survey
//! forms emit ("High (81–100%)", "Saline (≥ 4 dS/m)") to its canonical
//! level. Normalization happens exactly once per request; nothing after
//! this module parses descriptive text again.
//!
//! Unmapped values pass through unchanged as `Unrecognized` so a caller
//! can still see what was reported, and already-canonical strings map to
//! themselves.

use super::level::{Level, SoilAttribute};
use super::state::{SoilReading, SoilState, SoilValue};

// ============================================================================
// Translation table
// ============================================================================

/// Descriptive reading → canonical level.
/// Percentage bands differ per attribute (e.g. Zinc sufficiency starts at
/// 86%), so several descriptive spellings share one level.
static VALUE_MAP: &[(&str, Level)] = &[
    // Macronutrient bands
    ("High (81–100%)", Level::High),
    ("Medium (51–80%)", Level::Medium),
    ("Low (0–50%)", Level::Low),
    ("Medium (41–80%)", Level::Medium),
    ("Low (0–40%)", Level::Low),
    ("Medium (31–80%)", Level::Medium),
    ("Low (0–30%)", Level::Low),
    // Organic carbon
    ("High (> 0.75%)", Level::High),
    ("Medium (0.5–0.75%)", Level::Medium),
    ("Low (< 0.5%)", Level::Low),
    // Electrical conductivity
    ("Non-Saline (< 4 dS/m)", Level::NonSaline),
    ("Saline (≥ 4 dS/m)", Level::Saline),
    // pH
    ("Neutral (6.5–7.5)", Level::Neutral),
    ("Alkaline (above 7.5)", Level::Alkaline),
    ("Acidic (below 6.5)", Level::Acidic),
    // Micronutrient sufficiency
    ("Sufficient (81–100%)", Level::Sufficient),
    ("Deficient (0–50%)", Level::Deficient),
    ("Sufficient (86–100%)", Level::Sufficient),
    ("Deficient (0–60%)", Level::Deficient),
    // Seasonal temperature
    ("Low (< 28°C – Too cool for summer crops)", Level::Low),
    ("Medium (28–35°C – Ideal for warm-season crops)", Level::Medium),
    ("High (> 35°C – Heat stress risk)", Level::High),
    ("Low (< 10°C – Too cold for most crops)", Level::Low),
    ("Medium (10–20°C – Ideal for rabi crops)", Level::Medium),
    ("High (> 20°C – May hinder wheat filling)", Level::High),
    ("Low (< 22°C – Poor germination)", Level::Low),
    ("Medium (22–30°C – Ideal for kharif crops)", Level::Medium),
    ("High (> 30°C – Fungal stress risk)", Level::High),
    // Rainfall
    ("High (1000–1500 mm – Ideal rainfed range)", Level::High),
    ("Medium (500–1000 mm – May need irrigation)", Level::Medium),
    ("Low (< 500 mm – Highly insufficient)", Level::Low),
];

/// Look up a trimmed descriptive value in the translation table
fn table_lookup(text: &str) -> Option<Level> {
    VALUE_MAP
        .iter()
        .find(|(descriptive, _)| *descriptive == text)
        .map(|(_, level)| *level)
}

/// Normalize one value: trim, translate, or pass through
pub fn normalize_value(text: &str) -> SoilValue {
    let trimmed = text.trim();
    if let Some(level) = table_lookup(trimmed) {
        return SoilValue::Level(level);
    }
    // Already-canonical strings normalize to themselves
    if let Some(level) = Level::parse(trimmed) {
        return SoilValue::Level(level);
    }
    SoilValue::Unrecognized(trimmed.to_string())
}

/// Normalize a whole reading. Total: never fails, attributes absent from
/// the reading are absent from the state.
pub fn normalize(reading: &SoilReading) -> SoilState {
    let mut state = SoilState::new();
    for (attr, text) in reading.iter() {
        state.insert(attr, normalize_value(text));
    }
    state
}

// ============================================================================
// Attribute option catalog
// ============================================================================

/// Descriptive options offered for each attribute, in form display order.
/// The survey forms and the translation table are kept in step by test.
pub fn attribute_options(attr: SoilAttribute) -> &'static [&'static str] {
    match attr {
        SoilAttribute::Nitrogen => &["High (81–100%)", "Medium (51–80%)", "Low (0–50%)"],
        SoilAttribute::Phosphorus => &["High (81–100%)", "Medium (41–80%)", "Low (0–40%)"],
        SoilAttribute::Potassium => &["High (81–100%)", "Medium (31–80%)", "Low (0–30%)"],
        SoilAttribute::OrganicCarbon => &["High (> 0.75%)", "Medium (0.5–0.75%)", "Low (< 0.5%)"],
        SoilAttribute::ElectricalConductivity => &["Non-Saline (< 4 dS/m)", "Saline (≥ 4 dS/m)"],
        SoilAttribute::Ph => &["Alkaline (above 7.5)", "Neutral (6.5–7.5)", "Acidic (below 6.5)"],
        SoilAttribute::Copper
        | SoilAttribute::Boron
        | SoilAttribute::Sulphur
        | SoilAttribute::Iron
        | SoilAttribute::Manganese => &["Sufficient (81–100%)", "Deficient (0–50%)"],
        SoilAttribute::Zinc => &["Sufficient (86–100%)", "Deficient (0–60%)"],
        SoilAttribute::TemperatureSummer => &[
            "Low (< 28°C – Too cool for summer crops)",
            "Medium (28–35°C – Ideal for warm-season crops)",
            "High (> 35°C – Heat stress risk)",
        ],
        SoilAttribute::TemperatureWinter => &[
            "Low (< 10°C – Too cold for most crops)",
            "Medium (10–20°C – Ideal for rabi crops)",
            "High (> 20°C – May hinder wheat filling)",
        ],
        SoilAttribute::TemperatureMonsoon => &[
            "Low (< 22°C – Poor germination)",
            "Medium (22–30°C – Ideal for kharif crops)",
            "High (> 30°C – Fungal stress risk)",
        ],
        SoilAttribute::Rainfall => &[
            "High (1000–1500 mm – Ideal rainfed range)",
            "Medium (500–1000 mm – May need irrigation)",
            "Low (< 500 mm – Highly insufficient)",
        ],
    }
}
