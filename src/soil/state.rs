//! Soil Readings and Normalized State
//!
//! `SoilReading` is the intake form: recognized attributes mapped to the
//! free-text descriptive values a survey reports. `SoilState` is what the
//! rest of the engine consumes: the same attributes resolved to canonical
//! levels exactly once. Downstream code matches on `Level`, never on text.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::level::{Level, SoilAttribute};

/// Attribute-keyed map used for per-request soil data
pub type AttrMap<V> = HashMap<SoilAttribute, V, ahash::RandomState>;

// ============================================================================
// Reading (descriptive input)
// ============================================================================

/// One soil survey's worth of descriptive readings
///
/// Attributes may be missing; that is degraded input, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilReading {
    values: AttrMap<String>,
}

impl SoilReading {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from labeled text pairs, trimming keys and skipping any the
    /// attribute set does not recognize
    pub fn from_labeled<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut reading = SoilReading::new();
        for (key, value) in pairs {
            if let Some(attr) = SoilAttribute::parse_key(key) {
                reading.set(attr, value);
            }
        }
        reading
    }

    pub fn set(&mut self, attr: SoilAttribute, value: impl Into<String>) {
        self.values.insert(attr, value.into());
    }

    pub fn get(&self, attr: SoilAttribute) -> Option<&str> {
        self.values.get(&attr).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (SoilAttribute, &str)> {
        self.values.iter().map(|(a, v)| (*a, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Attributes a complete survey would carry but this one lacks
    pub fn missing_attributes(&self) -> Vec<SoilAttribute> {
        SoilAttribute::ALL
            .iter()
            .copied()
            .filter(|a| !self.values.contains_key(a))
            .collect()
    }
}

// ============================================================================
// Normalized state
// ============================================================================

/// A normalized value: canonical when the translation table or canonical
/// vocabulary recognized the text, otherwise the trimmed original
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SoilValue {
    Level(Level),
    Unrecognized(String),
}

impl SoilValue {
    pub fn as_level(&self) -> Option<Level> {
        match self {
            SoilValue::Level(l) => Some(*l),
            SoilValue::Unrecognized(_) => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SoilValue::Level(l) => l.as_str(),
            SoilValue::Unrecognized(s) => s.as_str(),
        }
    }
}

/// Canonical view of one reading, produced once per request
///
/// Built by `soil::normalize`; immutable from the engine's point of view
/// after that. Absent attributes stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SoilState {
    values: AttrMap<SoilValue>,
}

impl SoilState {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, attr: SoilAttribute, value: SoilValue) {
        self.values.insert(attr, value);
    }

    pub fn get(&self, attr: SoilAttribute) -> Option<&SoilValue> {
        self.values.get(&attr)
    }

    /// Canonical level, if the attribute is present and was recognized
    pub fn level(&self, attr: SoilAttribute) -> Option<Level> {
        self.values.get(&attr).and_then(|v| v.as_level())
    }

    /// True only when the attribute is present and canonical.
    /// Missing or unrecognized values fail every membership test, which
    /// biases verdicts toward NotSuitable rather than guessing.
    pub fn is(&self, attr: SoilAttribute, level: Level) -> bool {
        self.level(attr) == Some(level)
    }

    pub fn is_any(&self, attr: SoilAttribute, levels: &[Level]) -> bool {
        match self.level(attr) {
            Some(l) => levels.contains(&l),
            None => false,
        }
    }

    /// How many of N, P, K read Low
    pub fn npk_low_count(&self) -> usize {
        SoilAttribute::ALL
            .iter()
            .filter(|a| a.is_macronutrient() && self.is(**a, Level::Low))
            .count()
    }

    /// Deficient micronutrients with a corrective amendment, in the
    /// fixed order the amendment list is written (Zinc, Boron, Iron,
    /// Manganese)
    pub fn deficient_micronutrients(&self) -> SmallVec<[SoilAttribute; 4]> {
        const TREATABLE: [SoilAttribute; 4] = [
            SoilAttribute::Zinc,
            SoilAttribute::Boron,
            SoilAttribute::Iron,
            SoilAttribute::Manganese,
        ];
        TREATABLE
            .iter()
            .copied()
            .filter(|a| self.is(*a, Level::Deficient))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SoilAttribute, &SoilValue)> {
        self.values.iter().map(|(a, v)| (*a, v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(pairs: &[(SoilAttribute, Level)]) -> SoilState {
        let mut state = SoilState::new();
        for (attr, level) in pairs {
            state.insert(*attr, SoilValue::Level(*level));
        }
        state
    }

    #[test]
    fn test_from_labeled_skips_unknown_keys() {
        let reading = SoilReading::from_labeled([
            ("Nitrogen", "High (81–100%)"),
            ("Molybdenum", "Low"),
            (" pH ", "Neutral (6.5–7.5)"),
        ]);
        assert_eq!(reading.len(), 2);
        assert_eq!(reading.get(SoilAttribute::Nitrogen), Some("High (81–100%)"));
        assert_eq!(reading.get(SoilAttribute::Ph), Some("Neutral (6.5–7.5)"));
    }

    #[test]
    fn test_missing_attribute_fails_membership_tests() {
        let state = state_with(&[(SoilAttribute::Nitrogen, Level::High)]);
        assert!(!state.is(SoilAttribute::Potassium, Level::High));
        assert!(!state.is_any(SoilAttribute::Potassium, &[Level::High, Level::Medium]));
    }

    #[test]
    fn test_unrecognized_value_fails_membership_tests() {
        let mut state = SoilState::new();
        state.insert(
            SoilAttribute::Ph,
            SoilValue::Unrecognized("slightly zesty".to_string()),
        );
        assert!(!state.is(SoilAttribute::Ph, Level::Neutral));
        assert_eq!(state.level(SoilAttribute::Ph), None);
        assert_eq!(
            state.get(SoilAttribute::Ph).map(|v| v.as_str()),
            Some("slightly zesty")
        );
    }

    #[test]
    fn test_npk_low_count() {
        let state = state_with(&[
            (SoilAttribute::Nitrogen, Level::Low),
            (SoilAttribute::Phosphorus, Level::Low),
            (SoilAttribute::Potassium, Level::High),
            (SoilAttribute::Zinc, Level::Deficient),
        ]);
        assert_eq!(state.npk_low_count(), 2);
    }

    #[test]
    fn test_deficient_micronutrients_keep_amendment_order() {
        let state = state_with(&[
            (SoilAttribute::Manganese, Level::Deficient),
            (SoilAttribute::Zinc, Level::Deficient),
            (SoilAttribute::Copper, Level::Deficient),
            (SoilAttribute::Iron, Level::Sufficient),
        ]);
        let deficient = state.deficient_micronutrients();
        // Copper has no amendment product, so it never appears here
        assert_eq!(
            deficient.as_slice(),
            &[SoilAttribute::Zinc, SoilAttribute::Manganese]
        );
    }
}
