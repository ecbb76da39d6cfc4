//! Soil-Adaptive Timeline Adjustment
//!
//! Rewrites a crop's baseline phase template against the observed soil
//! state. Two mechanisms: remediation phases injected right after the
//! opening phase for correctable problems (pH, salinity, organic matter,
//! micronutrients), and category-keyed duration multipliers that stretch
//! template phases when the soil will slow the work they cover. Injected
//! phases keep their fixed durations; only template phases are scaled.

use serde::Serialize;

use crate::crops::Crop;
use crate::schedule::registry::{template, PhaseCategory, PhaseSpec, Priority};
use crate::soil::{Level, SoilAttribute, SoilState};

/// Presentation hint for how strongly a phase was reshaped.
/// No effect on scheduling; consumers may use it to highlight rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AdjustmentSeverity {
    Critical,
    Warning,
    Info,
}

/// A template phase after soil adjustment, or an injected remediation phase
#[derive(Debug, Clone, Serialize)]
pub struct AdjustedPhase {
    pub name: String,
    pub category: PhaseCategory,
    pub duration_days: u32,
    pub priority: Priority,
    /// Composed duration multiplier; 1.0 for untouched and injected phases
    pub multiplier: f64,
    /// One entry per triggered duration rule
    pub notes: Vec<String>,
    /// True for remediation phases not present in the template
    pub injected: bool,
    /// What to do, for injected phases; empty otherwise
    pub description: String,
    pub severity: Option<AdjustmentSeverity>,
}

// ============================================================================
// Entry point
// ============================================================================

/// Adjust `crop`'s baseline template for `state`.
///
/// The first template phase stays the anchor; every triggered remediation
/// phase lands immediately after it, in predicate order, before the rest
/// of the template continues.
pub fn adjust(crop: Crop, state: &SoilState) -> Vec<AdjustedPhase> {
    let spec = template(crop);
    let products = amendment_products(state);
    let npk_low = state.npk_low_count();

    let mut remediations = remediation_phases(state, &products);
    let mut phases = Vec::with_capacity(spec.len() + remediations.len());

    let mut template_iter = spec.iter();
    if let Some(anchor) = template_iter.next() {
        phases.push(adjust_phase(anchor, state, npk_low, products.len()));
    }
    phases.append(&mut remediations);
    for base in template_iter {
        phases.push(adjust_phase(base, state, npk_low, products.len()));
    }
    phases
}

// ============================================================================
// Step 1: remediation injection
// ============================================================================

/// Corrective product for a deficient micronutrient
fn amendment_product(attr: SoilAttribute) -> Option<&'static str> {
    match attr {
        SoilAttribute::Zinc => Some("Zinc Sulfate"),
        SoilAttribute::Boron => Some("Borax"),
        SoilAttribute::Iron => Some("Iron Chelate"),
        SoilAttribute::Manganese => Some("Manganese Sulfate"),
        _ => None,
    }
}

fn amendment_products(state: &SoilState) -> Vec<&'static str> {
    state
        .deficient_micronutrients()
        .iter()
        .filter_map(|attr| amendment_product(*attr))
        .collect()
}

fn remediation(name: &str, duration_days: u32, priority: Priority, description: &str) -> AdjustedPhase {
    AdjustedPhase {
        name: name.to_string(),
        category: PhaseCategory::Treatment,
        duration_days,
        priority,
        multiplier: 1.0,
        notes: Vec::new(),
        injected: true,
        description: description.to_string(),
        severity: None,
    }
}

/// Candidate remediation phases, in the fixed predicate order
fn remediation_phases(state: &SoilState, products: &[&'static str]) -> Vec<AdjustedPhase> {
    let mut injected = Vec::new();

    if state.is(SoilAttribute::Ph, Level::Acidic) {
        injected.push(remediation(
            "Lime Application",
            14,
            Priority::Critical,
            "Apply agricultural lime to neutralize soil acidity",
        ));
    }
    if state.is(SoilAttribute::Ph, Level::Alkaline) {
        injected.push(remediation(
            "Gypsum Application",
            12,
            Priority::Critical,
            "Apply gypsum to reduce soil alkalinity",
        ));
    }
    if state.is(SoilAttribute::ElectricalConductivity, Level::Saline) {
        injected.push(remediation(
            "Salinity Leaching Treatment",
            21,
            Priority::Critical,
            "Leach excess salts through controlled irrigation",
        ));
    }
    if state.is(SoilAttribute::OrganicCarbon, Level::Low) {
        injected.push(remediation(
            "Organic Matter Enhancement",
            10,
            Priority::High,
            "Apply farmyard manure and compost",
        ));
    }
    if !products.is_empty() {
        // All deficient micronutrients share one combined application pass
        let list = products.join(", ");
        injected.push(remediation(
            &format!("Micronutrient Application ({list})"),
            5,
            Priority::Medium,
            &format!("Apply {list} to correct deficiencies"),
        ));
    }

    injected
}

// ============================================================================
// Step 2: duration multipliers
// ============================================================================

/// Composed multiplier and modification notes for one category
fn duration_rules(
    category: PhaseCategory,
    state: &SoilState,
    npk_low: usize,
    deficient_micros: usize,
) -> (f64, Vec<String>) {
    let mut multiplier = 1.0_f64;
    let mut notes = Vec::new();

    match category {
        PhaseCategory::Preparation => {
            if state.is_any(SoilAttribute::Ph, &[Level::Acidic, Level::Alkaline]) {
                multiplier *= 1.3;
                notes.push("Extended for pH management".to_string());
            }
            if state.is(SoilAttribute::ElectricalConductivity, Level::Saline) {
                multiplier *= 1.4;
                notes.push("Extended for salinity management".to_string());
            }
            if state.is(SoilAttribute::OrganicCarbon, Level::Low) {
                multiplier *= 1.2;
                notes.push("Extended for organic matter incorporation".to_string());
            }
        }
        PhaseCategory::Growth | PhaseCategory::Development => {
            if npk_low > 0 {
                multiplier *= 1.0 + 0.15 * npk_low as f64;
                notes.push(format!(
                    "Extended due to {npk_low} major nutrient deficiencies"
                ));
            }
            if deficient_micros > 2 {
                multiplier *= 1.1;
                notes.push("Extended for micronutrient management".to_string());
            }
        }
        PhaseCategory::Fertilization => {
            if state.is(SoilAttribute::Nitrogen, Level::Low) {
                multiplier *= 1.3;
                notes.push("Extended nitrogen application program".to_string());
            }
            if state.is(SoilAttribute::Phosphorus, Level::Low) {
                multiplier *= 1.2;
                notes.push("Extended phosphorus application".to_string());
            }
        }
        PhaseCategory::Irrigation | PhaseCategory::Management => {
            if state.is(SoilAttribute::ElectricalConductivity, Level::Saline) {
                multiplier *= 1.5;
                notes.push("Frequent leaching irrigations required".to_string());
            }
            if state.is(SoilAttribute::Rainfall, Level::Low) {
                multiplier *= 1.4;
                notes.push("Intensive irrigation schedule".to_string());
            }
        }
        _ => {}
    }

    (multiplier, notes)
}

/// Scaled duration, truncated toward zero, never below one day
fn scaled_duration(base_days: u32, multiplier: f64) -> u32 {
    let scaled = (base_days as f64 * multiplier).floor() as u32;
    scaled.max(1)
}

fn severity_for(priority: Priority, multiplier: f64, modified: bool) -> Option<AdjustmentSeverity> {
    if !modified {
        return None;
    }
    if priority == Priority::Critical {
        Some(AdjustmentSeverity::Critical)
    } else if multiplier > 1.3 {
        Some(AdjustmentSeverity::Warning)
    } else if multiplier > 1.1 {
        Some(AdjustmentSeverity::Info)
    } else {
        None
    }
}

fn adjust_phase(
    base: &PhaseSpec,
    state: &SoilState,
    npk_low: usize,
    deficient_micros: usize,
) -> AdjustedPhase {
    let (multiplier, notes) = duration_rules(base.category, state, npk_low, deficient_micros);
    let duration_days = scaled_duration(base.duration_days, multiplier);
    let severity = severity_for(base.priority, multiplier, !notes.is_empty());
    AdjustedPhase {
        name: base.name.to_string(),
        category: base.category,
        duration_days,
        priority: base.priority,
        multiplier,
        notes,
        injected: false,
        description: String::new(),
        severity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::soil::SoilValue;
    use approx::assert_relative_eq;

    fn state_with(pairs: &[(SoilAttribute, Level)]) -> SoilState {
        let mut state = SoilState::new();
        for (attr, level) in pairs {
            state.insert(*attr, SoilValue::Level(*level));
        }
        state
    }

    #[test]
    fn test_untroubled_soil_leaves_the_template_alone() {
        let state = state_with(&[
            (SoilAttribute::Nitrogen, Level::High),
            (SoilAttribute::Ph, Level::Neutral),
            (SoilAttribute::ElectricalConductivity, Level::NonSaline),
        ]);
        let phases = adjust(Crop::Wheat, &state);
        let spec = template(Crop::Wheat);
        assert_eq!(phases.len(), spec.len());
        for (phase, base) in phases.iter().zip(spec) {
            assert_eq!(phase.name, base.name);
            assert_eq!(phase.duration_days, base.duration_days);
            assert!(!phase.injected);
            assert!(phase.notes.is_empty());
            assert_eq!(phase.severity, None);
            assert_relative_eq!(phase.multiplier, 1.0);
        }
    }

    #[test]
    fn test_acidic_low_nitrogen_low_organic_cotton_schedule() {
        let state = state_with(&[
            (SoilAttribute::Ph, Level::Acidic),
            (SoilAttribute::Nitrogen, Level::Low),
            (SoilAttribute::OrganicCarbon, Level::Low),
        ]);
        let phases = adjust(Crop::Cotton, &state);
        // 9 template phases plus lime and organic matter remediations
        assert_eq!(phases.len(), 11);

        let lime = &phases[1];
        assert_eq!(lime.name, "Lime Application");
        assert_eq!(lime.duration_days, 14);
        assert_eq!(lime.priority, Priority::Critical);
        assert!(lime.injected);
        assert_eq!(
            lime.description,
            "Apply agricultural lime to neutralize soil acidity"
        );

        let organic = &phases[2];
        assert_eq!(organic.name, "Organic Matter Enhancement");
        assert_eq!(organic.duration_days, 10);
        assert_eq!(organic.priority, Priority::High);

        // Land Preparation stretches for both pH and organic matter work
        let prep = &phases[3];
        assert_eq!(prep.name, "Land Preparation");
        assert_relative_eq!(prep.multiplier, 1.3 * 1.2, epsilon = 1e-9);
        assert_eq!(prep.duration_days, 18);
        assert_eq!(prep.notes.len(), 2);
        assert_eq!(prep.severity, Some(AdjustmentSeverity::Warning));
    }

    #[test]
    fn test_low_nitrogen_stretches_fertilization_phases() {
        let state = state_with(&[(SoilAttribute::Nitrogen, Level::Low)]);
        let phases = adjust(Crop::Sugarcane, &state);
        let fertilizer = phases
            .iter()
            .find(|p| p.category == PhaseCategory::Fertilization)
            .unwrap();
        assert!(fertilizer.multiplier >= 1.3);
        assert_eq!(fertilizer.duration_days, 19);
        assert_eq!(
            fertilizer.notes,
            vec!["Extended nitrogen application program".to_string()]
        );
    }

    #[test]
    fn test_remediations_follow_the_predicate_order() {
        let state = state_with(&[
            (SoilAttribute::Ph, Level::Acidic),
            (SoilAttribute::ElectricalConductivity, Level::Saline),
            (SoilAttribute::OrganicCarbon, Level::Low),
            (SoilAttribute::Zinc, Level::Deficient),
            (SoilAttribute::Boron, Level::Deficient),
            (SoilAttribute::Iron, Level::Deficient),
            (SoilAttribute::Manganese, Level::Deficient),
        ]);
        let phases = adjust(Crop::Rice, &state);
        let injected: Vec<&str> = phases
            .iter()
            .filter(|p| p.injected)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(
            injected,
            vec![
                "Lime Application",
                "Salinity Leaching Treatment",
                "Organic Matter Enhancement",
                "Micronutrient Application (Zinc Sulfate, Borax, Iron Chelate, Manganese Sulfate)",
            ]
        );
        // Everything injected sits directly after the anchor phase
        for (i, name) in injected.iter().enumerate() {
            assert_eq!(phases[i + 1].name, *name);
        }
    }

    #[test]
    fn test_alkaline_soil_gets_gypsum_not_lime() {
        let state = state_with(&[(SoilAttribute::Ph, Level::Alkaline)]);
        let phases = adjust(Crop::Wheat, &state);
        let gypsum = &phases[1];
        assert_eq!(gypsum.name, "Gypsum Application");
        assert_eq!(gypsum.duration_days, 12);
        assert_eq!(gypsum.description, "Apply gypsum to reduce soil alkalinity");
        assert!(!phases.iter().any(|p| p.name == "Lime Application"));
    }

    #[test]
    fn test_growth_phases_scale_with_macronutrient_deficiency_count() {
        let one_low = state_with(&[(SoilAttribute::Nitrogen, Level::Low)]);
        let two_low = state_with(&[
            (SoilAttribute::Nitrogen, Level::Low),
            (SoilAttribute::Phosphorus, Level::Low),
        ]);
        let base = template(Crop::Cotton)
            .iter()
            .find(|p| p.category == PhaseCategory::Growth)
            .unwrap();

        let (m1, _) = duration_rules(PhaseCategory::Growth, &one_low, 1, 0);
        let (m2, _) = duration_rules(PhaseCategory::Growth, &two_low, 2, 0);
        assert_relative_eq!(m1, 1.15, epsilon = 1e-9);
        assert_relative_eq!(m2, 1.3, epsilon = 1e-9);
        assert!(m2 > m1, "one more deficiency never shrinks the multiplier");

        // 20 days at 1.15 truncates to 22, not 23
        assert_eq!(scaled_duration(base.duration_days, m1), 22);
    }

    #[test]
    fn test_three_deficient_micronutrients_stretch_growth() {
        let state = state_with(&[
            (SoilAttribute::Zinc, Level::Deficient),
            (SoilAttribute::Boron, Level::Deficient),
            (SoilAttribute::Iron, Level::Deficient),
        ]);
        let phases = adjust(Crop::Cotton, &state);
        let germination = phases
            .iter()
            .find(|p| p.name == "Germination & Thinning")
            .unwrap();
        assert_relative_eq!(germination.multiplier, 1.1, epsilon = 1e-9);
        assert_eq!(germination.duration_days, 22);
        assert_eq!(
            germination.notes,
            vec!["Extended for micronutrient management".to_string()]
        );
        // 1.1 sits on the info band's edge and stays unmarked
        assert_eq!(germination.severity, None);
    }

    #[test]
    fn test_saline_dry_soil_compounds_irrigation_multipliers() {
        let state = state_with(&[
            (SoilAttribute::ElectricalConductivity, Level::Saline),
            (SoilAttribute::Rainfall, Level::Low),
        ]);
        let phases = adjust(Crop::Sugarcane, &state);
        let irrigation = phases
            .iter()
            .find(|p| p.category == PhaseCategory::Irrigation)
            .unwrap();
        assert_relative_eq!(irrigation.multiplier, 1.5 * 1.4, epsilon = 1e-9);
        // 20 * 2.1 lands just under 42 in float and truncates
        assert_eq!(irrigation.duration_days, 41);
        assert_eq!(irrigation.notes.len(), 2);
        assert_eq!(irrigation.severity, Some(AdjustmentSeverity::Warning));
    }

    #[test]
    fn test_injected_phases_are_exempt_from_multipliers() {
        // Saline soil scales irrigation but not its own leaching treatment
        let state = state_with(&[(SoilAttribute::ElectricalConductivity, Level::Saline)]);
        let phases = adjust(Crop::Sugarcane, &state);
        let leaching = phases
            .iter()
            .find(|p| p.name == "Salinity Leaching Treatment")
            .unwrap();
        assert_eq!(leaching.duration_days, 21);
        assert_relative_eq!(leaching.multiplier, 1.0);
    }

    #[test]
    fn test_modified_critical_phase_is_marked_critical() {
        assert_eq!(
            severity_for(Priority::Critical, 1.0, true),
            Some(AdjustmentSeverity::Critical)
        );
        assert_eq!(
            severity_for(Priority::High, 1.56, true),
            Some(AdjustmentSeverity::Warning)
        );
        assert_eq!(
            severity_for(Priority::Medium, 1.2, true),
            Some(AdjustmentSeverity::Info)
        );
        assert_eq!(severity_for(Priority::Critical, 2.0, false), None);
    }

    #[test]
    fn test_scaled_duration_never_drops_below_one_day() {
        assert_eq!(scaled_duration(1, 1.0), 1);
        assert_eq!(scaled_duration(0, 1.3), 1);
    }
}
