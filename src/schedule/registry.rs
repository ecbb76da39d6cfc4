//! Growth Phase Templates
//!
//! Baseline phase sequences for the twelve supported crops. Each template is
//! an ordered list of phase specs (name, category, nominal duration,
//! priority) that the adjuster reshapes against the observed soil state
//! before dates are assigned.

use serde::{Deserialize, Serialize};

use crate::crops::Crop;

/// Operational category a phase belongs to. Duration multipliers key off
/// the category, not the phase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseCategory {
    Analysis,
    Preparation,
    Treatment,
    Planting,
    Irrigation,
    Fertilization,
    Growth,
    Flowering,
    Development,
    Monitoring,
    Management,
    Harvest,
    DiseaseManagement,
}

impl PhaseCategory {
    pub fn display_text(&self) -> &'static str {
        match self {
            PhaseCategory::Analysis => "Analysis",
            PhaseCategory::Preparation => "Preparation",
            PhaseCategory::Treatment => "Treatment",
            PhaseCategory::Planting => "Planting",
            PhaseCategory::Irrigation => "Irrigation",
            PhaseCategory::Fertilization => "Fertilization",
            PhaseCategory::Growth => "Growth",
            PhaseCategory::Flowering => "Flowering",
            PhaseCategory::Development => "Development",
            PhaseCategory::Monitoring => "Monitoring",
            PhaseCategory::Management => "Management",
            PhaseCategory::Harvest => "Harvest",
            PhaseCategory::DiseaseManagement => "Disease Management",
        }
    }
}

/// How much slack a phase tolerates before the plan slips
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn display_text(&self) -> &'static str {
        match self {
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// One baseline phase before soil adjustment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PhaseSpec {
    pub name: &'static str,
    pub category: PhaseCategory,
    pub duration_days: u32,
    pub priority: Priority,
}

use PhaseCategory::*;
use Priority::*;

static SUGARCANE: [PhaseSpec; 10] = [
    PhaseSpec { name: "Soil Testing & Analysis", category: Analysis, duration_days: 3, priority: Critical },
    PhaseSpec { name: "Land Preparation & Leveling", category: Preparation, duration_days: 15, priority: High },
    PhaseSpec { name: "Soil Treatment & Amendment", category: Treatment, duration_days: 7, priority: Medium },
    PhaseSpec { name: "Sett Treatment & Planting", category: Planting, duration_days: 10, priority: Critical },
    PhaseSpec { name: "Irrigation & Early Care", category: Irrigation, duration_days: 20, priority: High },
    PhaseSpec { name: "Fertilizer Application Program", category: Fertilization, duration_days: 15, priority: High },
    PhaseSpec { name: "Tillering Phase Management", category: Growth, duration_days: 60, priority: Medium },
    PhaseSpec { name: "Grand Growth Phase", category: Growth, duration_days: 120, priority: Medium },
    PhaseSpec { name: "Maturation Monitoring", category: Monitoring, duration_days: 90, priority: Medium },
    PhaseSpec { name: "Harvesting Operations", category: Harvest, duration_days: 25, priority: Critical },
];

static COTTON: [PhaseSpec; 9] = [
    PhaseSpec { name: "Soil Analysis & Testing", category: Analysis, duration_days: 3, priority: Critical },
    PhaseSpec { name: "Land Preparation", category: Preparation, duration_days: 12, priority: High },
    PhaseSpec { name: "Soil Treatment", category: Treatment, duration_days: 5, priority: Medium },
    PhaseSpec { name: "Seed Treatment & Sowing", category: Planting, duration_days: 7, priority: Critical },
    PhaseSpec { name: "Germination & Thinning", category: Growth, duration_days: 20, priority: High },
    PhaseSpec { name: "Vegetative Growth Management", category: Growth, duration_days: 45, priority: Medium },
    PhaseSpec { name: "Flowering & Boll Formation", category: Flowering, duration_days: 50, priority: High },
    PhaseSpec { name: "Boll Development", category: Development, duration_days: 35, priority: Medium },
    PhaseSpec { name: "Maturation & Picking", category: Harvest, duration_days: 30, priority: Critical },
];

static SOYABEAN: [PhaseSpec; 7] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 8, priority: High },
    PhaseSpec { name: "Seed Treatment & Sowing", category: Planting, duration_days: 5, priority: Critical },
    PhaseSpec { name: "Germination & Early Growth", category: Growth, duration_days: 15, priority: High },
    PhaseSpec { name: "Vegetative Growth", category: Growth, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Flowering & Pod Formation", category: Flowering, duration_days: 25, priority: High },
    PhaseSpec { name: "Pod Filling", category: Development, duration_days: 20, priority: Medium },
    PhaseSpec { name: "Maturation & Harvesting", category: Harvest, duration_days: 12, priority: Critical },
];

static RICE: [PhaseSpec; 8] = [
    PhaseSpec { name: "Nursery Preparation", category: Preparation, duration_days: 10, priority: High },
    PhaseSpec { name: "Field Preparation & Puddling", category: Preparation, duration_days: 12, priority: High },
    PhaseSpec { name: "Transplanting", category: Planting, duration_days: 3, priority: Critical },
    PhaseSpec { name: "Establishment Phase", category: Growth, duration_days: 15, priority: High },
    PhaseSpec { name: "Tillering Stage", category: Growth, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Panicle Initiation", category: Flowering, duration_days: 25, priority: High },
    PhaseSpec { name: "Grain Filling", category: Development, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Maturity & Harvesting", category: Harvest, duration_days: 15, priority: Critical },
];

static JOWAR: [PhaseSpec; 6] = [
    PhaseSpec { name: "Land Preparation", category: Preparation, duration_days: 8, priority: High },
    PhaseSpec { name: "Sowing & Germination", category: Planting, duration_days: 10, priority: Critical },
    PhaseSpec { name: "Vegetative Growth", category: Growth, duration_days: 35, priority: Medium },
    PhaseSpec { name: "Flowering Stage", category: Flowering, duration_days: 20, priority: High },
    PhaseSpec { name: "Grain Filling", category: Development, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Maturity & Harvesting", category: Harvest, duration_days: 12, priority: Critical },
];

static TUR: [PhaseSpec; 7] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 10, priority: High },
    PhaseSpec { name: "Seed Treatment & Sowing", category: Planting, duration_days: 7, priority: Critical },
    PhaseSpec { name: "Germination & Early Growth", category: Growth, duration_days: 20, priority: High },
    PhaseSpec { name: "Vegetative Growth", category: Growth, duration_days: 50, priority: Medium },
    PhaseSpec { name: "Flowering & Pod Development", category: Flowering, duration_days: 40, priority: High },
    PhaseSpec { name: "Pod Maturation", category: Development, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Harvesting", category: Harvest, duration_days: 15, priority: Critical },
];

static WHEAT: [PhaseSpec; 8] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 10, priority: High },
    PhaseSpec { name: "Seed Treatment & Sowing", category: Planting, duration_days: 5, priority: Critical },
    PhaseSpec { name: "Germination", category: Growth, duration_days: 15, priority: High },
    PhaseSpec { name: "Tillering Phase", category: Growth, duration_days: 40, priority: Medium },
    PhaseSpec { name: "Jointing & Booting", category: Growth, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Flowering & Grain Formation", category: Flowering, duration_days: 25, priority: High },
    PhaseSpec { name: "Grain Filling & Maturity", category: Development, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Harvesting", category: Harvest, duration_days: 10, priority: Critical },
];

static GROUNDNUT: [PhaseSpec; 7] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 8, priority: High },
    PhaseSpec { name: "Seed Treatment & Sowing", category: Planting, duration_days: 5, priority: Critical },
    PhaseSpec { name: "Germination & Early Growth", category: Growth, duration_days: 15, priority: High },
    PhaseSpec { name: "Pegging & Penetration", category: Growth, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Pod Development", category: Development, duration_days: 35, priority: High },
    PhaseSpec { name: "Pod Filling & Maturation", category: Development, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Harvesting & Drying", category: Harvest, duration_days: 12, priority: Critical },
];

static ONION: [PhaseSpec; 7] = [
    PhaseSpec { name: "Nursery Preparation", category: Preparation, duration_days: 15, priority: High },
    PhaseSpec { name: "Nursery Management", category: Management, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Transplanting", category: Planting, duration_days: 7, priority: Critical },
    PhaseSpec { name: "Establishment Phase", category: Growth, duration_days: 20, priority: High },
    PhaseSpec { name: "Bulb Initiation", category: Growth, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Bulb Development", category: Development, duration_days: 40, priority: High },
    PhaseSpec { name: "Maturation & Harvesting", category: Harvest, duration_days: 15, priority: Critical },
];

static TOMATO: [PhaseSpec; 7] = [
    PhaseSpec { name: "Nursery Preparation", category: Preparation, duration_days: 10, priority: High },
    PhaseSpec { name: "Nursery Management", category: Management, duration_days: 20, priority: Medium },
    PhaseSpec { name: "Transplanting", category: Planting, duration_days: 5, priority: Critical },
    PhaseSpec { name: "Establishment & Growth", category: Growth, duration_days: 25, priority: High },
    PhaseSpec { name: "Flowering & Fruit Setting", category: Flowering, duration_days: 30, priority: High },
    PhaseSpec { name: "Fruit Development", category: Development, duration_days: 35, priority: Medium },
    PhaseSpec { name: "Harvesting (Multiple Picks)", category: Harvest, duration_days: 30, priority: Critical },
];

static POTATO: [PhaseSpec; 7] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 10, priority: High },
    PhaseSpec { name: "Seed Treatment & Planting", category: Planting, duration_days: 7, priority: Critical },
    PhaseSpec { name: "Germination & Emergence", category: Growth, duration_days: 15, priority: High },
    PhaseSpec { name: "Vegetative Growth", category: Growth, duration_days: 30, priority: Medium },
    PhaseSpec { name: "Tuber Initiation", category: Development, duration_days: 20, priority: High },
    PhaseSpec { name: "Tuber Bulking", category: Development, duration_days: 35, priority: Medium },
    PhaseSpec { name: "Maturation & Harvesting", category: Harvest, duration_days: 15, priority: Critical },
];

static GARLIC: [PhaseSpec; 7] = [
    PhaseSpec { name: "Field Preparation", category: Preparation, duration_days: 8, priority: High },
    PhaseSpec { name: "Clove Planting", category: Planting, duration_days: 5, priority: Critical },
    PhaseSpec { name: "Germination & Early Growth", category: Growth, duration_days: 20, priority: High },
    PhaseSpec { name: "Vegetative Growth", category: Growth, duration_days: 40, priority: Medium },
    PhaseSpec { name: "Bulb Formation", category: Development, duration_days: 45, priority: High },
    PhaseSpec { name: "Bulb Maturation", category: Development, duration_days: 25, priority: Medium },
    PhaseSpec { name: "Harvesting & Curing", category: Harvest, duration_days: 15, priority: Critical },
];

/// Baseline phase sequence for a crop, in planting order
pub fn template(crop: Crop) -> &'static [PhaseSpec] {
    match crop {
        Crop::Sugarcane => &SUGARCANE,
        Crop::Cotton => &COTTON,
        Crop::Soyabean => &SOYABEAN,
        Crop::Rice => &RICE,
        Crop::Jowar => &JOWAR,
        Crop::Tur => &TUR,
        Crop::Wheat => &WHEAT,
        Crop::Groundnut => &GROUNDNUT,
        Crop::Onion => &ONION,
        Crop::Tomato => &TOMATO,
        Crop::Potato => &POTATO,
        Crop::Garlic => &GARLIC,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_crop_has_a_template() {
        for crop in Crop::ALL {
            assert!(
                !template(crop).is_empty(),
                "{} has an empty phase template",
                crop.display_name()
            );
        }
    }

    #[test]
    fn test_template_phase_counts() {
        assert_eq!(template(Crop::Sugarcane).len(), 10);
        assert_eq!(template(Crop::Cotton).len(), 9);
        assert_eq!(template(Crop::Rice).len(), 8);
        assert_eq!(template(Crop::Wheat).len(), 8);
        assert_eq!(template(Crop::Jowar).len(), 6);
        for crop in [
            Crop::Soyabean,
            Crop::Tur,
            Crop::Groundnut,
            Crop::Onion,
            Crop::Tomato,
            Crop::Potato,
            Crop::Garlic,
        ] {
            assert_eq!(template(crop).len(), 7, "{}", crop.display_name());
        }
    }

    #[test]
    fn test_baseline_durations_cover_a_growing_season() {
        for crop in Crop::ALL {
            let total: u32 = template(crop).iter().map(|p| p.duration_days).sum();
            assert!(
                total >= 90,
                "{} template spans only {} days",
                crop.display_name(),
                total
            );
        }
        let sugarcane: u32 = template(Crop::Sugarcane).iter().map(|p| p.duration_days).sum();
        assert_eq!(sugarcane, 365);
    }

    #[test]
    fn test_templates_open_with_ground_work_and_close_with_harvest() {
        for crop in Crop::ALL {
            let phases = template(crop);
            let first = phases[0].category;
            assert!(
                first == PhaseCategory::Analysis || first == PhaseCategory::Preparation,
                "{} starts with {:?}",
                crop.display_name(),
                first
            );
            let last = phases[phases.len() - 1];
            assert_eq!(last.category, PhaseCategory::Harvest);
            assert_eq!(last.priority, Priority::Critical);
        }
    }

    #[test]
    fn test_every_phase_has_a_positive_duration() {
        for crop in Crop::ALL {
            for phase in template(crop) {
                assert!(phase.duration_days > 0, "{}: {}", crop.display_name(), phase.name);
            }
        }
    }

    #[test]
    fn test_priority_ordering_ranks_critical_highest() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
    }
}
