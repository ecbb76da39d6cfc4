//! Display Timeline Catalog
//!
//! Longer-form growth timelines for read-only presentation: cumulative
//! phase offsets from a planting date, an intensity band per phase, and
//! per-stage water requirements. This family is separate data from the
//! scheduling templates in the registry and is never soil-adjusted;
//! consecutive phases abut with no rest day between them.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::advisory::{DrainageClass, SoilTexture, WaterRetention};
use crate::crops::Crop;
use crate::error::EngineError;

/// Visual emphasis band for a display phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayBand {
    Treatment,
    Critical,
    High,
    Normal,
}

/// Relative water demand of a growth stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    High,
    Medium,
    Low,
}

/// One phase of the display timeline, offset from the planting date
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayPhaseSpec {
    pub name: &'static str,
    pub duration_days: u32,
    pub band: DisplayBand,
    /// Days after the planting date this phase begins
    pub offset_days: u32,
}

/// Water needed across one named growth stage
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaterStage {
    pub stage: &'static str,
    pub requirement_mm: &'static str,
    pub intensity: Intensity,
}

/// Season-total and per-stage water demand for a crop
#[derive(Debug, Clone, Copy, Serialize)]
pub struct WaterProfile {
    pub total_requirement_mm: &'static str,
    pub stages: &'static [WaterStage],
}

/// Full display timeline for one crop
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DisplayTimelineSpec {
    pub crop: Crop,
    /// Nominal cycle length; the final phase may run a few days past it
    pub total_days: u32,
    pub phases: &'static [DisplayPhaseSpec],
    pub water: WaterProfile,
}

use DisplayBand::{Critical, High, Normal, Treatment};

static SUGARCANE: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Sugarcane,
    total_days: 365,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 15, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Planting", duration_days: 10, band: Critical, offset_days: 15 },
        DisplayPhaseSpec { name: "Germination", duration_days: 30, band: Critical, offset_days: 25 },
        DisplayPhaseSpec { name: "Tillering", duration_days: 60, band: High, offset_days: 55 },
        DisplayPhaseSpec { name: "Grand Growth", duration_days: 90, band: High, offset_days: 115 },
        DisplayPhaseSpec { name: "Maturation", duration_days: 90, band: Normal, offset_days: 205 },
        DisplayPhaseSpec { name: "Ripening", duration_days: 60, band: Normal, offset_days: 295 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 10, band: Critical, offset_days: 355 },
    ],
    water: WaterProfile {
        total_requirement_mm: "2000-2500 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "300-400 mm", intensity: Intensity::High },
            WaterStage { stage: "Tillering", requirement_mm: "400-500 mm", intensity: Intensity::High },
            WaterStage { stage: "Grand Growth", requirement_mm: "700-900 mm", intensity: Intensity::High },
            WaterStage { stage: "Maturation", requirement_mm: "400-500 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Ripening", requirement_mm: "200-300 mm", intensity: Intensity::Low },
        ],
    },
};

static COTTON: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Cotton,
    total_days: 180,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Germination", duration_days: 15, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 50, band: High, offset_days: 32 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 45, band: Critical, offset_days: 82 },
        DisplayPhaseSpec { name: "Boll Development", duration_days: 40, band: High, offset_days: 127 },
        DisplayPhaseSpec { name: "Boll Opening", duration_days: 18, band: Normal, offset_days: 167 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 15, band: Critical, offset_days: 185 },
    ],
    water: WaterProfile {
        total_requirement_mm: "700-1300 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "200-300 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "250-400 mm", intensity: Intensity::High },
            WaterStage { stage: "Boll Development", requirement_mm: "150-300 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Boll Opening", requirement_mm: "50-100 mm", intensity: Intensity::Low },
        ],
    },
};

static SOYABEAN: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Soyabean,
    total_days: 120,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 7, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 5, band: Critical, offset_days: 7 },
        DisplayPhaseSpec { name: "Germination", duration_days: 10, band: Critical, offset_days: 12 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 35, band: High, offset_days: 22 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 20, band: Critical, offset_days: 57 },
        DisplayPhaseSpec { name: "Pod Formation", duration_days: 25, band: High, offset_days: 77 },
        DisplayPhaseSpec { name: "Pod Filling", duration_days: 18, band: Normal, offset_days: 102 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 120 },
    ],
    water: WaterProfile {
        total_requirement_mm: "450-700 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "50-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Pod Formation", requirement_mm: "100-150 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Pod Filling", requirement_mm: "50-120 mm", intensity: Intensity::Medium },
        ],
    },
};

static RICE: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Rice,
    total_days: 140,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation & Puddling", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Transplanting", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Tillering", duration_days: 30, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Stem Elongation", duration_days: 20, band: High, offset_days: 47 },
        DisplayPhaseSpec { name: "Panicle Initiation", duration_days: 15, band: Critical, offset_days: 67 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 15, band: Critical, offset_days: 82 },
        DisplayPhaseSpec { name: "Grain Filling", duration_days: 30, band: High, offset_days: 97 },
        DisplayPhaseSpec { name: "Ripening", duration_days: 13, band: Normal, offset_days: 127 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 140 },
    ],
    water: WaterProfile {
        total_requirement_mm: "1200-1500 mm",
        stages: &[
            WaterStage { stage: "Land Preparation", requirement_mm: "200-250 mm", intensity: Intensity::High },
            WaterStage { stage: "Tillering", requirement_mm: "300-400 mm", intensity: Intensity::High },
            WaterStage { stage: "Panicle Initiation", requirement_mm: "200-250 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "250-300 mm", intensity: Intensity::High },
            WaterStage { stage: "Grain Filling", requirement_mm: "200-250 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Ripening", requirement_mm: "50-100 mm", intensity: Intensity::Low },
        ],
    },
};

static JOWAR: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Jowar,
    total_days: 120,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 7, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 5, band: Critical, offset_days: 7 },
        DisplayPhaseSpec { name: "Germination", duration_days: 10, band: Critical, offset_days: 12 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 40, band: High, offset_days: 22 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 20, band: Critical, offset_days: 62 },
        DisplayPhaseSpec { name: "Grain Filling", duration_days: 28, band: High, offset_days: 82 },
        DisplayPhaseSpec { name: "Maturity", duration_days: 10, band: Normal, offset_days: 110 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 120 },
    ],
    water: WaterProfile {
        total_requirement_mm: "400-600 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "50-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Grain Filling", requirement_mm: "80-120 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Maturity", requirement_mm: "20-50 mm", intensity: Intensity::Low },
        ],
    },
};

static TUR: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Tur,
    total_days: 180,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Germination", duration_days: 12, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 50, band: High, offset_days: 29 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 30, band: Critical, offset_days: 79 },
        DisplayPhaseSpec { name: "Pod Formation", duration_days: 35, band: High, offset_days: 109 },
        DisplayPhaseSpec { name: "Pod Filling", duration_days: 28, band: Normal, offset_days: 144 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 8, band: Critical, offset_days: 172 },
    ],
    water: WaterProfile {
        total_requirement_mm: "500-800 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "60-100 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "150-250 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Pod Formation", requirement_mm: "100-150 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Pod Filling", requirement_mm: "40-100 mm", intensity: Intensity::Low },
        ],
    },
};

static WHEAT: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Wheat,
    total_days: 140,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Germination", duration_days: 12, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Tillering", duration_days: 30, band: High, offset_days: 29 },
        DisplayPhaseSpec { name: "Jointing", duration_days: 20, band: High, offset_days: 59 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 15, band: Critical, offset_days: 79 },
        DisplayPhaseSpec { name: "Grain Filling", duration_days: 30, band: High, offset_days: 94 },
        DisplayPhaseSpec { name: "Ripening", duration_days: 14, band: Normal, offset_days: 124 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 138 },
    ],
    water: WaterProfile {
        total_requirement_mm: "450-650 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "60-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Tillering", requirement_mm: "120-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Jointing", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "80-120 mm", intensity: Intensity::High },
            WaterStage { stage: "Grain Filling", requirement_mm: "70-100 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Ripening", requirement_mm: "20-50 mm", intensity: Intensity::Low },
        ],
    },
};

static GROUNDNUT: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Groundnut,
    total_days: 120,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 7, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Sowing", duration_days: 5, band: Critical, offset_days: 7 },
        DisplayPhaseSpec { name: "Germination", duration_days: 10, band: Critical, offset_days: 12 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 35, band: High, offset_days: 22 },
        DisplayPhaseSpec { name: "Flowering & Pegging", duration_days: 25, band: Critical, offset_days: 57 },
        DisplayPhaseSpec { name: "Pod Development", duration_days: 30, band: High, offset_days: 82 },
        DisplayPhaseSpec { name: "Maturation", duration_days: 13, band: Normal, offset_days: 112 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 125 },
    ],
    water: WaterProfile {
        total_requirement_mm: "500-700 mm",
        stages: &[
            WaterStage { stage: "Germination", requirement_mm: "50-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering & Pegging", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Pod Development", requirement_mm: "120-170 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Maturation", requirement_mm: "30-50 mm", intensity: Intensity::Low },
        ],
    },
};

static ONION: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Onion,
    total_days: 140,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Nursery/Transplanting", duration_days: 15, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Establishment", duration_days: 20, band: Critical, offset_days: 25 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 40, band: High, offset_days: 45 },
        DisplayPhaseSpec { name: "Bulb Formation", duration_days: 35, band: Critical, offset_days: 85 },
        DisplayPhaseSpec { name: "Bulb Enlargement", duration_days: 20, band: High, offset_days: 120 },
        DisplayPhaseSpec { name: "Maturation", duration_days: 10, band: Normal, offset_days: 140 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 150 },
    ],
    water: WaterProfile {
        total_requirement_mm: "350-550 mm",
        stages: &[
            WaterStage { stage: "Establishment", requirement_mm: "60-100 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "120-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Bulb Formation", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Bulb Enlargement", requirement_mm: "60-100 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Maturation", requirement_mm: "10-50 mm", intensity: Intensity::Low },
        ],
    },
};

static TOMATO: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Tomato,
    total_days: 120,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Nursery/Transplanting", duration_days: 15, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Establishment", duration_days: 15, band: Critical, offset_days: 25 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 25, band: High, offset_days: 40 },
        DisplayPhaseSpec { name: "Flowering", duration_days: 20, band: Critical, offset_days: 65 },
        DisplayPhaseSpec { name: "Fruit Setting", duration_days: 15, band: High, offset_days: 85 },
        DisplayPhaseSpec { name: "Fruit Development", duration_days: 25, band: High, offset_days: 100 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 20, band: Normal, offset_days: 125 },
    ],
    water: WaterProfile {
        total_requirement_mm: "400-600 mm",
        stages: &[
            WaterStage { stage: "Establishment", requirement_mm: "60-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Flowering", requirement_mm: "80-120 mm", intensity: Intensity::High },
            WaterStage { stage: "Fruit Setting", requirement_mm: "70-100 mm", intensity: Intensity::High },
            WaterStage { stage: "Fruit Development", requirement_mm: "80-120 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Harvesting", requirement_mm: "10-30 mm", intensity: Intensity::Low },
        ],
    },
};

static POTATO: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Potato,
    total_days: 120,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Planting", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Sprouting", duration_days: 15, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 30, band: High, offset_days: 32 },
        DisplayPhaseSpec { name: "Tuber Initiation", duration_days: 20, band: Critical, offset_days: 62 },
        DisplayPhaseSpec { name: "Tuber Bulking", duration_days: 30, band: High, offset_days: 82 },
        DisplayPhaseSpec { name: "Maturation", duration_days: 18, band: Normal, offset_days: 112 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 130 },
    ],
    water: WaterProfile {
        total_requirement_mm: "500-700 mm",
        stages: &[
            WaterStage { stage: "Sprouting", requirement_mm: "60-80 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "120-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Tuber Initiation", requirement_mm: "100-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Tuber Bulking", requirement_mm: "150-200 mm", intensity: Intensity::High },
            WaterStage { stage: "Maturation", requirement_mm: "70-120 mm", intensity: Intensity::Medium },
        ],
    },
};

static GARLIC: DisplayTimelineSpec = DisplayTimelineSpec {
    crop: Crop::Garlic,
    total_days: 150,
    phases: &[
        DisplayPhaseSpec { name: "Land Preparation", duration_days: 10, band: Treatment, offset_days: 0 },
        DisplayPhaseSpec { name: "Planting", duration_days: 7, band: Critical, offset_days: 10 },
        DisplayPhaseSpec { name: "Sprouting", duration_days: 15, band: Critical, offset_days: 17 },
        DisplayPhaseSpec { name: "Vegetative Growth", duration_days: 50, band: High, offset_days: 32 },
        DisplayPhaseSpec { name: "Bulb Formation", duration_days: 40, band: Critical, offset_days: 82 },
        DisplayPhaseSpec { name: "Bulb Enlargement", duration_days: 25, band: High, offset_days: 122 },
        DisplayPhaseSpec { name: "Maturation", duration_days: 13, band: Normal, offset_days: 147 },
        DisplayPhaseSpec { name: "Harvesting", duration_days: 5, band: Critical, offset_days: 160 },
    ],
    water: WaterProfile {
        total_requirement_mm: "350-450 mm",
        stages: &[
            WaterStage { stage: "Sprouting", requirement_mm: "40-60 mm", intensity: Intensity::High },
            WaterStage { stage: "Vegetative Growth", requirement_mm: "120-150 mm", intensity: Intensity::High },
            WaterStage { stage: "Bulb Formation", requirement_mm: "100-130 mm", intensity: Intensity::High },
            WaterStage { stage: "Bulb Enlargement", requirement_mm: "60-80 mm", intensity: Intensity::Medium },
            WaterStage { stage: "Maturation", requirement_mm: "30-50 mm", intensity: Intensity::Low },
        ],
    },
};

/// Display timeline for a crop
pub fn display_timeline(crop: Crop) -> &'static DisplayTimelineSpec {
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

/// Water demand data for a crop
pub fn water_profile(crop: Crop) -> &'static WaterProfile {
    &display_timeline(crop).water
}

// ============================================================================
// Materialized display timeline
// ============================================================================

/// A display phase pinned to calendar dates
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPhase {
    pub id: String,
    pub name: String,
    pub band: DisplayBand,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub depends_on: Option<String>,
}

/// Pin a crop's display timeline to a planting date.
/// Phases abut directly; each starts the day the previous one ends.
pub fn materialize_display(
    crop: Crop,
    start: NaiveDate,
) -> Result<Vec<DisplayPhase>, EngineError> {
    let spec = display_timeline(crop);
    let mut phases = Vec::with_capacity(spec.phases.len());
    for (i, phase) in spec.phases.iter().enumerate() {
        let start_date = start
            .checked_add_days(Days::new(u64::from(phase.offset_days)))
            .ok_or(EngineError::DateOutOfRange(start))?;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(phase.duration_days)))
            .ok_or(EngineError::DateOutOfRange(start_date))?;
        phases.push(DisplayPhase {
            id: format!("phase_{}", i + 1),
            name: phase.name.to_string(),
            band: phase.band,
            start_date,
            end_date,
            duration_days: phase.duration_days,
            depends_on: (i > 0).then(|| format!("phase_{i}")),
        });
    }
    Ok(phases)
}

// ============================================================================
// Irrigation guidance
// ============================================================================

/// Watering tips combining the crop's habit with the soil's texture
pub fn irrigation_tips(crop: Crop, texture: SoilTexture) -> Vec<String> {
    let mut tips = vec![
        format!(
            "Soil type: {} - {} water retention",
            texture.display_name(),
            texture.water_retention().as_str()
        ),
        "Water early morning or late evening to reduce evaporation".to_string(),
        "Monitor soil moisture regularly - avoid both overwatering and drought stress".to_string(),
    ];

    if texture.drainage() == DrainageClass::Poor {
        tips.push(
            "Avoid overwatering - ensure proper drainage to prevent waterlogging".to_string(),
        );
    } else if matches!(
        texture.water_retention(),
        WaterRetention::Low | WaterRetention::VeryLow
    ) {
        tips.push("Increase irrigation frequency due to low water retention".to_string());
        tips.push("Consider drip irrigation for water efficiency".to_string());
    }

    match crop {
        Crop::Rice => {
            tips.push(
                "Maintain standing water during vegetative and reproductive stages".to_string(),
            );
        }
        Crop::Tomato | Crop::Potato | Crop::Onion => {
            tips.push("Use drip or furrow irrigation for efficient water use".to_string());
        }
        _ => {}
    }

    tips.push("Apply mulch to conserve soil moisture".to_string());
    tips.push("Adjust watering based on rainfall and weather conditions".to_string());
    tips
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_crop_has_a_display_timeline() {
        for crop in Crop::ALL {
            let spec = display_timeline(crop);
            assert_eq!(spec.crop, crop);
            assert!(!spec.phases.is_empty());
            assert!(!spec.water.stages.is_empty());
            assert!(
                (120..=365).contains(&spec.total_days),
                "{} nominal cycle {} days",
                crop.display_name(),
                spec.total_days
            );
        }
    }

    #[test]
    fn test_offsets_are_cumulative_with_no_gaps() {
        for crop in Crop::ALL {
            let spec = display_timeline(crop);
            for pair in spec.phases.windows(2) {
                assert_eq!(
                    pair[1].offset_days,
                    pair[0].offset_days + pair[0].duration_days,
                    "{}: {} does not pick up where {} ends",
                    crop.display_name(),
                    pair[1].name,
                    pair[0].name
                );
            }
        }
    }

    #[test]
    fn test_materialized_phases_abut_exactly() {
        let phases = materialize_display(Crop::Cotton, date(2025, 6, 1)).unwrap();
        assert_eq!(phases[0].start_date, date(2025, 6, 1));
        for pair in phases.windows(2) {
            assert_eq!(
                pair[1].start_date, pair[0].end_date,
                "{} and {}",
                pair[0].name, pair[1].name
            );
        }
    }

    #[test]
    fn test_display_ids_and_dependencies() {
        let phases = materialize_display(Crop::Wheat, date(2025, 11, 1)).unwrap();
        assert_eq!(phases[0].id, "phase_1");
        assert_eq!(phases[0].depends_on, None);
        assert_eq!(phases[3].id, "phase_4");
        assert_eq!(phases[3].depends_on, Some("phase_3".to_string()));
    }

    #[test]
    fn test_timelines_open_with_land_preparation() {
        for crop in Crop::ALL {
            let spec = display_timeline(crop);
            assert_eq!(spec.phases[0].band, DisplayBand::Treatment);
            assert_eq!(spec.phases[0].offset_days, 0);
            assert!(spec.phases[0].name.starts_with("Land Preparation"));
        }
    }

    #[test]
    fn test_water_profile_matches_timeline() {
        let profile = water_profile(Crop::Sugarcane);
        assert_eq!(profile.total_requirement_mm, "2000-2500 mm");
        assert_eq!(profile.stages.len(), 5);
        assert_eq!(profile.stages[2].stage, "Grand Growth");
        assert_eq!(profile.stages[2].intensity, Intensity::High);
    }

    #[test]
    fn test_rice_tips_include_standing_water() {
        let tips = irrigation_tips(Crop::Rice, SoilTexture::ClayeyMoist);
        assert!(tips
            .iter()
            .any(|t| t.contains("standing water during vegetative")));
        // Clay drains poorly, so the overwatering warning comes first
        assert!(tips
            .iter()
            .any(|t| t.starts_with("Avoid overwatering")));
    }

    #[test]
    fn test_sandy_soil_tips_push_drip_irrigation() {
        let tips = irrigation_tips(Crop::Wheat, SoilTexture::SandyDry);
        assert!(tips
            .iter()
            .any(|t| t == "Increase irrigation frequency due to low water retention"));
        assert!(tips
            .iter()
            .any(|t| t == "Consider drip irrigation for water efficiency"));
        assert_eq!(
            tips[0],
            "Soil type: Sandy Soil (Dry) - very_low water retention"
        );
    }

    #[test]
    fn test_tips_always_close_with_general_guidance() {
        let tips = irrigation_tips(Crop::Jowar, SoilTexture::Alluvial);
        let n = tips.len();
        assert_eq!(tips[n - 2], "Apply mulch to conserve soil moisture");
        assert_eq!(
            tips[n - 1],
            "Adjust watering based on rainfall and weather conditions"
        );
    }
}
