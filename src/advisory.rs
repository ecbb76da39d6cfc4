//! Soil Texture Catalog and Cultivation Advice
//!
//! Field-texture classes a farmer can pick without a lab report, each with
//! coarse water-retention, drainage, and fertility ratings, plus the advice
//! builder that pairs a texture with a crop. This sits apart from the
//! survey-driven suitability pipeline; it needs no normalized reading.

use serde::{Deserialize, Serialize};

use crate::crops::Crop;
use crate::error::EngineError;

/// Field soil texture, keyed the way callers submit it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoilTexture {
    ClayeyMoist,
    ClayeyDry,
    SandyMoist,
    SandyDry,
    LoamyMoist,
    LoamyDry,
    BlackCotton,
    RedSoil,
    Alluvial,
    Laterite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterRetention {
    VeryLow,
    Low,
    Medium,
    High,
}

impl WaterRetention {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterRetention::VeryLow => "very_low",
            WaterRetention::Low => "low",
            WaterRetention::Medium => "medium",
            WaterRetention::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrainageClass {
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl DrainageClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DrainageClass::Poor => "poor",
            DrainageClass::Moderate => "moderate",
            DrainageClass::Good => "good",
            DrainageClass::Excellent => "excellent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FertilityClass {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl FertilityClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            FertilityClass::Low => "low",
            FertilityClass::Medium => "medium",
            FertilityClass::High => "high",
            FertilityClass::VeryHigh => "very_high",
        }
    }
}

impl SoilTexture {
    pub const ALL: [SoilTexture; 10] = [
        SoilTexture::ClayeyMoist,
        SoilTexture::ClayeyDry,
        SoilTexture::SandyMoist,
        SoilTexture::SandyDry,
        SoilTexture::LoamyMoist,
        SoilTexture::LoamyDry,
        SoilTexture::BlackCotton,
        SoilTexture::RedSoil,
        SoilTexture::Alluvial,
        SoilTexture::Laterite,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            SoilTexture::ClayeyMoist => "clayey_moist",
            SoilTexture::ClayeyDry => "clayey_dry",
            SoilTexture::SandyMoist => "sandy_moist",
            SoilTexture::SandyDry => "sandy_dry",
            SoilTexture::LoamyMoist => "loamy_moist",
            SoilTexture::LoamyDry => "loamy_dry",
            SoilTexture::BlackCotton => "black_cotton",
            SoilTexture::RedSoil => "red_soil",
            SoilTexture::Alluvial => "alluvial",
            SoilTexture::Laterite => "laterite",
        }
    }

    pub fn parse(key: &str) -> Result<SoilTexture, EngineError> {
        let wanted = key.trim();
        SoilTexture::ALL
            .iter()
            .copied()
            .find(|t| t.key() == wanted)
            .ok_or_else(|| EngineError::UnknownSoilType(key.to_string()))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SoilTexture::ClayeyMoist => "Clay Soil (Moist)",
            SoilTexture::ClayeyDry => "Clay Soil (Dry)",
            SoilTexture::SandyMoist => "Sandy Soil (Moist)",
            SoilTexture::SandyDry => "Sandy Soil (Dry)",
            SoilTexture::LoamyMoist => "Loamy Soil (Moist)",
            SoilTexture::LoamyDry => "Loamy Soil (Dry)",
            SoilTexture::BlackCotton => "Black Cotton Soil",
            SoilTexture::RedSoil => "Red Soil",
            SoilTexture::Alluvial => "Alluvial Soil",
            SoilTexture::Laterite => "Laterite Soil",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SoilTexture::ClayeyMoist => {
                "Dense soil that retains water well but can be difficult to work with."
            }
            SoilTexture::ClayeyDry => {
                "Dense soil that becomes hard when dry, requiring careful water management."
            }
            SoilTexture::SandyMoist => {
                "Light soil with excellent drainage but requires frequent watering."
            }
            SoilTexture::SandyDry => {
                "Very light soil that drains quickly and needs regular irrigation."
            }
            SoilTexture::LoamyMoist => {
                "Ideal balanced soil with good drainage and water retention."
            }
            SoilTexture::LoamyDry => {
                "Good balanced soil that needs regular watering during dry periods."
            }
            SoilTexture::BlackCotton => {
                "Highly fertile soil rich in clay, excellent for cotton and other crops."
            }
            SoilTexture::RedSoil => {
                "Common laterite soil with good drainage, needs fertilizer enrichment."
            }
            SoilTexture::Alluvial => {
                "Rich river deposited soil, highly fertile and productive."
            }
            SoilTexture::Laterite => {
                "Iron-rich red soil, suitable for specific crops with proper management."
            }
        }
    }

    pub fn water_retention(&self) -> WaterRetention {
        match self {
            SoilTexture::ClayeyMoist | SoilTexture::ClayeyDry | SoilTexture::BlackCotton => {
                WaterRetention::High
            }
            SoilTexture::LoamyMoist
            | SoilTexture::LoamyDry
            | SoilTexture::RedSoil
            | SoilTexture::Alluvial => WaterRetention::Medium,
            SoilTexture::SandyMoist | SoilTexture::Laterite => WaterRetention::Low,
            SoilTexture::SandyDry => WaterRetention::VeryLow,
        }
    }

    pub fn drainage(&self) -> DrainageClass {
        match self {
            SoilTexture::ClayeyMoist | SoilTexture::ClayeyDry => DrainageClass::Poor,
            SoilTexture::BlackCotton => DrainageClass::Moderate,
            SoilTexture::LoamyMoist
            | SoilTexture::LoamyDry
            | SoilTexture::RedSoil
            | SoilTexture::Alluvial
            | SoilTexture::Laterite => DrainageClass::Good,
            SoilTexture::SandyMoist | SoilTexture::SandyDry => DrainageClass::Excellent,
        }
    }

    pub fn fertility(&self) -> FertilityClass {
        match self {
            SoilTexture::SandyMoist | SoilTexture::SandyDry | SoilTexture::Laterite => {
                FertilityClass::Low
            }
            SoilTexture::ClayeyMoist | SoilTexture::ClayeyDry | SoilTexture::RedSoil => {
                FertilityClass::Medium
            }
            SoilTexture::LoamyMoist | SoilTexture::LoamyDry => FertilityClass::High,
            SoilTexture::BlackCotton | SoilTexture::Alluvial => FertilityClass::VeryHigh,
        }
    }
}

// ============================================================================
// Advice builder
// ============================================================================

/// Texture-and-crop cultivation advice
#[derive(Debug, Clone, Serialize)]
pub struct SoilAdvice {
    pub texture: SoilTexture,
    pub crop: Crop,
    pub description: &'static str,
    pub advantages: Vec<String>,
    pub challenges: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Crop-specific field practices, with a general fallback
fn crop_practices(crop: Crop) -> &'static [&'static str] {
    match crop {
        Crop::Sugarcane => &[
            "Apply organic manure before planting",
            "Ensure adequate spacing (90-120 cm) between rows",
            "Regular earthing up after 45-60 days",
        ],
        Crop::Cotton => &[
            "Deep plowing recommended for better root development",
            "Apply gypsum if soil pH is high",
            "Regular pest monitoring essential",
        ],
        Crop::Rice => &[
            "Maintain 2-5 cm standing water during vegetative stage",
            "Drain field 10 days before harvest",
            "Apply zinc if deficient",
        ],
        Crop::Wheat => &[
            "Sow within optimal temperature range (18-25°C)",
            "Apply nitrogen in 2-3 splits",
            "Monitor for rust diseases",
        ],
        Crop::Tomato => &[
            "Use raised beds for better drainage",
            "Stake or cage plants for support",
            "Monitor for early and late blight",
        ],
        Crop::Potato => &[
            "Ensure proper hilling for tuber protection",
            "Avoid waterlogging during tuber formation",
            "Store seed potatoes properly before planting",
        ],
        _ => &[
            "Apply balanced NPK fertilizers as per soil test",
            "Maintain proper field hygiene",
            "Follow recommended crop rotation",
        ],
    }
}

/// Build advice for growing `crop` on `texture` soil
pub fn soil_advice(texture: SoilTexture, crop: Crop) -> SoilAdvice {
    let mut advantages = Vec::new();
    if matches!(
        texture.fertility(),
        FertilityClass::High | FertilityClass::VeryHigh
    ) {
        advantages.push(format!(
            "High natural fertility - excellent for {}",
            crop.display_name()
        ));
    }
    if texture.water_retention() == WaterRetention::High {
        advantages.push("Good water retention reduces irrigation frequency".to_string());
    }
    if matches!(
        texture.drainage(),
        DrainageClass::Good | DrainageClass::Excellent
    ) {
        advantages.push("Good drainage prevents waterlogging".to_string());
    }

    let mut challenges = Vec::new();
    if texture.drainage() == DrainageClass::Poor {
        challenges.push(
            "Poor drainage may cause waterlogging - ensure proper field leveling".to_string(),
        );
    }
    if matches!(
        texture.water_retention(),
        WaterRetention::Low | WaterRetention::VeryLow
    ) {
        challenges.push("Low water retention requires frequent irrigation".to_string());
    }
    if texture.fertility() == FertilityClass::Low {
        challenges.push("Low fertility requires regular fertilizer application".to_string());
    }

    let mut recommendations: Vec<String> =
        crop_practices(crop).iter().map(|s| s.to_string()).collect();
    if texture.drainage() == DrainageClass::Poor {
        recommendations.push("Create drainage channels to prevent waterlogging".to_string());
    }
    if texture.fertility() == FertilityClass::Low {
        recommendations.push("Apply compost or farmyard manure regularly".to_string());
    }
    if texture.water_retention() == WaterRetention::VeryLow {
        recommendations.push("Use mulching to reduce water evaporation".to_string());
    }

    SoilAdvice {
        texture,
        crop,
        description: texture.description(),
        advantages,
        challenges,
        recommendations,
    }
}
