//! Suitability Evaluation
//!
//! Counts satisfied rule conditions per crop and converts the count to a
//! three-tier verdict. Pure over the normalized state: same input, same
//! report, no side effects.

use serde::{Deserialize, Serialize};

use super::rules::{rule_for, RULES};
use crate::crops::Crop;
use crate::soil::SoilState;

/// Three-tier verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suitability {
    #[serde(rename = "Highly Suitable")]
    HighlySuitable,
    #[serde(rename = "Moderately Suitable")]
    ModeratelySuitable,
    #[serde(rename = "Not Suitable")]
    NotSuitable,
}

impl Suitability {
    pub fn display_text(&self) -> &'static str {
        match self {
            Suitability::HighlySuitable => "Highly Suitable",
            Suitability::ModeratelySuitable => "Moderately Suitable",
            Suitability::NotSuitable => "Not Suitable",
        }
    }
}

/// Verdict for one crop, with the satisfied-condition tally behind it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropEvaluation {
    pub crop: Crop,
    pub suitability: Suitability,
    /// Conditions that held
    pub satisfied: u8,
    /// Conditions tested
    pub total: u8,
}

/// Tier counts across all crops
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilitySummary {
    pub highly_suitable: usize,
    pub moderately_suitable: usize,
    pub not_suitable: usize,
    pub total: usize,
}

/// Full evaluation report: per-crop verdicts plus tier groupings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityReport {
    /// One entry per crop, in `Crop::ALL` order
    pub evaluations: Vec<CropEvaluation>,
    pub highly_suitable: Vec<Crop>,
    pub moderately_suitable: Vec<Crop>,
    pub not_suitable: Vec<Crop>,
    pub summary: SuitabilitySummary,
}

impl SuitabilityReport {
    pub fn verdict(&self, crop: Crop) -> Suitability {
        self.evaluations[crop as usize].suitability
    }
}

/// Evaluate one crop against the normalized state
pub fn evaluate_crop(crop: Crop, state: &SoilState) -> CropEvaluation {
    let rule = rule_for(crop);
    let satisfied = rule.conditions.iter().filter(|c| c.holds(state)).count() as u8;

    let suitability = if satisfied >= rule.highly_min {
        Suitability::HighlySuitable
    } else if satisfied >= rule.moderately_min {
        Suitability::ModeratelySuitable
    } else {
        Suitability::NotSuitable
    };

    CropEvaluation {
        crop,
        suitability,
        satisfied,
        total: rule.conditions.len() as u8,
    }
}

/// Evaluate every crop and group the verdicts by tier
pub fn evaluate_all(state: &SoilState) -> SuitabilityReport {
    let evaluations: Vec<CropEvaluation> = RULES
        .iter()
        .map(|rule| evaluate_crop(rule.crop, state))
        .collect();

    let mut highly_suitable = Vec::new();
    let mut moderately_suitable = Vec::new();
    let mut not_suitable = Vec::new();
    for eval in &evaluations {
        match eval.suitability {
            Suitability::HighlySuitable => highly_suitable.push(eval.crop),
            Suitability::ModeratelySuitable => moderately_suitable.push(eval.crop),
            Suitability::NotSuitable => not_suitable.push(eval.crop),
        }
    }

    let summary = SuitabilitySummary {
        highly_suitable: highly_suitable.len(),
        moderately_suitable: moderately_suitable.len(),
        not_suitable: not_suitable.len(),
        total: evaluations.len(),
    };

    SuitabilityReport {
        evaluations,
        highly_suitable,
        moderately_suitable,
        not_suitable,
        summary,
    }
}
