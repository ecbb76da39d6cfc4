//! Crop Suitability Assessment
//!
//! Condition rules, the verdict ladder, and per-crop requirement profiles.
//! `evaluate_all` turns a normalized soil state into a full 12-crop report;
//! `profile::analyze` adds the reading-specific outlook for a single crop.

pub mod evaluator;
pub mod profile;
pub mod rules;

pub use evaluator::{
    evaluate_all, evaluate_crop, CropEvaluation, SuitabilityReport, SuitabilitySummary,
    Suitability,
};
pub use profile::{analyze, profile_for, soil_score, CropAnalysis, CropProfile, Season};
pub use rules::{rule_for, Condition, CropRule, RULES};
