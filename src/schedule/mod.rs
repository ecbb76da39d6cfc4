//! Soil-Adapted Growth Scheduling
//!
//! Two timeline families. The scheduling family starts from the registry's
//! baseline templates, passes through the soil adjuster, and is dated by
//! the materializer with dependency links. The display family is a fixed
//! presentation catalog with water-requirement data, pinned to a date
//! without any soil awareness.

pub mod adjuster;
pub mod display;
pub mod materializer;
pub mod registry;

pub use adjuster::{adjust, AdjustedPhase, AdjustmentSeverity};
pub use display::{
    display_timeline, irrigation_tips, materialize_display, water_profile, DisplayBand,
    DisplayPhase, DisplayPhaseSpec, DisplayTimelineSpec, Intensity, WaterProfile, WaterStage,
};
pub use materializer::{generate_schedule, materialize, Schedule, ScheduledPhase};
pub use registry::{template, PhaseCategory, PhaseSpec, Priority};
