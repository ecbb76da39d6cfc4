//! Crop Advisor Engine
//!
//! Soil-adaptive crop suitability and growth scheduling.
//!
//! The pipeline runs leaf-first:
//! - `soil/`: descriptive survey intake and one-pass normalization to canonical levels
//! - `suitability/`: per-crop condition rules, three-tier verdicts, requirement profiles
//! - `schedule/`: phase templates, soil-adaptive adjustment, dated dependency-chained schedules
//! - `advisory`: soil texture catalog with cultivation advice
//! - `session`: injectable store for a session's last submitted reading
//!
//! Everything below the HTTP layer is pure and synchronous; a request's
//! derived state lives only as long as the request.

pub mod advisory;
pub mod crops;
pub mod error;
pub mod schedule;
pub mod session;
pub mod soil;
pub mod suitability;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
pub use crops::Crop;
pub use error::EngineError;
pub use schedule::{generate_schedule, Schedule, ScheduledPhase};
pub use session::{InMemoryReadingStore, ReadingStore, RequestContext};
pub use soil::{normalize, Level, SoilAttribute, SoilReading, SoilState};
pub use suitability::{evaluate_all, Suitability, SuitabilityReport};

use chrono::NaiveDate;

/// Normalize a descriptive reading and evaluate all supported crops
pub fn evaluate_suitability(reading: &SoilReading) -> SuitabilityReport {
    suitability::evaluate_all(&soil::normalize(reading))
}

/// Normalize a descriptive reading and build one crop's adapted schedule
pub fn schedule_from_reading(
    crop: Crop,
    reading: &SoilReading,
    start: Option<NaiveDate>,
) -> Result<Schedule, EngineError> {
    schedule::generate_schedule(crop, &soil::normalize(reading), start)
}
