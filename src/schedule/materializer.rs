//! Schedule Materialization
//!
//! Single forward pass over an adjusted phase list: assign sequential ids,
//! start and end dates, and a dependency link to the previous phase. Each
//! phase ends `duration` days after it starts and the next phase begins the
//! following day, so the emitted schedule is contiguous with no overlaps.

use chrono::{Days, NaiveDate, Utc};
use serde::Serialize;

use crate::crops::Crop;
use crate::error::EngineError;
use crate::schedule::adjuster::{adjust, AdjustedPhase, AdjustmentSeverity};
use crate::schedule::registry::{PhaseCategory, Priority};
use crate::soil::SoilState;

/// One dated entry in the final schedule
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledPhase {
    /// Sequential position, starting at 1, counting injected phases
    pub id: u32,
    pub name: String,
    pub category: PhaseCategory,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_days: u32,
    pub priority: Priority,
    /// Id of the phase this one waits on; None for the opener
    pub depends_on: Option<u32>,
    pub notes: Vec<String>,
    pub description: String,
    pub injected: bool,
    pub severity: Option<AdjustmentSeverity>,
}

/// Complete soil-adapted schedule for one crop
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    pub crop: Crop,
    pub start_date: NaiveDate,
    pub phases: Vec<ScheduledPhase>,
    pub total_phases: usize,
    pub total_duration_days: u32,
    /// First-seen modification notes plus injected-phase instructions
    pub advisory_notes: Vec<String>,
}

/// Assign dates and dependency links to an adjusted phase list
pub fn materialize(
    crop: Crop,
    phases: Vec<AdjustedPhase>,
    start: NaiveDate,
) -> Result<Schedule, EngineError> {
    let mut scheduled = Vec::with_capacity(phases.len());
    let mut advisory_notes: Vec<String> = Vec::new();
    let mut cursor = start;
    let mut total_duration_days = 0u32;

    for (i, phase) in phases.into_iter().enumerate() {
        let id = (i + 1) as u32;
        let start_date = cursor;
        let end_date = start_date
            .checked_add_days(Days::new(u64::from(phase.duration_days)))
            .ok_or(EngineError::DateOutOfRange(start_date))?;
        cursor = end_date
            .checked_add_days(Days::new(1))
            .ok_or(EngineError::DateOutOfRange(end_date))?;
        total_duration_days += phase.duration_days;

        if phase.injected && !phase.description.is_empty() {
            advisory_notes.push(phase.description.clone());
        }
        for note in &phase.notes {
            if !advisory_notes.contains(note) {
                advisory_notes.push(note.clone());
            }
        }

        scheduled.push(ScheduledPhase {
            id,
            name: phase.name,
            category: phase.category,
            start_date,
            end_date,
            duration_days: phase.duration_days,
            priority: phase.priority,
            depends_on: (i > 0).then_some(id - 1),
            notes: phase.notes,
            description: phase.description,
            injected: phase.injected,
            severity: phase.severity,
        });
    }

    Ok(Schedule {
        crop,
        start_date: start,
        total_phases: scheduled.len(),
        total_duration_days,
        phases: scheduled,
        advisory_notes,
    })
}

/// Adjust `crop`'s template for `state` and date it from `start`
/// (today when unspecified)
pub fn generate_schedule(
    crop: Crop,
    state: &SoilState,
    start: Option<NaiveDate>,
) -> Result<Schedule, EngineError> {
    let start = start.unwrap_or_else(|| Utc::now().date_naive());
    materialize(crop, adjust(crop, state), start)
}
