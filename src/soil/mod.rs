//! Soil Data Layer
//!
//! Vocabulary, intake, and normalization for categorical soil/climate
//! readings. Flow: `SoilReading` (descriptive text) → `normalize` →
//! `SoilState` (canonical levels), after which the suitability and
//! scheduling layers only ever see enums.

pub mod level;
pub mod normalizer;
pub mod state;

pub use level::{Level, SoilAttribute};
pub use normalizer::{attribute_options, normalize, normalize_value};
pub use state::{AttrMap, SoilReading, SoilState, SoilValue};
