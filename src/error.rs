//! Engine Error Types
//!
//! Typed errors surfaced to callers. Degraded input (missing attributes,
//! unrecognized descriptive values) is never an error; name lookups that
//! cannot resolve are.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The crop name did not match any of the twelve supported crops.
    /// Raised at the parse boundary; nothing downstream substitutes a
    /// default crop for an unrecognized name.
    #[error("Unknown crop: {0}")]
    UnknownCrop(String),

    /// The soil texture key did not match any catalog entry.
    #[error("Unknown soil type: {0}")]
    UnknownSoilType(String),

    /// Date arithmetic walked past the representable calendar range.
    #[error("Schedule date out of range after {0}")]
    DateOutOfRange(NaiveDate),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_crop_message_names_the_input() {
        let err = EngineError::UnknownCrop("quinoa".to_string());
        assert_eq!(err.to_string(), "Unknown crop: quinoa");
    }
}
