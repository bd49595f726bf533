//! Engine error type.
//!
//! Malformed input (mismatched array lengths, duplicate person ids) fails
//! fast with [`EngineError::InvalidScheduleData`]. Degenerate-but-well-formed
//! input (empty roster, empty scrape, zero people) is handled as data by the
//! services and never reaches this type.

/// Error raised by the availability engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The raw availability payload is structurally inconsistent.
    #[error("invalid schedule data: {reason}")]
    InvalidScheduleData { reason: String },
}

impl EngineError {
    /// Shorthand for the invalid-schedule-data variant.
    pub fn invalid(reason: impl Into<String>) -> Self {
        EngineError::InvalidScheduleData {
            reason: reason.into(),
        }
    }
}
