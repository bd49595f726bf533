//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST API.
//! The report types are re-exported from the api module since they already
//! derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{
    AvailabilityReport, AvailabilityStats, ContinuousBlock, Person, PersonId, RawAvailability,
    ReconciliationEntry, Slot,
};

/// Request body for running a full analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw availability payload as extracted from the scheduling page.
    /// Accepts either snake_case fields or the page's original array names
    /// (`TimeOfSlot`, `AvailableAtSlot`, `PeopleNames`, `PeopleIDs`).
    pub availability: serde_json::Value,
    /// Roster of expected participant names, one entry per person.
    #[serde(default)]
    pub user_names: Vec<String>,
    /// Primary block-search threshold override, 0-100 (optional)
    #[serde(default)]
    pub min_block_percentage: Option<f64>,
}

/// Request body for a reconciliation-only call, for callers that already
/// hold the scraped name list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileRequest {
    /// Roster of expected participant names
    pub user_names: Vec<String>,
    /// Participant names scraped from the scheduling page
    pub scraped_names: Vec<String>,
}

/// Response for a reconciliation-only call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReconcileResponse {
    /// Matched and unmatched pairings
    pub entries: Vec<ReconciliationEntry>,
    /// Roster names with no scraped counterpart
    pub missing_names: Vec<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}
