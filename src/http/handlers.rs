//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for the actual analysis.

use axum::{extract::State, Json};

use super::dto::{
    AnalyzeRequest, AvailabilityReport, HealthResponse, ReconcileRequest, ReconcileResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::config::EngineConfig;
use crate::models::parse_raw_availability_str;
use crate::services::{self, analyze};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running.
pub async fn health_check() -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
    }))
}

// =============================================================================
// Analysis
// =============================================================================

/// POST /v1/analyses
///
/// Run the full availability analysis over one raw scrape snapshot plus the
/// caller's roster. Malformed payloads yield 400; degenerate-but-well-formed
/// data (empty scrape, empty roster) yields an empty report.
pub async fn run_analysis(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> HandlerResult<AvailabilityReport> {
    // Re-serialize so the parser can apply its field aliases and validation.
    let availability_json = serde_json::to_string(&request.availability)
        .map_err(|e| AppError::BadRequest(format!("Invalid availability JSON: {}", e)))?;
    let raw = parse_raw_availability_str(&availability_json)
        .map_err(|e| AppError::BadRequest(format!("Invalid availability payload: {:#}", e)))?;

    let mut config = EngineConfig::clone(&state.config);
    if let Some(threshold) = request.min_block_percentage {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(AppError::BadRequest(
                "min_block_percentage must be between 0 and 100".to_string(),
            ));
        }
        config.min_block_percentage = threshold;
    }

    let user_names = request.user_names;
    // The block search is the CPU-heavy part; keep it off the async workers.
    let report = tokio::task::spawn_blocking(move || analyze(&raw, &user_names, &config))
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(report))
}

// =============================================================================
// Reconciliation
// =============================================================================

/// POST /v1/reconciliations
///
/// Reconcile a roster against an already-scraped name list, without any slot
/// analysis.
pub async fn run_reconciliation(
    State(_state): State<AppState>,
    Json(request): Json<ReconcileRequest>,
) -> HandlerResult<ReconcileResponse> {
    let entries = services::reconcile_names(&request.user_names, &request.scraped_names);
    let missing_names = services::missing_names(&entries);

    Ok(Json(ReconcileResponse {
        entries,
        missing_names,
    }))
}
