//! Axum route handlers for the Bed Planning API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::beds::candidates::BlockCandidate;
use crate::beds::geometry::{construct_bed, GardenBed};
use crate::beds::optimizer::{optimize_plan, run_optimization};
use crate::beds::policy::PlanningPolicy;
use crate::beds::report::OptimizationReport;
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct BedRequest {
    pub name: String,
    pub length: f64,
    pub width: f64,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeBedRequest {
    #[serde(flatten)]
    pub bed: BedRequest,
    pub policy: Option<PlanningPolicy>,
}

#[derive(Debug, Serialize)]
pub struct OptimizeBedResponse {
    pub bed_id: Uuid,
    pub report: OptimizationReport,
    pub displayable_discards: Vec<BlockCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizePlanRequest {
    pub beds: Vec<BedRequest>,
    pub policy: Option<PlanningPolicy>,
}

#[derive(Debug, Serialize)]
pub struct OptimizePlanResponse {
    pub reports: Vec<OptimizeBedResponse>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/beds/optimize
///
/// Optimizes one bed. Uses the request policy if given, else the deployment policy.
pub async fn handle_optimize_bed(
    State(state): State<AppState>,
    Json(request): Json<OptimizeBedRequest>,
) -> Result<Json<OptimizeBedResponse>, AppError> {
    let policy = resolve_policy(&state, request.policy)?;
    let bed = build_bed(&request.bed)?;

    let report = run_optimization(&bed, &policy);
    Ok(Json(into_response(bed.id, report)?))
}

/// POST /api/v1/plans/optimize
///
/// Optimizes several beds independently. All beds are validated before any is optimized.
pub async fn handle_optimize_plan(
    State(state): State<AppState>,
    Json(request): Json<OptimizePlanRequest>,
) -> Result<Json<OptimizePlanResponse>, AppError> {
    if request.beds.is_empty() {
        return Err(AppError::Validation("beds cannot be empty".to_string()));
    }

    let policy = resolve_policy(&state, request.policy)?;
    let beds = request
        .beds
        .iter()
        .map(build_bed)
        .collect::<Result<Vec<_>, _>>()?;

    let reports = beds
        .iter()
        .zip(optimize_plan(&beds, &policy))
        .map(|(bed, report)| into_response(bed.id, report))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(OptimizePlanResponse { reports }))
}

fn resolve_policy(
    state: &AppState,
    requested: Option<PlanningPolicy>,
) -> Result<PlanningPolicy, AppError> {
    let policy = requested.unwrap_or(state.config.policy);
    policy.validate()?;
    Ok(policy)
}

fn build_bed(request: &BedRequest) -> Result<GardenBed, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("bed name cannot be empty".to_string()));
    }
    Ok(construct_bed(request.name.trim(), request.length, request.width)?)
}

fn into_response(bed_id: Uuid, report: OptimizationReport) -> Result<OptimizeBedResponse, AppError> {
    report.chosen_block()?;
    let displayable_discards = report.displayable_discards().copied().collect();
    Ok(OptimizeBedResponse {
        bed_id,
        report,
        displayable_discards,
    })
}
