use axum::{extract::State, Json};
use serde::Serialize;
use wills_catalog::Plan;

use crate::error::ApiError;
use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct PlanResponse {
    pub id: String,
    #[serde(flatten)]
    pub plan: Plan,
}

#[derive(Debug, Serialize)]
pub struct PlanListResponse {
    pub plans: Vec<PlanResponse>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /api/plans
/// List available plans, seeding the defaults on first read.
pub async fn list_plans(
    State(state): State<AppState>,
) -> Result<Json<PlanListResponse>, ApiError> {
    let plans = state.catalog.list_plans().await?;

    let plans = plans
        .into_iter()
        .map(|(id, plan)| PlanResponse {
            id: id.to_string(),
            plan,
        })
        .collect();

    Ok(Json(PlanListResponse { plans }))
}
