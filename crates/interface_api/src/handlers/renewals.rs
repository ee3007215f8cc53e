//! Renewal schedule handler

use axum::{extract::State, Json};
use chrono::Local;

use domain_renewal::{build_schedule, PortfolioSummary};

use crate::dto::customers::RenewalsResponse;
use crate::error::ApiError;
use crate::AppState;

/// Returns every policy ranked by urgency, with the portfolio summary
pub async fn renewal_schedule(
    State(state): State<AppState>,
) -> Result<Json<RenewalsResponse>, ApiError> {
    let customers = state
        .store
        .list_customers()
        .await
        .map_err(|e| ApiError::from_store(e, state.backend))?;

    let today = Local::now().date_naive();
    let renewals = build_schedule(&customers, today);
    let summary = PortfolioSummary::from_schedule(&renewals, customers.len());

    Ok(Json(RenewalsResponse {
        ok: true,
        renewals,
        summary,
    }))
}
