//! Seed handler

use axum::{extract::State, Json};

use crate::dto::customers::SeedResponse;
use crate::error::ApiError;
use crate::AppState;

/// Seeds the demonstration customer when the store is empty
pub async fn seed_store(State(state): State<AppState>) -> Result<Json<SeedResponse>, ApiError> {
    let outcome = state
        .store
        .seed_if_empty()
        .await
        .map_err(|e| ApiError::from_store(e, state.backend))?;

    Ok(Json(SeedResponse {
        ok: true,
        seeded: outcome.seeded,
        reason: outcome.reason,
    }))
}
