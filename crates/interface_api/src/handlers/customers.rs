//! Customer handlers

use axum::{extract::State, Json};

use core_kernel::CustomerId;
use domain_customer::directory;

use crate::dto::customers::{
    AckResponse, CustomerListResponse, DeleteCustomerParams, ListCustomersParams,
    SaveCustomerRequest,
};
use crate::error::{ApiError, ApiJson, ApiQuery};
use crate::AppState;

/// Lists customers, optionally filtered by the `q` search term
pub async fn list_customers(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListCustomersParams>,
) -> Result<Json<CustomerListResponse>, ApiError> {
    let customers = state
        .store
        .list_customers()
        .await
        .map_err(|e| ApiError::from_store(e, state.backend))?;

    let customers = match params.q {
        Some(ref term) => directory::search(customers, term),
        None => customers,
    };

    Ok(Json(CustomerListResponse {
        ok: true,
        customers,
    }))
}

/// Inserts a customer, or fully replaces it when the id already exists
pub async fn save_customer(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<SaveCustomerRequest>,
) -> Result<Json<AckResponse>, ApiError> {
    state
        .store
        .upsert_customer(&request.customer)
        .await
        .map_err(|e| ApiError::from_store(e, state.backend))?;

    Ok(Json(AckResponse { ok: true }))
}

/// Deletes a customer and its policies; unknown ids acknowledge without effect
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<DeleteCustomerParams>,
) -> Result<Json<AckResponse>, ApiError> {
    let id = CustomerId::new(params.id);
    state
        .store
        .delete_customer(&id)
        .await
        .map_err(|e| ApiError::from_store(e, state.backend))?;

    Ok(Json(AckResponse { ok: true }))
}
