//! HTTP API Layer
//!
//! This crate provides the REST API for the policy tracker using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for customers, seeding, renewals, health
//! - **Middleware**: Tracing and audit logging
//! - **DTOs**: Request/Response envelopes
//! - **Error Handling**: Consistent error envelopes with store-aware status codes
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{build_store, create_router};
//!
//! let store = build_store(&config).await?;
//! let app = create_router(store, config.store_backend);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use core_kernel::StoreError;
use domain_customer::{CustomerStore, FileStoreAdapter, RemoteApiAdapter, RemoteApiConfig};
use infra_db::{DatabaseConfig, SqliteCustomerStore};

use crate::config::{ApiConfig, StoreBackend};
use crate::handlers::{customers, health, renewals, seed};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// The selected storage adapter behind the port
    pub store: Arc<dyn CustomerStore>,
    /// Which backend `store` is, for error status mapping
    pub backend: StoreBackend,
}

/// Builds the storage adapter selected by configuration
///
/// # Returns
///
/// The store behind the `CustomerStore` port, ready to serve requests.
/// The SQLite backend connects and initializes its schema here.
pub async fn build_store(config: &ApiConfig) -> Result<Arc<dyn CustomerStore>, StoreError> {
    let store: Arc<dyn CustomerStore> = match config.store_backend {
        StoreBackend::File => Arc::new(FileStoreAdapter::new(&config.data_file)),
        StoreBackend::Sqlite => Arc::new(
            SqliteCustomerStore::connect(DatabaseConfig::new(&config.database_url)).await?,
        ),
        StoreBackend::Remote => Arc::new(RemoteApiAdapter::new(RemoteApiConfig {
            base_url: config.remote_base_url.clone(),
            timeout_secs: config.remote_timeout_secs,
        })?),
    };

    Ok(store)
}

/// Creates the main API router
///
/// # Arguments
///
/// * `store` - Storage adapter behind the `CustomerStore` port
/// * `backend` - Which backend the store is, for error status mapping
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(store: Arc<dyn CustomerStore>, backend: StoreBackend) -> Router {
    let state = AppState { store, backend };

    // Health routes
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // Customer routes
    let customer_routes = Router::new()
        .route("/", get(customers::list_customers))
        .route("/", post(customers::save_customer))
        .route("/", delete(customers::delete_customer));

    // Combine all routes
    Router::new()
        .merge(health_routes)
        .nest("/customers", customer_routes)
        .route("/seed", get(seed::seed_store))
        .route("/renewals", get(renewals::renewal_schedule))
        .layer(axum_middleware::from_fn(audit_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers(Any),
        )
        .with_state(state)
}
