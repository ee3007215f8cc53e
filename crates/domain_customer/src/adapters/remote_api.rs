//! Remote API Adapter
//!
//! `CustomerStore` implementation that talks to the REST backend over HTTP.
//! The remote service owns ordering and transactionality; this adapter's job
//! is faithful envelope decoding and honest error classification.
//!
//! # Configuration
//!
//! ```rust,ignore
//! let config = RemoteApiConfig {
//!     base_url: "http://tracker.example.com/api".to_string(),
//!     timeout_secs: 5,
//! };
//! let store = RemoteApiAdapter::new(config)?;
//! ```
//!
//! # Error Handling
//!
//! Transport and server failures map onto the store taxonomy:
//! - HTTP 400 -> `StoreError::Validation`, message surfaced verbatim
//! - other non-2xx / `ok: false` -> `Retrieval` (reads) or `Persistence` (writes)
//! - request timeout -> same split, with the configured deadline named
//! - connection refused / DNS failure -> "service unreachable"
//! - undecodable body -> `Retrieval` (malformed response)

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;
use url::Url;

use core_kernel::{Customer, CustomerId, StoreError};

use crate::ports::{validate_for_upsert, CustomerStore, SeedOutcome};

/// Configuration for the remote API adapter
#[derive(Debug, Clone)]
pub struct RemoteApiConfig {
    /// Base URL of the customer service (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds; every operation is bounded by this
    pub timeout_secs: u64,
}

impl Default for RemoteApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080".to_string(),
            timeout_secs: 5,
        }
    }
}

// ============================================================================
// Wire envelopes
// ============================================================================

#[derive(Debug, Serialize)]
struct SaveCustomerBody<'a> {
    customer: &'a Customer,
}

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    ok: bool,
    #[serde(default)]
    customers: Vec<Customer>,
    error: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AckEnvelope {
    ok: bool,
    error: Option<String>,
    detail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SeedEnvelope {
    ok: bool,
    #[serde(default)]
    seeded: bool,
    reason: Option<String>,
    error: Option<String>,
    detail: Option<String>,
}

fn envelope_message(error: Option<String>, detail: Option<String>, status: StatusCode) -> String {
    match (error, detail) {
        (Some(error), Some(detail)) => format!("{error}: {detail}"),
        (Some(error), None) => error,
        (None, _) => format!("customer service returned {status}"),
    }
}

// ============================================================================
// Adapter
// ============================================================================

/// `CustomerStore` backed by the remote REST service
#[derive(Debug, Clone)]
pub struct RemoteApiAdapter {
    client: reqwest::Client,
    customers_url: Url,
    seed_url: Url,
    timeout_secs: u64,
}

impl RemoteApiAdapter {
    /// Creates an adapter from configuration
    ///
    /// # Returns
    ///
    /// `StoreError::Validation` when the base URL is unusable
    pub fn new(config: RemoteApiConfig) -> Result<Self, StoreError> {
        let mut base = config.base_url.trim_end_matches('/').to_string();
        base.push('/');
        let base = Url::parse(&base).map_err(|e| {
            StoreError::validation(format!("invalid remote store base url: {e}"))
        })?;

        let customers_url = base
            .join("customers")
            .map_err(|e| StoreError::validation(format!("invalid remote store base url: {e}")))?;
        let seed_url = base
            .join("seed")
            .map_err(|e| StoreError::validation(format!("invalid remote store base url: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| StoreError::validation(format!("could not build http client: {e}")))?;

        Ok(Self {
            client,
            customers_url,
            seed_url,
            timeout_secs: config.timeout_secs,
        })
    }

    fn read_transport_error(&self, operation: &str, e: reqwest::Error) -> StoreError {
        StoreError::retrieval_with(self.transport_message(operation, &e), e)
    }

    fn write_transport_error(&self, operation: &str, e: reqwest::Error) -> StoreError {
        StoreError::persistence_with(self.transport_message(operation, &e), e)
    }

    fn transport_message(&self, operation: &str, e: &reqwest::Error) -> String {
        if e.is_timeout() {
            format!("{operation} timed out after {}s", self.timeout_secs)
        } else if e.is_connect() {
            format!("customer service unreachable during {operation}")
        } else {
            format!("{operation} failed")
        }
    }
}

#[async_trait]
impl CustomerStore for RemoteApiAdapter {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        debug!(url = %self.customers_url, "loading customers from remote store");
        let response = self
            .client
            .get(self.customers_url.clone())
            .send()
            .await
            .map_err(|e| self.read_transport_error("customer load", e))?;

        let status = response.status();
        let body: ListEnvelope = response.json().await.map_err(|e| {
            StoreError::retrieval_with("malformed response from customer service", e)
        })?;

        if !status.is_success() || !body.ok {
            return Err(StoreError::retrieval(envelope_message(
                body.error, body.detail, status,
            )));
        }
        Ok(body.customers)
    }

    async fn upsert_customer(&self, customer: &Customer) -> Result<(), StoreError> {
        // reject locally before going on the wire; the server enforces the
        // same rule for other clients
        validate_for_upsert(customer)?;

        debug!(customer = %customer.id, "saving customer to remote store");
        let response = self
            .client
            .post(self.customers_url.clone())
            .json(&SaveCustomerBody { customer })
            .send()
            .await
            .map_err(|e| self.write_transport_error("customer save", e))?;

        let status = response.status();
        let body: AckEnvelope = response.json().await.map_err(|e| {
            StoreError::persistence_with("malformed response from customer service", e)
        })?;

        if status.is_success() && body.ok {
            return Ok(());
        }
        let message = envelope_message(body.error, body.detail, status);
        if status == StatusCode::BAD_REQUEST {
            Err(StoreError::validation(message))
        } else {
            Err(StoreError::persistence(message))
        }
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), StoreError> {
        debug!(customer = %id, "deleting customer from remote store");
        let response = self
            .client
            .delete(self.customers_url.clone())
            .query(&[("id", id.as_str())])
            .send()
            .await
            .map_err(|e| self.write_transport_error("customer delete", e))?;

        let status = response.status();
        let body: AckEnvelope = response.json().await.map_err(|e| {
            StoreError::persistence_with("malformed response from customer service", e)
        })?;

        if status.is_success() && body.ok {
            return Ok(());
        }
        let message = envelope_message(body.error, body.detail, status);
        if status == StatusCode::BAD_REQUEST {
            Err(StoreError::validation(message))
        } else {
            Err(StoreError::persistence(message))
        }
    }

    /// Delegates seeding to the service's own seed route so the check and the
    /// insert happen inside the owning store's transaction scope
    async fn seed_if_empty(&self) -> Result<SeedOutcome, StoreError> {
        debug!(url = %self.seed_url, "requesting seed from remote store");
        let response = self
            .client
            .get(self.seed_url.clone())
            .send()
            .await
            .map_err(|e| self.write_transport_error("seed", e))?;

        let status = response.status();
        let body: SeedEnvelope = response.json().await.map_err(|e| {
            StoreError::persistence_with("malformed response from customer service", e)
        })?;

        if status.is_success() && body.ok {
            return Ok(SeedOutcome {
                seeded: body.seeded,
                reason: body.reason,
            });
        }
        Err(StoreError::persistence(envelope_message(
            body.error, body.detail, status,
        )))
    }
}
