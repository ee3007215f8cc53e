//! Customer endpoint DTOs

use serde::{Deserialize, Serialize};

use core_kernel::Customer;
use domain_renewal::{PortfolioSummary, RenewalEntry};

/// Request body for saving a customer
#[derive(Debug, Deserialize)]
pub struct SaveCustomerRequest {
    /// Full customer record, policies included
    pub customer: Customer,
}

/// Query parameters for listing customers
#[derive(Debug, Deserialize)]
pub struct ListCustomersParams {
    /// Case-insensitive search term over name, id, and policy fields
    pub q: Option<String>,
}

/// Query parameters for deleting a customer
#[derive(Debug, Deserialize)]
pub struct DeleteCustomerParams {
    pub id: String,
}

/// Response envelope for customer listings
#[derive(Debug, Serialize)]
pub struct CustomerListResponse {
    pub ok: bool,
    pub customers: Vec<Customer>,
}

/// Bare acknowledgement envelope for writes
#[derive(Debug, Serialize)]
pub struct AckResponse {
    pub ok: bool,
}

/// Response envelope for the seed endpoint
#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub ok: bool,
    /// Whether the demonstration record was inserted
    pub seeded: bool,
    /// Why seeding was skipped, when it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Response envelope for the renewal schedule
#[derive(Debug, Serialize)]
pub struct RenewalsResponse {
    pub ok: bool,
    /// One entry per policy, most urgent first
    pub renewals: Vec<RenewalEntry>,
    pub summary: PortfolioSummary,
}
