//! Customer Domain
//!
//! This crate owns the customer/policy repository contract and its
//! interchangeable adapters. Two parallel deployments exist (a device-local
//! file store and a remote HTTP backend); both satisfy the same
//! [`CustomerStore`] port, so callers never duplicate logic per backend.
//!
//! # Port and adapters
//!
//! - [`CustomerStore`]: list, upsert (full-record replace), cascade delete,
//!   and idempotent seeding
//! - [`adapters::FileStoreAdapter`]: flat JSON file, insertion-ordered,
//!   atomic replace-on-write
//! - [`adapters::RemoteApiAdapter`]: HTTP client for the REST backend with an
//!   explicit request timeout
//! - `MockCustomerStore` (behind `mock`/test builds): in-memory port for tests
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_customer::{CustomerStore, adapters::FileStoreAdapter};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn CustomerStore> = Arc::new(FileStoreAdapter::new("data/customers.json"));
//! let customers = store.list_customers().await?;
//! ```

pub mod adapters;
pub mod directory;
pub mod ports;

pub use directory::search;
pub use ports::{validate_for_upsert, CustomerStore, CustomerStoreExt, SeedOutcome};
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockCustomerStore;
pub use adapters::{FileStoreAdapter, RemoteApiAdapter, RemoteApiConfig};
