//! Infrastructure Database Layer
//!
//! This crate provides the SQLite-backed implementation of the customer
//! store, using SQLx with the runtime query API.
//!
//! # Architecture
//!
//! The crate follows the repository pattern: [`SqliteCustomerStore`]
//! implements the `CustomerStore` port from `domain_customer`, so callers
//! never see SQL or connection handling. Schema creation is idempotent and
//! runs when a store connects, which keeps a fresh database usable without
//! a separate migration step.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, SqliteCustomerStore};
//!
//! let config = DatabaseConfig::new("sqlite://policytrack.db");
//! let store = SqliteCustomerStore::connect(config).await?;
//! ```

pub mod pool;
pub mod repositories;
pub mod schema;

pub use pool::{create_pool, DatabaseConfig, DatabasePool};
pub use repositories::SqliteCustomerStore;
