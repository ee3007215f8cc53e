//! Repository implementations for domain entities
//!
//! This module provides the concrete repository that handles database access
//! for customer records. The repository encapsulates SQL and maps between
//! database rows and domain types; nothing above it sees a query string.
//!
//! # Architecture
//!
//! - Runtime-checked queries through the SQLx query API
//! - One transaction per write, so replacement is all-or-nothing
//! - Rows are plain structs decoded with `sqlx::FromRow`

pub mod customer;

pub use customer::SqliteCustomerStore;
