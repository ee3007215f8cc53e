//! Store Adapters for the Customer Domain
//!
//! Adapter implementations of the `CustomerStore` port. The SQLite adapter
//! lives in `infra_db`; the adapters here cover the device-local file layout
//! and the remote REST backend.
//!
//! # Available Adapters
//!
//! - **FileStoreAdapter**: flat JSON file on local disk, atomic replace-on-write
//! - **RemoteApiAdapter**: HTTP client for the REST backend
//! - **MockCustomerStore**: in-memory mock for testing (re-exported from ports)
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_customer::adapters::{RemoteApiAdapter, RemoteApiConfig};
//! use domain_customer::CustomerStore;
//! use std::sync::Arc;
//!
//! let adapter = RemoteApiAdapter::new(RemoteApiConfig {
//!     base_url: "http://localhost:8080".to_string(),
//!     timeout_secs: 5,
//! })?;
//! let store: Arc<dyn CustomerStore> = Arc::new(adapter);
//! ```

pub mod file_store;
pub mod remote_api;

pub use file_store::FileStoreAdapter;
pub use remote_api::{RemoteApiAdapter, RemoteApiConfig};
