//! File Store Adapter
//!
//! Device-local implementation of `CustomerStore` backed by a single JSON
//! file holding the full customer array, the same layout the original
//! device-local deployment kept. The file is the only state: every operation
//! reads it fresh, and writes land as a temp-file-then-rename so a failure
//! mid-write can never leave a half-replaced store behind.
//!
//! Listing order is insertion order; an edit replaces the record in place
//! without moving it, matching flat-store semantics.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use core_kernel::{Customer, CustomerId, StoreError};

use crate::ports::{validate_for_upsert, CustomerStore};

/// `CustomerStore` backed by a flat JSON file
#[derive(Debug)]
pub struct FileStoreAdapter {
    path: PathBuf,
    // serializes read-modify-write cycles so concurrent upserts cannot
    // interleave between load and persist
    write_lock: Mutex<()>,
}

impl FileStoreAdapter {
    /// Creates an adapter over the given data file
    ///
    /// The file does not need to exist yet; a missing file reads as an empty
    /// store and parent directories are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Customer>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StoreError::retrieval_with(
                    format!("could not read data file {}", self.path.display()),
                    e,
                ))
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            StoreError::retrieval_with(
                format!("data file {} is malformed", self.path.display()),
                e,
            )
        })
    }

    async fn persist(&self, customers: &[Customer]) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(customers).map_err(|e| {
            StoreError::persistence_with("could not encode customer data", e)
        })?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await.map_err(|e| {
                    StoreError::persistence_with(
                        format!("could not create data directory {}", parent.display()),
                        e,
                    )
                })?;
            }
        }

        // write beside the target, then swap in atomically
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes).await.map_err(|e| {
            StoreError::persistence_with(
                format!("could not write data file {}", tmp.display()),
                e,
            )
        })?;
        fs::rename(&tmp, &self.path).await.map_err(|e| {
            StoreError::persistence_with(
                format!("could not replace data file {}", self.path.display()),
                e,
            )
        })?;

        debug!(
            path = %self.path.display(),
            count = customers.len(),
            "persisted customer data file"
        );
        Ok(())
    }

    // In the write path a failed read still surfaces as a persistence
    // failure: the write did not happen and prior state is untouched.
    async fn load_for_write(&self) -> Result<Vec<Customer>, StoreError> {
        self.load().await.map_err(|e| {
            StoreError::persistence_with("could not read existing data before write", e)
        })
    }
}

#[async_trait]
impl CustomerStore for FileStoreAdapter {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        self.load().await
    }

    async fn upsert_customer(&self, customer: &Customer) -> Result<(), StoreError> {
        validate_for_upsert(customer)?;

        let _guard = self.write_lock.lock().await;
        let mut customers = self.load_for_write().await?;
        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(existing) => *existing = customer.clone(),
            None => customers.push(customer.clone()),
        }
        self.persist(&customers).await
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut customers = self.load_for_write().await?;
        let before = customers.len();
        customers.retain(|c| &c.id != id);
        if customers.len() == before {
            // unknown id: deletion is a no-op, nothing to rewrite
            return Ok(());
        }
        self.persist(&customers).await
    }
}
