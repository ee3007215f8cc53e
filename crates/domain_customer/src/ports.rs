//! Customer Domain Ports
//!
//! This module defines the repository port for customer records, enabling
//! swappable implementations (local file store, remote HTTP backend, mock).
//!
//! # Architecture
//!
//! The `CustomerStore` trait defines every operation the rest of the system
//! needs from customer persistence. Multiple adapters implement it:
//!
//! - **File Adapter**: flat JSON file on the local device
//! - **SQLite Adapter**: relational store (infra_db)
//! - **Remote Adapter**: HTTP client against the REST backend
//! - **Mock Adapter**: in-memory, for tests
//!
//! # Contract
//!
//! Whatever the backend, the same rules hold:
//!
//! - `upsert_customer` replaces the whole record: scalar fields and the
//!   entire policy set (delete-all-then-insert, never a merge). The
//!   replacement is atomic; a mid-operation failure leaves prior state
//!   observable and intact.
//! - `delete_customer` cascades to the customer's policies and is a no-op
//!   for an unknown id.
//! - `seed_if_empty` only ever writes into an empty store.
//!
//! # Configuration
//!
//! Adapters are chosen at application startup:
//!
//! ```rust,ignore
//! let store: Arc<dyn CustomerStore> = match config.backend {
//!     StoreBackend::File => Arc::new(FileStoreAdapter::new(&config.data_path)),
//!     StoreBackend::Remote => Arc::new(RemoteApiAdapter::new(remote_config)?),
//! };
//! ```

use async_trait::async_trait;
use chrono::Local;

use core_kernel::{Customer, CustomerId, StoreError};

/// Reason reported when seeding is skipped because data already exists
pub const SEED_SKIPPED_HAS_DATA: &str = "already_has_data";

/// Result of a `seed_if_empty` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedOutcome {
    /// Whether the demonstration record was inserted by this call
    pub seeded: bool,
    /// Why seeding was skipped, when it was
    pub reason: Option<String>,
}

impl SeedOutcome {
    /// Outcome for a call that inserted the demonstration record
    pub fn seeded() -> Self {
        Self {
            seeded: true,
            reason: None,
        }
    }

    /// Outcome for a call that found existing data and left it alone
    pub fn already_has_data() -> Self {
        Self {
            seeded: false,
            reason: Some(SEED_SKIPPED_HAS_DATA.to_string()),
        }
    }
}

/// Checks a customer record before it is written
///
/// Shared by every adapter so the validation rules cannot drift between
/// backends. The id is the only hard requirement; all other fields are
/// carried as opaque strings.
pub fn validate_for_upsert(customer: &Customer) -> Result<(), StoreError> {
    if customer.id.is_empty() {
        return Err(StoreError::validation("customer id must not be empty"));
    }
    Ok(())
}

/// The repository port for customer records
///
/// All methods are async and return `Result<T, StoreError>` so error handling
/// is identical across adapters.
#[async_trait]
pub trait CustomerStore: Send + Sync + 'static {
    /// Returns every customer with its full nested policy sequence
    ///
    /// Ordering: name ascending when the backend can sort (relational),
    /// insertion order for flat stores. Policies keep their stored order.
    ///
    /// # Returns
    ///
    /// All customers, or `StoreError::Retrieval` when the store is
    /// unreachable or holds malformed data
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    /// Inserts or fully replaces one customer record
    ///
    /// Replaces every scalar field and the entire policy set for this id.
    /// Atomic: either the whole record lands or nothing changes.
    ///
    /// # Arguments
    ///
    /// * `customer` - the complete record; `customer.id` must be non-empty
    ///
    /// # Returns
    ///
    /// `StoreError::Validation` for an empty id, `StoreError::Persistence`
    /// when the write fails (prior state unchanged)
    async fn upsert_customer(&self, customer: &Customer) -> Result<(), StoreError>;

    /// Removes a customer and, atomically, all of its policies
    ///
    /// A no-op (not an error) when the id does not exist.
    ///
    /// # Arguments
    ///
    /// * `id` - the customer identifier
    async fn delete_customer(&self, id: &CustomerId) -> Result<(), StoreError>;

    /// Inserts the canonical demonstration record into an empty store
    ///
    /// Idempotent: when any customer already exists this is a no-op that
    /// reports why. Never overwrites existing data.
    ///
    /// The default implementation is composed from `list_customers` and
    /// `upsert_customer`; adapters with cheaper existence checks or their own
    /// transaction scope override it.
    async fn seed_if_empty(&self) -> Result<SeedOutcome, StoreError> {
        if !self.list_customers().await?.is_empty() {
            return Ok(SeedOutcome::already_has_data());
        }
        let today = Local::now().date_naive();
        self.upsert_customer(&Customer::demonstration(today)).await?;
        Ok(SeedOutcome::seeded())
    }
}

/// Extension trait with convenience lookups composed from the port
#[async_trait]
pub trait CustomerStoreExt: CustomerStore {
    /// Finds one customer by id, `None` when absent
    async fn find_customer(&self, id: &CustomerId) -> Result<Option<Customer>, StoreError> {
        let customers = self.list_customers().await?;
        Ok(customers.into_iter().find(|c| &c.id == id))
    }

    /// Returns true when the store holds no customers
    async fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.list_customers().await?.is_empty())
    }
}

impl<T: CustomerStore + ?Sized> CustomerStoreExt for T {}

/// Mock implementation of CustomerStore for testing
///
/// Stores customers in memory in insertion order, mirroring the flat-store
/// variant's observable behavior.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of CustomerStore
    #[derive(Debug, Default, Clone)]
    pub struct MockCustomerStore {
        customers: Arc<RwLock<Vec<Customer>>>,
    }

    impl MockCustomerStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Pre-populates the store for tests
        pub async fn with_customers(customers: Vec<Customer>) -> Self {
            let store = Self::new();
            *store.customers.write().await = customers;
            store
        }
    }

    #[async_trait]
    impl CustomerStore for MockCustomerStore {
        async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
            Ok(self.customers.read().await.clone())
        }

        async fn upsert_customer(&self, customer: &Customer) -> Result<(), StoreError> {
            validate_for_upsert(customer)?;
            let mut customers = self.customers.write().await;
            match customers.iter_mut().find(|c| c.id == customer.id) {
                Some(existing) => *existing = customer.clone(),
                None => customers.push(customer.clone()),
            }
            Ok(())
        }

        async fn delete_customer(&self, id: &CustomerId) -> Result<(), StoreError> {
            self.customers.write().await.retain(|c| &c.id != id);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockCustomerStore;
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{InsuranceType, Policy};

    fn policy(id: &str, number: &str) -> Policy {
        Policy {
            id: id.to_string(),
            policy_type: InsuranceType::Bike,
            policy_id: number.to_string(),
            company_name: "Acme".to_string(),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            amount: None,
        }
    }

    fn customer(id: &str, name: &str, policies: Vec<Policy>) -> Customer {
        Customer {
            id: CustomerId::from(id),
            name: name.to_string(),
            dob: String::new(),
            mobile: String::new(),
            email: String::new(),
            address: String::new(),
            pan: String::new(),
            smk: String::new(),
            policies,
        }
    }

    #[tokio::test]
    async fn test_upsert_then_list() {
        let store = MockCustomerStore::new();
        store
            .upsert_customer(&customer("CUST-1", "Ada", vec![policy("p1", "N-1")]))
            .await
            .unwrap();

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Ada");
        assert_eq!(customers[0].policies.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_rejects_empty_id() {
        let store = MockCustomerStore::new();
        let result = store.upsert_customer(&customer("", "Nameless", vec![])).await;
        assert!(result.unwrap_err().is_validation());
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_upsert_replaces_whole_policy_set() {
        let store = MockCustomerStore::new();
        store
            .upsert_customer(&customer(
                "CUST-1",
                "Ada",
                vec![policy("p1", "N-1"), policy("p2", "N-2")],
            ))
            .await
            .unwrap();

        store
            .upsert_customer(&customer("CUST-1", "Ada", vec![policy("p3", "N-3")]))
            .await
            .unwrap();

        let stored = store
            .find_customer(&CustomerId::from("CUST-1"))
            .await
            .unwrap()
            .unwrap();
        let ids: Vec<&str> = stored.policies.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p3"]);
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let store = MockCustomerStore::new();
        let record = customer("CUST-1", "Ada", vec![policy("p1", "N-1")]);

        store.upsert_customer(&record).await.unwrap();
        store.upsert_customer(&record).await.unwrap();

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].policies.len(), 1);
    }

    #[tokio::test]
    async fn test_upsert_preserves_insertion_position() {
        let store = MockCustomerStore::new();
        store
            .upsert_customer(&customer("CUST-1", "First", vec![]))
            .await
            .unwrap();
        store
            .upsert_customer(&customer("CUST-2", "Second", vec![]))
            .await
            .unwrap();
        store
            .upsert_customer(&customer("CUST-1", "First Edited", vec![]))
            .await
            .unwrap();

        let names: Vec<String> = store
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["First Edited", "Second"]);
    }

    #[tokio::test]
    async fn test_delete_is_noop_for_unknown_id() {
        let store = MockCustomerStore::new();
        store
            .delete_customer(&CustomerId::from("CUST-404"))
            .await
            .unwrap();
        assert!(store.is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_cascades_and_repeats_cleanly() {
        let store = MockCustomerStore::new();
        store
            .upsert_customer(&customer(
                "CUST-1",
                "Ada",
                vec![policy("p1", "N-1"), policy("p2", "N-2")],
            ))
            .await
            .unwrap();

        let id = CustomerId::from("CUST-1");
        store.delete_customer(&id).await.unwrap();
        assert!(store.find_customer(&id).await.unwrap().is_none());

        // repeat delete of the same id succeeds as a no-op
        store.delete_customer(&id).await.unwrap();
    }

    #[tokio::test]
    async fn test_seed_fills_empty_store_once() {
        let store = MockCustomerStore::new();

        let first = store.seed_if_empty().await.unwrap();
        assert!(first.seeded);
        assert_eq!(first.reason, None);

        let second = store.seed_if_empty().await.unwrap();
        assert!(!second.seeded);
        assert_eq!(second.reason.as_deref(), Some(SEED_SKIPPED_HAS_DATA));

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers.len(), 1);
        assert_eq!(customers[0].name, "Sarah Connor");
        assert_eq!(customers[0].policies.len(), 2);
    }

    #[tokio::test]
    async fn test_seed_never_touches_existing_data() {
        let existing = customer("CUST-7", "Existing", vec![]);
        let store = MockCustomerStore::with_customers(vec![existing.clone()]).await;

        let outcome = store.seed_if_empty().await.unwrap();
        assert!(!outcome.seeded);

        let customers = store.list_customers().await.unwrap();
        assert_eq!(customers, vec![existing]);
    }
}
