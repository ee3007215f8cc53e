//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::{Customer, StoreError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// Asserts that an error is in the validation category
///
/// # Panics
///
/// Panics if the error is retrieval or persistence
pub fn assert_validation_error(err: &StoreError) {
    assert!(
        err.is_validation(),
        "Expected a validation error, got: {err}"
    );
}

/// Asserts that an error is in the retrieval category
pub fn assert_retrieval_error(err: &StoreError) {
    assert!(err.is_retrieval(), "Expected a retrieval error, got: {err}");
}

/// Asserts that an error is in the persistence category
pub fn assert_persistence_error(err: &StoreError) {
    assert!(
        err.is_persistence(),
        "Expected a persistence error, got: {err}"
    );
}

/// Asserts that a listing returns exactly the given customer ids, in order
///
/// # Arguments
///
/// * `customers` - The listing under test
/// * `expected` - Customer ids in the order the listing must return them
///
/// # Panics
///
/// Panics if the ids differ in membership or in order
pub fn assert_customer_order(customers: &[Customer], expected: &[&str]) {
    let actual: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(actual, expected, "Customer listing order mismatch");
}

/// Asserts that a value survives a JSON round trip unchanged
///
/// # Panics
///
/// Panics if serialization fails or the decoded value differs
pub fn assert_json_roundtrip<T>(value: &T)
where
    T: Serialize + DeserializeOwned + PartialEq + Debug,
{
    let encoded = serde_json::to_string(value).expect("value should serialize");
    let decoded: T = serde_json::from_str(&encoded).expect("encoded value should deserialize");
    assert_eq!(&decoded, value, "Value changed across a JSON round trip");
}
