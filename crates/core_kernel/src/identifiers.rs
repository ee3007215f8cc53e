//! Strongly-typed identifiers for domain entities
//!
//! Customer identifiers are client-assigned opaque strings (existing data uses
//! forms like `CUST-101`, and one legacy population used raw mobile numbers).
//! The newtype keeps them from being mixed up with other string fields while
//! still round-tripping any historical value unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Prefix applied to newly generated customer identifiers
const CUSTOMER_ID_PREFIX: &str = "CUST";

/// Unique, stable identifier of a customer record
///
/// The identifier is immutable for the life of the record and independent of
/// the customer's mobile number. Uniqueness is enforced by the repository via
/// upsert-by-id, not by a separate existence check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Wraps an existing identifier value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a fresh identifier with the `CUST-` prefix and a random suffix
    pub fn generate() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", CUSTOMER_ID_PREFIX, &suffix[..8]))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identifier carries no value
    ///
    /// Empty identifiers are rejected by the repository's upsert; they are
    /// representable so that decoded input can be validated in one place.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CustomerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
