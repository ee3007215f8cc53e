//! Schema initialization
//!
//! Idempotent table creation for the customer store. Policies live in their
//! own table keyed back to the owning customer; the `seq` column preserves
//! the order policies were written in, which is the order listings return
//! them in.

use tracing::debug;

use core_kernel::StoreError;

use crate::pool::DatabasePool;

const CREATE_CUSTOMERS: &str = r#"
CREATE TABLE IF NOT EXISTS customers (
    id      TEXT PRIMARY KEY,
    name    TEXT NOT NULL,
    dob     TEXT NOT NULL,
    mobile  TEXT NOT NULL,
    email   TEXT NOT NULL,
    address TEXT NOT NULL,
    pan     TEXT NOT NULL,
    smk     TEXT NOT NULL
)
"#;

const CREATE_POLICIES: &str = r#"
CREATE TABLE IF NOT EXISTS policies (
    seq          INTEGER PRIMARY KEY AUTOINCREMENT,
    id           TEXT NOT NULL,
    customer_id  TEXT NOT NULL,
    policy_type  TEXT NOT NULL,
    policy_id    TEXT NOT NULL,
    company_name TEXT NOT NULL,
    start_date   TEXT NOT NULL,
    end_date     TEXT NOT NULL,
    amount       TEXT,
    FOREIGN KEY (customer_id) REFERENCES customers(id) ON DELETE CASCADE
)
"#;

const CREATE_POLICY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_policies_customer_id ON policies(customer_id)";

/// Creates the customer store tables if they do not exist
///
/// Safe to run on every startup.
pub async fn initialize(pool: &DatabasePool) -> Result<(), StoreError> {
    for statement in [CREATE_CUSTOMERS, CREATE_POLICIES, CREATE_POLICY_INDEX] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .map_err(|e| StoreError::persistence_with("could not initialize the schema", e))?;
    }
    debug!("customer store schema initialized");
    Ok(())
}
