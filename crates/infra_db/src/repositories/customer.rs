//! Customer repository implementation
//!
//! This module provides database access for customer records and their
//! nested policy sets. A customer's policies are rewritten wholesale on
//! every save inside one transaction, so readers never observe a record
//! with half its policies replaced.
//!
//! # Ordering
//!
//! Listings return customers by name ascending. Policies come back in the
//! order they were written, carried by the `seq` column rather than by any
//! meaning in the policy record itself.

use std::collections::HashMap;
use std::str::FromStr;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

use core_kernel::{Customer, CustomerId, InsuranceType, Policy, StoreError};
use domain_customer::{validate_for_upsert, CustomerStore, SeedOutcome};

use crate::pool::{create_pool, DatabaseConfig, DatabasePool};
use crate::schema;

/// Database row for the customers table
#[derive(Debug, Clone, sqlx::FromRow)]
struct CustomerRow {
    id: String,
    name: String,
    dob: String,
    mobile: String,
    email: String,
    address: String,
    pan: String,
    smk: String,
}

/// Database row for the policies table
#[derive(Debug, Clone, sqlx::FromRow)]
struct PolicyRow {
    customer_id: String,
    id: String,
    policy_type: String,
    policy_id: String,
    company_name: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    amount: Option<String>,
}

/// SQLite-backed implementation of the customer store
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct SqliteCustomerStore {
    pool: DatabasePool,
}

impl SqliteCustomerStore {
    /// Creates a store over an existing connection pool
    ///
    /// The caller is responsible for having run [`schema::initialize`].
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Creates the pool, initializes the schema, and returns a ready store
    ///
    /// # Arguments
    ///
    /// * `config` - Pool configuration including the connection URL
    pub async fn connect(config: DatabaseConfig) -> Result<Self, StoreError> {
        let pool = create_pool(config)?;
        schema::initialize(&pool).await?;
        Ok(Self::new(pool))
    }

    /// Writes one complete customer record inside the given transaction
    ///
    /// Upserts the scalar fields, then drops and rewrites the policy set.
    async fn write_customer(
        tx: &mut Transaction<'_, Sqlite>,
        customer: &Customer,
    ) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO customers (id, name, dob, mobile, email, address, pan, smk)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                name    = excluded.name,
                dob     = excluded.dob,
                mobile  = excluded.mobile,
                email   = excluded.email,
                address = excluded.address,
                pan     = excluded.pan,
                smk     = excluded.smk
            "#,
        )
        .bind(customer.id.as_str())
        .bind(&customer.name)
        .bind(&customer.dob)
        .bind(&customer.mobile)
        .bind(&customer.email)
        .bind(&customer.address)
        .bind(&customer.pan)
        .bind(&customer.smk)
        .execute(&mut **tx)
        .await
        .map_err(write_error)?;

        sqlx::query("DELETE FROM policies WHERE customer_id = ?1")
            .bind(customer.id.as_str())
            .execute(&mut **tx)
            .await
            .map_err(write_error)?;

        for policy in &customer.policies {
            sqlx::query(
                r#"
                INSERT INTO policies
                    (id, customer_id, policy_type, policy_id, company_name,
                     start_date, end_date, amount)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
            )
            .bind(&policy.id)
            .bind(customer.id.as_str())
            .bind(policy.policy_type.label())
            .bind(&policy.policy_id)
            .bind(&policy.company_name)
            .bind(policy.start_date)
            .bind(policy.end_date)
            .bind(&policy.amount)
            .execute(&mut **tx)
            .await
            .map_err(write_error)?;
        }

        Ok(())
    }
}

#[async_trait]
impl CustomerStore for SqliteCustomerStore {
    async fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        let customer_rows: Vec<CustomerRow> = sqlx::query_as(
            "SELECT id, name, dob, mobile, email, address, pan, smk
             FROM customers ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        let policy_rows: Vec<PolicyRow> = sqlx::query_as(
            "SELECT customer_id, id, policy_type, policy_id, company_name,
                    start_date, end_date, amount
             FROM policies ORDER BY seq ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(read_error)?;

        let mut policies_by_customer: HashMap<String, Vec<Policy>> = HashMap::new();
        for row in policy_rows {
            let customer_id = row.customer_id.clone();
            policies_by_customer
                .entry(customer_id)
                .or_default()
                .push(policy_from_row(row)?);
        }

        let customers = customer_rows
            .into_iter()
            .map(|row| {
                let policies = policies_by_customer.remove(&row.id).unwrap_or_default();
                customer_from_row(row, policies)
            })
            .collect();
        Ok(customers)
    }

    async fn upsert_customer(&self, customer: &Customer) -> Result<(), StoreError> {
        validate_for_upsert(customer)?;

        let mut tx = self.pool.begin().await.map_err(write_error)?;
        Self::write_customer(&mut tx, customer).await?;
        tx.commit().await.map_err(write_error)?;

        debug!(
            customer = %customer.id,
            policies = customer.policies.len(),
            "customer upserted"
        );
        Ok(())
    }

    async fn delete_customer(&self, id: &CustomerId) -> Result<(), StoreError> {
        let mut tx = self.pool.begin().await.map_err(write_error)?;

        sqlx::query("DELETE FROM policies WHERE customer_id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;
        let deleted = sqlx::query("DELETE FROM customers WHERE id = ?1")
            .bind(id.as_str())
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

        tx.commit().await.map_err(write_error)?;

        debug!(
            customer = %id,
            removed = deleted.rows_affected(),
            "customer delete finished"
        );
        Ok(())
    }

    /// The existence check and the insert share one transaction, so two
    /// concurrent seed calls cannot both insert.
    async fn seed_if_empty(&self) -> Result<SeedOutcome, StoreError> {
        let mut tx = self.pool.begin().await.map_err(write_error)?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM customers")
            .fetch_one(&mut *tx)
            .await
            .map_err(read_error)?;
        if count > 0 {
            return Ok(SeedOutcome::already_has_data());
        }

        let demo = Customer::demonstration(Local::now().date_naive());
        Self::write_customer(&mut tx, &demo).await?;
        tx.commit().await.map_err(write_error)?;

        info!(customer = %demo.id, "seeded demonstration record");
        Ok(SeedOutcome::seeded())
    }
}

fn read_error(err: sqlx::Error) -> StoreError {
    StoreError::retrieval_with("could not read from the customer database", err)
}

fn write_error(err: sqlx::Error) -> StoreError {
    StoreError::persistence_with("could not write to the customer database", err)
}

fn policy_from_row(row: PolicyRow) -> Result<Policy, StoreError> {
    let policy_type = InsuranceType::from_str(&row.policy_type)
        .map_err(|e| StoreError::retrieval_with("stored policy has an unrecognized type", e))?;
    Ok(Policy {
        id: row.id,
        policy_type,
        policy_id: row.policy_id,
        company_name: row.company_name,
        start_date: row.start_date,
        end_date: row.end_date,
        amount: row.amount,
    })
}

fn customer_from_row(row: CustomerRow, policies: Vec<Policy>) -> Customer {
    Customer {
        id: CustomerId::new(row.id),
        name: row.name,
        dob: row.dob,
        mobile: row.mobile,
        email: row.email,
        address: row.address,
        pan: row.pan,
        smk: row.smk,
        policies,
    }
}
