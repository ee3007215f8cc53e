//! Core Kernel - Foundational types for the policy tracker
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Customer and Policy records with their wire-compatible serialized forms
//! - Strongly-typed customer identifiers
//! - The store error taxonomy shared by every repository adapter

pub mod error;
pub mod identifiers;
pub mod model;

pub use error::StoreError;
pub use identifiers::CustomerId;
pub use model::{Customer, InsuranceType, Policy, UnknownInsuranceType};
