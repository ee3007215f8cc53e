//! Request handlers

pub mod customers;
pub mod health;
pub mod renewals;
pub mod seed;
