//! Data transfer objects
//!
//! Request and response envelopes for the REST surface. Successful
//! responses always carry `ok: true`; failures use the error envelope
//! from [`crate::error`].

pub mod customers;
