//! Shared domain types and errors for the shopfront backend.
//!
//! Kept deliberately small: the `db` and `api` crates both depend on this
//! crate, so it holds only what crosses that boundary.

pub mod error;
pub mod types;
