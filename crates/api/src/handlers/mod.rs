//! Request handlers.
//!
//! Each submodule provides async handler functions for a single resource.
//! Handlers delegate to the corresponding repository in `shopfront_db`, map
//! rows through their external representation, and wrap results in the
//! response envelope. Errors map via [`crate::error::AppError`].

pub mod product;
