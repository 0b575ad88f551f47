//! Database row types and request/response DTOs.

pub mod product;
