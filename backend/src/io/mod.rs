//! # IO Module
//!
//! The boundary between the SPA and the domain. Handlers translate JSON
//! requests into domain commands, call a service, and map the result back to
//! the DTOs in the `shared` crate.
//!
//! ## Key Responsibilities
//!
//! - **API Endpoints**: REST routes under `/api`
//! - **Error Translation**: `DomainError` to HTTP status codes
//! - **Data Mapping**: dates and timestamps rendered as strings for the wire

pub mod rest;
