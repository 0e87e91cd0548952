//! Shared HTTP transport for the REST API.
//!
//! Each domain module implements its port traits on [`ApiClient`] in its own
//! `adapters::http` module; this module only owns the transport, the endpoint
//! paths and the error taxonomy.

mod client;
mod error;
pub mod paths;

pub use client::{ApiClient, decode_body};
pub use error::{ApiError, ApiResult, check_status};
