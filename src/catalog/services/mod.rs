//! Application services for the administrative catalog.

mod service;

pub use service::{CatalogError, CatalogResult, CatalogService};
