//! Port contracts for the administrative catalog.

pub mod api;

pub use api::CatalogApi;
#[cfg(test)]
pub use api::MockCatalogApi;
