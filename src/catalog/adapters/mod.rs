//! Adapter implementations of the catalog port.

pub mod http;
pub mod memory;
