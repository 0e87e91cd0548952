//! Adapter implementations of the session ports.

pub mod file;
pub mod http;
pub mod memory;
