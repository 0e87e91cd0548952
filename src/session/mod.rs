//! Signed-in user session.
//!
//! The session is the only client state that survives a restart. It is
//! written at login, removed at logout, and turned into a
//! [`domain::SessionContext`] that other services receive explicitly.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
