//! Administrative catalog: projects, epics, users, and the dashboard.
//!
//! Management operations require an administrator principal. The dashboard
//! is open to every signed-in user.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
