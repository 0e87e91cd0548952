//! Kanban board for a project.
//!
//! Fetches tasks, epics, task states and users, projects them into ordered
//! per-state columns, and persists drag-and-drop moves. The module follows
//! hexagonal architecture:
//!
//! - Domain types and the projection engine in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Text rendering in [`render`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod render;
pub mod services;

#[cfg(test)]
mod tests;
