//! Tablero: a terminal client for a project-management REST API.
//!
//! The centrepiece is the task board: the tasks of one project grouped into
//! columns by workflow state, rebuilt from the server after every change.
//!
//! # Architecture
//!
//! Tablero follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data and derivations with no I/O
//! - **Ports**: Abstract trait interfaces for the remote API and storage
//! - **Adapters**: HTTP implementations plus in-memory stand-ins
//! - **Services**: Orchestration over the ports, acting for one principal
//!
//! # Modules
//!
//! - [`board`]: Board projection, drag-and-drop moves, and task writes
//! - [`session`]: Login, logout, and the signed-in principal
//! - [`catalog`]: Administrative management and the dashboard
//! - [`api`]: Shared HTTP client and endpoint paths
//! - [`config`]: Client configuration
//! - [`cli`]: Command-line front end

pub mod api;
pub mod board;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod session;
