//! Domain model for the administrative catalog: projects, epics, users.
//!
//! Read models are shared with the board where they overlap ([`Epic`],
//! [`User`]); this module adds projects and the validated write payloads.

mod error;
mod fields;
mod project;

pub use crate::board::domain::{Epic, EpicId, ProjectId, Role, Task, User, UserId};
pub use error::CatalogDomainError;
pub use fields::{EpicFields, NewUser, UserUpdate};
pub use project::{Project, ProjectFields, ProjectSummary};
