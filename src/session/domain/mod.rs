//! Domain model for the signed-in user session.
//!
//! A session is created at login, persisted as a single record, and removed
//! at logout. Services never read it implicitly: they receive a
//! [`SessionContext`] when they are constructed.

mod context;
mod credentials;
mod error;
mod user;

pub use context::SessionContext;
pub use credentials::Credentials;
pub use error::SessionDomainError;
pub use user::{CurrentUser, LoginResponse, SignedIn, StoredSession};
