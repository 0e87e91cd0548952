//! Application services for the signed-in session.

mod service;

pub use service::{SessionError, SessionResult, SessionService};
