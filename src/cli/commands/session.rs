//! Login, logout, and identity commands.

use anyhow::Result;
use clap::Args;

use crate::cli::AppContext;
use crate::cli::output::{emit, session_text, signed_in_text};
use crate::session::domain::Credentials;

/// Arguments for `tablero login`.
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Account username.
    #[arg(long, short = 'u')]
    pub username: String,

    /// Account password.
    #[arg(long, env = "TABLERO_PASSWORD", hide_env_values = true)]
    pub password: String,
}

/// Signs in and stores the session.
///
/// # Errors
///
/// Returns an error for blank or rejected credentials, or when the session
/// cannot be stored.
pub async fn login(args: LoginArgs, context: &AppContext) -> Result<String> {
    let credentials = Credentials::new(args.username, args.password)?;
    let signed_in = context.session().login(&credentials).await?;
    emit(context.format(), &signed_in, signed_in_text)
}

/// Removes the stored session.
///
/// # Errors
///
/// Returns an error when the session record cannot be removed.
pub async fn logout(context: &AppContext) -> Result<String> {
    context.session().logout().await?;
    Ok("Signed out".to_owned())
}

/// Shows the signed-in user.
///
/// # Errors
///
/// Returns an error when nobody is signed in or the record is unreadable.
pub async fn whoami(context: &AppContext) -> Result<String> {
    let Some(session) = context.session().current().await? else {
        return Err(crate::session::services::SessionError::NotAuthenticated.into());
    };
    emit(context.format(), &session, session_text)
}
