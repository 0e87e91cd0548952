//! Command-line front end.
//!
//! Every command resolves to a string that the binary writes to standard
//! output, either human-readable text or pretty-printed JSON.
//!
//! Configuration comes from flags or the environment:
//!
//! - `TABLERO_API_URL`: API endpoint (default `http://localhost:4000`)
//! - `TABLERO_SESSION_DIR`: directory holding the session record
//! - `TABLERO_PASSWORD`: password for `tablero login`

pub mod commands;
mod context;
mod output;

use std::time::Duration;

use anyhow::Result;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{ClientConfig, DEFAULT_API_URL, default_session_dir};
pub use context::AppContext;
pub use output::OutputFormat;

/// Tablero: project task boards from the terminal.
#[derive(Debug, Parser)]
#[command(name = "tablero")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// API server URL.
    #[arg(long, env = "TABLERO_API_URL", default_value = DEFAULT_API_URL, global = true)]
    pub api_url: String,

    /// Directory holding the session record.
    #[arg(long, env = "TABLERO_SESSION_DIR", global = true)]
    pub session_dir: Option<Utf8PathBuf>,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout_secs: u64,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Log informational events to standard error.
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Returns the client configuration selected by flags and environment.
    #[must_use]
    pub fn config(&self) -> ClientConfig {
        ClientConfig::new(self.api_url.as_str())
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_session_dir(
                self.session_dir
                    .clone()
                    .unwrap_or_else(default_session_dir),
            )
    }
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and store the session.
    Login(commands::session::LoginArgs),
    /// Remove the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// List projects with their task counts.
    Dashboard,
    /// Show a project board or move a task on it.
    #[command(subcommand)]
    Board(commands::board::BoardCommand),
    /// Create, edit, or delete tasks.
    #[command(subcommand)]
    Task(commands::task::TaskCommand),
    /// Manage projects (administrators only).
    #[command(subcommand)]
    Project(commands::catalog::ProjectCommand),
    /// Manage epics (administrators only).
    #[command(subcommand)]
    Epic(commands::catalog::EpicCommand),
    /// Manage user accounts (administrators only).
    #[command(subcommand)]
    User(commands::catalog::UserCommand),
}

/// Runs a parsed command line and returns the text to print.
///
/// # Errors
///
/// Returns an error when the API client cannot be built, the command needs
/// a session that does not exist, or the underlying operation fails.
pub async fn run(cli: Cli) -> Result<String> {
    let context = AppContext::new(cli.config(), cli.format)?;
    match cli.command {
        Commands::Login(args) => commands::session::login(args, &context).await,
        Commands::Logout => commands::session::logout(&context).await,
        Commands::Whoami => commands::session::whoami(&context).await,
        Commands::Dashboard => commands::catalog::dashboard(&context).await,
        Commands::Board(command) => commands::board::execute(command, &context).await,
        Commands::Task(command) => commands::task::execute(command, &context).await,
        Commands::Project(command) => commands::catalog::projects(command, &context).await,
        Commands::Epic(command) => commands::catalog::epics(command, &context).await,
        Commands::User(command) => commands::catalog::users(command, &context).await,
    }
}

#[cfg(test)]
mod tests;
