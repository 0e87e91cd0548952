//! Dashboard and administrative catalog commands.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};

use crate::catalog::domain::{
    EpicFields, EpicId, NewUser, ProjectFields, ProjectId, Role, UserId, UserUpdate,
};
use crate::cli::AppContext;
use crate::cli::output::{dashboard_text, emit, epics_text, projects_text, users_text};

/// Account role accepted on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    /// Administrator.
    Admin,
    /// Ordinary member.
    #[default]
    User,
}

impl From<RoleArg> for Role {
    fn from(value: RoleArg) -> Self {
        match value {
            RoleArg::Admin => Self::Admin,
            RoleArg::User => Self::Member,
        }
    }
}

/// Project subcommands.
#[derive(Debug, Subcommand)]
pub enum ProjectCommand {
    /// List projects.
    List,
    /// Create a project.
    Create(ProjectArgs),
    /// Update a project.
    Update {
        /// Project identifier.
        #[arg(long)]
        id: ProjectId,
        /// New fields.
        #[command(flatten)]
        fields: ProjectArgs,
    },
    /// Delete a project.
    Delete {
        /// Project identifier.
        #[arg(long)]
        id: ProjectId,
    },
}

/// Editable project fields.
#[derive(Debug, Args)]
pub struct ProjectArgs {
    /// Project name.
    #[arg(long)]
    pub name: String,

    /// Project description.
    #[arg(long, default_value = "")]
    pub description: String,
}

/// Epic subcommands.
#[derive(Debug, Subcommand)]
pub enum EpicCommand {
    /// List epics.
    List,
    /// Create an epic in a project.
    Create {
        /// Owning project.
        #[arg(long, short = 'p')]
        project: ProjectId,
        /// Epic fields.
        #[command(flatten)]
        fields: EpicArgs,
    },
    /// Update an epic.
    Update {
        /// Epic identifier.
        #[arg(long)]
        id: EpicId,
        /// Move the epic to this project.
        #[arg(long, short = 'p')]
        project: Option<ProjectId>,
        /// New fields.
        #[command(flatten)]
        fields: EpicArgs,
    },
    /// Delete an epic.
    Delete {
        /// Epic identifier.
        #[arg(long)]
        id: EpicId,
    },
}

/// Editable epic fields.
#[derive(Debug, Args)]
pub struct EpicArgs {
    /// Epic name.
    #[arg(long)]
    pub name: String,

    /// Epic description.
    #[arg(long, default_value = "")]
    pub description: String,
}

/// User subcommands.
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List user accounts.
    List,
    /// Register an account.
    Register {
        /// Login name.
        #[arg(long)]
        username: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Initial password.
        #[arg(long, env = "TABLERO_NEW_PASSWORD", hide_env_values = true)]
        password: String,
        /// Contact address.
        #[arg(long, default_value = "")]
        email: String,
        /// Account role.
        #[arg(long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },
    /// Update an account.
    Update {
        /// Account identifier.
        #[arg(long)]
        id: UserId,
        /// Login name.
        #[arg(long)]
        username: String,
        /// Display name.
        #[arg(long)]
        name: String,
        /// Contact address.
        #[arg(long)]
        email: Option<String>,
        /// Account role.
        #[arg(long, value_enum, default_value_t = RoleArg::User)]
        role: RoleArg,
    },
    /// Delete an account.
    Delete {
        /// Account identifier.
        #[arg(long)]
        id: UserId,
    },
}

/// Lists projects with task counts for any signed-in user.
///
/// # Errors
///
/// Returns an error when nobody is signed in or the projects cannot be
/// listed.
pub async fn dashboard(context: &AppContext) -> Result<String> {
    let catalog = context.catalog(context.viewer().await?);
    let summaries = catalog.dashboard().await?;
    emit(context.format(), &summaries, |items| dashboard_text(items))
}

/// Executes a project subcommand.
///
/// # Errors
///
/// Returns an error for non-administrators, invalid input, or API failures.
pub async fn projects(command: ProjectCommand, context: &AppContext) -> Result<String> {
    let catalog = context.catalog(context.viewer().await?);
    let listing = match command {
        ProjectCommand::List => catalog.projects().await?,
        ProjectCommand::Create(args) => {
            catalog
                .create_project(ProjectFields::new(args.name, args.description)?)
                .await?
        }
        ProjectCommand::Update { id, fields } => {
            catalog
                .update_project(id, ProjectFields::new(fields.name, fields.description)?)
                .await?
        }
        ProjectCommand::Delete { id } => catalog.delete_project(id).await?,
    };
    emit(context.format(), &listing, |items| projects_text(items))
}

/// Executes an epic subcommand.
///
/// # Errors
///
/// Returns an error for non-administrators, invalid input, or API failures.
pub async fn epics(command: EpicCommand, context: &AppContext) -> Result<String> {
    let catalog = context.catalog(context.viewer().await?);
    let listing = match command {
        EpicCommand::List => catalog.epics().await?,
        EpicCommand::Create { project, fields } => {
            catalog
                .create_epic(project, EpicFields::new(fields.name, fields.description)?)
                .await?
        }
        EpicCommand::Update {
            id,
            project,
            fields,
        } => {
            let update =
                EpicFields::new(fields.name, fields.description)?.with_project(project);
            catalog.update_epic(id, update).await?
        }
        EpicCommand::Delete { id } => catalog.delete_epic(id).await?,
    };
    emit(context.format(), &listing, |items| epics_text(items))
}

/// Executes a user subcommand.
///
/// # Errors
///
/// Returns an error for non-administrators, invalid input, or API failures.
pub async fn users(command: UserCommand, context: &AppContext) -> Result<String> {
    let catalog = context.catalog(context.viewer().await?);
    let listing = match command {
        UserCommand::List => catalog.users().await?,
        UserCommand::Register {
            username,
            name,
            password,
            email,
            role,
        } => {
            let user = NewUser::new(username, name, password)?
                .with_email(email)
                .with_role(role.into());
            catalog.register_user(user).await?
        }
        UserCommand::Update {
            id,
            username,
            name,
            email,
            role,
        } => {
            let update = UserUpdate::new(username, name)?
                .with_email(email)
                .with_role(role.into());
            catalog.update_user(id, update).await?
        }
        UserCommand::Delete { id } => catalog.delete_user(id).await?,
    };
    emit(context.format(), &listing, |items| users_text(items))
}
