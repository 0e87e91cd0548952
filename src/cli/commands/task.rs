//! Task create, edit, and delete commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use crate::board::{
    domain::{DueDate, EpicId, ProjectId, TaskFields, TaskId, UserId},
    services::RefreshOutcome,
};
use crate::cli::AppContext;
use crate::cli::output::emit;

/// Task subcommands.
#[derive(Debug, Subcommand)]
pub enum TaskCommand {
    /// Create a task on a project board.
    Create(CreateArgs),
    /// Edit a task.
    Edit(EditArgs),
    /// Delete a task (administrators only).
    Delete(DeleteArgs),
}

/// Editable task fields shared by create and edit.
#[derive(Debug, Args)]
pub struct TaskFieldArgs {
    /// Task title.
    #[arg(long)]
    pub title: String,

    /// Task description.
    #[arg(long)]
    pub description: String,

    /// Due date as `YYYY-MM-DD`.
    #[arg(long)]
    pub due: Option<DueDate>,

    /// Epic identifier.
    #[arg(long)]
    pub epic: Option<EpicId>,

    /// Users to assign (administrators only), comma separated.
    #[arg(long = "assign", value_delimiter = ',')]
    pub assign: Vec<UserId>,
}

impl TaskFieldArgs {
    fn into_parts(self) -> Result<(TaskFields, Option<Vec<UserId>>)> {
        let fields = TaskFields::new(self.title, self.description)?
            .with_due_date(self.due)
            .with_epic(self.epic);
        let selection = (!self.assign.is_empty()).then_some(self.assign);
        Ok((fields, selection))
    }
}

/// Arguments for `tablero task create`.
#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Project identifier.
    #[arg(long, short = 'p')]
    pub project: ProjectId,

    /// Task fields.
    #[command(flatten)]
    pub fields: TaskFieldArgs,
}

/// Arguments for `tablero task edit`.
#[derive(Debug, Args)]
pub struct EditArgs {
    /// Project identifier.
    #[arg(long, short = 'p')]
    pub project: ProjectId,

    /// Task to edit.
    #[arg(long, short = 't')]
    pub task: TaskId,

    /// Task fields.
    #[command(flatten)]
    pub fields: TaskFieldArgs,
}

/// Arguments for `tablero task delete`.
#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Project identifier.
    #[arg(long, short = 'p')]
    pub project: ProjectId,

    /// Task to delete.
    #[arg(long, short = 't')]
    pub task: TaskId,
}

/// Executes a task subcommand.
///
/// # Errors
///
/// Returns an error when nobody is signed in, the input is invalid, or a
/// write is rejected. A partially applied edit names the task so the same
/// command can be re-run.
pub async fn execute(command: TaskCommand, context: &AppContext) -> Result<String> {
    let viewer = context.viewer().await?;
    match command {
        TaskCommand::Create(args) => {
            let (fields, selection) = args.fields.into_parts()?;
            let created = context
                .board(args.project, viewer)
                .create_task(fields, selection)
                .await?;
            let value = json!({
                "task_id": created.task_id,
                "assigned": created.assigned,
                "refreshed": refreshed(&created.refresh),
            });
            emit(context.format(), &value, |_| {
                with_refresh_note(format!("Created task {}", created.task_id), &created.refresh)
            })
        }
        TaskCommand::Edit(args) => {
            let (fields, selection) = args.fields.into_parts()?;
            let refresh = context
                .board(args.project, viewer)
                .edit_task(args.task, fields, selection)
                .await?;
            let value = json!({ "task_id": args.task, "refreshed": refreshed(&refresh) });
            emit(context.format(), &value, |_| {
                with_refresh_note(format!("Updated task {}", args.task), &refresh)
            })
        }
        TaskCommand::Delete(args) => {
            let refresh = context
                .board(args.project, viewer)
                .delete_task(args.task)
                .await?;
            let value = json!({ "task_id": args.task, "refreshed": refreshed(&refresh) });
            emit(context.format(), &value, |_| {
                with_refresh_note(format!("Deleted task {}", args.task), &refresh)
            })
        }
    }
}

const fn refreshed(outcome: &RefreshOutcome) -> bool {
    matches!(outcome, RefreshOutcome::Applied(_))
}

fn with_refresh_note(message: String, outcome: &RefreshOutcome) -> String {
    if matches!(outcome, RefreshOutcome::Stale) {
        format!("{message}; the board could not be refreshed")
    } else {
        message
    }
}
