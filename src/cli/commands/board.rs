//! Board display and drag-and-drop moves.

use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};

use crate::board::{
    domain::{DragLocation, ProjectId, TaskId},
    render::render_board,
    services::{MoveOutcome, RefreshOutcome},
};
use crate::cli::{AppContext, OutputFormat};

/// Board subcommands.
#[derive(Debug, Subcommand)]
pub enum BoardCommand {
    /// Show the board of a project.
    Show(ShowArgs),
    /// Move a task to another column.
    Move(MoveArgs),
}

/// Arguments for `tablero board show`.
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Project identifier.
    #[arg(long, short = 'p')]
    pub project: ProjectId,
}

/// Arguments for `tablero board move`.
#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Project identifier.
    #[arg(long, short = 'p')]
    pub project: ProjectId,

    /// Task to move.
    #[arg(long, short = 't')]
    pub task: TaskId,

    /// Destination column name.
    #[arg(long)]
    pub to: String,

    /// Destination position within the column.
    #[arg(long, default_value_t = 0)]
    pub index: usize,
}

/// Executes a board subcommand.
///
/// # Errors
///
/// Returns an error when nobody is signed in, the board cannot be fetched,
/// or the move is rejected.
pub async fn execute(command: BoardCommand, context: &AppContext) -> Result<String> {
    match command {
        BoardCommand::Show(args) => show(args, context).await,
        BoardCommand::Move(args) => move_task(args, context).await,
    }
}

async fn show(args: ShowArgs, context: &AppContext) -> Result<String> {
    let viewer = context.viewer().await?;
    let board = context.board(args.project, viewer);
    board.refresh().await?;
    let projection = board.projection();
    match context.format() {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(projection.columns())?),
        OutputFormat::Text => Ok(render_board(&projection, args.project, board.viewer())?),
    }
}

async fn move_task(args: MoveArgs, context: &AppContext) -> Result<String> {
    let viewer = context.viewer().await?;
    let board = context.board(args.project, viewer);
    board.refresh().await?;
    let source = board
        .projection()
        .locate(args.task)
        .with_context(|| format!("task {} is not on the board of project {}", args.task, args.project))?;
    let destination = DragLocation::new(args.to, args.index);

    let outcome = board
        .move_task(args.task, &source, Some(&destination))
        .await?;
    Ok(match outcome {
        MoveOutcome::Unchanged => format!("Task {} is already there", args.task),
        MoveOutcome::Moved(RefreshOutcome::Stale) => format!(
            "Moved task {} to {}; the board could not be refreshed",
            args.task,
            destination.column()
        ),
        MoveOutcome::Moved(_) => format!("Moved task {} to {}", args.task, destination.column()),
    })
}
