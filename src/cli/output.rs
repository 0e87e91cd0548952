//! Output formatting shared by commands.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use crate::catalog::domain::{Epic, Project, ProjectSummary, User};
use crate::session::domain::{SignedIn, StoredSession};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
}

/// Formats `value` as JSON, or as text through `text`.
///
/// # Errors
///
/// Returns an error when JSON serialisation fails.
pub(super) fn emit<T>(format: OutputFormat, value: &T, text: impl FnOnce(&T) -> String) -> Result<String>
where
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Text => Ok(text(value)),
    }
}

pub(super) fn session_text(session: &StoredSession) -> String {
    format!(
        "{} ({}, {}) signed in at {}",
        session.user.name,
        session.user.username,
        session.user.role,
        session.signed_in_at.format("%Y-%m-%d %H:%M UTC")
    )
}

/// Server message first, when there is one, then the session line.
pub(super) fn signed_in_text(signed_in: &SignedIn) -> String {
    let summary = session_text(&signed_in.session);
    match signed_in.message.as_deref() {
        Some(message) if !message.trim().is_empty() => format!("{message}\n{summary}"),
        _ => summary,
    }
}

fn lines_or(lines: Vec<String>, empty: &str) -> String {
    if lines.is_empty() {
        empty.to_owned()
    } else {
        lines.join("\n")
    }
}

pub(super) fn dashboard_text(summaries: &[ProjectSummary]) -> String {
    lines_or(
        summaries
            .iter()
            .map(|summary| {
                format!(
                    "#{} {} ({} tasks)",
                    summary.project.project_id, summary.project.project_name, summary.task_count
                )
            })
            .collect(),
        "No projects found",
    )
}

pub(super) fn projects_text(projects: &[Project]) -> String {
    lines_or(
        projects
            .iter()
            .map(|project| match project.project_description.as_deref() {
                Some(description) if !description.is_empty() => {
                    format!("#{} {}: {description}", project.project_id, project.project_name)
                }
                _ => format!("#{} {}", project.project_id, project.project_name),
            })
            .collect(),
        "No projects found",
    )
}

pub(super) fn epics_text(epics: &[Epic]) -> String {
    lines_or(
        epics
            .iter()
            .map(|epic| {
                let project = epic
                    .project_id
                    .map_or_else(|| "no project".to_owned(), |id| format!("project {id}"));
                format!("#{} {} ({project})", epic.epic_id, epic.epic_name)
            })
            .collect(),
        "No epics found",
    )
}

pub(super) fn users_text(users: &[User]) -> String {
    lines_or(
        users
            .iter()
            .map(|user| {
                format!(
                    "#{} {} ({}) {}",
                    user.user_id, user.username, user.name, user.role
                )
            })
            .collect(),
        "No users found",
    )
}
