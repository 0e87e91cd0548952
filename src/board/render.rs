//! Plain-text rendering of a board projection.

use minijinja::Environment;
use serde::Serialize;
use thiserror::Error;

use crate::board::domain::{BoardCard, BoardColumn, BoardProjection, ProjectId};
use crate::session::domain::SessionContext;

const BOARD_TEMPLATE: &str = "\
{{ heading }}
{% for column in columns %}

== {{ column.name }} ({{ column.cards | length }}){% if column.orphan %} [unknown state]{% endif %}

{% for card in column.cards %}
  #{{ card.id }} {{ card.title }}
{% if card.description %}
    {{ card.description }}
{% endif %}
    Epic: {{ card.epic }}
    Assigned to: {{ card.assignees }}
    Due: {{ card.due }}
{% else %}
  (empty)
{% endfor %}
{% endfor %}
";

/// Error returned when a board cannot be rendered.
#[derive(Debug, Error)]
#[error("failed to render board: {0}")]
pub struct RenderError(#[from] minijinja::Error);

#[derive(Serialize)]
struct BoardView<'a> {
    heading: String,
    columns: Vec<ColumnView<'a>>,
}

#[derive(Serialize)]
struct ColumnView<'a> {
    name: &'a str,
    orphan: bool,
    cards: Vec<CardView<'a>>,
}

#[derive(Serialize)]
struct CardView<'a> {
    id: u64,
    title: &'a str,
    description: &'a str,
    epic: &'a str,
    assignees: String,
    due: String,
}

impl<'a> From<&'a BoardColumn> for ColumnView<'a> {
    fn from(column: &'a BoardColumn) -> Self {
        Self {
            name: column.name(),
            orphan: column.is_orphan(),
            cards: column.cards().iter().map(CardView::from).collect(),
        }
    }
}

impl<'a> From<&'a BoardCard> for CardView<'a> {
    fn from(card: &'a BoardCard) -> Self {
        let task = card.task();
        Self {
            id: task.task_id.value(),
            title: &task.task_title,
            description: task.task_description.as_deref().unwrap_or_default(),
            epic: card.epic_name().unwrap_or("No epic"),
            assignees: assignee_label(card.assignee_names()),
            due: task
                .due_date
                .map_or_else(|| "No due date".to_owned(), |due| due.to_string()),
        }
    }
}

/// Joins assignee names for display; unknown users show as "unassigned".
#[must_use]
pub fn assignee_label(names: &[Option<String>]) -> String {
    if names.is_empty() {
        return "Unassigned".to_owned();
    }
    names
        .iter()
        .map(|name| name.as_deref().unwrap_or("unassigned"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns the board heading for a viewer.
#[must_use]
pub fn heading(project: ProjectId, viewer: &SessionContext) -> String {
    if viewer.is_admin() {
        format!("All tasks in project {project}")
    } else {
        format!("Your tasks in project {project}")
    }
}

/// Renders the projection as text, one block per column.
///
/// # Errors
///
/// Returns [`RenderError`] when template evaluation fails.
pub fn render_board(
    projection: &BoardProjection,
    project: ProjectId,
    viewer: &SessionContext,
) -> Result<String, RenderError> {
    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    let view = BoardView {
        heading: heading(project, viewer),
        columns: projection.columns().iter().map(ColumnView::from).collect(),
    };
    Ok(environment.render_str(BOARD_TEMPLATE, view)?)
}
