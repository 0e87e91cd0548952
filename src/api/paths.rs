//! REST endpoint paths, relative to the configured base URL.

use crate::board::domain::{EpicId, ProjectId, TaskId, TaskStateId, UserId};

/// Login endpoint.
pub const LOGIN: &str = "/api/auth/login";
/// Task state catalogue.
pub const TASK_STATES: &str = "/api/task-states";
/// User collection.
pub const USERS: &str = "/api/users";
/// User registration.
pub const REGISTER_USER: &str = "/api/users/register";
/// Project collection.
pub const PROJECTS: &str = "/api/projects";
/// Every task across projects.
pub const TASKS: &str = "/api/tasks";
/// Every epic across projects.
pub const EPICS: &str = "/api/epics";

/// Tasks belonging to a project.
#[must_use]
pub fn project_tasks(project: ProjectId) -> String {
    format!("{PROJECTS}/{project}/tasks")
}

/// Epics belonging to a project.
#[must_use]
pub fn project_epics(project: ProjectId) -> String {
    format!("{PROJECTS}/{project}/epics")
}

/// Single project resource.
#[must_use]
pub fn project(project: ProjectId) -> String {
    format!("{PROJECTS}/{project}")
}

/// Task creation within a project.
#[must_use]
pub fn create_task(project: ProjectId) -> String {
    format!("{TASKS}/project/{project}")
}

/// Single task resource.
#[must_use]
pub fn task(task: TaskId) -> String {
    format!("{TASKS}/{task}")
}

/// Moves a task to another state.
#[must_use]
pub fn change_task_state(task: TaskId, state: TaskStateId) -> String {
    format!("{TASKS}/{task}/change-state/{state}")
}

/// Assigns one user to a task.
#[must_use]
pub fn assign_user(task: TaskId, user: UserId) -> String {
    format!("{TASKS}/{task}/assign/{user}")
}

/// Removes every assignment from a task.
#[must_use]
pub fn unassign_all(task: TaskId) -> String {
    format!("{TASKS}/{task}/unassign-all")
}

/// Epic creation within a project.
#[must_use]
pub fn create_epic(project: ProjectId) -> String {
    format!("{EPICS}/project/{project}")
}

/// Single epic resource.
#[must_use]
pub fn epic(epic: EpicId) -> String {
    format!("{EPICS}/{epic}")
}

/// Single user resource.
#[must_use]
pub fn user(user: UserId) -> String {
    format!("{USERS}/{user}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(project_tasks(ProjectId::new(3)), "/api/projects/3/tasks")]
    #[case(project_epics(ProjectId::new(3)), "/api/projects/3/epics")]
    #[case(create_task(ProjectId::new(3)), "/api/tasks/project/3")]
    #[case(task(TaskId::new(12)), "/api/tasks/12")]
    #[case(
        change_task_state(TaskId::new(12), TaskStateId::new(4)),
        "/api/tasks/12/change-state/4"
    )]
    #[case(assign_user(TaskId::new(12), UserId::new(9)), "/api/tasks/12/assign/9")]
    #[case(unassign_all(TaskId::new(12)), "/api/tasks/12/unassign-all")]
    #[case(create_epic(ProjectId::new(3)), "/api/epics/project/3")]
    #[case(epic(EpicId::new(8)), "/api/epics/8")]
    #[case(user(UserId::new(9)), "/api/users/9")]
    #[case(project(ProjectId::new(3)), "/api/projects/3")]
    fn paths_match_server_routes(#[case] actual: String, #[case] expected: &str) {
        assert_eq!(actual, expected);
    }
}
