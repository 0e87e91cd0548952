//! Tests for command output formatting.

use rstest::rstest;

use crate::catalog::domain::{Epic, EpicId, Project, ProjectId, ProjectSummary, Role, User, UserId};
use crate::cli::OutputFormat;
use crate::cli::output::{
    dashboard_text, emit, epics_text, projects_text, session_text, signed_in_text, users_text,
};
use crate::session::domain::{CurrentUser, SignedIn, StoredSession};
use chrono::{TimeZone, Utc};

#[rstest]
fn json_output_is_pretty_printed() {
    let project = Project::new(ProjectId::new(1), "Apollo");

    let output = emit(OutputFormat::Json, &project, |_| String::new()).expect("serialises");

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value.get("project_name"), Some(&serde_json::json!("Apollo")));
    assert!(output.contains('\n'));
}

#[rstest]
fn text_output_uses_the_formatter() {
    let output = emit(OutputFormat::Text, &3_u32, |count| format!("{count} items"))
        .expect("formats");

    assert_eq!(output, "3 items");
}

#[rstest]
fn dashboard_lists_counts() {
    let summaries = [ProjectSummary {
        project: Project::new(ProjectId::new(1), "Apollo"),
        task_count: 2,
    }];

    assert_eq!(dashboard_text(&summaries), "#1 Apollo (2 tasks)");
    assert_eq!(dashboard_text(&[]), "No projects found");
}

#[rstest]
fn catalog_listings_render_one_line_per_entry() {
    let mut described = Project::new(ProjectId::new(2), "Gemini");
    described.project_description = Some("Two seats".to_owned());
    let projects = [Project::new(ProjectId::new(1), "Apollo"), described];
    let epics = [Epic::new(EpicId::new(8), "Landing", ProjectId::new(1))];
    let users = [User::new(UserId::new(1), "root").with_role(Role::Admin)];

    assert_eq!(projects_text(&projects), "#1 Apollo\n#2 Gemini: Two seats");
    assert_eq!(epics_text(&epics), "#8 Landing (project 1)");
    assert_eq!(users_text(&users), "#1 root (root) ADMIN");
    assert_eq!(epics_text(&[]), "No epics found");
}

fn signed_in(message: Option<&str>) -> SignedIn {
    SignedIn {
        session: StoredSession {
            user: CurrentUser {
                user_id: UserId::new(5),
                name: "Ann Example".to_owned(),
                username: "ann".to_owned(),
                role: Role::Member,
            },
            signed_in_at: Utc
                .with_ymd_and_hms(2024, 5, 1, 9, 30, 0)
                .single()
                .expect("fixed timestamp is valid"),
        },
        message: message.map(str::to_owned),
    }
}

#[rstest]
fn login_text_shows_the_server_message_before_the_session() {
    let output = signed_in_text(&signed_in(Some("Login successful")));

    assert_eq!(
        output,
        "Login successful\nAnn Example (ann, USER) signed in at 2024-05-01 09:30 UTC"
    );
}

#[rstest]
#[case(None)]
#[case(Some("  "))]
fn login_text_without_a_message_is_the_session_line(#[case] message: Option<&str>) {
    let login = signed_in(message);

    assert_eq!(signed_in_text(&login), session_text(&login.session));
}

#[rstest]
fn login_json_flattens_the_session_and_keeps_the_message() {
    let output = emit(OutputFormat::Json, &signed_in(Some("Welcome")), |_| String::new())
        .expect("serialises");

    let value: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
    assert_eq!(value.get("message"), Some(&serde_json::json!("Welcome")));
    assert_eq!(
        value.pointer("/user/username"),
        Some(&serde_json::json!("ann"))
    );
}
