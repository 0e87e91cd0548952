//! Tests for catalog write payloads.

use crate::catalog::domain::{
    CatalogDomainError, EpicFields, NewUser, ProjectFields, ProjectId, Role, UserUpdate,
};
use rstest::rstest;

#[rstest]
fn project_fields_require_a_name_but_not_a_description() {
    assert_eq!(
        ProjectFields::new("  ", "desc"),
        Err(CatalogDomainError::EmptyProjectName)
    );
    let fields = ProjectFields::new(" Apollo ", "").expect("name is enough");
    assert_eq!(fields.name(), "Apollo");
    assert_eq!(fields.description(), "");
}

#[rstest]
fn epic_fields_omit_an_unset_project() {
    let fields = EpicFields::new("Onboarding", "First week").expect("fields are valid");

    let body = serde_json::to_value(&fields).expect("fields serialise");

    assert_eq!(
        body,
        serde_json::json!({ "epic_name": "Onboarding", "epic_description": "First week" })
    );
}

#[rstest]
fn epic_fields_carry_a_target_project() {
    let fields = EpicFields::new("Onboarding", "")
        .expect("fields are valid")
        .with_project(Some(ProjectId::new(4)));

    let body = serde_json::to_value(&fields).expect("fields serialise");

    assert_eq!(body.get("project_id"), Some(&serde_json::json!(4)));
}

#[rstest]
#[case("", "Ann", "pw", CatalogDomainError::EmptyUsername)]
#[case("ann", " ", "pw", CatalogDomainError::EmptyName)]
#[case("ann", "Ann", "", CatalogDomainError::EmptyPassword)]
fn new_user_rejects_blank_fields(
    #[case] username: &str,
    #[case] name: &str,
    #[case] password: &str,
    #[case] expected: CatalogDomainError,
) {
    assert_eq!(NewUser::new(username, name, password).err(), Some(expected));
}

#[rstest]
fn new_user_sends_the_password_as_password_hash() {
    let user = NewUser::new("ann", "Ann Example", "s3cret")
        .expect("user is valid")
        .with_email("ann@example.com")
        .with_role(Role::Admin);

    let body = serde_json::to_value(&user).expect("user serialises");

    assert_eq!(
        body,
        serde_json::json!({
            "username": "ann",
            "name": "Ann Example",
            "email": "ann@example.com",
            "role": "ADMIN",
            "password_hash": "s3cret"
        })
    );
    assert!(!format!("{user:?}").contains("s3cret"));
}

#[rstest]
fn user_update_defaults_to_member() {
    let update = UserUpdate::new("bo", "Bo").expect("update is valid");

    assert_eq!(update.role(), Role::Member);
    assert_eq!(update.email(), None);
}
