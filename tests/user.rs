use pretty_assertions::assert_eq;
use user_store::{
    app::{
        resource::iam::{CreateUser, UserQuery, UserResponse},
        use_case::iam::{create_user, get_user, MAX_FIELD_LENGTH},
    },
    error::{app::ApplicationError, persistence::PersistenceError, resource::ValidationErrorKind},
};

use crate::setup::{create_controller, create_service};

mod setup;

const USER1: CreateUser<'static> = CreateUser {
    id: "1",
    name: "user1",
    password: "password1",
};

#[test]
fn create_then_get_user() {
    let service = create_service();

    let created = create_user(&service, USER1).unwrap();
    assert_eq!(
        created,
        UserResponse {
            id: "1".into(),
            name: "user1".into(),
        }
    );

    let found = get_user(&service, UserQuery { id: "1" }).unwrap();
    assert_eq!(found, created);

    let stored = service.find_user("1").unwrap();
    assert_eq!(stored.password(), "password1");
}

#[test]
fn get_missing_user() {
    let service = create_service();

    let err = get_user(&service, UserQuery { id: "1" }).unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Persistence(PersistenceError::NotFound { ref id, .. }) if id == "1"
    ));
    assert_eq!(err.title(), "not_found");
}

#[test]
fn create_duplicated_user_keeps_first() {
    let service = create_service();

    create_user(&service, USER1).unwrap();
    create_user(
        &service,
        CreateUser {
            name: "other",
            ..USER1
        },
    )
    .unwrap();

    let found = get_user(&service, UserQuery { id: "1" }).unwrap();
    assert_eq!(found.name, "user1");
}

#[test]
fn create_user_with_empty_fields() {
    let service = create_service();
    let dto = CreateUser {
        id: "",
        name: "user1",
        password: "",
    };

    let err = create_user(&service, dto.clone()).unwrap_err();

    let ApplicationError::Validation(validation) = &err else {
        panic!("expected a validation error, got {err:?}");
    };
    assert_eq!(validation.resource, dto);
    assert_eq!(validation.resource_type, "iam::CreateUser");
    let paths: Vec<_> = validation.fields.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, ["/id", "/password"]);
    for field in &validation.fields {
        assert_eq!(field.kinds, [ValidationErrorKind::Required]);
    }
    assert_eq!(err.title(), "bad_request");

    assert!(service.find_user("").is_err());
}

#[test]
fn create_user_with_long_password_is_redacted() {
    let service = create_service();
    let password = "x".repeat(MAX_FIELD_LENGTH + 1);

    let err = create_user(
        &service,
        CreateUser {
            password: &password,
            ..USER1
        },
    )
    .unwrap_err();

    let ApplicationError::Validation(validation) = err else {
        panic!("expected a validation error");
    };
    assert_eq!(validation.fields.len(), 1);
    assert_eq!(validation.fields[0].path, "/password");
    assert_eq!(validation.fields[0].value, "<redacted>");
    assert_eq!(
        validation.fields[0].kinds,
        [ValidationErrorKind::MaxLength(MAX_FIELD_LENGTH as u64)]
    );
}

#[test]
fn controller_replies() {
    let controller = create_controller();

    let created = controller.create(USER1).unwrap();
    assert_eq!(created.id, "1");

    assert_eq!(controller.get_by_id("1").unwrap(), created);

    let err = controller.get_by_id("2").unwrap_err();
    assert_eq!(err.title, "not_found");
    assert_eq!(err.message, "iam::User of id \"2\" not found");
}

#[test]
fn controller_error_body_hides_password() {
    let controller = create_controller();

    let err = controller
        .create(CreateUser {
            name: "",
            ..USER1
        })
        .unwrap_err();
    let body = serde_json::to_value(&err).unwrap();

    assert_eq!(body["title"], "bad_request");
    assert_eq!(body["error"]["Validation"]["resource"]["id"], "1");
    assert!(body["error"]["Validation"]["resource"].get("password").is_none());
    assert!(!body.to_string().contains("password1"));
}
