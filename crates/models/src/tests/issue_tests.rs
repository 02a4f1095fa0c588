use serde_json::json;
use uuid::Uuid;

use crate::errors::ModelError;
use crate::issue::{self, IssueInput, TaskedUserInput};

#[test]
fn full_payload_deserializes_camel_case() {
    let input: IssueInput = serde_json::from_value(json!({
        "taskedUser": "alice",
        "issueLevel": 2,
        "state": "open",
        "startDate": "2024-01-01",
        "finishDate": "2024-02-01"
    }))
    .unwrap();
    assert_eq!(input.tasked_user.as_deref(), Some("alice"));
    assert_eq!(input.issue_level, Some(2));
    assert_eq!(input.finish_date.as_deref(), Some("2024-02-01"));
    assert!(input.validate().is_ok());
}

#[test]
fn empty_payload_is_valid() {
    let input: IssueInput = serde_json::from_value(json!({})).unwrap();
    assert_eq!(input, IssueInput::default());
    assert!(input.validate().is_ok());
}

#[test]
fn wrong_field_type_fails_to_decode() {
    let res = serde_json::from_value::<IssueInput>(json!({"issueLevel": "high"}));
    assert!(res.is_err());
    let res = serde_json::from_value::<IssueInput>(json!({"taskedUser": 7}));
    assert!(res.is_err());
}

#[test]
fn caller_supplied_id_rejected() {
    for body in [json!({"id": "abc", "state": "open"}), json!({"_id": "abc"})] {
        let input: IssueInput = serde_json::from_value(body).unwrap();
        assert!(matches!(input.validate(), Err(ModelError::Validation(_))));
    }
}

#[test]
fn blank_and_oversized_fields_rejected() {
    let blank = IssueInput { tasked_user: Some("   ".into()), ..Default::default() };
    assert!(blank.validate().is_err());

    let long_state = IssueInput { state: Some("x".repeat(issue::MAX_STATE_LEN + 1)), ..Default::default() };
    assert!(long_state.validate().is_err());

    let long_date = IssueInput { start_date: Some("9".repeat(issue::MAX_DATE_LEN + 1)), ..Default::default() };
    assert!(long_date.validate().is_err());

    // dates are free-form; an empty string is stored as given
    let empty_date = IssueInput { finish_date: Some(String::new()), ..Default::default() };
    assert!(empty_date.validate().is_ok());
}

#[test]
fn tasked_user_input_allows_null() {
    let input: TaskedUserInput = serde_json::from_value(json!({"taskedUser": null})).unwrap();
    assert_eq!(input.tasked_user, None);
    assert!(input.validate().is_ok());

    let input: TaskedUserInput = serde_json::from_value(json!({"taskedUser": ""})).unwrap();
    assert!(input.validate().is_err());
}

#[test]
fn model_serializes_nulls_for_absent_fields() {
    let id = Uuid::new_v4();
    let m = IssueInput { tasked_user: Some("bob".into()), ..Default::default() }.into_model(id);
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["id"], json!(id.to_string()));
    assert_eq!(v["taskedUser"], json!("bob"));
    assert!(v["issueLevel"].is_null());
    assert!(v["state"].is_null());
    assert!(v.get("tasked_user").is_none());
}

#[test]
fn parse_issue_id_rejects_malformed() {
    let id = Uuid::new_v4();
    assert_eq!(issue::parse_issue_id(&id.to_string()).unwrap(), id);
    assert!(matches!(issue::parse_issue_id("not-an-id"), Err(ModelError::Validation(_))));
    assert!(issue::parse_issue_id("").is_err());
}
