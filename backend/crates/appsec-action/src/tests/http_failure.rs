use crate::{ActionError, AppSecFlowClient};

use appsec_config::ConvisoConfig;

use googletest::assert_that;
use googletest::prelude::eq;
use reqwest::StatusCode;

fn status(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap()
}

fn message(code: u16, wire_reason: Option<&str>, body: Option<&str>) -> String {
    let status = status(code);
    let status_text = AppSecFlowClient::status_text(status, wire_reason.map(str::as_bytes));
    AppSecFlowClient::http_failure_message(status, &status_text, body.map(str::as_bytes))
}

#[test]
fn given_401_when_mapped_then_token_message() {
    assert_that!(
        message(401, None, None).as_str(),
        eq("Unauthorized, please use a valid token")
    );
    assert_that!(
        message(401, Some("Token Expired"), None).as_str(),
        eq("Unauthorized, please use a valid token")
    );
}

#[test]
fn given_404_when_mapped_then_url_message() {
    assert_that!(
        message(404, None, None).as_str(),
        eq("Backend URL Not Found. please check the correct graphql URL")
    );
}

#[test]
fn given_canonical_reason_when_mapped_then_reason_used() {
    assert_that!(message(500, None, None).as_str(), eq("Internal Server Error"));
    assert_that!(
        message(403, None, Some(r#"{"errors":[{"msg":"ignored"}]}"#)).as_str(),
        eq("Forbidden")
    );
}

#[test]
fn given_custom_reason_when_mapped_then_wire_text_used() {
    assert_that!(
        message(500, Some("Database Down"), None).as_str(),
        eq("Database Down")
    );
}

#[test]
fn given_empty_reason_when_mapped_then_first_body_msg_used() {
    let body = r#"{"errors":[{"msg":"Quota exceeded"},{"msg":"second"}]}"#;

    assert_that!(message(500, Some(""), Some(body)).as_str(), eq("Quota exceeded"));
    assert_that!(message(599, None, Some(body)).as_str(), eq("Quota exceeded"));
}

#[test]
fn given_empty_reason_and_unreadable_body_when_mapped_then_unknown_error() {
    assert_that!(message(599, None, Some("<html>")).as_str(), eq("Unknown error"));
    assert_that!(message(500, Some(""), None).as_str(), eq("Unknown error"));
}

#[test]
fn given_status_text_when_checked_then_body_needed_only_if_empty() {
    assert_that!(
        AppSecFlowClient::needs_error_body(StatusCode::UNAUTHORIZED, ""),
        eq(false)
    );
    assert_that!(
        AppSecFlowClient::needs_error_body(StatusCode::NOT_FOUND, ""),
        eq(false)
    );
    assert_that!(
        AppSecFlowClient::needs_error_body(StatusCode::INTERNAL_SERVER_ERROR, "Database Down"),
        eq(false)
    );
    assert_that!(
        AppSecFlowClient::needs_error_body(StatusCode::INTERNAL_SERVER_ERROR, ""),
        eq(true)
    );
}

#[test]
fn given_wire_reason_when_status_text_then_trimmed() {
    assert_that!(
        AppSecFlowClient::status_text(status(500), Some(" Database Down ".as_bytes())).as_str(),
        eq("Database Down")
    );
    assert_that!(
        AppSecFlowClient::status_text(status(599), None).as_str(),
        eq("")
    );
}

#[test]
fn test_error_display_templates() {
    assert_that!(
        ActionError::http_status(401, "Unauthorized, please use a valid token")
            .to_string()
            .as_str(),
        eq("Failed to create project, status 401 - Unauthorized, please use a valid token")
    );
    assert_that!(
        ActionError::rejected("Label has already been taken")
            .to_string()
            .as_str(),
        eq("Failed to create project - Label has already been taken")
    );
}

#[test]
fn test_client_targets_graphql_path() {
    let config = ConvisoConfig {
        base_url: "https://app.convisoappsec.com".to_string(),
        api_key: "token".to_string(),
        company_id: 1,
    };

    let client = AppSecFlowClient::new(&config).unwrap();

    assert_that!(
        client.graphql_url().as_str(),
        eq("https://app.convisoappsec.com/graphql")
    );
}

#[test]
fn test_client_rejects_unparseable_base_url() {
    let config = ConvisoConfig {
        base_url: "not a url".to_string(),
        api_key: "token".to_string(),
        company_id: 1,
    };

    let result = AppSecFlowClient::new(&config);

    assert!(matches!(result, Err(ActionError::InvalidUrl { .. })));
}
