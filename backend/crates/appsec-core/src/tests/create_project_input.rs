use crate::{ActionContext, CoreError, CreateProjectInput, NewProject};

use googletest::assert_that;
use googletest::prelude::eq;
use serde_json::json;

fn valid_input() -> CreateProjectInput {
    CreateProjectInput {
        label: Some("project-acme".to_string()),
        goal: Some("test".to_string()),
        scope: Some("test".to_string()),
        type_id: Some(1),
        estimated_start_date: Some("2023-09-01".to_string()),
        tags: Some(vec!["tag1".to_string(), "tag2".to_string()]),
    }
}

fn validation_message(input: CreateProjectInput) -> String {
    match input.validate() {
        Err(error @ CoreError::Validation { .. }) => error.to_string(),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn given_complete_input_when_validate_then_new_project() {
    let project = valid_input().validate().unwrap();

    assert_eq!(
        project,
        NewProject {
            label: "project-acme".to_string(),
            goal: "test".to_string(),
            scope: "test".to_string(),
            type_id: 1,
            start_date: Some("2023-09-01".to_string()),
            tags: vec!["tag1".to_string(), "tag2".to_string()],
        }
    );
}

#[test]
fn given_empty_label_when_validate_then_label_error() {
    let input = CreateProjectInput {
        label: Some(String::new()),
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"label\" is a required input parameter")
    );
}

#[test]
fn given_missing_label_when_validate_then_label_error() {
    let input = CreateProjectInput {
        label: None,
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"label\" is a required input parameter")
    );
}

#[test]
fn given_empty_goal_when_validate_then_goal_error() {
    let input = CreateProjectInput {
        goal: Some(String::new()),
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"goal\" is a required input parameter")
    );
}

#[test]
fn given_empty_scope_when_validate_then_scope_error() {
    let input = CreateProjectInput {
        scope: Some(String::new()),
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"scope\" is a required input parameter")
    );
}

#[test]
fn given_negative_type_id_when_validate_then_type_id_error() {
    let input = CreateProjectInput {
        type_id: Some(-1),
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"typeId\" is a required input parameter or has a invalid content")
    );
}

#[test]
fn given_zero_or_missing_type_id_when_validate_then_type_id_error() {
    for type_id in [Some(0), None] {
        let input = CreateProjectInput {
            type_id,
            ..valid_input()
        };

        assert_that!(
            validation_message(input).as_str(),
            eq("\"typeId\" is a required input parameter or has a invalid content")
        );
    }
}

#[test]
fn given_several_invalid_fields_when_validate_then_first_in_order_wins() {
    let input = CreateProjectInput {
        goal: None,
        scope: None,
        type_id: Some(-5),
        ..valid_input()
    };

    assert_that!(
        validation_message(input).as_str(),
        eq("\"goal\" is a required input parameter")
    );
}

#[test]
fn given_no_tags_when_validate_then_empty_tags() {
    let input = CreateProjectInput {
        tags: None,
        estimated_start_date: None,
        ..valid_input()
    };

    let project = input.validate().unwrap();

    assert!(project.tags.is_empty());
    assert!(project.start_date.is_none());
}

#[test]
fn given_camel_case_json_when_parsed_then_fields_mapped() {
    let ctx = ActionContext::new(json!({
        "label": "project-acme",
        "goal": "test",
        "scope": "test",
        "typeId": 3,
        "estimatedStartDate": "2023-09-01",
        "tags": ["a"]
    }));

    let input: CreateProjectInput = ctx.parse_input().unwrap();

    assert_eq!(input.type_id, Some(3));
    assert_eq!(input.estimated_start_date.as_deref(), Some("2023-09-01"));
    assert_eq!(input.tags, Some(vec!["a".to_string()]));
}

#[test]
fn given_null_label_when_parsed_and_validated_then_label_error() {
    let ctx = ActionContext::new(json!({
        "label": null,
        "goal": "test",
        "scope": "test",
        "typeId": 1
    }));

    let input: CreateProjectInput = ctx.parse_input().unwrap();

    assert_that!(
        validation_message(input).as_str(),
        eq("\"label\" is a required input parameter")
    );
}

#[test]
fn given_non_object_input_when_parsed_then_invalid_input() {
    let ctx = ActionContext::new(json!("project-acme"));

    let result = ctx.parse_input::<CreateProjectInput>();

    assert!(matches!(result, Err(CoreError::InvalidInput { .. })));
}

#[test]
fn given_non_integer_type_id_when_parsed_and_validated_then_type_id_error() {
    for type_id in [json!("abc"), json!(1.5), json!(null), json!([1])] {
        let ctx = ActionContext::new(json!({
            "label": "project-acme",
            "goal": "test",
            "scope": "test",
            "typeId": type_id
        }));

        let input: CreateProjectInput = ctx.parse_input().unwrap();

        assert_that!(
            validation_message(input).as_str(),
            eq("\"typeId\" is a required input parameter or has a invalid content")
        );
    }
}

#[test]
fn given_integral_float_type_id_when_parsed_then_accepted() {
    let ctx = ActionContext::new(json!({ "typeId": 2.0 }));

    let input: CreateProjectInput = ctx.parse_input().unwrap();

    assert_eq!(input.type_id, Some(2));
}

#[test]
fn given_empty_label_and_malformed_optionals_when_validated_then_label_error() {
    let ctx = ActionContext::new(json!({
        "label": "",
        "goal": "test",
        "scope": "test",
        "typeId": 1,
        "estimatedStartDate": 20230901,
        "tags": "x"
    }));

    let input: CreateProjectInput = ctx.parse_input().unwrap();

    assert_that!(
        validation_message(input).as_str(),
        eq("\"label\" is a required input parameter")
    );
}

#[test]
fn given_non_string_label_when_parsed_and_validated_then_label_error() {
    let ctx = ActionContext::new(json!({ "label": 5, "goal": "test" }));

    let input: CreateProjectInput = ctx.parse_input().unwrap();

    assert_that!(
        validation_message(input).as_str(),
        eq("\"label\" is a required input parameter")
    );
}

#[test]
fn given_malformed_tags_when_validated_then_empty_tags() {
    for tags in [json!("x"), json!([1, "a"]), json!({ "a": 1 })] {
        let ctx = ActionContext::new(json!({
            "label": "project-acme",
            "goal": "test",
            "scope": "test",
            "typeId": 1,
            "tags": tags
        }));

        let input: CreateProjectInput = ctx.parse_input().unwrap();
        let project = input.validate().unwrap();

        assert!(project.tags.is_empty());
    }
}
