//! End-to-end behaviour of `make_action` and the creators it returns

use complete_action::prelude::*;
use serde_json::{json, Map, Value};

fn custom_payload(payload: Option<Value>) -> Map<String, Value> {
    match payload {
        Some(Value::Object(fields)) => fields,
        _ => Map::new(),
    }
}

fn products(config: ActionConfig) -> ActionCreator {
    make_action("Products", config).unwrap()
}

// ============================================================================
// Missing parameters
// ============================================================================

#[test]
fn test_missing_name() {
    let err = make_action("", ActionConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "You need to set the name of the action.");
}

#[test]
fn test_missing_request_type() {
    let action = products(ActionConfig::default());

    let err = action.create("", None).unwrap_err();
    assert_eq!(err.to_string(), "You should define your request type.");
}

#[test]
fn test_unknown_request_type() {
    let action = products(ActionConfig::default());

    assert!(matches!(
        action.create("bogus", None),
        Err(ActionError::UnknownVariant(ref s)) if s == "bogus"
    ));
}

// ============================================================================
// Normal flow
// ============================================================================

#[test]
fn test_default_types() {
    let action = products(ActionConfig::default());

    assert_eq!(
        action.create("request", None).unwrap(),
        json!({ "type": "GET_PRODUCTS" })
    );
    assert_eq!(
        action.create("success", None).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL" })
    );
    assert_eq!(
        action.create("fail", None).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE" })
    );
}

#[test]
fn test_default_types_with_payload() {
    let action = products(ActionConfig::default());

    assert_eq!(
        action.create("request", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS", "payload": { "test": 123 } })
    );
    assert_eq!(
        action.create("success", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "payload": { "test": 123 } })
    );
    assert_eq!(
        action.create("fail", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE", "payload": { "test": 123 } })
    );
}

#[test]
fn test_custom_prefix() {
    let action = products(ActionConfig::default().with_prefix("FETCH"));

    assert_eq!(
        action.create("request", None).unwrap(),
        json!({ "type": "FETCH_PRODUCTS" })
    );
    assert_eq!(
        action.create("success", None).unwrap(),
        json!({ "type": "FETCH_PRODUCTS_SUCCESSFUL" })
    );
    assert_eq!(
        action.create("fail", None).unwrap(),
        json!({ "type": "FETCH_PRODUCTS_FAILURE" })
    );
}

#[test]
fn test_custom_success_suffix() {
    let action = products(ActionConfig::default().with_success_suffix("WITH_SUCCESS"));
    assert_eq!(
        action.create("success", None).unwrap(),
        json!({ "type": "GET_PRODUCTS_WITH_SUCCESS" })
    );

    let action = products(
        ActionConfig::default()
            .with_prefix("FETCH")
            .with_success_suffix("WITH_SUCCESS"),
    );
    assert_eq!(
        action.create("success", None).unwrap(),
        json!({ "type": "FETCH_PRODUCTS_WITH_SUCCESS" })
    );
}

#[test]
fn test_custom_fail_suffix() {
    let action = products(ActionConfig::default().with_fail_suffix("REJECTED"));
    assert_eq!(
        action.create("fail", None).unwrap(),
        json!({ "type": "GET_PRODUCTS_REJECTED" })
    );

    let action = products(
        ActionConfig::default()
            .with_prefix("FETCH")
            .with_fail_suffix("REJECTED"),
    );
    assert_eq!(
        action.create("fail", None).unwrap(),
        json!({ "type": "FETCH_PRODUCTS_REJECTED" })
    );
}

#[test]
fn test_namespace() {
    let action = make_action("Items", ActionConfig::default().with_namespace("PRODUCTS")).unwrap();

    assert_eq!(
        action.create("request", None).unwrap(),
        json!({ "type": "PRODUCTS/GET_ITEMS" })
    );
}

#[test]
fn test_empty_options_use_defaults() {
    let action = products(
        ActionConfig::default()
            .with_namespace("")
            .with_prefix("")
            .with_success_suffix("")
            .with_fail_suffix(""),
    );

    assert_eq!(action.types().request, "GET_PRODUCTS");
    assert_eq!(action.types().success, "GET_PRODUCTS_SUCCESSFUL");
    assert_eq!(action.types().fail, "GET_PRODUCTS_FAILURE");
}

#[test]
fn test_repeated_calls_are_deep_equal() {
    let action = products(ActionConfig::default().with_success_payload(custom_payload));

    for variant in Variant::ALL {
        let first = action.dispatch(variant, Some(json!({ "test": 123 }))).unwrap();
        let second = action.dispatch(variant, Some(json!({ "test": 123 }))).unwrap();
        assert_eq!(first, second);
    }
}

// ============================================================================
// Custom payloads
// ============================================================================

#[test]
fn test_custom_request_payload() {
    let action = products(ActionConfig::default().with_request_payload(custom_payload));

    assert_eq!(
        action.create("request", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS", "test": 123 })
    );
    assert_eq!(
        action.create("success", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "payload": { "test": 123 } })
    );
    assert_eq!(
        action.create("fail", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE", "payload": { "test": 123 } })
    );
}

#[test]
fn test_custom_success_payload() {
    let action = products(ActionConfig::default().with_success_payload(custom_payload));

    assert_eq!(
        action.create("success", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "test": 123 })
    );
    assert_eq!(
        action.create("request", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS", "payload": { "test": 123 } })
    );
    assert_eq!(
        action.create("fail", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE", "payload": { "test": 123 } })
    );
}

#[test]
fn test_custom_failure_payload() {
    let action = products(ActionConfig::default().with_failure_payload(custom_payload));

    assert_eq!(
        action.create("fail", Some(json!({ "test": "error" }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE", "test": "error" })
    );
    assert_eq!(
        action.create("request", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS", "payload": { "test": 123 } })
    );
    assert_eq!(
        action.create("success", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "payload": { "test": 123 } })
    );
}

#[test]
fn test_all_custom_payloads() {
    let action = products(
        ActionConfig::default()
            .with_request_payload(custom_payload)
            .with_success_payload(custom_payload)
            .with_failure_payload(custom_payload),
    );

    assert_eq!(
        action.create("request", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS", "test": 123 })
    );
    assert_eq!(
        action.create("success", Some(json!({ "test": 123 }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_SUCCESSFUL", "test": 123 })
    );
    assert_eq!(
        action.create("fail", Some(json!({ "test": "error" }))).unwrap(),
        json!({ "type": "GET_PRODUCTS_FAILURE", "test": "error" })
    );
}

#[test]
fn test_not_callable_hooks_fail_lazily() {
    for (key, variant) in [
        ("customRequestPayload", "request"),
        ("customSuccessPayload", "success"),
        ("customFailurePayload", "fail"),
    ] {
        let mut options = Map::new();
        options.insert(key.to_string(), json!("not a function"));
        let action =
            make_action_from_value(&json!("products"), Some(&Value::Object(options))).unwrap();

        let err = action.create(variant, Some(json!({ "test": 123 }))).unwrap_err();
        assert_eq!(err.to_string(), format!("options.{key} should be a function."));

        // The other variants are unaffected
        for other in Variant::ALL.into_iter().filter(|v| v.as_str() != variant) {
            assert!(action.dispatch(other, Some(json!({ "test": 123 }))).is_ok());
        }
    }
}

// ============================================================================
// Recording
// ============================================================================

#[test]
fn test_recorder_through_facade() {
    let mut recorder = ActionRecorder::new(products(ActionConfig::default()));

    recorder.request(None).unwrap();
    recorder.success(Some(json!([1, 2, 3]))).unwrap();

    let actions = recorder.drain_emitted();
    assert_emitted!(actions, "GET_PRODUCTS");
    assert_emitted!(actions, "GET_PRODUCTS_SUCCESSFUL");
    assert_not_emitted!(actions, "GET_PRODUCTS_FAILURE");
    assert_eq!(count_emitted!(actions, "GET_PRODUCTS"), 1);
    assert_action_type!(actions[1], "GET_PRODUCTS_SUCCESSFUL");
}
