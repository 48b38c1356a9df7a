//! Schemas declared as JSON documents

use fieldrules::{assert_field_errors, assert_valid, Engine, FieldErrors, RuleSet, Schema, SchemaError};
use pretty_assertions::assert_eq;
use serde_json::json;

const REGISTRATION: &str = r#"{
    "username": {
        "type": "string",
        "min": 3,
        "max": 20,
        "required": true,
        "regex": "/^[a-zA-Z0-9_]+$/"
    },
    "password": {
        "type": "string",
        "min": 8,
        "required": true,
        "confirm": "passwordConfirmation"
    }
}"#;

#[test]
fn json_schema_matches_builder_schema() {
    let from_json = Schema::from_json_str(REGISTRATION).unwrap();
    let built = Schema::new()
        .field(
            "username",
            RuleSet::new()
                .kind("string")
                .min(3)
                .max(20)
                .required()
                .regex("/^[a-zA-Z0-9_]+$/")
                .unwrap(),
        )
        .field(
            "password",
            RuleSet::new()
                .kind("string")
                .min(8)
                .required()
                .confirm("passwordConfirmation"),
        );

    assert_eq!(from_json, built);
    assert_eq!(from_json.fields().collect::<Vec<_>>(), vec!["username", "password"]);
}

#[test]
fn json_schema_validates() {
    let schema = Schema::from_json_str(REGISTRATION).unwrap();
    let body = json!({
        "username": "us",
        "password": "securePassword",
        "passwordConfirmation": "differentPassword"
    });

    let outcome = Engine::new().validate(&schema, &body, Some(&body)).unwrap();

    assert_field_errors!(outcome, "username", ["minimum length is 3 characters."]);
    assert_field_errors!(
        outcome,
        "password",
        ["fields 'password' and 'passwordConfirmation' do not match."]
    );
}

#[test]
fn schema_round_trips_through_json() {
    let schema = Schema::from_json_str(REGISTRATION).unwrap();
    let value = schema.to_value().unwrap();
    assert_eq!(Schema::from_value(value).unwrap(), schema);
}

#[test]
fn case_insensitive_flag_from_json() {
    let schema = Schema::from_value(json!({"code": {"regex": "/^[a-f]+$/i"}})).unwrap();
    let outcome = Engine::new()
        .validate(&schema, &json!({"code": "BEEF"}), None)
        .unwrap();
    assert_valid!(outcome);
}

#[test]
fn malformed_schemas_are_rejected() {
    assert!(matches!(
        Schema::from_json_str("{\"a\": {\"min\": -1}}"),
        Err(SchemaError::Json(_))
    ));
    assert!(matches!(
        Schema::from_json_str("{\"a\": {\"required\": \"yes\"}}"),
        Err(SchemaError::Json(_))
    ));
    assert!(Schema::from_json_str("{\"a\": {\"regex\": \"/abc/q\"}}").is_err());
    assert!(Schema::from_json_str("[]").is_err());
}

#[test]
fn field_errors_serialize_as_a_map() {
    let mut errors = FieldErrors::new();
    errors.add("username", "field is required");
    errors.add("password", "minimum length is 8 characters.");

    assert_eq!(
        serde_json::to_string(&errors).unwrap(),
        r#"{"username":["field is required"],"password":["minimum length is 8 characters."]}"#
    );
}
