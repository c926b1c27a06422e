//! # Codec Tests
//!
//! Encoding requests to JSON and decoding replies, including the round-trip
//! property that every supplied field survives encoding unchanged.

use boardsim_core::ProxyError;
use boardsim_core::protocol::{Payload, Request, Response, Target, decode, encode};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Map, Value, json};

fn decode_generic(bytes: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(bytes).unwrap() {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[test]
fn test_encode_preserves_field_names() {
    let request = Request::new(Target::Oled, "rect")
        .with("x", 1)
        .with("y", 2)
        .with("w", 30)
        .with("h", 10)
        .with("clr", 1);
    let record = decode_generic(&encode(&request));
    assert_eq!(
        Value::Object(record),
        json!({ "to": "oled", "msg": "rect", "x": 1, "y": 2, "w": 30, "h": 10, "clr": 1 })
    );
}

#[test]
fn test_encode_is_stateless() {
    let request = Request::new(Target::Pin, "on").with("num", 25);
    assert_eq!(encode(&request), encode(&request));
}

#[test]
fn test_envelope_keys_override_params() {
    let request = Request::new(Target::Pin, "off").with("to", "oled").with("msg", "x");
    let record = decode_generic(&encode(&request));
    assert_eq!(record["to"], "pin");
    assert_eq!(record["msg"], "off");
}

#[test]
fn test_decode_success() {
    let response = decode(br#"{"success": true, "msg": "1"}"#).unwrap();
    assert_eq!(response, Response::Success(Payload::new(json!("1"))));
}

#[test]
fn test_decode_success_without_msg_is_null_payload() {
    let response = decode(br#"{"success": true}"#).unwrap();
    assert_eq!(response, Response::Success(Payload::new(Value::Null)));
}

#[test]
fn test_decode_failure_keeps_diagnostic() {
    let response = decode(br#"{"success": false, "msg": "bus error"}"#).unwrap();
    assert_eq!(response, Response::Failure("bus error".to_owned()));
}

#[test]
fn test_decode_failure_with_structured_msg() {
    let response = decode(br#"{"success": false, "msg": {"code": 3}}"#).unwrap();
    assert_eq!(response, Response::Failure(r#"{"code":3}"#.to_owned()));
}

#[test]
fn test_decode_failure_without_msg() {
    let response = decode(br#"{"success": false}"#).unwrap();
    assert_eq!(response, Response::Failure("no diagnostic".to_owned()));
}

#[test]
fn test_decode_missing_success_is_malformed() {
    let err = decode(br#"{"msg": "1"}"#).unwrap_err();
    assert!(matches!(err, ProxyError::MalformedResponse { source: Some(_), .. }));
}

#[test]
fn test_decode_non_boolean_success_is_malformed() {
    let err = decode(br#"{"success": "yes", "msg": 1}"#).unwrap_err();
    assert!(matches!(err, ProxyError::MalformedResponse { .. }));
}

#[test]
fn test_decode_garbage_is_malformed() {
    assert!(matches!(
        decode(b"not json").unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
    assert!(matches!(
        decode(&[0xFF, 0xFE, 0x00]).unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
    assert!(matches!(
        decode(b"42").unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
}

fn param_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        "[ -~]{0,24}".prop_map(Value::from),
    ]
}

proptest! {
    #[test]
    fn prop_encode_then_decode_generic_keeps_every_field(
        operation in "[a-z_]{1,12}",
        params in proptest::collection::btree_map("[a-z][a-z0-9_]{0,7}", param_value(), 0..8),
    ) {
        let mut request = Request::new(Target::Oled, operation.clone());
        for (key, value) in &params {
            request = request.with(key, value.clone());
        }
        let record = decode_generic(&encode(&request));

        prop_assert_eq!(&record["to"], "oled");
        prop_assert_eq!(record["msg"].as_str(), Some(operation.as_str()));
        for (key, value) in &params {
            if key == "to" || key == "msg" {
                continue;
            }
            prop_assert_eq!(&record[key.as_str()], value);
        }
    }
}
