//! # Payload Tests
//!
//! Coercion of reply payloads into the types operations return.

use boardsim_core::ProxyError;
use boardsim_core::protocol::Payload;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[case(json!(1), 1)]
#[case(json!("1"), 1)]
#[case(json!(" 42 "), 42)]
#[case(json!(-7), -7)]
#[case(json!(3.9), 3)]
#[case(json!(true), 1)]
#[case(json!(false), 0)]
fn test_as_int_accepts(#[case] value: Value, #[case] expected: i64) {
    assert_eq!(Payload::new(value).as_int().unwrap(), expected);
}

#[rstest]
#[case(json!("high"))]
#[case(json!(null))]
#[case(json!([1, 2]))]
#[case(json!({ "v": 1 }))]
fn test_as_int_rejects(#[case] value: Value) {
    assert!(matches!(
        Payload::new(value).as_int().unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
}

#[rstest]
#[case(json!(true), 1.0)]
#[case(json!(false), 0.0)]
#[case(json!(" 2.5 "), 2.5)]
#[case(json!(-4), -4.0)]
fn test_as_float_accepts(#[case] value: Value, #[case] expected: f64) {
    let got = Payload::new(value).as_float().unwrap();
    assert!((got - expected).abs() < f64::EPSILON);
}

#[test]
fn test_bool_coerces_the_same_for_int_and_float() {
    let payload = Payload::new(json!(true));
    assert_eq!(payload.as_int().unwrap(), 1);
    assert!((payload.as_float().unwrap() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn test_as_float() {
    assert_eq!(Payload::new(json!(1650.5)).as_float().unwrap(), 1650.5);
    assert_eq!(Payload::new(json!("3300")).as_float().unwrap(), 3300.0);
    assert_eq!(Payload::new(json!(12)).as_float().unwrap(), 12.0);
    assert!(Payload::new(json!("volts")).as_float().is_err());
}

#[test]
fn test_as_vector() {
    let payload = Payload::new(json!([0.5, -1, "2.25"]));
    assert_eq!(payload.as_vector().unwrap(), [0.5, -1.0, 2.25]);
}

#[rstest]
#[case(json!([1.0, 2.0]))]
#[case(json!([1.0, 2.0, 3.0, 4.0]))]
#[case(json!([1.0, "x", 3.0]))]
#[case(json!("1,2,3"))]
fn test_as_vector_rejects(#[case] value: Value) {
    assert!(matches!(
        Payload::new(value).as_vector().unwrap_err(),
        ProxyError::MalformedResponse { .. }
    ));
}

#[test]
fn test_as_str_and_into_value() {
    let payload = Payload::from(json!("ready"));
    assert_eq!(payload.as_str(), Some("ready"));
    assert_eq!(payload.as_value(), &json!("ready"));
    assert_eq!(payload.into_value(), json!("ready"));
    assert_eq!(Payload::new(json!(1)).as_str(), None);
}
