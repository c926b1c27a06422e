//! Reply payload coercions.
//!
//! The simulator answers with whatever JSON value suits the operation: a number,
//! a numeric string such as `"1"`, or a three-element vector for the IMU.
//! Each operation picks the coercion it needs; a payload that does not fit is a
//! `MalformedResponse`.

use serde_json::Value;

use crate::common::error::{ProxyError, Result};

/// Payload of a successful reply.
#[derive(Clone, Debug, PartialEq)]
pub struct Payload(Value);

impl Payload {
    /// Wraps a raw JSON value.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// Borrow the raw JSON value.
    pub const fn as_value(&self) -> &Value {
        &self.0
    }

    /// Consumes the payload, returning the raw JSON value.
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Interprets the payload as an integer.
    ///
    /// Accepts integers, finite floats (truncated toward zero), booleans, and
    /// numeric strings.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` for anything else.
    pub fn as_int(&self) -> Result<i64> {
        match &self.0 {
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
                .ok_or_else(|| ProxyError::malformed(format!("{n} is not an integer"))),
            Value::Bool(b) => Ok(i64::from(*b)),
            Value::String(text) => text
                .trim()
                .parse::<i64>()
                .map_err(|_| ProxyError::malformed(format!("{text:?} is not an integer"))),
            other => Err(ProxyError::malformed(format!("expected an integer, got {other}"))),
        }
    }

    /// Interprets the payload as a float.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` unless the payload is a number, a boolean, or a
    /// numeric string.
    pub fn as_float(&self) -> Result<f64> {
        value_as_float(&self.0)
    }

    /// Interprets the payload as an `(x, y, z)` vector.
    ///
    /// # Errors
    ///
    /// Returns `MalformedResponse` unless the payload is an array of exactly three numbers.
    pub fn as_vector(&self) -> Result<[f64; 3]> {
        let Value::Array(items) = &self.0 else {
            return Err(ProxyError::malformed(format!(
                "expected a 3-element vector, got {}",
                self.0
            )));
        };
        match items.as_slice() {
            [x, y, z] => Ok([value_as_float(x)?, value_as_float(y)?, value_as_float(z)?]),
            _ => Err(ProxyError::malformed(format!(
                "expected a 3-element vector, got {} elements",
                items.len()
            ))),
        }
    }

    /// Returns the payload text, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

fn value_as_float(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ProxyError::malformed(format!("{n} is not a float"))),
        Value::Bool(b) => Ok(f64::from(u8::from(*b))),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| ProxyError::malformed(format!("{text:?} is not a float"))),
        other => Err(ProxyError::malformed(format!("expected a float, got {other}"))),
    }
}
