//! Request and response envelopes.
//!
//! Every proxy speaks the same envelope: a flat JSON record naming the device kind
//! (`to`), the operation (`msg`), and the operation's parameters. Replies carry a
//! `success` flag and a `msg` payload. The reply is decoded exactly once into
//! [`Response`], so proxies never probe an untyped record for `success`.

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::payload::Payload;

/// Request key naming the device kind.
pub const TARGET_KEY: &str = "to";

/// Request key naming the operation; also the reply's payload key.
pub const OPERATION_KEY: &str = "msg";

/// Device kind a request is routed to inside the simulator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Digital pins and the analog inputs that sit on them.
    Pin,
    /// SSD1306 OLED display.
    Oled,
    /// LSM6DSOX inertial measurement unit.
    Lsm6dsox,
}

impl Target {
    /// Wire name of this target.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pin => "pin",
            Self::Oled => "oled",
            Self::Lsm6dsox => "lsm6dsox",
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One outbound command for the simulator.
///
/// Parameters are not validated beyond their JSON type; the simulator owns their meaning.
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    target: Target,
    operation: String,
    params: Map<String, Value>,
}

impl Request {
    /// Creates a request with no parameters.
    pub fn new(target: Target, operation: impl Into<String>) -> Self {
        Self {
            target,
            operation: operation.into(),
            params: Map::new(),
        }
    }

    /// Adds or replaces one parameter.
    ///
    /// `to` and `msg` are reserved for the envelope and always win over a parameter
    /// of the same name.
    #[must_use]
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        let _ = self.params.insert(key.to_owned(), value.into());
        self
    }

    /// Device kind this request is routed to.
    pub const fn target(&self) -> Target {
        self.target
    }

    /// Operation name.
    pub fn operation(&self) -> &str {
        &self.operation
    }

    /// Operation-specific parameters.
    pub const fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Looks up one parameter.
    pub fn param(&self, key: &str) -> Option<&Value> {
        self.params.get(key)
    }

    /// Flattens the envelope into the record that goes on the wire.
    pub fn to_record(&self) -> Map<String, Value> {
        let mut record = self.params.clone();
        let _ = record.insert(TARGET_KEY.to_owned(), Value::from(self.target.as_str()));
        let _ = record.insert(OPERATION_KEY.to_owned(), Value::from(self.operation.as_str()));
        record
    }
}

/// Decoded simulator reply.
#[derive(Clone, Debug, PartialEq)]
pub enum Response {
    /// `success == true`; the payload's meaning depends on the operation.
    Success(Payload),
    /// `success == false`; the simulator's diagnostic.
    Failure(String),
}

impl Response {
    /// Returns `true` for a successful reply.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Splits the reply into the payload or the diagnostic.
    pub fn into_result(self) -> std::result::Result<Payload, String> {
        match self {
            Self::Success(payload) => Ok(payload),
            Self::Failure(cause) => Err(cause),
        }
    }
}

/// Reply exactly as it appears on the wire.
#[derive(Debug, Deserialize)]
pub(super) struct WireResponse {
    pub(super) success: bool,
    #[serde(default)]
    pub(super) msg: Value,
}

impl From<WireResponse> for Response {
    fn from(wire: WireResponse) -> Self {
        if wire.success {
            return Self::Success(Payload::new(wire.msg));
        }
        let cause = match wire.msg {
            Value::String(text) => text,
            Value::Null => String::from("no diagnostic"),
            other => other.to_string(),
        };
        Self::Failure(cause)
    }
}
