// JSON bodies exchanged with the signup endpoint

use serde::Serialize;
use serde_json::Value;

use crate::error::{SignupError, TransportError};

/// Body of `POST /api/signup`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignupRequest {
    /// Address as typed by the visitor.
    pub email: String,
}

/// What the endpoint answers with.
///
/// Only `success` is authoritative. Fields are read loosely: `success` counts
/// when it is truthy (non-zero number, non-empty string, `true`, any array or
/// object), and `error` is kept only when it is a non-empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupResponse {
    /// Whether the address was recorded.
    pub success: bool,
    /// Human-readable reason, only meaningful when `success` is false.
    pub error: Option<String>,
}

impl SignupResponse {
    /// Parse a raw response body.
    ///
    /// A body that is not JSON, or is JSON `null`, is a transport failure.
    /// Any other JSON value is an answer from the endpoint; values without a
    /// truthy `success` field (arrays, strings, `{}`) read as a rejection.
    pub fn from_json(body: &str) -> Result<Self, TransportError> {
        let value: Value =
            serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))?;
        Self::from_value(&value)
    }

    fn from_value(value: &Value) -> Result<Self, TransportError> {
        if value.is_null() {
            return Err(TransportError::Decode("expected an object, found null".into()));
        }
        let success = value.get("success").is_some_and(is_truthy);
        let error = value
            .get("error")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_owned);
        Ok(Self { success, error })
    }

    /// Turn the endpoint's verdict into a result.
    pub fn into_result(self) -> Result<(), SignupError> {
        if self.success {
            Ok(())
        } else {
            Err(SignupError::Application {
                message: self.error,
            })
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
