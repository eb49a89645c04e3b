//! Wire types for the line-delimited JSON-RPC channel

use serde::{Deserialize, Serialize, Serializer};

/// One request line
#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: Option<serde_json::Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<serde_json::Value>,
}

/// Error codes sent to clients; the first five are the JSON-RPC standard ones
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    InternalError,
    NoCirclesLoaded,
    InvalidRules,
}

impl ErrorCode {
    pub fn code(self) -> i32 {
        match self {
            ErrorCode::ParseError => -32700,
            ErrorCode::InvalidRequest => -32600,
            ErrorCode::MethodNotFound => -32601,
            ErrorCode::InvalidParams => -32602,
            ErrorCode::InternalError => -32603,
            ErrorCode::NoCirclesLoaded => 2,
            ErrorCode::InvalidRules => 3,
        }
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.code())
    }
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: ErrorCode,
    pub message: String,
}

/// Serialized as a `result` or an `error` key next to `id`
#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Result(serde_json::Value),
    Error(RpcError),
}

#[derive(Debug, Serialize)]
pub struct Response {
    /// `null` when the request id could not be recovered
    pub id: Option<serde_json::Value>,
    #[serde(flatten)]
    pub outcome: Outcome,
}

impl Response {
    pub fn ok(id: Option<serde_json::Value>, result: serde_json::Value) -> Self {
        Self {
            id,
            outcome: Outcome::Result(result),
        }
    }

    /// Serialize `value` as the result; a serializer failure becomes an internal error
    pub fn ok_serialized<T: Serialize>(id: Option<serde_json::Value>, value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(result) => Self::ok(id, result),
            Err(e) => Self::err(id, ErrorCode::InternalError, e.to_string()),
        }
    }

    pub fn err(id: Option<serde_json::Value>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            id,
            outcome: Outcome::Error(RpcError {
                code,
                message: message.into(),
            }),
        }
    }

    pub fn error_code(&self) -> Option<ErrorCode> {
        match &self.outcome {
            Outcome::Error(e) => Some(e.code),
            Outcome::Result(_) => None,
        }
    }

    pub fn is_error(&self) -> bool {
        self.error_code().is_some()
    }
}
