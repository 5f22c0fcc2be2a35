//! The normalized shape every request outcome is reduced to.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// The uniform result every server response, transport failure or timeout is
/// normalized into.
///
/// Fields the server sends beyond `success`, `message` and `redirect_url` are
/// passed through unchanged in `extra`, so callers always receive the full
/// response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResult {
    #[serde(default)]
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// When present, the client schedules a navigation to this URL shortly
    /// after the success notice is shown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,

    /// Any additional server-supplied fields, passed through unchanged.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiResult {
    /// A bare success with no message or extra fields.
    pub fn ok() -> Self {
        ApiResult {
            success: true,
            ..Default::default()
        }
    }

    /// A failure carrying only a message.
    pub fn failure(message: impl Into<String>) -> Self {
        ApiResult {
            success: false,
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Deserialize one of the passed-through extra fields.
    ///
    /// Returns `None` when the field is absent or does not match the
    /// requested shape.
    pub fn field<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        self.extra
            .get(name)
            .cloned()
            .and_then(|value| serde_json::from_value(value).ok())
    }
}

/// What a [`submit`](crate::ApiClient::submit) call produced.
///
/// This is a plain sum type rather than `Result<_, E>` on purpose: both arms
/// carry the same normalized [`ApiResult`], and no request outcome is ever
/// surfaced as an error the caller has to catch. Callers branch by matching.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The exchange was logically successful.
    Success(ApiResult),
    /// Transport failure, timeout, HTTP failure or a body reporting failure.
    Failure(ApiResult),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The normalized result, whichever arm it sits in.
    pub fn result(&self) -> &ApiResult {
        match self {
            Outcome::Success(result) | Outcome::Failure(result) => result,
        }
    }

    pub fn into_result(self) -> ApiResult {
        match self {
            Outcome::Success(result) | Outcome::Failure(result) => result,
        }
    }
}
