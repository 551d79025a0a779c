use crate::constants::rejection;
use crate::result::Rejection;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::borrow::Cow;

// Serializing two owned strings cannot fail.
static BLOCKED_JSON: Lazy<String> =
    Lazy::new(|| serde_json::to_string(&RejectionBody::default()).unwrap_or_default());

/// Wire body returned to clients whose origin was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionBody {
    pub status: String,
    pub message: String,
}

impl Default for RejectionBody {
    fn default() -> Self {
        Self {
            status: rejection::STATUS.into(),
            message: rejection::MESSAGE.into(),
        }
    }
}

/// Status code and body a caller must answer with on rejection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectionResponse {
    pub status: u16,
    pub body: RejectionBody,
}

impl RejectionResponse {
    pub fn blocked() -> Self {
        Self {
            status: rejection::STATUS_CODE,
            body: RejectionBody::default(),
        }
    }

    /// Serializes the body; the default blocked body is served from a cache.
    pub fn to_json(&self) -> Result<Cow<'static, str>, serde_json::Error> {
        if self.body == RejectionBody::default() {
            return Ok(Cow::Borrowed(BLOCKED_JSON.as_str()));
        }

        serde_json::to_string(&self.body).map(Cow::Owned)
    }

    pub fn to_value(&self) -> Value {
        json!({
            "status": self.body.status,
            "message": self.body.message,
        })
    }
}

// Every rejection reason maps to the same wire payload.
impl From<&Rejection> for RejectionResponse {
    fn from(_: &Rejection) -> Self {
        Self::blocked()
    }
}

#[cfg(test)]
#[path = "response_test.rs"]
mod response_test;
