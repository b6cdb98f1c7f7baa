//! Response classification and the displayable outcome.
//!
//! Rules, in order:
//! - non-2xx: `HttpStatus` failure, body text or reason phrase as detail
//! - 2xx with an undecodable body: the "no content" sentinel payload
//! - login request whose payload carries a token: `Classified::Login`
//! - logout path: `Classified::Logout` with the fixed confirmation
//! - anything else: the payload verbatim

use serde_json::{json, Value};

use crate::error::{Result, SocialRestError};
use crate::protocol::paths;
use crate::protocol::request::RequestDescriptor;
use crate::protocol::token::SessionToken;

pub const NO_CONTENT_MESSAGE: &str = "No content or successful operation.";
pub const LOGIN_MESSAGE: &str = "Login successful!";
pub const LOGOUT_MESSAGE: &str = "Logout successful! Token cleared.";
pub const FAILURE_PREFIX: &str = "REST API Error: ";

/// Unified success/failure result of one call, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Success(Value),
    Failure(String),
}

impl ResponseOutcome {
    pub fn from_result(res: Result<Value>) -> Self {
        match res {
            Ok(v) => ResponseOutcome::Success(v),
            Err(e) => ResponseOutcome::Failure(format!("{FAILURE_PREFIX}{e}")),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResponseOutcome::Success(_))
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            ResponseOutcome::Success(v) => Some(v),
            ResponseOutcome::Failure(_) => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            ResponseOutcome::Success(_) => None,
            ResponseOutcome::Failure(m) => Some(m),
        }
    }
}

/// A successful response, tagged with the session effect the caller must apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    /// Store `token` as the new session token.
    Login { token: SessionToken, payload: Value },
    /// Clear the session token.
    Logout(Value),
    /// No session effect.
    Data(Value),
}

impl Classified {
    pub fn payload(&self) -> &Value {
        match self {
            Classified::Login { payload, .. } => payload,
            Classified::Logout(v) | Classified::Data(v) => v,
        }
    }

    pub fn into_payload(self) -> Value {
        match self {
            Classified::Login { payload, .. } => payload,
            Classified::Logout(v) | Classified::Data(v) => v,
        }
    }
}

/// Classify a raw HTTP response for the descriptor that produced it.
pub fn classify(
    desc: &RequestDescriptor,
    status: u16,
    reason: Option<&str>,
    body: &[u8],
) -> Result<Classified> {
    if !(200..300).contains(&status) {
        let text = String::from_utf8_lossy(body);
        let detail = if text.is_empty() {
            reason.unwrap_or_default().to_string()
        } else {
            text.into_owned()
        };
        return Err(SocialRestError::HttpStatus {
            status,
            body: detail,
        });
    }

    let payload = match serde_json::from_slice::<Value>(body) {
        Ok(v) => v,
        Err(e) => {
            tracing::debug!(path = desc.path(), error = %e, "response body not json, using sentinel");
            json!({ "message": NO_CONTENT_MESSAGE })
        }
    };

    if desc.is_login() {
        if let Some(token) = login_token(&payload) {
            let user = payload.get("user").cloned().unwrap_or(Value::Null);
            return Ok(Classified::Login {
                token: SessionToken::new(token),
                payload: json!({ "message": LOGIN_MESSAGE, "user": user }),
            });
        }
    }

    if desc.path() == paths::LOGOUT {
        return Ok(Classified::Logout(json!({ "message": LOGOUT_MESSAGE })));
    }

    Ok(Classified::Data(payload))
}

/// A `token` field that opens a session: a non-empty string, or a non-zero
/// number taken in its decimal form. Other shapes leave the payload as data.
fn login_token(payload: &Value) -> Option<String> {
    match payload.get("token")? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
