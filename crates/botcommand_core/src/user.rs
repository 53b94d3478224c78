//! Authentication payloads.

use serde::{Deserialize, Serialize};

/// The signed-in dashboard operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User id
    pub id: String,
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
    /// Whether the account is disabled
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
}

/// Bearer token issued by `POST /token`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Opaque credential
    pub access_token: String,
    /// Always `bearer`
    pub token_type: String,
}

impl Token {
    /// A bearer token wrapping `access_token`.
    pub fn bearer(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            token_type: "bearer".to_string(),
        }
    }
}

/// Acknowledgement body returned by deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[display("{}", message)]
pub struct DeleteAck {
    /// Confirmation text
    pub message: String,
}

impl DeleteAck {
    /// Wrap a confirmation message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
