use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::utils::base64url;

use miniserde::{Deserialize, Serialize};

/// Claims segment: registered claims plus two caller-defined namespaces
///
/// `issued_at` and `not_before` are captured once at issuance and never
/// change afterwards. `expiry` is a duration in seconds measured from
/// `issued_at`, not an absolute timestamp: the token is expired once
/// `now - issued_at >= expiry`.
///
/// `internal` and `external` are independent claim namespaces; a key in
/// one never collides with the same key in the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payload {
    /// Principal that issued the token
    #[serde(rename = "iss")]
    pub issuer: String,

    /// Principal the token is about
    #[serde(rename = "sub")]
    pub subject: String,

    /// Intended recipient
    #[serde(rename = "aud")]
    pub audience: String,

    /// Validity window length in seconds, measured from `issued_at`
    #[serde(rename = "exp")]
    pub expiry: i64,

    /// Unix timestamp before which the token must be rejected
    #[serde(rename = "nbf")]
    pub not_before: i64,

    /// Unix timestamp of issuance
    #[serde(rename = "iat")]
    pub issued_at: i64,

    /// Unique token identifier
    #[serde(rename = "jti")]
    pub token_id: String,

    /// Caller-defined claims, internal namespace
    pub internal: BTreeMap<String, String>,

    /// Caller-defined claims, external namespace
    pub external: BTreeMap<String, String>,
}

impl Payload {
    /// Serialize to compact JSON and Base64URL-encode the result
    pub fn encode(&self) -> String {
        base64url::encode(&miniserde::json::to_string(self))
    }

    /// Decode a payload segment
    ///
    /// Only the shape is validated here. Temporal values are range-checked
    /// by the verification pipeline, not by the codec, so a decoded payload
    /// may still carry a negative `exp` or `nbf`.
    pub fn decode(segment: &str) -> Result<Self> {
        let json = base64url::decode(segment)?;
        miniserde::json::from_str(&json)
            .map_err(|e| Error::MalformedSegment(format!("payload: {e}")))
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", miniserde::json::to_string(self))
    }
}
