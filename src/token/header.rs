use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::base64url;

use miniserde::{Deserialize, Serialize};

/// Rendered token type declared in every header
pub const TOKEN_TYPE: &str = "JWT";

/// Token header: declares the rendered format and the signing algorithm
///
/// The `alg` field is carried as a string on the wire; it must resolve
/// against the supported algorithm set before any signature work happens.
/// Unknown values make the token unverifiable, they are never defaulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Header {
    /// Token format, always `"JWT"` for tokens issued by this crate
    #[serde(rename = "typ")]
    pub token_type: String,

    /// Wire identifier of the signing algorithm
    #[serde(rename = "alg")]
    pub algorithm: String,
}

impl Header {
    pub(crate) fn new(algorithm: AlgorithmId) -> Self {
        Self {
            token_type: TOKEN_TYPE.to_string(),
            algorithm: algorithm.as_str().to_string(),
        }
    }

    /// Resolve the declared algorithm against the supported set
    pub fn resolve_algorithm(&self) -> Result<AlgorithmId> {
        AlgorithmId::from_str(&self.algorithm)
    }

    /// Serialize to compact JSON and Base64URL-encode the result
    pub fn encode(&self) -> String {
        base64url::encode(&miniserde::json::to_string(self))
    }

    /// Decode a header segment
    ///
    /// Fails with `MalformedSegment` if the text encoding is invalid or the
    /// decoded JSON does not have the header shape.
    pub fn decode(segment: &str) -> Result<Self> {
        let json = base64url::decode(segment)?;
        miniserde::json::from_str(&json)
            .map_err(|e| Error::MalformedSegment(format!("header: {e}")))
    }
}
