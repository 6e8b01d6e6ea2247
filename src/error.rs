//! Error types for token issuance and verification
//!
//! Every failure in the pipeline is reported as a distinct variant of
//! [`Error`] so callers can tell *why* a token was rejected. There is no
//! degraded-trust path: any non-success result means the token must be
//! rejected.

/// Errors that can occur while issuing or checking a token
///
/// Variants fall into four groups:
/// - Issuance errors (`SecretRequired`)
/// - Structural errors (`MalformedToken`, `MalformedSegment`)
/// - Cryptographic errors (`UnsupportedAlgorithm`, `SignatureMismatch`)
/// - Temporal claim errors (`InvalidNotBefore`, `NotYetValid`,
///   `InvalidExpiry`, `InvalidIssuedAt`, `Expired`)
///
/// `VerifierNotFound` is returned by [`check_token`](crate::check_token)
/// when no strategy was ever registered for the given token string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Issuance was attempted without a secret
    SecretRequired,

    /// Algorithm identifier is not in the supported set
    UnsupportedAlgorithm(String),

    /// Token string is not three dot-separated segments
    MalformedToken,

    /// A segment failed Base64URL decoding or does not have the expected
    /// JSON shape
    MalformedSegment(String),

    /// Recomputed signature does not match the token's signature segment
    SignatureMismatch,

    /// The nbf claim is zero or negative
    InvalidNotBefore,

    /// The not-before time lies in the future
    NotYetValid,

    /// The exp claim is zero or negative
    InvalidExpiry,

    /// The iat claim is zero or negative
    InvalidIssuedAt,

    /// The token's validity window has elapsed
    Expired,

    /// No verification strategy is registered for this token string
    VerifierNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::SecretRequired => write!(f, "A non-empty secret is required to issue a token"),
            Error::UnsupportedAlgorithm(alg) => {
                write!(f, "Algorithm '{alg}' is not supported")
            }
            Error::MalformedToken => write!(
                f,
                "Malformed token: expected three segments separated by '.'"
            ),
            Error::MalformedSegment(msg) => write!(f, "Malformed segment: {msg}"),
            Error::SignatureMismatch => write!(f, "Signature verification failed"),
            Error::InvalidNotBefore => write!(f, "The nbf claim must be a positive timestamp"),
            Error::NotYetValid => write!(f, "Token is not valid yet (nbf is in the future)"),
            Error::InvalidExpiry => write!(f, "The exp claim must be a positive duration"),
            Error::InvalidIssuedAt => write!(f, "The iat claim must be a positive timestamp"),
            Error::Expired => write!(f, "Token has expired"),
            Error::VerifierNotFound => {
                write!(f, "No verification strategy is registered for this token")
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for jwtmint operations
pub type Result<T> = std::result::Result<T, Error>;
