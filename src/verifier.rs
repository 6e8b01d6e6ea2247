//! Verification strategies and the default validation pipeline
//!
//! Checking a token runs in two steps: recover *how* this token should be
//! checked (the strategy registered at issuance, or one supplied by the
//! caller), then run that strategy against the token string and secret.
//!
//! The default strategy validates structure, signature and temporal claims
//! in a fixed order. The signature is compared before the payload is
//! decoded, so forged or corrupted input is rejected without interpreting
//! untrusted claim data.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::algorithm;
use crate::error::{Error, Result};
use crate::registry;
use crate::token::{Header, Payload, Signature, Token};

/// The procedure used to validate a token string against a secret
pub type CheckFn = Arc<dyn Fn(&str, &str) -> Result<Token> + Send + Sync>;

/// Check a token with the strategy registered for it at issuance
///
/// # Errors
///
/// Returns `VerifierNotFound` when this process never registered a
/// strategy for the exact token string; tokens can only be checked through
/// the registry that issued them, or through an explicitly registered
/// strategy (see [`registry::register`](crate::registry::register)).
/// Otherwise propagates whatever the strategy returns.
pub fn check_token(token: &str, secret: &str) -> Result<Token> {
    match registry::resolve(token) {
        Some(check) => check(token, secret),
        None => Err(Error::VerifierNotFound),
    }
}

/// Check a token with a caller-supplied strategy, bypassing the registry
///
/// # Examples
///
/// ```ignore
/// use jwtmint::{check_token_with, default_check};
///
/// let verified = check_token_with(token_str, "s3cret", default_check)?;
/// ```
pub fn check_token_with<F>(token: &str, secret: &str, check: F) -> Result<Token>
where
    F: Fn(&str, &str) -> Result<Token>,
{
    check(token, secret)
}

/// The default verification strategy
///
/// Validation order:
/// 1. Exactly three dot-separated segments
/// 2. Header decodes and its algorithm resolves
/// 3. Signature recomputed over the first two segments matches the third
/// 4. Payload decodes
/// 5. Temporal claims hold: `nbf` positive and not in the future, `exp`
///    and `iat` positive, and `now - iat < exp`
///
/// Each failure is terminal and maps to a distinct [`Error`] variant.
pub fn default_check(token: &str, secret: &str) -> Result<Token> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(Error::MalformedToken);
    }
    let (header_b64, payload_b64, signature_b64) = (parts[0], parts[1], parts[2]);

    let header = Header::decode(header_b64)?;
    let algorithm = header.resolve_algorithm()?;

    // Signature before claims: never interpret unauthenticated payload data
    let signing_input = format!("{header_b64}.{payload_b64}");
    let expected = algorithm::sign(algorithm, secret, &signing_input)?;
    if !algorithm::verify(&expected, signature_b64) {
        return Err(Error::SignatureMismatch);
    }

    let payload = Payload::decode(payload_b64)?;

    if payload.not_before <= 0 {
        return Err(Error::InvalidNotBefore);
    }

    let now = unix_now();
    if now < payload.not_before {
        return Err(Error::NotYetValid);
    }

    if payload.expiry <= 0 {
        return Err(Error::InvalidExpiry);
    }

    if payload.issued_at <= 0 {
        return Err(Error::InvalidIssuedAt);
    }

    if now - payload.issued_at >= payload.expiry {
        return Err(Error::Expired);
    }

    Ok(Token::from_parts(
        header,
        payload,
        Signature::new(signature_b64),
        token,
        secret,
    ))
}

/// Current Unix timestamp in seconds
pub(crate) fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time is before Unix epoch")
        .as_secs() as i64
}
