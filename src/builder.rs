//! Issuance configuration and the construction pipeline
//!
//! `TokenBuilder` collects the claims and signing configuration through
//! chained setters, then `issue()` runs the whole pipeline: materialize
//! defaults, encode both segments, sign, render, and register the token's
//! verification strategy.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use crate::algorithm::{self, AlgorithmId};
use crate::error::{Error, Result};
use crate::registry;
use crate::token::{Header, Payload, Signature, Token};
use crate::verifier::{default_check, unix_now, CheckFn};

const DEFAULT_ISSUER: &str = "default";
const DEFAULT_SUBJECT: &str = "default";
const DEFAULT_AUDIENCE: &str = "default";

/// Default validity window in seconds
const DEFAULT_EXPIRY_SECS: i64 = 7200;

/// Configuration for issuing a token
///
/// Every setting is optional except the secret. Unset claims fall back to
/// fixed defaults at issuance; the issued-at timestamp is always captured
/// from the wall clock and cannot be configured.
///
/// # Examples
///
/// ```ignore
/// use std::time::Duration;
/// use jwtmint::TokenBuilder;
///
/// let token = TokenBuilder::new()
///     .issuer("auth-service")
///     .subject("user-42")
///     .audience("api")
///     .expires_in(Duration::from_secs(3600))
///     .internal_claim("role", "admin")
///     .secret("s3cret")
///     .issue()?;
/// ```
#[derive(Default)]
pub struct TokenBuilder {
    algorithm: AlgorithmId,
    issuer: Option<String>,
    subject: Option<String>,
    audience: Option<String>,
    expiry: Option<i64>,
    not_before: Option<i64>,
    token_id: Option<String>,
    secret: Option<String>,
    internal: BTreeMap<String, String>,
    external: BTreeMap<String, String>,
    check: Option<CheckFn>,
}

impl TokenBuilder {
    /// Create a builder with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the signing algorithm (default: HMAC-SHA256)
    pub fn algorithm(mut self, algorithm: AlgorithmId) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the issuer (`iss`)
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Set the subject (`sub`)
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Set the audience (`aud`)
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Set the validity window, measured from the issuance timestamp
    pub fn expires_in(mut self, window: Duration) -> Self {
        self.expiry = Some(window.as_secs() as i64);
        self
    }

    /// Set the not-before time (`nbf`) as a Unix timestamp
    ///
    /// Defaults to the issuance timestamp when unset.
    pub fn not_before(mut self, not_before: i64) -> Self {
        self.not_before = Some(not_before);
        self
    }

    /// Set the token identifier (`jti`)
    ///
    /// Defaults to the issuance timestamp rendered as a decimal string.
    pub fn token_id(mut self, token_id: impl Into<String>) -> Self {
        self.token_id = Some(token_id.into());
        self
    }

    /// Set the signing secret (required)
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Add a claim to the internal namespace
    pub fn internal_claim(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.internal.insert(key.into(), value.into());
        self
    }

    /// Add a claim to the external namespace
    pub fn external_claim(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.external.insert(key.into(), value.into());
        self
    }

    /// Register a custom verification strategy for the issued token
    ///
    /// When unset, the token is registered with
    /// [`default_check`](crate::default_check).
    pub fn check_with<F>(mut self, check: F) -> Self
    where
        F: Fn(&str, &str) -> Result<Token> + Send + Sync + 'static,
    {
        self.check = Some(Arc::new(check));
        self
    }

    /// Run the issuance pipeline and return the immutable token
    ///
    /// # Errors
    ///
    /// Returns `SecretRequired` when no secret (or an empty one) was
    /// configured.
    pub fn issue(self) -> Result<Token> {
        let secret = match self.secret {
            Some(s) if !s.is_empty() => s,
            _ => return Err(Error::SecretRequired),
        };

        // Issuance-time fact, captured exactly once
        let now = unix_now();

        let header = Header::new(self.algorithm);
        let payload = Payload {
            issuer: self.issuer.unwrap_or_else(|| DEFAULT_ISSUER.to_string()),
            subject: self.subject.unwrap_or_else(|| DEFAULT_SUBJECT.to_string()),
            audience: self
                .audience
                .unwrap_or_else(|| DEFAULT_AUDIENCE.to_string()),
            expiry: self.expiry.unwrap_or(DEFAULT_EXPIRY_SECS),
            not_before: self.not_before.unwrap_or(now),
            issued_at: now,
            token_id: self.token_id.unwrap_or_else(|| now.to_string()),
            internal: self.internal,
            external: self.external,
        };

        let signing_input = format!("{}.{}", header.encode(), payload.encode());
        let digest = algorithm::sign(self.algorithm, &secret, &signing_input)?;
        let rendered = format!("{signing_input}.{digest}");

        let strategy: CheckFn = match self.check {
            Some(check) => check,
            None => Arc::new(default_check),
        };
        registry::register(&rendered, strategy);

        Ok(Token::from_parts(
            header,
            payload,
            Signature::new(digest),
            rendered,
            secret,
        ))
    }
}
