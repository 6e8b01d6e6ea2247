//! # jwtmint - Minimal HMAC Token Issuing and Verification
//!
//! > Issue and check compact, self-contained authorization tokens.
//!
//! **jwtmint** builds JWT-style tokens from three dot-separated,
//! independently Base64URL-encoded segments: a header declaring the format
//! and signing algorithm, a payload carrying registered and custom claims,
//! and a keyed-hash signature binding the two. Verification recovers the
//! segments, recomputes the signature, and walks the temporal claims in a
//! fixed order.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::time::Duration;
//! use jwtmint::{check_token, Token};
//!
//! let token = Token::builder()
//!     .issuer("auth-service")
//!     .subject("user-42")
//!     .audience("api")
//!     .expires_in(Duration::from_secs(3600))
//!     .internal_claim("role", "admin")
//!     .secret("s3cret")
//!     .issue()?;
//!
//! let verified = check_token(token.render(), "s3cret")?;
//! assert_eq!(verified.payload().subject, "user-42");
//! ```
//!
//! ## Pipeline
//!
//! Data flows one way at issuance and is reconstructed in reverse when
//! checking:
//!
//! ```text
//! issue:  TokenBuilder ──defaults──▶ Header + Payload ──encode──▶
//!         segments ──sign──▶ "header.payload.signature" ──▶ Token
//!
//! check:  string ──split──▶ header ──▶ algorithm ──▶ recompute
//!         signature ──compare──▶ payload ──▶ temporal checks ──▶ Token
//! ```
//!
//! The signature is compared **before** the payload is decoded: forged or
//! corrupted input is rejected without interpreting untrusted claim data.
//!
//! ## Verifier Registry
//!
//! Every issued token is registered (under a one-way digest of its rendered
//! string) with the strategy that should verify it - [`default_check`]
//! unless the builder configured a custom one via
//! [`TokenBuilder::check_with`]. [`check_token`] dispatches through that
//! registry and fails with [`Error::VerifierNotFound`] for strings this
//! process never issued or registered. [`check_token_with`] takes the
//! strategy as an explicit argument instead, for callers who don't want the
//! process-wide association.
//!
//! ## Algorithm Support
//!
//! - `HMAC-SHA256` (default)
//! - `HMAC-SHA512`
//! - `HMAC-MD5` (compatibility with legacy issuers only)
//!
//! The set is closed; a header declaring anything else fails with
//! [`Error::UnsupportedAlgorithm`], never a silent fallback.
//!
//! ## Security
//!
//! Signature comparison uses the
//! [`constant_time_eq`](https://crates.io/crates/constant_time_eq) crate.
//! An expired, not-yet-valid, malformed, or mis-signed token is always a
//! typed error; there is no degraded-trust acceptance path.

// Core modules
pub mod error;
pub mod utils;

// Signing algorithms
pub mod algorithm;

// Token segments and the issued aggregate
pub mod token;

// Issuance and verification pipelines
pub mod builder;
pub mod registry;
pub mod verifier;

pub use algorithm::AlgorithmId;
pub use builder::TokenBuilder;
pub use error::{Error, Result};
pub use token::{Header, Payload, Signature, Token, TOKEN_TYPE};
pub use verifier::{check_token, check_token_with, default_check, CheckFn};
