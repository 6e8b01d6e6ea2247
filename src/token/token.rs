//! The issued token aggregate
//!
//! A `Token` is only ever produced by the issuance pipeline or by a
//! verification strategy that accepted a token string. It exclusively owns
//! its header, payload and signature, and caches the rendered
//! three-segment string; nothing is recomputed after construction and
//! there are no setters.

use crate::builder::TokenBuilder;
use crate::token::{Header, Payload, Signature};

/// An immutable, fully constructed token
///
/// Obtained from [`TokenBuilder::issue`] or from a successful
/// [`check_token`](crate::check_token) call.
///
/// # Examples
///
/// ```ignore
/// use jwtmint::Token;
///
/// let token = Token::builder()
///     .issuer("auth-service")
///     .subject("user-42")
///     .secret("s3cret")
///     .issue()?;
///
/// let verified = jwtmint::check_token(token.render(), "s3cret")?;
/// assert_eq!(verified.payload().subject, "user-42");
/// ```
#[derive(Debug)]
pub struct Token {
    header: Header,
    payload: Payload,
    signature: Signature,
    rendered: String,
    secret: String,
}

impl Token {
    /// Start configuring a new token
    pub fn builder() -> TokenBuilder {
        TokenBuilder::new()
    }

    pub(crate) fn from_parts(
        header: Header,
        payload: Payload,
        signature: Signature,
        rendered: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Self {
            header,
            payload,
            signature,
            rendered: rendered.into(),
            secret: secret.into(),
        }
    }

    /// The rendered `header.payload.signature` string
    pub fn render(&self) -> &str {
        &self.rendered
    }

    /// The header segment
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// The claims segment
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The signature segment
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The secret this token was signed (or checked) with
    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rendered)
    }
}
