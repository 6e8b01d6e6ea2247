mod hmac;

pub use hmac::{sign, verify};

use crate::error::{Error, Result};

/// Algorithm identifier from the token header
///
/// The supported set is closed and known at build time; anything else in
/// a header's `alg` field makes the token unverifiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlgorithmId {
    /// HMAC with SHA-256 (the default)
    #[default]
    HmacSha256,

    /// HMAC with SHA-512
    HmacSha512,

    /// HMAC with MD5
    ///
    /// Kept for compatibility with legacy issuers only. Not a security
    /// recommendation.
    HmacMd5,
}

impl AlgorithmId {
    /// Parse an algorithm identifier from a token header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        match s {
            "HMAC-SHA256" => Ok(AlgorithmId::HmacSha256),
            "HMAC-SHA512" => Ok(AlgorithmId::HmacSha512),
            "HMAC-MD5" => Ok(AlgorithmId::HmacMd5),
            _ => Err(Error::UnsupportedAlgorithm(s.to_string())),
        }
    }

    /// Wire identifier written into the header's `alg` field
    pub fn as_str(&self) -> &'static str {
        match self {
            AlgorithmId::HmacSha256 => "HMAC-SHA256",
            AlgorithmId::HmacSha512 => "HMAC-SHA512",
            AlgorithmId::HmacMd5 => "HMAC-MD5",
        }
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            AlgorithmId::from_str("HMAC-SHA256").unwrap(),
            AlgorithmId::HmacSha256
        );
        assert_eq!(
            AlgorithmId::from_str("HMAC-SHA512").unwrap(),
            AlgorithmId::HmacSha512
        );
        assert_eq!(
            AlgorithmId::from_str("HMAC-MD5").unwrap(),
            AlgorithmId::HmacMd5
        );
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!(matches!(
            AlgorithmId::from_str("none"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AlgorithmId::from_str("HS256"),
            Err(Error::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            AlgorithmId::from_str(""),
            Err(Error::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn test_roundtrip_identifiers() {
        for alg in [
            AlgorithmId::HmacSha256,
            AlgorithmId::HmacSha512,
            AlgorithmId::HmacMd5,
        ] {
            assert_eq!(AlgorithmId::from_str(alg.as_str()).unwrap(), alg);
        }
    }

    #[test]
    fn test_default_is_sha256() {
        assert_eq!(AlgorithmId::default(), AlgorithmId::HmacSha256);
    }
}
