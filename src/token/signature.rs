/// Signature segment: the keyed-hash digest binding header and payload
///
/// The digest is computed over `encoded_header + "." + encoded_payload`
/// under the issuer's secret, then Base64URL-encoded. It is already
/// transport-safe text and is used verbatim as the token's third segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Base64URL text of the keyed-hash output
    pub digest: String,
}

impl Signature {
    pub(crate) fn new(digest: impl Into<String>) -> Self {
        Self {
            digest: digest.into(),
        }
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest)
    }
}
