use crate::algorithm::AlgorithmId;
use crate::error::{Error, Result};
use crate::utils::base64url;

use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use md5::Md5;
use sha2::{Sha256, Sha512};

/// Compute the keyed-hash signature over `signing_input` under `secret`
///
/// Returns the digest as a Base64URL string, ready to be used as a token's
/// third segment. The hash primitive is selected by a fixed match on the
/// algorithm identifier.
pub fn sign(algorithm: AlgorithmId, secret: &str, signing_input: &str) -> Result<String> {
    let digest = match algorithm {
        AlgorithmId::HmacSha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
                .map_err(|_| Error::SecretRequired)?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        AlgorithmId::HmacSha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(secret.as_bytes())
                .map_err(|_| Error::SecretRequired)?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
        AlgorithmId::HmacMd5 => {
            let mut mac = Hmac::<Md5>::new_from_slice(secret.as_bytes())
                .map_err(|_| Error::SecretRequired)?;
            mac.update(signing_input.as_bytes());
            mac.finalize().into_bytes().to_vec()
        }
    };

    Ok(base64url::encode_bytes(&digest))
}

/// Compare two encoded signatures in constant time
pub fn verify(expected: &str, claimed: &str) -> bool {
    constant_time_eq(expected.as_bytes(), claimed.as_bytes())
}
