//! Process-wide verifier registry
//!
//! Associates each issued token string with the strategy that should check
//! it, so [`check_token`](crate::check_token) can recover "how this token
//! is verified" without the caller re-supplying it. Strategies are stored
//! under a one-way digest of the token string: the table never holds full
//! tokens and its keys stay fixed-size.
//!
//! Entries are added on every successful issuance and never evicted; the
//! table grows for the life of the process. Callers who want to avoid the
//! stored association entirely can use
//! [`check_token_with`](crate::check_token_with) instead.

use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

use sha2::{Digest, Sha256};

use crate::utils::base64url;
use crate::verifier::CheckFn;

static VERIFIERS: OnceLock<Mutex<HashMap<String, CheckFn>>> = OnceLock::new();

fn verifiers() -> &'static Mutex<HashMap<String, CheckFn>> {
    VERIFIERS.get_or_init(|| Mutex::new(HashMap::new()))
}

fn token_digest(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    base64url::encode_bytes(&hasher.finalize())
}

/// Associate a verification strategy with this exact token string
///
/// Issuance does this automatically; calling it directly lets a process
/// accept tokens issued elsewhere by registering a strategy for them.
/// Registering the same token string again replaces the stored strategy.
pub fn register(token: &str, check: CheckFn) {
    if let Ok(mut map) = verifiers().lock() {
        map.insert(token_digest(token), check);
    }
}

/// Recover the strategy registered for this token string, if any
pub fn resolve(token: &str) -> Option<CheckFn> {
    verifiers()
        .lock()
        .ok()
        .and_then(|map| map.get(&token_digest(token)).cloned())
}
