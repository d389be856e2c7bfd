//! Stateless CSRF tokens bound to a user identity.
//!
//! A token is the base64url encoding of an HMAC-SHA1 over the user ID and
//! issue time, followed by the issue time itself. Verification regenerates
//! the token from the embedded issue time and rejects tokens older than the
//! validity window (30 minutes by default).
//!
//! ```
//! let tok = csrfy::generate(b"secret", "skroob");
//! assert!(csrfy::valid(&tok, b"secret", "skroob"));
//! assert!(!csrfy::valid(&tok, b"secret", "bob"));
//! ```

mod clock;
mod config;
mod csrf;
mod errors;
mod signature;
mod token;

pub use crate::{
    config::{Config, DEFAULT_SKEW, DEFAULT_TIMEOUT, SignatureEncoding},
    csrf::{Clock, CsrfIssuer, CsrfVerifier},
    errors::ConfigError,
    token::{generate_at, generate_at_with, valid_at, valid_at_with}
};

/// Issues a token for `user_id` which expires 30 minutes from now.
pub fn generate(key: &[u8], user_id: &str) -> String {
    generate_at(key, user_id, clock::now_nanos())
}

/// Returns whether `token` is an unexpired token issued by [`generate`] for
/// `key` and `user_id`.
pub fn valid(token: &str, key: &[u8], user_id: &str) -> bool {
    valid_at(token, key, user_id, clock::now_nanos())
}

#[cfg(test)]
mod test {
    use super::*;

    const KEY: &[u8] = b"@wlD+3L)EHdv28u)OFWx@83_*TxhVf9IdUncaAz6ICbM~)j+dH=sR2^LXp(tW31z";

    #[test]
    fn generate_valid_now() {
        let tok = generate(KEY, "skroob");
        assert!(valid(&tok, KEY, "skroob"));
    }

    #[test]
    fn valid_wrong_key() {
        let tok = generate(KEY, "skroob");
        assert!(!valid(&tok, b"12345", "skroob"));
    }

    #[test]
    fn valid_old_token() {
        // issued 2023-09-05, long expired
        let tok = "vxkqiqs1Z1a5nmA0owdb8r8RIxs6MTY5Mzg3MDQwMDAwMDAwMDAwMA==";
        assert!(!valid(tok, KEY, "skroob"));
    }

    #[test]
    fn valid_garbage() {
        assert!(!valid("bogus", KEY, "skroob"));
    }
}
