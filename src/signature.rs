use hmac::{Hmac, Mac};
use sha1::Sha1;

fn get_mac(secret: &[u8]) -> Hmac::<Sha1> {
    Hmac::<Sha1>::new_from_slice(secret)
        .expect("HMAC can take key of any size")
}

/// Replaces every `:` in `s` so it cannot be confused with the field
/// separator.
///
/// Distinct identifiers can collide after cleaning (`a:b` and `a_b` both
/// become `a_b`), so tokens for them are interchangeable.
pub fn clean(s: &str) -> String {
    s.replace(':', "_")
}

/// Computes the MAC over `"{clean(user_id)}:{nanos}"`.
pub fn make_signature(
    secret: &[u8],
    user_id: &str,
    nanos: i64
) -> Vec<u8>
{
    let mut mac = get_mac(secret);
    mac.update(clean(user_id).as_bytes());
    mac.update(b":");
    mac.update(nanos.to_string().as_bytes());
    mac.finalize().into_bytes().to_vec()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn clean_replaces_all_colons() {
        assert_eq!(clean("a:b::c"), "a_b__c");
        assert_eq!(clean("plain"), "plain");
        assert_eq!(clean(""), "");
    }

    #[test]
    fn signature_matches_single_update() {
        // signing the pieces separately must equal signing the joined string
        let mut mac = get_mac(b"12345");
        mac.update(b"skroob_x:42");
        let expected = mac.finalize().into_bytes().to_vec();
        assert_eq!(make_signature(b"12345", "skroob:x", 42), expected);
    }

    #[test]
    fn signature_rfc2202_case_2() {
        // RFC 2202, test case 2
        let mut mac = get_mac(b"Jefe");
        mac.update(b"what do ya want for nothing?");
        let code = mac.finalize().into_bytes();
        assert_eq!(code.len(), 20);
        assert_eq!(
            hex::encode(code),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn signature_empty_key() {
        let a = make_signature(b"", "skroob", 0);
        let b = make_signature(b"", "skroob", 0);
        assert_eq!(a, b);
        assert_ne!(a, make_signature(b"", "skroob", 1));
    }

    #[test]
    fn signature_key_sensitive() {
        assert_ne!(
            make_signature(b"12345", "skroob", 0),
            make_signature(b"12346", "skroob", 0)
        );
    }
}
