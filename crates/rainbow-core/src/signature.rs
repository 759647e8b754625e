//! Short hash signatures bound to an AI / awakener pair.
//!
//! The backend is authoritative for signatures it hands out; this module
//! computes the same shape locally (SHA-256, Base62, first 7 characters) for
//! offline generation and validates the shape of received ones.

use sha2::{Digest, Sha256};

pub const SIGNATURE_LEN: usize = 7;

const BASE62_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Signature over the canonical `|`-joined concatenation of `fields`.
pub fn hash_signature(fields: &[&str]) -> String {
    let digest = Sha256::digest(fields.join("|").as_bytes());
    let encoded = base_x::encode(BASE62_ALPHABET, &digest);
    encoded.chars().take(SIGNATURE_LEN).collect()
}

/// True if `s` has the shape of a signature.
pub fn is_signature(s: &str) -> bool {
    s.len() == SIGNATURE_LEN && s.bytes().all(|b| b.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signature_is_deterministic() {
        let a = hash_signature(&["RC-AI-0001721-53dfc98b", "user-1", "1R"]);
        let b = hash_signature(&["RC-AI-0001721-53dfc98b", "user-1", "1R"]);
        assert_eq!(a, b);
        assert!(is_signature(&a));
    }

    #[test]
    fn test_signature_uses_base62_alphabet() {
        for seed in 0..50 {
            let seed = seed.to_string();
            let sig = hash_signature(&["ai", seed.as_str()]);
            assert_eq!(sig.len(), SIGNATURE_LEN);
            assert!(sig.bytes().all(|b| BASE62_ALPHABET.as_bytes().contains(&b)));
        }
    }

    #[test]
    fn test_signature_depends_on_every_field() {
        let base = hash_signature(&["ai", "human", "1R", "00001"]);
        assert_ne!(base, hash_signature(&["ai", "human2", "1R", "00001"]));
        assert_ne!(base, hash_signature(&["ai", "human", "2O", "00001"]));
        assert_ne!(base, hash_signature(&["ai", "human", "1R", "00002"]));
    }

    #[test]
    fn test_is_signature_shape() {
        assert!(is_signature("a1B2c3D"));
        assert!(!is_signature("a1B2c3"));
        assert!(!is_signature("a1B2c3D4"));
        assert!(!is_signature("a1-2c3D"));
    }
}
