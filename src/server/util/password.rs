//! Password digests for Basic authentication.
//!
//! Passwords are stored as the lowercase hex SHA-256 digest of the trimmed password.

use sha2::{Digest, Sha256};

fn digest(password: &str) -> impl AsRef<[u8]> {
    Sha256::digest(password.trim().as_bytes())
}

/// Returns the hex-encoded SHA-256 digest of `password`.
pub fn hash_password(password: &str) -> String {
    hex::encode(digest(password))
}

/// Whether `password` hashes to the stored `password_hash`.
///
/// A stored value that is not valid hex never matches.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    hex::decode(password_hash).is_ok_and(|stored| stored.as_slice() == digest(password).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_to_known_digest() {
        assert_eq!(
            hash_password("password"),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8"
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(hash_password(" password\n"), hash_password("password"));
    }

    #[test]
    fn verifies_only_matching_password() {
        let hash = hash_password("secret");

        assert!(verify_password("secret", &hash));
        assert!(!verify_password("Secret", &hash));
    }

    #[test]
    fn accepts_uppercase_digest_and_rejects_non_hex() {
        let hash = hash_password("secret");

        assert!(verify_password("secret", &hash.to_uppercase()));
        assert!(!verify_password("secret", "not-a-digest"));
        assert!(!verify_password("secret", ""));
    }
}
