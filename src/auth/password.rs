use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};

/// One-way adaptive hash of a raw password, with a fresh random salt.
pub fn hash(raw: &str) -> Result<String, argon2::password_hash::Error> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(raw.as_bytes(), &salt)?
        .to_string())
}

/// False on mismatch or when the stored hash cannot be parsed.
pub fn verify(raw: &str, stored_hash: &str) -> bool {
    PasswordHash::new(stored_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(raw.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hashed = hash("hunter2").unwrap();
        assert_ne!(hashed, "hunter2");
        assert!(verify("hunter2", &hashed));
    }

    #[test]
    fn wrong_password_fails() {
        let hashed = hash("hunter2").unwrap();
        assert!(!verify("hunter3", &hashed));
    }

    #[test]
    fn garbage_stored_hash_fails_closed() {
        assert!(!verify("hunter2", "not-a-phc-string"));
    }

    #[test]
    fn same_password_hashes_differently() {
        // Per-hash random salts
        assert_ne!(hash("hunter2").unwrap(), hash("hunter2").unwrap());
    }
}
