//! Salted password hashing
//!
//! Stored format: `base64(salt)$hex(sha256(salt || password))` with a random
//! 16-byte per-user salt. Verification re-derives the digest from the stored
//! salt and compares.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_LEN: usize = 16;

fn digest_hex(salt: &[u8], password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_LEN];
    rand::thread_rng().fill_bytes(&mut salt);
    format!("{}${}", BASE64.encode(salt), digest_hex(&salt, password))
}

/// Verify a password against a stored `salt$digest` string.
/// Any malformed stored value simply fails verification.
pub fn verify_password(password: &str, stored: &str) -> bool {
    let Some((salt_b64, expected)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = BASE64.decode(salt_b64) else {
        return false;
    };
    digest_hex(&salt, password) == expected
}
