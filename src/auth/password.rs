/**
 * Password Hashing
 *
 * Thin adapter over bcrypt. Hashing uses cost factor 10 so identical
 * plaintexts produce different stored values and brute-forcing is
 * deliberately slow; verification returns `false` on mismatch rather
 * than an error.
 */

use bcrypt::BcryptError;

/// bcrypt cost factor (rounds of adaptive hashing)
const COST: u32 = 10;

/// Hash a plaintext password
pub fn hash(plaintext: &str) -> Result<String, BcryptError> {
    bcrypt::hash(plaintext, COST)
}

/// Verify a plaintext password against a stored hash
///
/// Comparison happens inside bcrypt against the re-derived hash, never
/// as a naive byte comparison of stored values. A mismatch is `Ok(false)`.
pub fn verify(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(plaintext, hashed)
}
