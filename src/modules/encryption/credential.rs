use serde::{Deserialize, Serialize};

use super::keys::{derive_key_from_passphrase, generate_random_salt};

/// Salted one-way hash of an account password.
///
/// The iteration count is stored alongside the digest so records hashed under
/// an older work factor keep verifying after the configured value changes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub salt: String,
    pub hash: String,
    pub iterations: u32,
}

impl Credential {
    /// Hash a plaintext password with a fresh random salt
    pub fn derive(password: &str, iterations: u32) -> Self {
        let salt = generate_random_salt();
        let hash = derive_key_from_passphrase(password, &salt, iterations);

        Self {
            salt: hex::encode(salt),
            hash: hex::encode(hash),
            iterations,
        }
    }

    /// Re-hash the candidate password and compare against the stored digest
    pub fn verify(&self, password: &str) -> bool {
        let salt = match hex::decode(&self.salt) {
            Ok(salt) => salt,
            Err(_) => return false,
        };
        let expected = match hex::decode(&self.hash) {
            Ok(hash) => hash,
            Err(_) => return false,
        };

        let candidate = derive_key_from_passphrase(password, &salt, self.iterations);

        // Compare every byte so the timing does not leak the mismatch position
        candidate.len() == expected.len()
            && candidate
                .iter()
                .zip(expected.iter())
                .fold(0u8, |acc, (a, b)| acc | (a ^ b))
                == 0
    }
}
