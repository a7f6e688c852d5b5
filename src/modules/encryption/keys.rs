use crate::HmacSha256;
use pbkdf2::pbkdf2;
use rand::Rng;

/// Length in bytes of the per-account salt
pub const SALT_LEN: usize = 16;

/// Length in bytes of the derived password hash
pub const HASH_LEN: usize = 32;

/// Function to generate a random salt for PBKDF2
pub fn generate_random_salt() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    (0..SALT_LEN).map(|_| rng.gen()).collect()
}

/// Function to derive a 32-byte hash from a password using PBKDF2-HMAC-SHA256
pub fn derive_key_from_passphrase(passphrase: &str, salt: &[u8], iterations: u32) -> Vec<u8> {
    let mut key = vec![0u8; HASH_LEN];

    pbkdf2::<HmacSha256>(passphrase.as_bytes(), salt, iterations, &mut key);

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_derivation() {
        let passphrase = "MySecurePassword123!";
        let salt = generate_random_salt();

        let key = derive_key_from_passphrase(passphrase, &salt, 10);
        assert_eq!(key.len(), HASH_LEN);

        let key2 = derive_key_from_passphrase(passphrase, &salt, 10);
        assert_eq!(key, key2);

        let different_passphrase = "DifferentPassword456!";
        let key3 = derive_key_from_passphrase(different_passphrase, &salt, 10);
        assert_ne!(key, key3);

        let different_salt = generate_random_salt();
        let key4 = derive_key_from_passphrase(passphrase, &different_salt, 10);
        assert_ne!(key, key4);

        // Iteration count is part of the derivation
        let key5 = derive_key_from_passphrase(passphrase, &salt, 11);
        assert_ne!(key, key5);
    }

    #[test]
    fn test_random_salt() {
        let salt1 = generate_random_salt();
        let salt2 = generate_random_salt();
        assert_eq!(salt1.len(), SALT_LEN);
        assert_ne!(salt1, salt2);
    }
}
