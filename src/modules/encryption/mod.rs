mod credential;
pub mod keys;

pub use credential::Credential;
pub use keys::{derive_key_from_passphrase, generate_random_salt};
