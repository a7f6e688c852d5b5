pub mod gate;
pub mod password;
pub mod session;
pub mod store;
pub mod user_interface;

// Re-export the main types and functions
pub use gate::{AuthError, AuthGate};
pub use password::{is_valid_password, validate_password, PasswordError};
pub use session::{LogoutOutcome, Session};
pub use store::{AccountRecord, AccountStore, StoreError};
