// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    app,
    auth,
    bank,
    config,
    encryption,
    portfolio,
    utils,
};

// Re-export commonly used types
pub use modules::app::AppContext;
pub use modules::auth::gate::AuthGate;
pub use modules::auth::session::Session;
pub use modules::auth::store::{AccountRecord, AccountStore};
pub use modules::config::AppConfig;
pub use modules::portfolio::model::Asset;
pub use modules::portfolio::zakat::ZakatPolicy;

// Constants
pub const USERS_FILE: &str = "users_list.json";
pub const LOG_FILE: &str = "investwise.log";
pub const MAX_LOGIN_ATTEMPTS: u32 = 3;
pub const PASSWORD_HASH_ITERATIONS: u32 = 100_000;
pub const DEFAULT_GOLD_PRICE_PER_GRAM: f64 = 5400.0;

// Type aliases
pub type HmacSha256 = hmac::Hmac<sha2::Sha256>;
