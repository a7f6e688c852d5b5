pub mod linking;
pub mod user_interface;

pub use linking::{link, verify_otp, BankLinkError, BankLinkRequest, SIMULATED_OTP, SUPPORTED_BANKS};
pub use user_interface::handle_bank_link;
