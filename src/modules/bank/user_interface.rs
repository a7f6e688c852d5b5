use itertools::Itertools;

use super::linking::{link, BankLinkRequest, SIMULATED_OTP, SUPPORTED_BANKS};
use crate::modules::utils::io::{ask, Prompt};
use crate::modules::utils::logging::log_data_operation;

/// Collect card details, simulate the OTP and report the outcome.
/// Nothing is stored.
pub fn handle_bank_link(prompt: &mut dyn Prompt, username: &str) -> std::io::Result<()> {
    println!("\n*== Connect Bank Account ==*");
    println!("Supported banks: {}", SUPPORTED_BANKS.iter().join(", "));

    let bank_name = ask(prompt, "Enter bank name: ")?;
    let card_number = ask(prompt, "Enter card number (16 digits): ")?;
    let expiry = ask(prompt, "Enter card expiry (MM/YY): ")?;

    println!(
        "OTP sent to your registered mobile number: {}",
        SIMULATED_OTP
    );
    let entered_otp = ask(prompt, "Enter OTP: ")?;

    let request = BankLinkRequest::new(bank_name, card_number, expiry);
    match link(&request, &entered_otp) {
        Ok(()) => {
            log_data_operation("link", username, &request.bank_name, true, None);
            println!("Bank account successfully linked!");
        }
        Err(e) => {
            log_data_operation(
                "link",
                username,
                &request.bank_name,
                false,
                Some(&e.to_string()),
            );
            println!("{}", e);
        }
    }
    Ok(())
}
