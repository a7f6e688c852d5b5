use thiserror::Error;

/// Banks that can be linked
pub const SUPPORTED_BANKS: [&str; 2] = ["Bank A", "Bank B"];

/// One-time code "sent" to the user. There is no real delivery.
pub const SIMULATED_OTP: &str = "123456";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BankLinkError {
    #[error("Bank not supported.")]
    UnsupportedBank(String),
    #[error("Invalid card details.")]
    InvalidCardDetails,
    #[error("Incorrect OTP. Bank linking failed.")]
    IncorrectOtp,
}

/// Card details collected for a bank link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankLinkRequest {
    pub bank_name: String,
    pub card_number: String,
    pub expiry: String,
}

impl BankLinkRequest {
    pub fn new(
        bank_name: impl Into<String>,
        card_number: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            card_number: card_number.into(),
            expiry: expiry.into(),
        }
    }

    /// Check the bank against the allow-list, then the card format
    pub fn validate_details(&self) -> Result<(), BankLinkError> {
        if !SUPPORTED_BANKS.contains(&self.bank_name.as_str()) {
            return Err(BankLinkError::UnsupportedBank(self.bank_name.clone()));
        }
        if !is_card_number(&self.card_number) || !is_expiry(&self.expiry) {
            return Err(BankLinkError::InvalidCardDetails);
        }
        Ok(())
    }
}

pub fn verify_otp(entered: &str) -> Result<(), BankLinkError> {
    if entered == SIMULATED_OTP {
        Ok(())
    } else {
        Err(BankLinkError::IncorrectOtp)
    }
}

/// Run every check in order: bank, card details, then OTP
pub fn link(request: &BankLinkRequest, entered_otp: &str) -> Result<(), BankLinkError> {
    request.validate_details()?;
    verify_otp(entered_otp)
}

/// Exactly 16 ASCII digits
fn is_card_number(card_number: &str) -> bool {
    card_number.len() == 16 && card_number.bytes().all(|b| b.is_ascii_digit())
}

/// Two digits, a slash, two digits (MM/YY)
fn is_expiry(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[..2].iter().all(u8::is_ascii_digit)
        && bytes[3..].iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_link() {
        let request = BankLinkRequest::new("Bank A", "1234567812345678", "12/27");
        assert_eq!(link(&request, "123456"), Ok(()));
    }

    #[test]
    fn test_unsupported_bank_is_checked_first() {
        // Card details are also bad, but the bank check wins
        let request = BankLinkRequest::new("Bank C", "123", "1227");
        assert_eq!(
            link(&request, "000000"),
            Err(BankLinkError::UnsupportedBank("Bank C".to_string()))
        );
        // Bank names are matched exactly
        let request = BankLinkRequest::new("bank a", "1234567812345678", "12/27");
        assert!(matches!(
            request.validate_details(),
            Err(BankLinkError::UnsupportedBank(_))
        ));
    }

    #[test]
    fn test_card_detail_formats() {
        let cases = [
            ("123456781234567", "12/27"),
            ("12345678123456789", "12/27"),
            ("1234-5678-1234-5", "12/27"),
            ("1234567812345678", "1227"),
            ("1234567812345678", "1/27"),
            ("1234567812345678", "ab/cd"),
        ];
        for (card, expiry) in cases {
            let request = BankLinkRequest::new("Bank B", card, expiry);
            assert_eq!(
                request.validate_details(),
                Err(BankLinkError::InvalidCardDetails),
                "card={} expiry={}",
                card,
                expiry
            );
        }
    }

    #[test]
    fn test_wrong_otp() {
        let request = BankLinkRequest::new("Bank B", "1234567812345678", "01/30");
        assert_eq!(link(&request, "654321"), Err(BankLinkError::IncorrectOtp));
        assert_eq!(verify_otp(" 123456"), Err(BankLinkError::IncorrectOtp));
    }
}
